//! Wait-button traffic light controller.
//!
//! [`Controller`] is a synchronous state machine sampled once per clock tick:
//! it takes the reset line and the wait button and returns the 3-bit
//! red/amber/green [`LightOutput`]. Holds are counted in ticks, so the caller
//! picks the tick rate and passes matching [`Timings`].
#![cfg_attr(not(test), no_std)]

mod fmt;

mod config;
pub use config::*;
mod controller;
pub use controller::*;
mod head;
pub use head::*;
mod lights;
pub use lights::*;
mod phase;
pub use phase::*;
