use core::fmt;

use crate::Phase;

/// Amber hold of the reference timing, in seconds.
pub const REFERENCE_AMBER_SECS: u32 = 2;
/// Red hold of the reference timing, in seconds.
pub const REFERENCE_RED_SECS: u32 = 4;
/// Red-amber hold of the reference timing, in seconds.
pub const REFERENCE_RED_AMBER_SECS: u32 = 2;
/// Tick rate the reference timing is clocked at.
pub const DEFAULT_TICK_HZ: u32 = 4;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A timed phase was given a duration of zero ticks.
    ZeroDuration(Phase),
    /// The tick rate was zero.
    ZeroTickRate,
    /// Converting seconds to ticks for this phase overflowed.
    Overflow(Phase),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDuration(phase) => write!(f, "{phase:?} must last at least one tick"),
            Self::ZeroTickRate => f.write_str("tick rate must be at least 1 Hz"),
            Self::Overflow(phase) => write!(f, "{phase:?} duration does not fit in u32 ticks"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Hold durations of the timed phases, in ticks. Every duration is at least 1.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    amber: u32,
    red: u32,
    red_amber: u32,
}

impl Timings {
    pub fn new(amber: u32, red: u32, red_amber: u32) -> Result<Self, ConfigError> {
        for (phase, ticks) in [
            (Phase::Amber, amber),
            (Phase::Red, red),
            (Phase::RedAmber, red_amber),
        ] {
            if ticks == 0 {
                return Err(ConfigError::ZeroDuration(phase));
            }
        }

        Ok(Self {
            amber,
            red,
            red_amber,
        })
    }

    /// Converts hold times in seconds into ticks at `tick_hz`.
    pub fn from_secs(
        tick_hz: u32,
        amber_secs: u32,
        red_secs: u32,
        red_amber_secs: u32,
    ) -> Result<Self, ConfigError> {
        if tick_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        let ticks = |phase, secs: u32| {
            secs.checked_mul(tick_hz)
                .ok_or(ConfigError::Overflow(phase))
        };

        Self::new(
            ticks(Phase::Amber, amber_secs)?,
            ticks(Phase::Red, red_secs)?,
            ticks(Phase::RedAmber, red_amber_secs)?,
        )
    }

    /// Amber and red-amber for 2 s, red for 4 s, at `tick_hz`.
    pub fn reference(tick_hz: u32) -> Result<Self, ConfigError> {
        Self::from_secs(
            tick_hz,
            REFERENCE_AMBER_SECS,
            REFERENCE_RED_SECS,
            REFERENCE_RED_AMBER_SECS,
        )
    }

    /// Hold time of `phase` in ticks, or `None` if the phase is not timed.
    pub fn duration(&self, phase: Phase) -> Option<u32> {
        match phase {
            Phase::Amber => Some(self.amber),
            Phase::Red => Some(self.red),
            Phase::RedAmber => Some(self.red_amber),
            Phase::Off | Phase::Green => None,
        }
    }

    pub fn amber(&self) -> u32 {
        self.amber
    }

    pub fn red(&self) -> u32 {
        self.red
    }

    pub fn red_amber(&self) -> u32 {
        self.red_amber
    }

    /// Ticks from entering amber until green is shown again.
    pub fn cycle_ticks(&self) -> u64 {
        u64::from(self.amber) + u64::from(self.red) + u64::from(self.red_amber)
    }
}

impl Default for Timings {
    /// The reference timing at [`DEFAULT_TICK_HZ`].
    fn default() -> Self {
        Self {
            amber: REFERENCE_AMBER_SECS * DEFAULT_TICK_HZ,
            red: REFERENCE_RED_SECS * DEFAULT_TICK_HZ,
            red_amber: REFERENCE_RED_AMBER_SECS * DEFAULT_TICK_HZ,
        }
    }
}
