use embedded_hal::digital::{OutputPin, PinState};

use crate::{LightOutput, Phase};

/// Power-on lamp check: each lamp lit alone, then all dark.
pub const LAMP_TEST: [Phase; 4] = [Phase::Red, Phase::Amber, Phase::Green, Phase::Off];

/// One red/amber/green light head. Lamps are wired active-low: driving a pin
/// low lights its lamp.
pub struct SignalHead<P> {
    red: P,
    amber: P,
    green: P,

    shown: Option<LightOutput>,
}

impl<P: OutputPin> SignalHead<P> {
    /// Takes the three lamp pins and switches every lamp off.
    pub fn new(red: P, amber: P, green: P) -> Result<Self, P::Error> {
        let mut head = Self {
            red,
            amber,
            green,
            shown: None,
        };
        head.show(LightOutput::OFF)?;

        Ok(head)
    }

    /// Drives the lamps to `lights`. Pins are only written when the output
    /// differs from what is already shown.
    pub fn show(&mut self, lights: LightOutput) -> Result<(), P::Error> {
        if self.shown == Some(lights) {
            return Ok(());
        }
        debug!("showing lights = {}", lights);

        // Forget the shown state until every pin has been written.
        self.shown = None;
        self.red.set_state(lamp(lights.red()))?;
        self.amber.set_state(lamp(lights.amber()))?;
        self.green.set_state(lamp(lights.green()))?;
        self.shown = Some(lights);

        Ok(())
    }

    /// The output last written in full, if any.
    pub fn shown(&self) -> Option<LightOutput> {
        self.shown
    }
}

fn lamp(lit: bool) -> PinState {
    if lit {
        PinState::Low
    } else {
        PinState::High
    }
}
