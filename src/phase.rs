use crate::LightOutput;

/// The controller's phases. Exactly one is active at a time.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Held while reset is asserted. All lamps dark.
    #[default]
    Off,
    /// Entered on reset release; held until the wait button is pressed.
    Green,
    Amber,
    Red,
    RedAmber,
}

impl Phase {
    /// All phases, in cycle order after `Off`.
    pub const ALL: [Phase; 5] = [
        Self::Off,
        Self::Green,
        Self::Amber,
        Self::Red,
        Self::RedAmber,
    ];

    /// The phase that follows `self` in the fixed cycle
    /// `Green -> Amber -> Red -> RedAmber -> Green`.
    ///
    /// `Off` is left only by releasing reset, which always lands on `Green`.
    pub fn next(self) -> Self {
        match self {
            Self::Off => Self::Green,
            Self::Green => Self::Amber,
            Self::Amber => Self::Red,
            Self::Red => Self::RedAmber,
            Self::RedAmber => Self::Green,
        }
    }

    /// Whether the phase ends after a fixed number of ticks.
    pub fn is_timed(self) -> bool {
        matches!(self, Self::Amber | Self::Red | Self::RedAmber)
    }

    /// The light encoding shown while in this phase.
    pub fn lights(self) -> LightOutput {
        match self {
            Self::Off => LightOutput::OFF,
            Self::Green => LightOutput::GREEN,
            Self::Amber => LightOutput::AMBER,
            Self::Red => LightOutput::RED,
            Self::RedAmber => LightOutput::RED_AMBER,
        }
    }
}
