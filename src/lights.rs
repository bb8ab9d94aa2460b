use core::fmt;

use crate::Phase;

const RED_BIT: u8 = 0b100;
const AMBER_BIT: u8 = 0b010;
const GREEN_BIT: u8 = 0b001;

/// The 3-bit light head encoding, red in the most significant bit and green in
/// the least.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LightOutput(u8);

impl LightOutput {
    pub const OFF: Self = Self(0);
    pub const GREEN: Self = Self(GREEN_BIT);
    pub const AMBER: Self = Self(AMBER_BIT);
    pub const RED: Self = Self(RED_BIT);
    pub const RED_AMBER: Self = Self(RED_BIT | AMBER_BIT);

    /// Builds an output from raw bits. Returns `None` if anything above the
    /// low three bits is set.
    pub fn from_bits(bits: u8) -> Option<Self> {
        if bits & !(RED_BIT | AMBER_BIT | GREEN_BIT) != 0 {
            return None;
        }

        Some(Self(bits))
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn red(self) -> bool {
        self.0 & RED_BIT != 0
    }

    pub fn amber(self) -> bool {
        self.0 & AMBER_BIT != 0
    }

    pub fn green(self) -> bool {
        self.0 & GREEN_BIT != 0
    }

    /// The phase that shows this encoding, if any. `Red | Green` and the other
    /// combinations no phase emits map to `None`.
    pub fn phase(self) -> Option<Phase> {
        Phase::ALL.into_iter().find(|phase| phase.lights() == self)
    }
}

impl fmt::Display for LightOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03b}", self.0)
    }
}

impl From<Phase> for LightOutput {
    fn from(phase: Phase) -> Self {
        phase.lights()
    }
}
