use crate::{LightOutput, Phase, Timings};

/// Everything the controller remembers between ticks.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerState {
    pub phase: Phase,
    /// Ticks spent in the current timed phase. Always zero in `Off` and `Green`.
    pub elapsed_ticks: u32,
    /// A press seen during the current `Green` phase that has not been acted on.
    pub button_latched: bool,
}

impl ControllerState {
    fn enter(phase: Phase) -> Self {
        Self {
            phase,
            elapsed_ticks: 0,
            button_latched: false,
        }
    }
}

/// Synchronous wait-button light controller, advanced once per clock tick.
#[derive(Debug, Clone)]
pub struct Controller {
    timings: Timings,
    state: ControllerState,
}

impl Controller {
    /// A controller in `Off`, as at power-up.
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            state: ControllerState::default(),
        }
    }

    /// Samples `reset` and `button` for one clock edge and returns the lights
    /// for the resulting state.
    ///
    /// Reset dominates every other input. Releasing reset always lands on
    /// `Green`. A press in `Green` is latched on the tick it is seen and
    /// moves to `Amber` on the following tick, so a press held for several
    /// ticks causes a single transition. Presses in any other phase are
    /// ignored.
    pub fn tick(&mut self, reset: bool, button: bool) -> LightOutput {
        if reset {
            if self.state.phase != Phase::Off {
                info!("reset asserted in {}", self.state.phase);
            }
            self.state = ControllerState::enter(Phase::Off);
            return self.lights();
        }

        match self.state.phase {
            Phase::Off => {
                info!("reset released");
                self.transition(Phase::Green);
            }
            Phase::Green => {
                if self.state.button_latched {
                    self.transition(Phase::Amber);
                } else if button {
                    trace!("button latched");
                    self.state.button_latched = true;
                }
            }
            phase @ (Phase::Amber | Phase::Red | Phase::RedAmber) => {
                self.state.elapsed_ticks += 1;
                if Some(self.state.elapsed_ticks) == self.timings.duration(phase) {
                    self.transition(phase.next());
                }
            }
        }

        self.lights()
    }

    fn transition(&mut self, to: Phase) {
        debug!("{} -> {}", self.state.phase, to);
        self.state = ControllerState::enter(to);
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    /// The lights for the current phase, without ticking.
    pub fn lights(&self) -> LightOutput {
        self.state.phase.lights()
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, Arbitrary, Gen};
    use rstest::rstest;

    fn short_timings() -> Timings {
        Timings::new(2, 4, 2).unwrap()
    }

    /// Brings a fresh controller out of reset into `Green`.
    fn green(timings: Timings) -> Controller {
        let mut controller = Controller::new(timings);
        assert_eq!(controller.tick(true, false), LightOutput::OFF);
        assert_eq!(controller.tick(false, false), LightOutput::GREEN);
        controller
    }

    /// Drives the controller to the tick on which `phase` is entered.
    fn enter(timings: Timings, phase: Phase) -> Controller {
        let mut controller = green(timings);
        controller.tick(false, true);
        controller.tick(false, false);
        while controller.phase() != phase {
            controller.tick(false, false);
        }
        assert_eq!(controller.state().elapsed_ticks, 0);
        controller
    }

    #[test]
    fn starts_off() {
        let controller = Controller::new(short_timings());
        assert_eq!(controller.state(), ControllerState::default());
        assert_eq!(controller.lights(), LightOutput::OFF);
    }

    #[test]
    fn green_holds_without_button() {
        let mut controller = green(short_timings());
        for _ in 0..10_000 {
            assert_eq!(controller.tick(false, false), LightOutput::GREEN);
        }
    }

    #[test]
    fn press_latches_then_moves_to_amber() {
        let mut controller = green(short_timings());
        assert_eq!(controller.tick(false, true), LightOutput::GREEN);
        assert!(controller.state().button_latched);

        assert_eq!(controller.tick(false, false), LightOutput::AMBER);
        assert_eq!(controller.state(), ControllerState::enter(Phase::Amber));
    }

    #[test]
    fn held_button_transitions_once() {
        let mut controller = green(short_timings());
        controller.tick(false, true);
        assert_eq!(controller.tick(false, true), LightOutput::AMBER);
        assert_eq!(controller.tick(false, true), LightOutput::AMBER);
        assert!(!controller.state().button_latched);
    }

    #[rstest]
    #[case(Phase::Amber, Phase::Red)]
    #[case(Phase::Red, Phase::RedAmber)]
    #[case(Phase::RedAmber, Phase::Green)]
    fn timed_phase_lasts_its_duration(#[case] phase: Phase, #[case] next: Phase) {
        let timings = Timings::new(3, 5, 7).unwrap();
        let duration = timings.duration(phase).unwrap();
        let mut controller = enter(timings, phase);

        for _ in 1..duration {
            assert_eq!(controller.tick(false, false), phase.lights());
        }
        assert_eq!(controller.tick(false, false), next.lights());
    }

    #[rstest]
    #[case(Phase::Amber)]
    #[case(Phase::Red)]
    #[case(Phase::RedAmber)]
    fn button_ignored_outside_green(#[case] phase: Phase) {
        let timings = short_timings();
        let mut controller = enter(timings, phase);
        while controller.phase() != Phase::Green {
            controller.tick(false, true);
        }
        assert!(!controller.state().button_latched);
        assert_eq!(controller.tick(false, false), LightOutput::GREEN);
    }

    #[test]
    fn one_tick_durations() {
        let mut controller = green(Timings::new(1, 1, 1).unwrap());
        controller.tick(false, true);
        let seen: Vec<_> = (0..5).map(|_| controller.tick(false, false)).collect();
        assert_eq!(
            seen,
            [
                LightOutput::AMBER,
                LightOutput::RED,
                LightOutput::RED_AMBER,
                LightOutput::GREEN,
                LightOutput::GREEN,
            ]
        );
    }

    #[rstest]
    #[case(Phase::Green)]
    #[case(Phase::Amber)]
    #[case(Phase::Red)]
    #[case(Phase::RedAmber)]
    fn reset_exit_lands_on_green(#[case] phase: Phase) {
        let mut controller = enter(short_timings(), phase);
        controller.tick(false, false);
        assert_eq!(controller.tick(true, true), LightOutput::OFF);
        assert_eq!(controller.state(), ControllerState::default());
        assert_eq!(controller.tick(false, true), LightOutput::GREEN);
        assert!(!controller.state().button_latched);
    }

    #[test]
    fn reset_clears_latch() {
        let mut controller = green(short_timings());
        controller.tick(false, true);
        controller.tick(true, false);
        controller.tick(false, false);
        assert_eq!(controller.tick(false, false), LightOutput::GREEN);
    }

    #[derive(Clone, Debug)]
    struct Inputs(Vec<(bool, bool)>);

    impl Arbitrary for Inputs {
        fn arbitrary(g: &mut Gen) -> Self {
            let len = usize::arbitrary(g) % 200;
            // Reset is asserted rarely so the timed phases get reached.
            let inputs = (0..len)
                .map(|_| (u8::arbitrary(g) % 16 == 0, bool::arbitrary(g)))
                .collect();
            Self(inputs)
        }
    }

    quickcheck! {
        fn prop_reset_dominates(inputs: Inputs, button: bool) -> bool {
            let mut controller = Controller::new(short_timings());
            for (reset, button) in inputs.0 {
                controller.tick(reset, button);
            }
            controller.tick(true, button) == LightOutput::OFF
                && controller.state() == ControllerState::default()
        }

        fn prop_output_follows_phase(inputs: Inputs) -> bool {
            let mut controller = Controller::new(short_timings());
            inputs.0.into_iter().all(|(reset, button)| {
                controller.tick(reset, button) == controller.phase().lights()
            })
        }

        fn prop_elapsed_below_duration(inputs: Inputs) -> bool {
            let mut controller = Controller::new(short_timings());
            inputs.0.into_iter().all(|(reset, button)| {
                controller.tick(reset, button);
                let state = controller.state();
                match controller.timings().duration(state.phase) {
                    Some(duration) => state.elapsed_ticks < duration && !state.button_latched,
                    None => state.elapsed_ticks == 0,
                }
            })
        }
    }
}
