//! Standby transition callback for the external RF switch rail.

use crate::icd::{Level, NotifyStatus, PowerEvent, RailPin};

/// Powers the RF switch rail down across standby and back up on wake.
///
/// Registered only when the board has an RF switch and power saving is
/// enabled; otherwise the rail stays continuously powered and no toggler
/// exists. Invoked synchronously on the power manager's transition
/// context and must not block there.
pub struct RailToggler<R: RailPin> {
    rail: R,
    state: Level,
}

impl<R: RailPin> RailToggler<R> {
    /// The rail was powered up during stack activation, so a fresh
    /// toggler starts out high.
    pub fn new(rail: R) -> Self {
        Self {
            rail,
            state: Level::High,
        }
    }

    /// Whether the rail is currently powered.
    pub fn rail_state(&self) -> Level {
        self.state
    }

    /// Transitions this component has no interest in are ignored and
    /// still report success.
    pub fn on_power_event(&mut self, event: PowerEvent) -> NotifyStatus {
        match event {
            PowerEvent::EnteringStandby => {
                self.rail.set_rail(Level::Low);
                self.state = Level::Low;
            }
            PowerEvent::AwakeStandby => {
                self.rail.set_rail(Level::High);
                self.state = Level::High;
            }
            PowerEvent::Other(_) => {}
        }

        NotifyStatus::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeRail {
        writes: Vec<Level>,
    }

    impl RailPin for FakeRail {
        fn set_rail(&mut self, level: Level) {
            self.writes.push(level);
        }
    }

    #[test]
    fn entering_standby_drives_rail_low() {
        let mut toggler = RailToggler::new(FakeRail::default());
        assert_eq!(
            toggler.on_power_event(PowerEvent::EnteringStandby),
            NotifyStatus::Done
        );
        assert_eq!(toggler.rail.writes, vec![Level::Low]);
        assert_eq!(toggler.rail_state(), Level::Low);
    }

    #[test]
    fn awake_standby_drives_rail_high() {
        let mut toggler = RailToggler::new(FakeRail::default());
        toggler.on_power_event(PowerEvent::EnteringStandby);
        assert_eq!(
            toggler.on_power_event(PowerEvent::AwakeStandby),
            NotifyStatus::Done
        );
        assert_eq!(toggler.rail.writes, vec![Level::Low, Level::High]);
        assert_eq!(toggler.rail_state(), Level::High);
    }

    #[test]
    fn unknown_events_leave_rail_alone_and_still_succeed() {
        let mut toggler = RailToggler::new(FakeRail::default());
        assert_eq!(
            toggler.on_power_event(PowerEvent::Other(7)),
            NotifyStatus::Done
        );
        assert!(toggler.rail.writes.is_empty());
        assert_eq!(toggler.rail_state(), Level::High);
    }
}
