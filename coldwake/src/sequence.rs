//! The boot sequencer: one decision point, two terminal paths.

use crate::consts;
use crate::icd::{
    BuildConfig, Level, PinBank, PinTable, PowerManager, ResetCause, SocCtrl, StackCtrl,
    WakeSource,
};
use crate::policy;

/// Which bootstrap path a power cycle takes. Mutually exclusive; at most
/// one of the two runs per cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPath {
    /// Arm a wake source, drop back into shutdown.
    ArmAndSleep,
    /// Full hardware and power init, then hand off to the stack.
    ActivateStack,
}

impl BootPath {
    pub fn from_cause(cause: ResetCause) -> Self {
        match cause {
            ResetCause::WokeFromShutdown => BootPath::ActivateStack,
            ResetCause::Other => BootPath::ArmAndSleep,
        }
    }
}

/// Timer parameters supplied by the external scheduler, pushed through
/// to the stack configuration untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerTiming {
    pub tick_period_us: u32,
    pub max_timer_ms: u32,
}

/// What the entry point must do once [`Sequencer::run`] comes back.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequenced {
    /// Stack activation finished. Start the scheduler; it takes the
    /// processor permanently.
    SchedulerHandoff,
    /// Shutdown entry returned instead of resetting the device. Halt;
    /// running the stack without initialization is unsafe.
    ShutdownFellThrough,
}

pub struct Sequencer<'a, P, B, S, K>
where
    P: PowerManager,
    B: PinBank,
    S: SocCtrl,
    K: StackCtrl,
{
    power: &'a mut P,
    pins: &'a mut B,
    soc: &'a mut S,
    stack: &'a mut K,
    cfg: BuildConfig,
    wake: &'static [WakeSource],
}

impl<'a, P, B, S, K> Sequencer<'a, P, B, S, K>
where
    P: PowerManager,
    B: PinBank,
    S: SocCtrl,
    K: StackCtrl,
{
    pub fn new(
        power: &'a mut P,
        pins: &'a mut B,
        soc: &'a mut S,
        stack: &'a mut K,
        cfg: BuildConfig,
    ) -> Self {
        Self {
            power,
            pins,
            soc,
            stack,
            cfg,
            wake: consts::WAKE_SOURCES,
        }
    }

    /// Drive one power cycle's worth of boot decisions.
    pub fn run(&mut self, cause: ResetCause, timing: SchedulerTiming) -> Sequenced {
        match BootPath::from_cause(cause) {
            BootPath::ArmAndSleep => {
                self.arm_and_sleep();
                Sequenced::ShutdownFellThrough
            }
            BootPath::ActivateStack => {
                self.activate_stack(timing);
                Sequenced::SchedulerHandoff
            }
        }
    }

    /// The wake table is the exclusive wake condition. Nothing after the
    /// shutdown request is reached on a healthy board; the wake event
    /// arrives as a fresh reset.
    fn arm_and_sleep(&mut self) {
        self.power.enter_shutdown(self.wake);
    }

    fn activate_stack(&mut self, timing: SchedulerTiming) {
        // 1: board pins back up, then show life on the indicator pin
        self.pins.open_table(PinTable::BoardInit);
        self.pins.set_output(consts::RUN_INDICATOR_PIN, Level::High);

        // 2: external RF switch. The table's defaults select the 2.4GHz
        // path and power the rail. Without power saving the rail stays
        // powered continuously and nobody needs standby notifications.
        if self.cfg.has_rf_switch {
            self.pins.open_table(PinTable::RfSwitch);
            if self.cfg.power_saving {
                self.power.register_standby_notify();
            }
        }

        // 3: radio mode select has to land while the radio core is still
        // held in reset
        if self.cfg.fpga_mode {
            self.soc.select_ble_radio_mode();
        }

        // 4
        policy::apply_cache_policy(&self.cfg, &mut *self.power, &mut *self.soc);

        // 5
        policy::apply_idle_constraints(&self.cfg, &mut *self.power);

        // 6: one-way handoff of scheduler timing into the stack config
        self.stack
            .set_timing(timing.tick_period_us, timing.max_timer_ms);

        // 7: later tasks assume earlier ones registered their services
        self.stack.ipc_init();
        self.stack.create_remote_tasks();
        self.stack.create_gap_task();
        self.stack.create_app_task();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shutdown_wake_activates() {
        assert_eq!(
            BootPath::from_cause(ResetCause::WokeFromShutdown),
            BootPath::ActivateStack
        );
    }

    #[test]
    fn everything_else_sleeps() {
        assert_eq!(
            BootPath::from_cause(ResetCause::Other),
            BootPath::ArmAndSleep
        );
    }
}
