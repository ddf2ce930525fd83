//! Power manager over the nRF52840 POWER peripheral.

use coldwake::icd::{Edge, PowerConstraint, PowerManager, Pull, WakeSource};
use nrf52840_hal::pac::{P0, POWER};

/// Constraint bookkeeping, one saturating count per named constraint.
/// A constraint is in force while its count is nonzero.
#[derive(Default)]
pub struct ConstraintLedger {
    counts: [u8; 4],
}

impl ConstraintLedger {
    fn slot(constraint: PowerConstraint) -> usize {
        match constraint {
            PowerConstraint::RetainCacheInStandby => 0,
            PowerConstraint::FlashInIdle => 1,
            PowerConstraint::DisallowStandby => 2,
            PowerConstraint::DisallowIdlePowerDown => 3,
        }
    }

    fn set(&mut self, constraint: PowerConstraint) {
        let slot = Self::slot(constraint);
        self.counts[slot] = self.counts[slot].saturating_add(1);
    }

    pub fn is_set(&self, constraint: PowerConstraint) -> bool {
        self.counts[Self::slot(constraint)] > 0
    }
}

pub struct Nrf52Power {
    power: POWER,
    constraints: ConstraintLedger,
    notify_armed: bool,
}

impl Nrf52Power {
    pub fn new(power: POWER) -> Self {
        Self {
            power,
            constraints: ConstraintLedger::default(),
            notify_armed: false,
        }
    }

    /// Raw reset-reason word. Read once at boot; classification is the
    /// core's job.
    pub fn reset_reason(&self) -> u32 {
        self.power.resetreas.read().bits()
    }

    /// RESETREAS accumulates across resets. Clear it after
    /// classification so the next cycle starts clean.
    pub fn clear_reset_reason(&mut self) {
        self.power
            .resetreas
            .write(|w| unsafe { w.bits(0xFFFF_FFFF) });
    }

    pub fn constraints(&self) -> &ConstraintLedger {
        &self.constraints
    }

    pub fn standby_notify_armed(&self) -> bool {
        self.notify_armed
    }
}

impl PowerManager for Nrf52Power {
    fn set_constraint(&mut self, constraint: PowerConstraint) {
        let name = match constraint {
            PowerConstraint::RetainCacheInStandby => "retain-cache-in-standby",
            PowerConstraint::FlashInIdle => "flash-in-idle",
            PowerConstraint::DisallowStandby => "disallow-standby",
            PowerConstraint::DisallowIdlePowerDown => "disallow-idle-pd",
        };
        defmt::debug!("power constraint set: {=str}", name);

        self.constraints.set(constraint);
    }

    fn register_standby_notify(&mut self) {
        self.notify_armed = true;
        defmt::debug!("standby notify registered");
    }

    fn enter_shutdown(&mut self, wake: &[WakeSource]) {
        // Arm GPIO DETECT for every wake source, then drop to System OFF.
        let p0 = unsafe { &*P0::ptr() };
        for src in wake {
            p0.pin_cnf[src.pin as usize].write(|w| {
                let w = w.dir().input().input().connect();
                let w = match src.pull {
                    Pull::Up => w.pull().pullup(),
                    Pull::Down => w.pull().pulldown(),
                    Pull::Disabled => w.pull().disabled(),
                };
                match src.edge {
                    Edge::Falling => w.sense().low(),
                    Edge::Rising => w.sense().high(),
                }
            });
        }

        cortex_m::asm::dsb();
        self.power.systemoff.write(|w| w.systemoff().enter());

        // Entry takes a few cycles. Still executing past this point
        // means the drop to System OFF failed; return, and the caller
        // halts rather than running uninitialized.
        for _ in 0..64 {
            cortex_m::asm::nop();
        }
    }
}
