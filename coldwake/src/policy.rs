//! Cache and low-power policy, applied once per activation.

use crate::icd::{BuildConfig, PowerConstraint, PowerManager, SocCtrl};

/// Two mutually exclusive cache setups, no third state.
///
/// Either the cache lines are retained RAM across standby (and flash has
/// to stay reachable in idle), or the cache runs as an instruction cache
/// with prefetch. Every activation leaves the cache subsystem in one of
/// these two defined modes.
pub fn apply_cache_policy<P, S>(cfg: &BuildConfig, power: &mut P, soc: &mut S)
where
    P: PowerManager,
    S: SocCtrl,
{
    if cfg.cache_as_ram {
        power.set_constraint(PowerConstraint::RetainCacheInStandby);
        power.set_constraint(PowerConstraint::FlashInIdle);
    } else {
        soc.enable_cache_prefetch();
        soc.set_cache_enabled();
    }
}

/// Forbid standby and idle power-down unless the power-saving build is
/// in effect. FPGA builds always keep them forbidden.
pub fn apply_idle_constraints<P>(cfg: &BuildConfig, power: &mut P)
where
    P: PowerManager,
{
    if !cfg.power_saving || cfg.fpga_mode {
        power.set_constraint(PowerConstraint::DisallowStandby);
        power.set_constraint(PowerConstraint::DisallowIdlePowerDown);
    }
}
