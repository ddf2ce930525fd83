#![no_main]
#![no_std]

//! The endpoint's real entry point.
//!
//! One decision per power cycle: a wake from shutdown brings the
//! hardware up and hands off to the stack, anything else re-arms the
//! wake button and goes straight back down.

use coldwake::{
    fault::{self, Disposition},
    icd::{AssertCause, AssertSubcause, BuildConfig, PowerConstraint, PowerEvent, ResetCause},
    notify::RailToggler,
    reset,
    sequence::{SchedulerTiming, Sequenced, Sequencer},
};
use coldwake_nrf52::{
    self as _,
    power::Nrf52Power,
    soc::Nrf52Soc,
    stack::{RttStatus, ShimStack},
    Board, EndpointPins,
};
use groundhog_nrf52::GlobalRollingTimer;
use nrf52840_hal::pac::Peripherals;

/// Supplied by the scheduler configuration, pushed into the stack as-is.
const TICK_PERIOD_US: u32 = 10;
const MAX_TIMER_MS: u32 = 42_949_672;

fn build_config() -> BuildConfig {
    BuildConfig {
        cache_as_ram: cfg!(feature = "cache-as-ram"),
        power_saving: cfg!(feature = "power-saving"),
        fpga_mode: cfg!(feature = "fpga"),
        has_rf_switch: cfg!(feature = "rf-switch"),
    }
}

/// Fault trap handed to the stack. Reports, then fail-stops for the
/// fatal classes.
fn stack_assert(cause: AssertCause, subcause: AssertSubcause) {
    let mut sink = RttStatus::new();
    match fault::on_assert(&mut sink, cause, subcause) {
        Disposition::Continue => {}
        Disposition::Halt => fault::halt(),
    }
}

#[cortex_m_rt::entry]
fn main() -> ! {
    let board = defmt::unwrap!(Peripherals::take());
    GlobalRollingTimer::init(board.TIMER0);

    // the stack gets its fault trap before anything else happens
    let mut stack = ShimStack::new(stack_assert);

    let mut power = Nrf52Power::new(board.POWER);
    let raw = power.reset_reason();
    power.clear_reset_reason();
    let cause = reset::classify(raw);

    let cause_str = match cause {
        ResetCause::WokeFromShutdown => "woke from shutdown",
        ResetCause::Other => "other",
    };
    defmt::info!("reset reason {=u32:x} -> {=str}", raw, cause_str);

    let pins = EndpointPins::from_port(board.P0);
    let mut bank = Board::new(pins);
    let mut soc = Nrf52Soc::new(board.NVMC, board.RADIO);

    let outcome = Sequencer::new(&mut power, &mut bank, &mut soc, &mut stack, build_config()).run(
        cause,
        SchedulerTiming {
            tick_period_us: TICK_PERIOD_US,
            max_timer_ms: MAX_TIMER_MS,
        },
    );

    match outcome {
        Sequenced::SchedulerHandoff => run_scheduler(power, bank),
        Sequenced::ShutdownFellThrough => {
            defmt::error!("shutdown entry fell through");
            fault::halt()
        }
    }
}

/// Stand-in for the scheduler taking the core permanently. Idles the
/// way the power manager would, delivering standby notifications around
/// each window when a toggler is registered.
fn run_scheduler(power: Nrf52Power, mut bank: Board) -> ! {
    defmt::info!("scheduler running");

    let mut toggler = if power.standby_notify_armed() {
        bank.take_rail().map(RailToggler::new)
    } else {
        None
    };

    let standby_allowed = !power.constraints().is_set(PowerConstraint::DisallowStandby);

    loop {
        if standby_allowed {
            if let Some(t) = toggler.as_mut() {
                let _ = t.on_power_event(PowerEvent::EnteringStandby);
            }
            cortex_m::asm::wfi();
            if let Some(t) = toggler.as_mut() {
                let _ = t.on_power_event(PowerEvent::AwakeStandby);
            }
        } else {
            cortex_m::asm::nop();
        }
    }
}
