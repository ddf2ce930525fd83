#![no_main]
#![no_std]

//! Bringup helper: arm the wake button and drop straight into shutdown.
//!
//! Flash this, watch the current draw fall off a cliff, press the
//! button, and the part comes back with the shutdown-wake reset reason.

use coldwake::{consts::WAKE_SOURCES, fault, icd::PowerManager};
use coldwake_nrf52::{self as _, power::Nrf52Power};
use groundhog::RollingTimer;
use groundhog_nrf52::GlobalRollingTimer;
use nrf52840_hal::pac::Peripherals;

#[cortex_m_rt::entry]
fn main() -> ! {
    let board = defmt::unwrap!(Peripherals::take());
    GlobalRollingTimer::init(board.TIMER0);
    let timer = GlobalRollingTimer::default();

    defmt::info!("arming wake button, entering shutdown");

    // let the probe drain RTT before the lights go out
    let start = timer.get_ticks();
    while timer.millis_since(start) < 100 {}

    let mut power = Nrf52Power::new(board.POWER);
    power.clear_reset_reason();
    power.enter_shutdown(WAKE_SOURCES);

    defmt::error!("still awake, shutdown entry failed");
    fault::halt()
}
