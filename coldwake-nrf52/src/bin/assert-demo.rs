#![no_main]
#![no_std]

//! Watch the fault sink work: one recoverable assert, then a fatal one.
//!
//! Expect the out-of-memory report followed by "back from the handler",
//! then the transport-abort report and silence.

use coldwake::{
    fault::{self, Disposition},
    icd::{AssertCause, AssertSubcause},
};
use coldwake_nrf52::{
    self as _,
    stack::{RttStatus, ShimStack},
};
use groundhog_nrf52::GlobalRollingTimer;
use nrf52840_hal::pac::Peripherals;

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

    let stack = ShimStack::new(stack_assert);

    defmt::info!("raising a recoverable assert");
    stack.raise(AssertCause::OutOfMemory, AssertSubcause::None);
    defmt::info!("back from the handler, as expected");

    defmt::info!("raising a fatal assert, expect silence after the report");
    stack.raise(AssertCause::TransportAbort, AssertSubcause::None);

    // not reached
    coldwake_nrf52::exit()
}
