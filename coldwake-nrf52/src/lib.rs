#![no_std]

use defmt_rtt as _; // global logger
use panic_probe as _;

use groundhog::RollingTimer;
use groundhog_nrf52::GlobalRollingTimer;

use nrf52840_hal::{
    gpio::{
        p0::{self, Parts as P0Parts},
        Disconnected, Input, Level as PinLevel, Output, Pin, PullUp, PushPull,
    },
    pac::P0,
    prelude::*,
};

use coldwake::consts::{RF_SWITCH_POWER_PIN, RF_SWITCH_SELECT_PIN, RUN_INDICATOR_PIN};
use coldwake::icd::{self, PinBank, PinTable, RailPin};

pub mod power;
pub mod soc;
pub mod stack;

// same panicking *behavior* as `panic-probe` but doesn't print a panic message
// this prevents the panic message being printed *twice* when `defmt::panic` is invoked
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}

defmt::timestamp!("{=u32:010}", {
    let timer = GlobalRollingTimer::default();
    timer.get_ticks()
});

/// Terminates the application and makes `probe-run` exit with exit-code = 0
pub fn exit() -> ! {
    loop {
        cortex_m::asm::bkpt();
    }
}

/// Hooked into the scheduler's error path. Nothing to recover; stop.
pub fn scheduler_error_hook() -> ! {
    coldwake::fault::halt()
}

pub struct EndpointPins {
    /// Wake button. A falling edge here is the only thing that ends
    /// shutdown.
    pub button: p0::P0_11<Disconnected>,

    /// Run indicator, driven high once the activation path is underway.
    pub run_indicator: p0::P0_13<Disconnected>,

    /// RF switch path select, low is the default 2.4GHz path.
    pub rf_select: p0::P0_29<Disconnected>,

    /// Power to the external RF switch rail.
    pub rf_power: p0::P0_30<Disconnected>,
}

impl EndpointPins {
    pub fn from_port(p0: P0) -> Self {
        let p0p = P0Parts::new(p0);

        Self {
            button: p0p.p0_11,
            run_indicator: p0p.p0_13,
            rf_select: p0p.p0_29,
            rf_power: p0p.p0_30,
        }
    }
}

/// Board I/O driver over the endpoint pin map. Opening a table consumes
/// the raw pins and leaves configured handles behind; default output
/// levels are part of each table.
pub struct Board {
    raw_button: Option<p0::P0_11<Disconnected>>,
    raw_run_indicator: Option<p0::P0_13<Disconnected>>,
    raw_rf_select: Option<p0::P0_29<Disconnected>>,
    raw_rf_power: Option<p0::P0_30<Disconnected>>,

    button: Option<Pin<Input<PullUp>>>,
    run_indicator: Option<Pin<Output<PushPull>>>,
    rf_select: Option<Pin<Output<PushPull>>>,
    rf_power: Option<Pin<Output<PushPull>>>,
}

impl Board {
    pub fn new(pins: EndpointPins) -> Self {
        Self {
            raw_button: Some(pins.button),
            raw_run_indicator: Some(pins.run_indicator),
            raw_rf_select: Some(pins.rf_select),
            raw_rf_power: Some(pins.rf_power),

            button: None,
            run_indicator: None,
            rf_select: None,
            rf_power: None,
        }
    }

    /// Hand the rail pin to the standby toggler. The board gives up its
    /// own access; the toggler is the rail's only writer from there on.
    pub fn take_rail(&mut self) -> Option<RailOut> {
        self.rf_power.take().map(|pin| RailOut { pin })
    }

    /// The wake button, once the board-init table configured it.
    pub fn wake_button(&mut self) -> Option<&mut Pin<Input<PullUp>>> {
        self.button.as_mut()
    }
}

impl PinBank for Board {
    fn open_table(&mut self, table: PinTable) {
        match table {
            PinTable::BoardInit => {
                if let Some(pin) = self.raw_button.take() {
                    self.button = Some(pin.into_pullup_input().degrade());
                }
                if let Some(pin) = self.raw_run_indicator.take() {
                    self.run_indicator = Some(pin.into_push_pull_output(PinLevel::Low).degrade());
                }
            }
            PinTable::RfSwitch => {
                // select low: 2.4GHz path. rail high: switch powered.
                if let Some(pin) = self.raw_rf_select.take() {
                    self.rf_select = Some(pin.into_push_pull_output(PinLevel::Low).degrade());
                }
                if let Some(pin) = self.raw_rf_power.take() {
                    self.rf_power = Some(pin.into_push_pull_output(PinLevel::High).degrade());
                }
            }
        }
    }

    fn set_output(&mut self, pin: u8, level: icd::Level) {
        let target = match pin {
            RUN_INDICATOR_PIN => self.run_indicator.as_mut(),
            RF_SWITCH_SELECT_PIN => self.rf_select.as_mut(),
            RF_SWITCH_POWER_PIN => self.rf_power.as_mut(),
            _ => None,
        };

        if let Some(target) = target {
            match level {
                icd::Level::High => target.set_high().ok(),
                icd::Level::Low => target.set_low().ok(),
            };
        }
    }
}

/// The RF switch rail, detached from the rest of the board for the
/// standby toggler.
pub struct RailOut {
    pin: Pin<Output<PushPull>>,
}

impl RailPin for RailOut {
    fn set_rail(&mut self, level: icd::Level) {
        match level {
            icd::Level::High => self.pin.set_high().ok(),
            icd::Level::Low => self.pin.set_low().ok(),
        };
    }
}
