//! SoC-level cache and radio-core controls.

use coldwake::icd::SocCtrl;
use nrf52840_hal::pac::{NVMC, RADIO};

pub struct Nrf52Soc {
    nvmc: NVMC,
    radio: RADIO,
}

impl Nrf52Soc {
    pub fn new(nvmc: NVMC, radio: RADIO) -> Self {
        Self { nvmc, radio }
    }
}

impl SocCtrl for Nrf52Soc {
    fn select_ble_radio_mode(&mut self) {
        // has to land while the radio core is still held in reset
        self.radio.mode.write(|w| w.mode().ble_1mbit());
        defmt::debug!("radio mode: ble 1mbit");
    }

    fn enable_cache_prefetch(&mut self) {
        // no dedicated prefetch control on this part; the profiling
        // counters are the nearest ICACHECNF knob
        self.nvmc
            .icachecnf
            .modify(|_, w| w.cacheprofen().enabled());
        defmt::debug!("icache profiling on");
    }

    fn set_cache_enabled(&mut self) {
        self.nvmc.icachecnf.modify(|_, w| w.cacheen().enabled());
        defmt::debug!("icache enabled");
    }
}
