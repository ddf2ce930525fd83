use crate::icd::{Edge, Pull, WakeSource};

/// Reset-reason bit set when a GPIO DETECT signal ended shutdown.
pub const RESETREAS_OFF_WAKE: u32 = 1 << 16;

/// Wake button, active low.
pub const WAKE_BUTTON_PIN: u8 = 11;

/// Driven high on activation so external logic can see the device run.
pub const RUN_INDICATOR_PIN: u8 = 13;

/// RF switch path select. Low selects the default 2.4GHz path.
pub const RF_SWITCH_SELECT_PIN: u8 = 29;

/// Power to the external RF switch.
pub const RF_SWITCH_POWER_PIN: u8 = 30;

/// The only wake condition the endpoint ever arms: button press.
pub const WAKE_SOURCES: &[WakeSource] = &[WakeSource {
    pin: WAKE_BUTTON_PIN,
    edge: Edge::Falling,
    pull: Pull::Up,
}];

/// Fault sink rows. Banner and error land on the top row, the detail
/// line two rows down, same as the original display layout.
pub const FAULT_BANNER_ROW: u8 = 0;
pub const FAULT_DETAIL_ROW: u8 = 2;
