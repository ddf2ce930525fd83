//! Shared vocabulary between the sequencer and the services it drives.
//!
//! The service traits each have exactly one hardware implementation; they
//! exist so the decision logic can run against recording doubles on the
//! host.

/// Why the chip reset. Only one cause matters to the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
    /// A designated wake source ended shutdown. The only path that
    /// activates the stack.
    WokeFromShutdown,
    /// Power-on, pin reset, watchdog, everything else.
    Other,
}

/// Build-time selections, resolved once at entry and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
    pub cache_as_ram: bool,
    pub power_saving: bool,
    pub fpga_mode: bool,
    pub has_rf_switch: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Rising,
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    Disabled,
    Up,
    Down,
}

/// One pin/edge combination authorized to end shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WakeSource {
    pub pin: u8,
    pub edge: Edge,
    pub pull: Pull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// Named restrictions handed to the power manager. Each one forbids a
/// specific low-power mode or sub-mode until cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerConstraint {
    RetainCacheInStandby,
    FlashInIdle,
    DisallowStandby,
    DisallowIdlePowerDown,
}

/// Pin tables the board driver knows how to open. Default output levels
/// are part of the table, not of the open call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinTable {
    BoardInit,
    RfSwitch,
}

/// Power-state transitions delivered to registered notify callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerEvent {
    EnteringStandby,
    AwakeStandby,
    /// Any transition this subsystem has no interest in.
    Other(u8),
}

/// Completion status a notify callback reports back to the power manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyStatus {
    Done,
}

/// Fault classes the wireless stack can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertCause {
    OutOfMemory,
    InternalError,
    TransportAbort,
    TransportTimeout,
    WrongApiCall,
    Unknown(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertSubcause {
    None,
    FwInternal,
    Other(u8),
}

/// Power manager services consumed by the sequencer.
pub trait PowerManager {
    fn set_constraint(&mut self, constraint: PowerConstraint);

    /// Subscribe the standby rail toggler to standby enter/exit
    /// notifications.
    fn register_standby_notify(&mut self);

    /// Arm `wake` as the exclusive wake condition and enter shutdown.
    ///
    /// Does not return under normal operation; ending shutdown resets the
    /// device. A plain return means the hardware failed to enter shutdown
    /// and the caller must not continue into stack activation.
    fn enter_shutdown(&mut self, wake: &[WakeSource]);
}

/// Board I/O driver: open named pin tables, set output levels.
pub trait PinBank {
    fn open_table(&mut self, table: PinTable);
    fn set_output(&mut self, pin: u8, level: Level);
}

/// SoC-level controls that sit outside the power manager.
pub trait SocCtrl {
    /// Select the BLE radio-core operating mode. Must land before the
    /// radio core leaves reset.
    fn select_ble_radio_mode(&mut self);
    fn enable_cache_prefetch(&mut self);
    fn set_cache_enabled(&mut self);
}

/// Handoff points into the vendor wireless stack.
pub trait StackCtrl {
    /// One-way push of scheduler timing into the stack user
    /// configuration block.
    fn set_timing(&mut self, tick_period_us: u32, max_timer_ms: u32);
    fn ipc_init(&mut self);
    fn create_remote_tasks(&mut self);
    fn create_gap_task(&mut self);
    fn create_app_task(&mut self);
}

/// Write access to the RF switch rail, and nothing else. The rail
/// toggler runs inside the power manager's transition window and gets no
/// wider handle than this.
pub trait RailPin {
    fn set_rail(&mut self, level: Level);
}

/// Best-effort diagnostic output for the fault sink.
pub trait StatusSink {
    /// Open the output if it is not already open. `false` means no
    /// output is available; the caller carries on without one.
    fn ensure_open(&mut self) -> bool;
    fn line(&mut self, row: u8, text: &str);
}
