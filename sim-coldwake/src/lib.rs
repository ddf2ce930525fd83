//! Host-side doubles for the endpoint's hardware services.
//!
//! Every double appends to one shared, ordered trace, so scenario tests
//! can assert not just what the sequencer did, but the order it did it
//! in. No hardware, no scheduler; the "never returns" calls return here,
//! which is exactly the fallthrough case the sequencer has to survive.

use std::sync::{Arc, Mutex};

use coldwake::icd::{
    Level, PinBank, PinTable, PowerConstraint, PowerManager, RailPin, SocCtrl, StackCtrl,
    StatusSink, WakeSource,
};

/// One observable call into any service, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ConstraintSet(PowerConstraint),
    NotifyRegistered,
    ShutdownEntered(Vec<WakeSource>),
    TableOpened(PinTable),
    OutputSet(u8, Level),
    RadioModeSelected,
    CachePrefetchEnabled,
    CacheEnabled,
    TimingSet(u32, u32),
    IpcInit,
    RemoteTasksCreated,
    GapTaskCreated,
    AppTaskCreated,
    SinkOpened,
    SinkLine(u8, String),
    RailSet(Level),
}

pub type Trace = Arc<Mutex<Vec<Action>>>;

pub fn new_trace() -> Trace {
    Arc::new(Mutex::new(Vec::new()))
}

fn push(trace: &Trace, action: Action) {
    trace
        .lock()
        .expect("Failed to lock trace on record")
        .push(action);
}

/// Snapshot the trace contents.
pub fn actions(trace: &Trace) -> Vec<Action> {
    trace
        .lock()
        .expect("Failed to lock trace on read")
        .clone()
}

pub struct SimPower {
    trace: Trace,
}

impl SimPower {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
        }
    }
}

impl PowerManager for SimPower {
    fn set_constraint(&mut self, constraint: PowerConstraint) {
        push(&self.trace, Action::ConstraintSet(constraint));
    }

    fn register_standby_notify(&mut self) {
        push(&self.trace, Action::NotifyRegistered);
    }

    fn enter_shutdown(&mut self, wake: &[WakeSource]) {
        push(&self.trace, Action::ShutdownEntered(wake.to_vec()));
        // returning at all is the simulated hardware failure
    }
}

pub struct SimPins {
    trace: Trace,
}

impl SimPins {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
        }
    }
}

impl PinBank for SimPins {
    fn open_table(&mut self, table: PinTable) {
        push(&self.trace, Action::TableOpened(table));
    }

    fn set_output(&mut self, pin: u8, level: Level) {
        push(&self.trace, Action::OutputSet(pin, level));
    }
}

pub struct SimSoc {
    trace: Trace,
}

impl SimSoc {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
        }
    }
}

impl SocCtrl for SimSoc {
    fn select_ble_radio_mode(&mut self) {
        push(&self.trace, Action::RadioModeSelected);
    }

    fn enable_cache_prefetch(&mut self) {
        push(&self.trace, Action::CachePrefetchEnabled);
    }

    fn set_cache_enabled(&mut self) {
        push(&self.trace, Action::CacheEnabled);
    }
}

pub struct SimStack {
    trace: Trace,
}

impl SimStack {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
        }
    }
}

impl StackCtrl for SimStack {
    fn set_timing(&mut self, tick_period_us: u32, max_timer_ms: u32) {
        push(&self.trace, Action::TimingSet(tick_period_us, max_timer_ms));
    }

    fn ipc_init(&mut self) {
        push(&self.trace, Action::IpcInit);
    }

    fn create_remote_tasks(&mut self) {
        push(&self.trace, Action::RemoteTasksCreated);
    }

    fn create_gap_task(&mut self) {
        push(&self.trace, Action::GapTaskCreated);
    }

    fn create_app_task(&mut self) {
        push(&self.trace, Action::AppTaskCreated);
    }
}

/// Diagnostic sink double. `available: false` simulates a board with no
/// usable output at all.
pub struct SimSink {
    trace: Trace,
    available: bool,
}

impl SimSink {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
            available: true,
        }
    }

    pub fn unavailable(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
            available: false,
        }
    }
}

impl StatusSink for SimSink {
    fn ensure_open(&mut self) -> bool {
        if self.available {
            push(&self.trace, Action::SinkOpened);
        }
        self.available
    }

    fn line(&mut self, row: u8, text: &str) {
        push(&self.trace, Action::SinkLine(row, text.to_string()));
    }
}

pub struct SimRail {
    trace: Trace,
}

impl SimRail {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
        }
    }
}

impl RailPin for SimRail {
    fn set_rail(&mut self, level: Level) {
        push(&self.trace, Action::RailSet(level));
    }
}
