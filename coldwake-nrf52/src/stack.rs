//! Stack handoff shims and the defmt-backed status sink.

use coldwake::icd::{AssertCause, AssertSubcause, StackCtrl, StatusSink};

/// Handler the wireless stack invokes when it traps an internal fault.
pub type AssertCallback = fn(AssertCause, AssertSubcause);

/// Stand-in for the vendor wireless stack entry points.
///
/// The protocol stack, the GAP role task and the application task are
/// external images reached through fixed calls; this shim logs the
/// handoff so the bringup binaries can watch the activation order on
/// RTT.
pub struct ShimStack {
    assert_cb: AssertCallback,
    timing: Option<(u32, u32)>,
}

impl ShimStack {
    /// The stack gets its fault trap at registration, before any of its
    /// tasks exist.
    pub fn new(assert_cb: AssertCallback) -> Self {
        Self {
            assert_cb,
            timing: None,
        }
    }

    /// Raise a stack fault the way the real stack would, from whatever
    /// context it happens to be on.
    pub fn raise(&self, cause: AssertCause, subcause: AssertSubcause) {
        (self.assert_cb)(cause, subcause);
    }

    pub fn timing(&self) -> Option<(u32, u32)> {
        self.timing
    }
}

impl StackCtrl for ShimStack {
    fn set_timing(&mut self, tick_period_us: u32, max_timer_ms: u32) {
        self.timing = Some((tick_period_us, max_timer_ms));
        defmt::info!(
            "stack cfg: tick {=u32} us, max timer {=u32} ms",
            tick_period_us,
            max_timer_ms
        );
    }

    fn ipc_init(&mut self) {
        defmt::info!("ipc transport up");
    }

    fn create_remote_tasks(&mut self) {
        defmt::info!("remote image tasks requested");
    }

    fn create_gap_task(&mut self) {
        defmt::info!("gap role task requested");
    }

    fn create_app_task(&mut self) {
        defmt::info!("application task requested");
    }
}

/// Diagnostic sink over RTT. The link is always there on this board, so
/// opening cannot fail.
pub struct RttStatus {
    open: bool,
}

impl RttStatus {
    pub const fn new() -> Self {
        Self { open: false }
    }
}

impl StatusSink for RttStatus {
    fn ensure_open(&mut self) -> bool {
        if !self.open {
            defmt::warn!("status sink open");
            self.open = true;
        }
        true
    }

    fn line(&mut self, row: u8, text: &str) {
        defmt::error!("[{=u8}] {=str}", row, text);
    }
}
