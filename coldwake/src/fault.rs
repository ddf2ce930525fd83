//! Fault sink for asserts raised inside the wireless stack.

use crate::consts::{FAULT_BANNER_ROW, FAULT_DETAIL_ROW};
use crate::icd::{AssertCause, AssertSubcause, StatusSink};

/// What the registered handler does after reporting.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Stack state is still coherent, hand control back.
    Continue,
    /// Continuing would risk corrupting shared stack and application
    /// state. Fail-stop and wait for an external reset.
    Halt,
}

/// Fatal or not, decided by cause alone. Subcauses only pick wording.
pub fn disposition(cause: AssertCause) -> Disposition {
    match cause {
        AssertCause::OutOfMemory | AssertCause::InternalError => Disposition::Continue,
        AssertCause::TransportAbort
        | AssertCause::TransportTimeout
        | AssertCause::WrongApiCall
        | AssertCause::Unknown(_) => Disposition::Halt,
    }
}

fn detail_line(cause: AssertCause, subcause: AssertSubcause) -> &'static str {
    match (cause, subcause) {
        (AssertCause::OutOfMemory, _) => ">> OUT OF MEMORY!",
        (AssertCause::InternalError, AssertSubcause::FwInternal) => ">> INTERNAL FW ERROR!",
        (AssertCause::InternalError, _) => ">> INTERNAL ERROR!",
        (AssertCause::TransportAbort, _) => ">> TRANSPORT ABORT!",
        (AssertCause::TransportTimeout, _) => ">> TRANSPORT TIMEOUT!",
        (AssertCause::WrongApiCall, _) => ">> WRONG API CALL!",
        (AssertCause::Unknown(_), _) => ">> DEFAULT SPINLOCK!",
    }
}

/// Report one assert and classify it.
///
/// Opens the sink lazily on first use; a sink that will not open never
/// blocks or fails the handler, classification happens regardless. The
/// caller must act on the returned disposition (the registered handler
/// wrapper calls [`halt`] on [`Disposition::Halt`]). This is the single
/// fault path for a power cycle; it is not called concurrently with
/// itself.
pub fn on_assert<S: StatusSink>(
    sink: &mut S,
    cause: AssertCause,
    subcause: AssertSubcause,
) -> Disposition {
    if sink.ensure_open() {
        sink.line(FAULT_BANNER_ROW, ">>>STACK ASSERT");
        sink.line(FAULT_BANNER_ROW, "***ERROR***");
        sink.line(FAULT_DETAIL_ROW, detail_line(cause, subcause));
    }

    disposition(cause)
}

/// Deliberate fail-stop. Also serves as the scheduler error hook and as
/// the landing spot when deep-sleep entry falls through.
pub fn halt() -> ! {
    loop {
        core::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeSink {
        available: bool,
        opens: u32,
        lines: Vec<(u8, String)>,
    }

    impl StatusSink for FakeSink {
        fn ensure_open(&mut self) -> bool {
            self.opens += 1;
            self.available
        }
        fn line(&mut self, row: u8, text: &str) {
            self.lines.push((row, text.to_string()));
        }
    }

    fn open_sink() -> FakeSink {
        FakeSink {
            available: true,
            ..FakeSink::default()
        }
    }

    #[test]
    fn disposition_table() {
        assert_eq!(disposition(AssertCause::OutOfMemory), Disposition::Continue);
        assert_eq!(
            disposition(AssertCause::InternalError),
            Disposition::Continue
        );
        assert_eq!(disposition(AssertCause::TransportAbort), Disposition::Halt);
        assert_eq!(
            disposition(AssertCause::TransportTimeout),
            Disposition::Halt
        );
        assert_eq!(disposition(AssertCause::WrongApiCall), Disposition::Halt);
        assert_eq!(disposition(AssertCause::Unknown(0x5A)), Disposition::Halt);
    }

    #[test]
    fn out_of_memory_reports_and_returns() {
        let mut sink = open_sink();
        let d = on_assert(&mut sink, AssertCause::OutOfMemory, AssertSubcause::None);
        assert_eq!(d, Disposition::Continue);
        assert_eq!(
            sink.lines,
            vec![
                (0, ">>>STACK ASSERT".to_string()),
                (0, "***ERROR***".to_string()),
                (2, ">> OUT OF MEMORY!".to_string()),
            ]
        );
    }

    #[test]
    fn fw_internal_subcause_gets_distinct_wording() {
        let mut sink = open_sink();
        let d = on_assert(
            &mut sink,
            AssertCause::InternalError,
            AssertSubcause::FwInternal,
        );
        assert_eq!(d, Disposition::Continue);
        assert_eq!(sink.lines[2].1, ">> INTERNAL FW ERROR!");

        let mut sink = open_sink();
        on_assert(
            &mut sink,
            AssertCause::InternalError,
            AssertSubcause::Other(3),
        );
        assert_eq!(sink.lines[2].1, ">> INTERNAL ERROR!");
    }

    #[test]
    fn wrong_api_call_reports_once_then_halts() {
        let mut sink = open_sink();
        let d = on_assert(&mut sink, AssertCause::WrongApiCall, AssertSubcause::None);
        assert_eq!(d, Disposition::Halt);
        assert_eq!(sink.opens, 1);
        assert_eq!(sink.lines.len(), 3);
        assert_eq!(sink.lines[2].1, ">> WRONG API CALL!");
    }

    #[test]
    fn missing_sink_never_blocks_classification() {
        let mut sink = FakeSink::default();
        let d = on_assert(&mut sink, AssertCause::TransportAbort, AssertSubcause::None);
        assert_eq!(d, Disposition::Halt);
        assert_eq!(sink.opens, 1);
        assert!(sink.lines.is_empty());
    }
}
