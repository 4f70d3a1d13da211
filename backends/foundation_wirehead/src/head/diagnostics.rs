//! Parse diagnostics are delivered to a [`ParseObserver`] handed to the parser
//! instead of being written to a process-wide logger. The default observer
//! forwards everything to `tracing`.

use crate::head::errors::HeadDecodeError;
use crate::head::headers::HeaderLine;
use crate::head::status::StatusOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    HeadSplit {
        head_len: usize,
        body_len: usize,
        terminated: bool,
    },
    DecodeFailed(HeadDecodeError),
    LinesDecoded(usize),
    Status(StatusOutcome),
    Header(HeaderLine),
    Finished {
        valid_status: bool,
        good_headers: usize,
        bad_headers: usize,
    },
}

pub trait ParseObserver {
    fn observe(&mut self, event: &ParseEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ParseObserver for NoopObserver {
    fn observe(&mut self, _event: &ParseEvent) {}
}

/// Emits each event through the `tracing` macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ParseObserver for TracingObserver {
    fn observe(&mut self, event: &ParseEvent) {
        match event {
            ParseEvent::HeadSplit {
                head_len,
                body_len,
                terminated,
            } => {
                tracing::debug!(
                    "HeadSplit: head={} body={} terminated={}",
                    head_len,
                    body_len,
                    terminated
                );
            }
            ParseEvent::DecodeFailed(err) => {
                tracing::error!("Failed to decode response head: {:?}", err);
            }
            ParseEvent::LinesDecoded(count) => {
                tracing::debug!("LinesDecoded: {}", count);
            }
            ParseEvent::Status(StatusOutcome::Accepted(status)) => {
                tracing::info!("StatusLine: {}", status);
            }
            ParseEvent::Status(outcome) => {
                tracing::info!("StatusLine rejected: {:?}", outcome);
            }
            ParseEvent::Header(HeaderLine::WellFormed { name, value }) => {
                tracing::debug!("HeaderLine: {:?} -> {:?}", name, value);
            }
            ParseEvent::Header(HeaderLine::Malformed { line, reason }) => {
                tracing::info!("Malformed HeaderLine ({:?}): {:?}", reason, line);
            }
            ParseEvent::Finished {
                valid_status,
                good_headers,
                bad_headers,
            } => {
                tracing::info!(
                    "ResponseHead parsed: valid_status={} good_headers={} bad_headers={}",
                    valid_status,
                    good_headers,
                    bad_headers
                );
            }
        }
    }
}

/// Keeps a copy of every event, mostly useful in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub events: Vec<ParseEvent>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn into_events(self) -> Vec<ParseEvent> {
        self.events
    }
}

impl ParseObserver for RecordingObserver {
    fn observe(&mut self, event: &ParseEvent) {
        self.events.push(event.clone());
    }
}
