//! Application telemetry events and sinks.
//!
//! Sentia is a thin client, but it still benefits from lightweight telemetry
//! to capture operational signals such as service latency and discarded
//! out-of-date review listings.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Sentia.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A review was analyzed successfully.
    AnalysisCompleted {
        /// Round-trip time of the analyze request.
        latency_ms: u64,
        /// Sentiment label returned by the service.
        sentiment: String,
    },
    /// An analyze request failed.
    AnalysisFailed {
        /// Time until the failure was observed.
        latency_ms: u64,
    },
    /// The review list was fetched and applied.
    ReviewsFetched {
        /// Round-trip time of the listing request.
        latency_ms: u64,
        /// Number of reviews returned.
        review_count: usize,
    },
    /// A listing response arrived after a newer request had been issued.
    StaleReviewsDiscarded {
        /// Sequence number of the discarded request.
        request_id: u64,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// Used by the non-interactive modes, where stderr is free.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

/// Records telemetry events through `tracing`.
///
/// The interactive form owns the terminal, so events go to whatever log
/// file the subscriber writes to.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        tracing::info!(target: "sentia::telemetry", event = %serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Test helpers for asserting on recorded telemetry.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the recorded events.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::test_support::RecordingTelemetrySink;
    use super::{TelemetryEvent, TelemetrySink};

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingTelemetrySink::default();
        sink.record(TelemetryEvent::StaleReviewsDiscarded { request_id: 3 });

        assert_eq!(
            sink.events(),
            vec![TelemetryEvent::StaleReviewsDiscarded { request_id: 3 }]
        );
    }

    #[test]
    fn events_serialise_with_type_tag() {
        let event = TelemetryEvent::ReviewsFetched {
            latency_ms: 42,
            review_count: 5,
        };

        assert_eq!(
            serde_json::to_value(&event).expect("event should serialise"),
            json!({"type": "reviews_fetched", "latency_ms": 42, "review_count": 5})
        );
    }
}
