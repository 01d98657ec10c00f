use serde::Serialize;

/// A single analytics event for the install funnel.
///
/// Categories and actions are static: the set of events this screen can emit
/// is fixed at compile time, only labels/values vary per occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TelemetryEvent {
    pub category: &'static str,
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    pub non_interactive: bool,
}

/// Fire-and-forget sink for telemetry events.
///
/// The install lifecycle manager only ever talks to this trait, so tests can
/// swap in an in-memory recorder and production code a log-backed sink.
pub trait TelemetrySink {
    fn send(&mut self, event: TelemetryEvent);
}

/// Production sink: one JSON line per event through `tracing`, so events end
/// up in the same log file as everything else and can be grepped out by the
/// `telemetry` target.
pub struct LogSink;

impl TelemetrySink for LogSink {
    fn send(&mut self, event: TelemetryEvent) {
        #[derive(Serialize)]
        struct Line<'a> {
            at: String,
            #[serde(flatten)]
            event: &'a TelemetryEvent,
        }
        let line = Line {
            at: chrono::Utc::now().to_rfc3339(),
            event: &event,
        };
        match serde_json::to_string(&line) {
            Ok(json) => tracing::info!(target: "telemetry", "{json}"),
            Err(e) => tracing::warn!("failed to serialize telemetry event: {e}"),
        }
    }
}

/// Sink that drops everything. Used when telemetry is disabled.
pub struct NullSink;

impl TelemetrySink for NullSink {
    fn send(&mut self, _event: TelemetryEvent) {}
}
