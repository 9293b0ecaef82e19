//! Prometheus metrics for prompt generation.
//!
//! Counters for generated prompts, failures by kind and skipped markets,
//! plus latency histograms for the Gamma fetch and the whole pipeline.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::error::ErrorKind;

// === Metric Name Constants ===

/// Gamma `/events` fetch latency metric name.
pub const METRIC_EVENT_FETCH_LATENCY: &str = "event_fetch_latency_ms";
/// End-to-end prompt generation latency metric name.
pub const METRIC_PROMPT_LATENCY: &str = "prompt_generation_latency_ms";
/// Prompts generated counter metric name.
pub const METRIC_PROMPTS_GENERATED: &str = "prompts_generated_total";
/// Prompt failures counter metric name (label: `kind`).
pub const METRIC_PROMPT_ERRORS: &str = "prompt_errors_total";
/// Markets skipped counter metric name.
pub const METRIC_MARKETS_SKIPPED: &str = "markets_skipped_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_EVENT_FETCH_LATENCY,
        "Gamma events request latency in milliseconds"
    );
    describe_histogram!(
        METRIC_PROMPT_LATENCY,
        "Prompt generation latency in milliseconds"
    );

    describe_counter!(METRIC_PROMPTS_GENERATED, "Total number of prompts generated");
    describe_counter!(
        METRIC_PROMPT_ERRORS,
        "Total number of failed prompt generations by error kind"
    );
    describe_counter!(
        METRIC_MARKETS_SKIPPED,
        "Total number of markets left out because they could not be parsed"
    );

    debug!("Metrics initialized");
}

/// Install the Prometheus recorder and describe all metrics.
pub fn install_prometheus() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    init_metrics();
    Ok(handle)
}

/// Increment prompts generated counter.
pub fn inc_prompts_generated() {
    counter!(METRIC_PROMPTS_GENERATED).increment(1);
}

/// Increment prompt failure counter for `kind`.
pub fn inc_prompt_errors(kind: ErrorKind) {
    let label: &'static str = kind.into();
    counter!(METRIC_PROMPT_ERRORS, "kind" => label).increment(1);
}

/// Increment skipped markets counter.
pub fn inc_markets_skipped() {
    counter!(METRIC_MARKETS_SKIPPED).increment(1);
}

/// RAII guard for timing operations.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    metric_name: &'static str,
}

impl LatencyTimer {
    /// Create a new latency timer for the given metric.
    pub fn new(metric_name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            metric_name,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        histogram!(self.metric_name).record(self.elapsed_ms());
    }
}

/// Create a latency timer for the Gamma events request.
pub fn timer_event_fetch() -> LatencyTimer {
    LatencyTimer::new(METRIC_EVENT_FETCH_LATENCY)
}

/// Create a latency timer for a whole prompt generation.
pub fn timer_prompt_generation() -> LatencyTimer {
    LatencyTimer::new(METRIC_PROMPT_LATENCY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn latency_timer_measures_time() {
        let timer = LatencyTimer::new("test_metric");
        sleep(Duration::from_millis(10));
        let elapsed = timer.elapsed_ms();
        assert!(elapsed >= 9.0); // Allow some tolerance
    }

    #[test]
    fn counters_are_noops_without_recorder() {
        inc_prompts_generated();
        inc_prompt_errors(ErrorKind::NotFound);
        inc_markets_skipped();
    }
}
