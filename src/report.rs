//! Render reports: structured warnings, scannability prediction and timing.
//!
//! The pipeline never logs; every observation a render call makes about
//! its own degradations is returned as data on [`RenderReport`], owned
//! by the call that produced it (no thread-local or global warning
//! sink).

use std::time::Duration;

/// Severity of a single [`Warning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// A single structured warning describing an automatic degradation or
/// adjustment the pipeline made on the caller's behalf.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Warning {
    /// Stable machine-readable code, e.g. `"MERGE_SAFETY_ADJUSTED"`.
    pub code: String,
    pub severity: Severity,
    /// Human-readable context for the adjustment.
    pub context: String,
    /// Stringified original value, if applicable.
    pub original_value: Option<String>,
    /// Stringified value actually used, if applicable.
    pub fallback_value: Option<String>,
}

impl Warning {
    pub fn new(code: impl Into<String>, severity: Severity, context: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            severity,
            context: context.into(),
            original_value: None,
            fallback_value: None,
        }
    }

    pub fn with_values(
        mut self,
        original: impl Into<String>,
        fallback: impl Into<String>,
    ) -> Self {
        self.original_value = Some(original.into());
        self.fallback_value = Some(fallback.into());
        self
    }
}

/// Timing breakdown for a single render call, in whole microseconds.
/// Populated by the caller of the pipeline stages (the pipeline itself
/// has no suspension points; a render runs to completion or errors).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingMetrics {
    pub classify_micros: u64,
    pub topology_micros: u64,
    pub geometry_micros: u64,
    pub emit_micros: u64,
    pub total_micros: u64,
}

impl TimingMetrics {
    pub(crate) fn record(
        classify: Duration,
        topology: Duration,
        geometry: Duration,
        emit: Duration,
    ) -> Self {
        let total = classify + topology + geometry + emit;
        Self {
            classify_micros: classify.as_micros() as u64,
            topology_micros: topology.as_micros() as u64,
            geometry_micros: geometry.as_micros() as u64,
            emit_micros: emit.as_micros() as u64,
            total_micros: total.as_micros() as u64,
        }
    }
}

/// The report returned alongside rendered SVG bytes. On success the
/// warning list may be non-empty (informational or degradation
/// warnings); it is only ever empty on a perfectly compliant render.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderReport {
    pub warnings: Vec<Warning>,
    /// Predicted scannability in `[0.0, 1.0]`; 1.0 means no degradation
    /// was applied anywhere in the pipeline.
    pub scannability_score: f64,
    pub timing: TimingMetrics,
}

impl RenderReport {
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
            scannability_score: 1.0,
            timing: TimingMetrics::default(),
        }
    }

    pub fn push(&mut self, warning: Warning) {
        let penalty = match warning.severity {
            Severity::Info => 0.0,
            Severity::Warning => 0.03,
            Severity::Critical => 0.1,
        };
        self.scannability_score = (self.scannability_score - penalty).max(0.0);
        self.warnings.push(warning);
    }

    pub fn has_critical(&self) -> bool {
        self.warnings.iter().any(|w| w.severity == Severity::Critical)
    }

    /// Filter by minimum severity, matching the caller-side filtering
    /// the spec requires warnings to support.
    pub fn at_least(&self, minimum: Severity) -> Vec<&Warning> {
        self.warnings
            .iter()
            .filter(|w| severity_rank(w.severity) >= severity_rank(minimum))
            .collect()
    }
}

fn severity_rank(s: Severity) -> u8 {
    match s {
        Severity::Info => 0,
        Severity::Warning => 1,
        Severity::Critical => 2,
    }
}
