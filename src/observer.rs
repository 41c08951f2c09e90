//! Tokenizer observer — the side channel for per-call telemetry.
//!
//! Callers always receive a (possibly empty) token list; the *reason* an
//! empty list came back is only visible here. An observer receives exactly
//! one callback per tokenizer call: `on_tokens` with the pass counters,
//! `on_empty_input` when the text was missing or blank, or `on_fault` when
//! the tokenizer was built from a rejected configuration.
//!
//! No global logger is installed anywhere in this crate; observers are the
//! only sink. Pass [`NoopObserver`] for zero-overhead execution, or enable
//! the `tracing` feature and use [`TracingObserver`] to bridge into a
//! `tracing` subscriber the host application owns.

use crate::errors::TokenizeFault;
use crate::types::{EmptyInput, TokenizeReport};

/// Receives per-call notifications from a
/// [`WordTokenizer`](crate::tokenize::word::WordTokenizer).
///
/// All methods default to no-ops, so implementors override only what they
/// care about.
pub trait TokenizeObserver {
    /// A pass completed and produced tokens (possibly zero after filtering).
    fn on_tokens(&mut self, report: &TokenizeReport) {
        let _ = report;
    }

    /// The input was missing or blank; no split was attempted.
    fn on_empty_input(&mut self, reason: EmptyInput) {
        let _ = reason;
    }

    /// The tokenizer's configuration was rejected; the call returned empty.
    fn on_fault(&mut self, fault: &TokenizeFault) {
        let _ = fault;
    }
}

/// An observer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TokenizeObserver for NoopObserver {}

/// An observer that tallies calls and remembers the most recent outcome.
///
/// Handy in tests and batch drivers that want to know how often input was
/// empty or what the last pass dropped.
#[derive(Debug, Clone, Default)]
pub struct CountingObserver {
    /// Passes that reached the split stage.
    pub calls: usize,
    /// Tokens kept across all passes.
    pub tokens_kept: usize,
    /// Calls short-circuited on missing or blank input.
    pub empty_inputs: usize,
    /// Calls that reported a configuration fault.
    pub faults: usize,
    /// The report from the most recent completed pass.
    pub last_report: Option<TokenizeReport>,
    /// The reason for the most recent empty-input short circuit.
    pub last_empty: Option<EmptyInput>,
    /// The most recent fault.
    pub last_fault: Option<TokenizeFault>,
}

impl CountingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenizeObserver for CountingObserver {
    fn on_tokens(&mut self, report: &TokenizeReport) {
        self.calls += 1;
        self.tokens_kept += report.kept;
        self.last_report = Some(*report);
    }

    fn on_empty_input(&mut self, reason: EmptyInput) {
        self.empty_inputs += 1;
        self.last_empty = Some(reason);
    }

    fn on_fault(&mut self, fault: &TokenizeFault) {
        self.faults += 1;
        self.last_fault = Some(fault.clone());
    }
}

/// An observer that emits `tracing` events: `debug!` for pass counters,
/// `warn!` for empty input, `error!` for faults.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

#[cfg(feature = "tracing")]
impl TokenizeObserver for TracingObserver {
    fn on_tokens(&mut self, report: &TokenizeReport) {
        tracing::debug!(
            candidates = report.candidates,
            kept = report.kept,
            dropped_by_length = report.dropped_by_length,
            dropped_stopwords = report.dropped_stopwords,
            "tokenized"
        );
    }

    fn on_empty_input(&mut self, reason: EmptyInput) {
        tracing::warn!(reason = reason.as_str(), "no input text; returning empty");
    }

    fn on_fault(&mut self, fault: &TokenizeFault) {
        tracing::error!(code = fault.code().as_str(), detail = %fault, "rejected configuration");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_observer_tallies() {
        let mut obs = CountingObserver::new();

        obs.on_tokens(&TokenizeReport {
            candidates: 5,
            kept: 3,
            dropped_by_length: 1,
            dropped_stopwords: 1,
        });
        obs.on_tokens(&TokenizeReport {
            candidates: 2,
            kept: 2,
            ..Default::default()
        });
        obs.on_empty_input(EmptyInput::Blank);

        assert_eq!(obs.calls, 2);
        assert_eq!(obs.tokens_kept, 5);
        assert_eq!(obs.empty_inputs, 1);
        assert_eq!(obs.faults, 0);
        assert_eq!(obs.last_report.unwrap().kept, 2);
        assert_eq!(obs.last_empty, Some(EmptyInput::Blank));
    }

    #[test]
    fn test_counting_observer_records_fault() {
        let mut obs = CountingObserver::new();
        obs.on_fault(&TokenizeFault::BoundsConflict { min: 4, max: 2 });

        assert_eq!(obs.faults, 1);
        assert!(matches!(
            obs.last_fault,
            Some(TokenizeFault::BoundsConflict { min: 4, max: 2 })
        ));
    }

    #[test]
    fn test_noop_observer_accepts_everything() {
        let mut obs = NoopObserver;
        obs.on_tokens(&TokenizeReport::default());
        obs.on_empty_input(EmptyInput::Missing);
        obs.on_fault(&TokenizeFault::UnknownField {
            field: "x".to_string(),
        });
    }
}
