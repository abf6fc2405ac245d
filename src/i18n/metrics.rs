//! Routing metrics.
//!
//! Counts how often lookups are answered by a table versus passed through
//! unchanged, how many stored canonical URLs had to be regenerated and how
//! many out-of-range listing pages were redirected.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global routing metrics singleton.
pub struct RoutingMetrics {
    /// Lookups answered from a translation table
    translations: AtomicUsize,

    /// Lookups that fell through and returned the input unchanged
    passthroughs: AtomicUsize,

    /// Invalid canonical URLs replaced by a regenerated one
    canonical_repairs: AtomicUsize,

    /// Listing requests redirected to page 1
    listing_redirects: AtomicUsize,
}

static METRICS: OnceLock<RoutingMetrics> = OnceLock::new();

impl RoutingMetrics {
    pub fn global() -> &'static RoutingMetrics {
        METRICS.get_or_init(|| RoutingMetrics {
            translations: AtomicUsize::new(0),
            passthroughs: AtomicUsize::new(0),
            canonical_repairs: AtomicUsize::new(0),
            listing_redirects: AtomicUsize::new(0),
        })
    }

    pub fn record_translation(&self) {
        self.translations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_passthrough(&self) {
        self.passthroughs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_canonical_repair(&self) {
        self.canonical_repairs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_listing_redirect(&self) {
        self.listing_redirects.fetch_add(1, Ordering::Relaxed);
    }

    pub fn translations(&self) -> usize {
        self.translations.load(Ordering::Relaxed)
    }

    pub fn passthroughs(&self) -> usize {
        self.passthroughs.load(Ordering::Relaxed)
    }

    pub fn canonical_repairs(&self) -> usize {
        self.canonical_repairs.load(Ordering::Relaxed)
    }

    pub fn listing_redirects(&self) -> usize {
        self.listing_redirects.load(Ordering::Relaxed)
    }

    /// Snapshot the counters.
    pub fn report(&self) -> MetricsReport {
        let translations = self.translations();
        let passthroughs = self.passthroughs();
        let lookups = translations + passthroughs;
        let passthrough_rate = if lookups > 0 {
            (passthroughs as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            translations,
            passthroughs,
            passthrough_rate,
            canonical_repairs: self.canonical_repairs(),
            listing_redirects: self.listing_redirects(),
        }
    }
}

/// Metrics report containing current routing statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub translations: usize,
    pub passthroughs: usize,

    /// Share of lookups that passed through, as a percentage (0-100)
    pub passthrough_rate: f64,

    pub canonical_repairs: usize,
    pub listing_redirects: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Counters are process-wide and other tests record into them
    // concurrently, so assertions compare deltas with `>=`.

    #[test]
    fn test_global_returns_same_instance() {
        let metrics1 = RoutingMetrics::global();
        let metrics2 = RoutingMetrics::global();
        assert!(std::ptr::eq(metrics1, metrics2));
    }

    #[test]
    fn test_record_canonical_repair() {
        let metrics = RoutingMetrics::global();
        let before = metrics.canonical_repairs();
        metrics.record_canonical_repair();
        assert!(metrics.canonical_repairs() >= before + 1);
    }

    #[test]
    fn test_record_listing_redirect() {
        let metrics = RoutingMetrics::global();
        let before = metrics.listing_redirects();
        metrics.record_listing_redirect();
        metrics.record_listing_redirect();
        assert!(metrics.listing_redirects() >= before + 2);
    }

    #[test]
    fn test_report_counts_lookups() {
        let metrics = RoutingMetrics::global();
        metrics.record_translation();
        metrics.record_passthrough();

        let report = metrics.report();
        assert!(report.translations >= 1);
        assert!(report.passthroughs >= 1);
        assert!(report.passthrough_rate > 0.0);
        assert!(report.passthrough_rate < 100.0);
    }

    #[test]
    fn test_report_serializes() {
        let json = serde_json::to_value(RoutingMetrics::global().report()).unwrap();
        assert!(json.get("passthrough_rate").is_some());
        assert!(json.get("canonical_repairs").is_some());
    }
}
