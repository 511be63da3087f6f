//! Per-file reports and build-wide statistics.
//!
//! Every transform call returns a [`FileReport`]; the host folds them into a
//! [`BuildStats`]. Counters are only ever incremented and never feed back
//! into tagging decisions.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    /// Passed the eligibility filter.
    pub eligible: bool,
    /// Transform ran to completion (a caught parse failure counts).
    pub processed: bool,
    /// Elements passing the denylist and case gates, already-tagged ones included.
    pub elements_found: u64,
    pub elements_tagged: u64,
    /// Elements rejected by the 3D denylist.
    pub elements_skipped: u64,
    pub warnings: Vec<String>,
}

impl FileReport {
    pub fn ineligible() -> Self {
        Self::default()
    }
}

/// Narrow a counter for hosts that only take 32-bit integers, saturating at `u32::MAX`.
pub fn saturating_u32(count: u64) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Snapshot of [`BuildStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub total_files: u64,
    pub processed_files: u64,
    pub total_elements: u64,
    pub tagged_elements: u64,
    pub skipped_elements: u64,
}

/// Build-lifetime counters, shareable across worker threads.
#[derive(Debug, Default)]
pub struct BuildStats {
    total_files: AtomicU64,
    processed_files: AtomicU64,
    total_elements: AtomicU64,
    tagged_elements: AtomicU64,
    skipped_elements: AtomicU64,
}

impl BuildStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, report: &FileReport) {
        if !report.eligible {
            return;
        }
        self.total_files.fetch_add(1, Ordering::Relaxed);
        if report.processed {
            self.processed_files.fetch_add(1, Ordering::Relaxed);
        }
        self.total_elements
            .fetch_add(report.elements_found, Ordering::Relaxed);
        self.tagged_elements
            .fetch_add(report.elements_tagged, Ordering::Relaxed);
        self.skipped_elements
            .fetch_add(report.elements_skipped, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total_files: self.total_files.load(Ordering::Relaxed),
            processed_files: self.processed_files.load(Ordering::Relaxed),
            total_elements: self.total_elements.load(Ordering::Relaxed),
            tagged_elements: self.tagged_elements.load(Ordering::Relaxed),
            skipped_elements: self.skipped_elements.load(Ordering::Relaxed),
        }
    }

    /// End-of-build summary, emitted only when debug logging is on.
    pub fn log_summary(&self, debug: bool) {
        if !debug {
            return;
        }
        let stats = self.snapshot();
        tracing::debug!(
            total_files = stats.total_files,
            processed_files = stats.processed_files,
            html_elements = stats.total_elements,
            tagged_elements = stats.tagged_elements,
            skipped_3d_elements = stats.skipped_elements,
            "build statistics"
        );
    }
}
