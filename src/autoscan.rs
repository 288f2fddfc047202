//! Runs the offset scanner over every configured layout.
//!
//! Each layout gets only the dump prefix covering `sample_pages` records. A
//! dump too short for a layout is reported as skipped instead of scanned.

use crate::config::ScanConfig;
use crate::oob::{scan_layout, Layout, OffsetCandidate};
use serde::Serialize;
use tracing::{debug, info};

/// What happened to one layout during an autoscan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LayoutOutcome {
    /// The dump is shorter than `sample_pages` records of this layout.
    Skipped { required: usize, available: usize },
    /// Ranked candidates, best first.
    Scanned { candidates: Vec<OffsetCandidate> },
}

/// Result for a single layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    pub layout: Layout,
    #[serde(flatten)]
    pub outcome: LayoutOutcome,
}

impl LayoutReport {
    /// Best candidate, if the layout was scanned and produced any.
    pub fn best(&self) -> Option<&OffsetCandidate> {
        match &self.outcome {
            LayoutOutcome::Scanned { candidates } => candidates.first(),
            LayoutOutcome::Skipped { .. } => None,
        }
    }
}

/// Results for a whole run, in configured layout order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutoscanReport {
    pub sample_pages: usize,
    pub data_len: usize,
    pub layouts: Vec<LayoutReport>,
}

impl AutoscanReport {
    /// Number of layouts that were actually scanned.
    pub fn scanned_count(&self) -> usize {
        self.layouts
            .iter()
            .filter(|r| matches!(r.outcome, LayoutOutcome::Scanned { .. }))
            .count()
    }
}

/// Scans `data` with every layout in `config`.
pub fn autoscan(data: &[u8], config: &ScanConfig) -> AutoscanReport {
    let params = &config.scan;
    let span = crate::span_trace!("autoscan", data_len = data.len(), layouts = config.layouts.len());
    let _guard = span.enter();

    let layouts = config
        .layouts
        .iter()
        .map(|&layout| {
            let required = layout.required_len(params.sample_pages);
            if data.len() < required {
                info!(
                    layout = %layout,
                    required,
                    available = data.len(),
                    "Skipping layout, not enough data"
                );
                return LayoutReport {
                    layout,
                    outcome: LayoutOutcome::Skipped {
                        required,
                        available: data.len(),
                    },
                };
            }

            let candidates = scan_layout(&data[..required], layout, params);
            debug!(
                layout = %layout,
                best_offset = candidates.first().map(|c| c.offset),
                "Layout scanned"
            );
            LayoutReport {
                layout,
                outcome: LayoutOutcome::Scanned { candidates },
            }
        })
        .collect();

    AutoscanReport {
        sample_pages: params.sample_pages,
        data_len: data.len(),
        layouts,
    }
}
