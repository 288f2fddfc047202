//! Offset scoring for a single layout.
//!
//! For every probed offset the scanner samples the `oob_size` bytes found at
//! that offset in each of the first `sample_pages` records and averages their
//! entropy and erased-byte ratio. Regions that run past the end of the data
//! are left out of the averages entirely.

use crate::entropy::{erased_ratio, shannon_entropy};
use crate::oob::layout::Layout;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Number of ranked candidates returned per layout.
pub const TOP_CANDIDATES: usize = 5;

/// Parameters controlling one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanParams {
    /// How many consecutive page records to sample (default: 1000).
    pub sample_pages: usize,
    /// Stride between probed offsets in bytes (default: 4).
    pub scan_step: usize,
    /// How many page widths of offset space to probe (default: 8).
    pub max_pages_to_scan: usize,
    /// Score offsets on the rayon thread pool (default: false).
    pub parallel: bool,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            sample_pages: 1000,
            scan_step: 4,
            max_pages_to_scan: 8,
            parallel: false,
        }
    }
}

/// A scored candidate offset for the spare area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffsetCandidate {
    /// Byte offset within the probe window.
    pub offset: usize,
    /// Mean Shannon entropy of the sampled regions (0.0..=8.0).
    pub avg_entropy: f64,
    /// Mean share of `0xFF` bytes in the sampled regions (0.0..=1.0).
    pub avg_ff_ratio: f64,
    /// `(1 - avg_entropy / 8) + avg_ff_ratio`.
    pub score: f64,
}

impl OffsetCandidate {
    fn from_averages(offset: usize, avg_entropy: f64, avg_ff_ratio: f64) -> Self {
        Self {
            offset,
            avg_entropy,
            avg_ff_ratio,
            score: (1.0 - avg_entropy / 8.0) + avg_ff_ratio,
        }
    }
}

/// Scans `data` for the spare-area offset of a `page_size + oob_size` layout.
///
/// Returns up to [`TOP_CANDIDATES`] results ordered by score, highest first;
/// equal scores keep ascending offset order.
pub fn scan(
    data: &[u8],
    page_size: usize,
    oob_size: usize,
    sample_pages: usize,
    scan_step: usize,
    max_pages_to_scan: usize,
) -> Vec<OffsetCandidate> {
    let params = ScanParams {
        sample_pages,
        scan_step,
        max_pages_to_scan,
        parallel: false,
    };
    scan_layout(data, Layout::new(page_size, oob_size), &params)
}

/// Same as [`scan`], driven by a [`Layout`] and [`ScanParams`].
pub fn scan_layout(data: &[u8], layout: Layout, params: &ScanParams) -> Vec<OffsetCandidate> {
    if params.scan_step == 0 {
        return Vec::new();
    }

    let max_offset = params.max_pages_to_scan.saturating_mul(layout.page_size);
    let offset_count = max_offset.div_ceil(params.scan_step);
    let step = params.scan_step;

    debug!(
        layout = %layout,
        data_len = data.len(),
        sample_pages = params.sample_pages,
        offsets = offset_count,
        parallel = params.parallel,
        "Scanning offsets"
    );

    // Both paths yield candidates in ascending offset order.
    let mut candidates: Vec<OffsetCandidate> = if params.parallel {
        (0..offset_count)
            .into_par_iter()
            .filter_map(|k| score_offset(data, layout, params.sample_pages, k * step))
            .collect()
    } else {
        (0..max_offset)
            .step_by(step)
            .filter_map(|offset| score_offset(data, layout, params.sample_pages, offset))
            .collect()
    };

    // Stable: ties stay in offset order.
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(TOP_CANDIDATES);
    candidates
}

/// Scores one offset, or `None` if no sampled region was complete.
pub fn score_offset(
    data: &[u8],
    layout: Layout,
    sample_pages: usize,
    offset: usize,
) -> Option<OffsetCandidate> {
    let record = layout.record_size();
    let mut total_entropy = 0.0;
    let mut total_ff_ratio = 0.0;
    let mut samples = 0usize;

    for page in 0..sample_pages {
        let Some(start) = page
            .checked_mul(record)
            .and_then(|base| base.checked_add(offset))
        else {
            break;
        };
        // Later records start even further out, so nothing past here is complete.
        if layout.oob_size > 0 && start >= data.len() {
            break;
        }
        let Some(region) = sample_region(data, start, layout.oob_size) else {
            continue;
        };

        total_entropy += shannon_entropy(region);
        total_ff_ratio += erased_ratio(region);
        samples += 1;
    }

    if samples == 0 {
        trace!(offset, layout = %layout, "No complete samples, dropping offset");
        return None;
    }

    let samples = samples as f64;
    Some(OffsetCandidate::from_averages(
        offset,
        total_entropy / samples,
        total_ff_ratio / samples,
    ))
}

/// The `len` bytes at `start`, or `None` if the data ends first.
#[inline]
fn sample_region(data: &[u8], start: usize, len: usize) -> Option<&[u8]> {
    let start = start.min(data.len());
    let end = start.saturating_add(len).min(data.len());
    let region = &data[start..end];
    (region.len() == len).then_some(region)
}
