//! Console and JSON rendering of autoscan results.

use crate::autoscan::{AutoscanReport, LayoutOutcome};
use crate::error::Result;
use crate::oob::OffsetCandidate;
use std::fmt::Write as _;

/// One ranked candidate as a console line.
pub fn format_candidate(candidate: &OffsetCandidate) -> String {
    format!(
        "Offset {offset:5} (0x{offset:04X}) | Entropy: {:.2} | FF Ratio: {:.2} | Score: {:.2}",
        candidate.avg_entropy,
        candidate.avg_ff_ratio,
        candidate.score,
        offset = candidate.offset,
    )
}

/// Human-readable report for `source`, one block per layout.
pub fn render_text(source: &str, report: &AutoscanReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "\n[+] Scanning NAND dump: {}", source);
    let _ = writeln!(
        out,
        "[+] Using {} sample pages per layout\n",
        report.sample_pages
    );

    for entry in &report.layouts {
        match &entry.outcome {
            LayoutOutcome::Skipped { .. } => {
                let _ = writeln!(
                    out,
                    "[-] Skipping page size {} (not enough data for {} pages)",
                    entry.layout.page_size, report.sample_pages
                );
            }
            LayoutOutcome::Scanned { candidates } => {
                let _ = writeln!(
                    out,
                    "=== Testing Page: {} | OOB: {} ===",
                    entry.layout.page_size, entry.layout.oob_size
                );
                for candidate in candidates {
                    let _ = writeln!(out, "{}", format_candidate(candidate));
                }
                out.push('\n');
            }
        }
    }
    out
}

/// Pretty-printed JSON of the whole report.
pub fn render_json(report: &AutoscanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
