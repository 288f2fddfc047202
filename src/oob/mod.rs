//! Spare-area (OOB) offset detection.
//!
//! A raw NAND dump interleaves each data page with its spare bytes. Given a
//! hypothesized [`Layout`], the scanner slides a probe across the first page
//! widths of every record and ranks the offsets whose bytes look most like
//! spare-area metadata: low entropy and mostly erased (`0xFF`).

pub mod layout;
pub mod scanner;

pub use self::layout::{Layout, DEFAULT_LAYOUTS};
pub use self::scanner::{scan, scan_layout, score_offset, OffsetCandidate, ScanParams, TOP_CANDIDATES};
