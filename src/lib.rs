//! Locate out-of-band (spare area) regions in raw NAND flash dumps.
//!
//! Given a flat dump and a set of hypothesized page geometries, oobhunt
//! ranks the byte offsets whose regions look most like spare-area metadata:
//! low entropy and largely erased (`0xFF`).
//!
//! ```
//! use oobhunt::oob::scan;
//!
//! // Ten 2048+64 records: zeroed pages followed by erased spare bytes.
//! let mut dump = Vec::new();
//! for _ in 0..10 {
//!     dump.extend_from_slice(&[0u8; 2048]);
//!     dump.extend_from_slice(&[0xFFu8; 64]);
//! }
//! let ranked = scan(&dump, 2048, 64, 10, 4, 2);
//! assert_eq!(ranked[0].offset, 2048);
//! ```

pub mod autoscan;
pub mod config;
pub mod entropy;
pub mod error;
pub mod io;
pub mod logging;
pub mod oob;
pub mod report;

pub use autoscan::{autoscan, AutoscanReport, LayoutOutcome, LayoutReport};
pub use config::ScanConfig;
pub use error::{OobError, Result};
pub use oob::{scan, scan_layout, Layout, OffsetCandidate, ScanParams, DEFAULT_LAYOUTS};
