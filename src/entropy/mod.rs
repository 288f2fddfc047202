//! Entropy estimation for candidate spare regions.
//!
//! Two statistics drive OOB detection:
//!
//! - Shannon entropy in bits per byte (0.0..=8.0)
//! - The erased-byte ratio, i.e. the share of `0xFF` bytes
//!
//! # Example
//!
//! ```
//! use oobhunt::entropy::{erased_ratio, shannon_entropy};
//!
//! let spare = [0xFFu8; 64];
//! assert_eq!(shannon_entropy(&spare), 0.0);
//! assert_eq!(erased_ratio(&spare), 1.0);
//! ```

pub mod core;

pub use self::core::{erased_ratio, shannon_entropy, Histogram, ERASED_BYTE};
