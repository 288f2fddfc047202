//! Hypothesized NAND page geometries.

use crate::error::OobError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `(page_size, oob_size)` pairing used as a probe geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Layout {
    /// Main data area per page, in bytes.
    pub page_size: usize,
    /// Spare (OOB) area per page, in bytes.
    pub oob_size: usize,
}

/// Common NAND configurations probed when none are given.
pub const DEFAULT_LAYOUTS: [Layout; 4] = [
    // small block NAND
    Layout::new(512, 16),
    // common large block
    Layout::new(2048, 64),
    Layout::new(4096, 128),
    // modern chips
    Layout::new(8192, 256),
];

impl Layout {
    pub const fn new(page_size: usize, oob_size: usize) -> Self {
        Self {
            page_size,
            oob_size,
        }
    }

    /// Bytes occupied by one page plus its spare area in a raw dump.
    #[inline]
    pub fn record_size(&self) -> usize {
        self.page_size.saturating_add(self.oob_size)
    }

    /// Bytes a dump must hold to supply `sample_pages` full records.
    #[inline]
    pub fn required_len(&self, sample_pages: usize) -> usize {
        self.record_size().saturating_mul(sample_pages)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.page_size, self.oob_size)
    }
}

impl FromStr for Layout {
    type Err = OobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| OobError::InvalidLayout {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (page, oob) = s
            .split_once(':')
            .ok_or_else(|| invalid("expected PAGE:OOB"))?;
        let page_size: usize = page
            .trim()
            .parse()
            .map_err(|_| invalid("page size is not an integer"))?;
        let oob_size: usize = oob
            .trim()
            .parse()
            .map_err(|_| invalid("oob size is not an integer"))?;
        if page_size == 0 || oob_size == 0 {
            return Err(invalid("sizes must be positive"));
        }
        Ok(Layout::new(page_size, oob_size))
    }
}
