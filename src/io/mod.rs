//! Bounded, read-only access to NAND dump files.
//!
//! `DumpReader` memory-maps the dump so large images are scanned without
//! copying them onto the heap, and refuses files larger than the configured
//! limit.

use crate::error::{OobError, Result};
use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

/// Defines the resource limits for reading dumps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IOLimits {
    /// The absolute maximum dump size that can be opened.
    pub max_file_size: u64,
}

impl Default for IOLimits {
    fn default() -> Self {
        Self {
            max_file_size: 4 * 1024 * 1024 * 1024, // 4GB
        }
    }
}

/// A read-only, memory-mapped view of a dump file.
#[derive(Debug)]
pub struct DumpReader {
    // None when the file size is zero; memmap cannot map empty files.
    mmap: Option<Mmap>,
    file_size: u64,
}

impl DumpReader {
    /// Opens and maps a dump, failing if it exceeds `limits.max_file_size`.
    pub fn open<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let file_size = file.metadata()?.len();

        debug!(
            path = %path.display(),
            size = file_size,
            limits.max_file_size = limits.max_file_size,
            "Opening dump"
        );

        if file_size > limits.max_file_size {
            warn!(
                path = %path.display(),
                size = file_size,
                limit = limits.max_file_size,
                "Dump is too large"
            );
            return Err(OobError::FileTooLarge {
                limit: limits.max_file_size,
                found: file_size,
            });
        }

        let mmap = if file_size == 0 {
            None
        } else {
            // Safety: read-only map of a regular file; the dump is never written through it.
            Some(unsafe { Mmap::map(&file)? })
        };

        Ok(Self {
            mmap,
            file_size,
        })
    }

    /// Size of the dump in bytes.
    pub fn len(&self) -> u64 {
        self.file_size
    }

    pub fn is_empty(&self) -> bool {
        self.file_size == 0
    }

    /// The whole dump.
    pub fn as_bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }
}
