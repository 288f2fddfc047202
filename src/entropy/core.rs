//! Core entropy calculation primitives.
//!
//! Byte-frequency statistics used by the offset scanner to judge how
//! "metadata-like" a candidate spare region looks.

/// Byte value of an erased NAND cell.
pub const ERASED_BYTE: u8 = 0xFF;

/// Byte frequency histogram with one counter per possible byte value.
#[derive(Debug, Clone)]
pub struct Histogram {
    counts: [usize; 256],
    total: usize,
}

impl Histogram {
    /// Creates a new empty histogram.
    #[inline]
    pub fn new() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
        }
    }

    /// Creates a histogram from a byte slice.
    #[inline]
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut hist = Self::new();
        for &byte in data {
            hist.add(byte);
        }
        hist
    }

    /// Adds a byte to the histogram.
    #[inline]
    pub fn add(&mut self, byte: u8) {
        self.counts[byte as usize] += 1;
        self.total += 1;
    }

    /// Counts of the byte values that actually occur.
    #[inline]
    pub fn occupied(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts.iter().copied().filter(|&c| c > 0)
    }

    /// Shannon entropy of the recorded bytes, in bits per byte.
    ///
    /// Summed as `p * log2(1 / p)` over occupied buckets only, so every term
    /// is non-negative and `0 * log2(0)` never appears.
    #[inline]
    pub fn entropy(&self) -> f64 {
        let total = self.total as f64;
        self.occupied()
            .map(|count| {
                let p = count as f64 / total;
                p * (1.0 / p).log2()
            })
            .sum()
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculates the Shannon entropy of a byte slice.
///
/// Returns a value between 0.0 and 8.0, where:
/// - 0.0 means no randomness (empty input, or one repeated byte value)
/// - 8.0 means all 256 byte values occur equally often
#[inline]
pub fn shannon_entropy(data: &[u8]) -> f64 {
    Histogram::from_bytes(data).entropy()
}

/// Fraction of bytes equal to [`ERASED_BYTE`]; 0.0 for an empty slice.
#[inline]
pub fn erased_ratio(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let erased = data.iter().filter(|&&b| b == ERASED_BYTE).count();
    erased as f64 / data.len() as f64
}
