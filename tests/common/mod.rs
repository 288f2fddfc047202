//! Synthetic dump builders shared by the integration tests.

/// Deterministic byte generator so tests do not need a rand dependency.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_byte(&mut self) -> u8 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 56) as u8
    }

    pub fn fill(&mut self, buf: &mut [u8]) {
        for b in buf {
            *b = self.next_byte();
        }
    }
}

/// `records` page+spare records of pseudo-random bytes, with `erased_len`
/// bytes of `0xFF` at `spare_offset` within each record.
pub fn dump_with_erased_region(
    page_size: usize,
    oob_size: usize,
    records: usize,
    spare_offset: usize,
    erased_len: usize,
    seed: u64,
) -> Vec<u8> {
    let record = page_size + oob_size;
    let mut data = vec![0u8; record * records];
    Lcg::new(seed).fill(&mut data);
    for i in 0..records {
        let start = i * record + spare_offset;
        data[start..start + erased_len].fill(0xFF);
    }
    data
}

/// Zeroed pages followed by fully erased spare areas.
pub fn zero_pages_erased_spare(page_size: usize, oob_size: usize, records: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity((page_size + oob_size) * records);
    for _ in 0..records {
        data.extend(std::iter::repeat(0x00u8).take(page_size));
        data.extend(std::iter::repeat(0xFFu8).take(oob_size));
    }
    data
}
