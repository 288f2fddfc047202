#![no_main]
use libfuzzer_sys::fuzz_target;
use oobhunt::oob::{scan_layout, Layout, ScanParams, TOP_CANDIDATES};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // First bytes pick the geometry, the rest is the dump.
    let layout = Layout::new(data[0] as usize + 1, data[1] as usize);
    let params = ScanParams {
        sample_pages: data[2] as usize,
        scan_step: data[3] as usize % 8,
        max_pages_to_scan: 2,
        parallel: false,
    };
    let results = scan_layout(&data[4..], layout, &params);
    assert!(results.len() <= TOP_CANDIDATES);
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
});
