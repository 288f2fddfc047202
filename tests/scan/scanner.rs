//! Offset scanner behaviour on synthetic dumps.

use crate::common::{dump_with_erased_region, zero_pages_erased_spare, Lcg};
use oobhunt::oob::{scan, scan_layout, score_offset, Layout, ScanParams, TOP_CANDIDATES};

#[test]
fn test_erased_spare_found_in_random_dump() {
    let data = dump_with_erased_region(2048, 64, 64, 2048, 64, 7);
    let results = scan(&data, 2048, 64, 64, 4, 2);

    assert!(!results.is_empty());
    assert_eq!(results[0].offset, 2048);
    assert_eq!(results[0].avg_ff_ratio, 1.0);
    assert!((results[0].score - 2.0).abs() < 1e-9);
}

#[test]
fn test_small_block_spare_found() {
    let data = dump_with_erased_region(512, 16, 200, 512, 16, 99);
    let results = scan(&data, 512, 16, 200, 4, 8);
    assert_eq!(results[0].offset, 512);
}

#[test]
fn test_zeroed_pages_scenario() {
    let data = zero_pages_erased_spare(2048, 64, 10);
    assert_eq!(data.len(), 10 * 2112);

    let results = scan(&data, 2048, 64, 10, 4, 2);
    let top = results[0];
    assert_eq!(top.offset, 2048);
    assert!(top.avg_entropy.abs() < 1e-12);
    assert_eq!(top.avg_ff_ratio, 1.0);
    assert!((top.score - 2.0).abs() < 1e-12);

    let zero = score_offset(&data, Layout::new(2048, 64), 10, 0).unwrap();
    assert!(zero.avg_entropy.abs() < 1e-12);
    assert_eq!(zero.avg_ff_ratio, 0.0);
    assert!((zero.score - 1.0).abs() < 1e-12);
}

#[test]
fn test_results_bounded_and_sorted() {
    let mut data = vec![0u8; 528 * 50];
    Lcg::new(3).fill(&mut data);

    for step in [1, 3, 4, 16] {
        let results = scan(&data, 512, 16, 50, step, 2);
        assert!(results.len() <= TOP_CANDIDATES);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        for c in &results {
            assert_eq!(c.offset % step, 0);
            assert!(c.offset < 1024);
            assert!((0.0..=8.0).contains(&c.avg_entropy));
            assert!((0.0..=1.0).contains(&c.avg_ff_ratio));
        }
    }
}

#[test]
fn test_fewer_offsets_than_top_candidates() {
    // page_size 8 with step 4 probes only offsets 0 and 4.
    let data = vec![0xFFu8; 12 * 4];
    let results = scan(&data, 8, 4, 4, 4, 1);
    assert_eq!(results.len(), 2);
}

#[test]
fn test_zero_parameters_are_empty() {
    let data = zero_pages_erased_spare(512, 16, 8);
    assert!(scan(&data, 512, 16, 0, 4, 8).is_empty());
    assert!(scan(&data, 512, 16, 8, 4, 0).is_empty());
    assert!(scan(&[], 512, 16, 8, 4, 8).is_empty());
}

#[test]
fn test_truncated_samples_average_over_available() {
    // Three records whose spare areas are 100%, 50% and 0% erased.
    let mut data = Vec::new();
    for erased in [16usize, 8, 0] {
        data.extend_from_slice(&[0u8; 512]);
        data.extend(std::iter::repeat(0xFFu8).take(erased));
        data.extend(std::iter::repeat(0x00u8).take(16 - erased));
    }

    let candidate = score_offset(&data, Layout::new(512, 16), 10, 512).unwrap();
    assert!((candidate.avg_ff_ratio - 0.5).abs() < 1e-12);
}

#[test]
fn test_parallel_scan_is_identical() {
    let data = dump_with_erased_region(2048, 64, 32, 2048, 64, 11);
    let layout = Layout::new(2048, 64);
    let params = ScanParams {
        sample_pages: 32,
        scan_step: 4,
        max_pages_to_scan: 3,
        parallel: false,
    };
    let sequential = scan_layout(&data, layout, &params);
    let parallel = scan_layout(
        &data,
        layout,
        &ScanParams {
            parallel: true,
            ..params
        },
    );
    assert_eq!(sequential, parallel);
}
