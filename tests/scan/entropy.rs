//! Entropy estimator properties.

use crate::common::Lcg;
use oobhunt::entropy::{erased_ratio, shannon_entropy};

#[test]
fn test_entropy_range_on_random_blocks() {
    let mut rng = Lcg::new(42);
    for len in [0usize, 1, 2, 16, 64, 257, 8192] {
        let mut block = vec![0u8; len];
        rng.fill(&mut block);
        let e = shannon_entropy(&block);
        assert!((0.0..=8.0).contains(&e), "len {} gave {}", len, e);
    }
}

#[test]
fn test_entropy_ignores_order() {
    let mut block = vec![0u8; 512];
    Lcg::new(5).fill(&mut block);
    let mut shuffled = block.clone();
    shuffled.rotate_left(137);
    shuffled.swap(0, 300);
    let mut sorted = block.clone();
    sorted.sort_unstable();

    let e = shannon_entropy(&block);
    assert!((e - shannon_entropy(&shuffled)).abs() < 1e-12);
    assert!((e - shannon_entropy(&sorted)).abs() < 1e-12);
}

#[test]
fn test_uniform_block_is_eight_bits() {
    for repeats in [1usize, 4, 32] {
        let block: Vec<u8> = (0..=255u8).cycle().take(256 * repeats).collect();
        assert!((shannon_entropy(&block) - 8.0).abs() < 1e-9);
    }
}

#[test]
fn test_single_value_blocks() {
    assert_eq!(shannon_entropy(&[]), 0.0);
    for value in [0x00u8, 0x5A, 0xFF] {
        assert_eq!(shannon_entropy(&[value; 300]), 0.0);
    }
    assert_eq!(erased_ratio(&[0xFF; 300]), 1.0);
}
