// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::consts::{RATE_128, RATE_256};
use crate::encoding::{
    absorb_byte_padded_strings, bit_len, byte_pad, encode_string, left_encode, right_encode,
};
use crate::error::KmacError;
use crate::sponge::{DomainSuffix, Sponge};

// =============================================================================
// left_encode / right_encode
// =============================================================================

#[test]
fn test_left_encode_zero() {
    assert_eq!(left_encode(0).as_bytes(), &[0x01, 0x00]);
}

#[test]
fn test_right_encode_zero() {
    assert_eq!(right_encode(0).as_bytes(), &[0x00, 0x01]);
}

#[test]
fn test_left_encode_rates() {
    assert_eq!(left_encode(RATE_128 as u128).as_bytes(), &[0x01, 0xa8]);
    assert_eq!(left_encode(RATE_256 as u128).as_bytes(), &[0x01, 0x88]);
}

#[test]
fn test_encode_width_boundaries() {
    assert_eq!(left_encode(255).as_bytes(), &[0x01, 0xff]);
    assert_eq!(left_encode(256).as_bytes(), &[0x02, 0x01, 0x00]);
    assert_eq!(right_encode(255).as_bytes(), &[0xff, 0x01]);
    assert_eq!(right_encode(256).as_bytes(), &[0x01, 0x00, 0x02]);
}

#[test]
fn test_right_encode_tag_lengths() {
    // 256-bit and 512-bit tags
    assert_eq!(right_encode(bit_len(32)).as_bytes(), &[0x01, 0x00, 0x02]);
    assert_eq!(right_encode(bit_len(64)).as_bytes(), &[0x02, 0x00, 0x02]);
}

#[test]
fn test_encode_u128_max() {
    let left = left_encode(u128::MAX);
    let right = right_encode(u128::MAX);

    assert_eq!(left.len(), 17);
    assert_eq!(left.as_bytes()[0], 16);
    assert!(left.as_bytes()[1..].iter().all(|&b| b == 0xff));

    assert_eq!(right.len(), 17);
    assert_eq!(right.as_bytes()[16], 16);
    assert!(right.as_bytes()[..16].iter().all(|&b| b == 0xff));
}

#[test]
fn test_encoded_length_accessors() {
    let encoded = left_encode(0x0102);

    assert_eq!(encoded.len(), 3);
    assert!(!encoded.is_empty());
    assert_eq!(encoded.as_ref(), encoded.as_bytes());
}

proptest! {
    #[test]
    fn prop_left_right_encode_mirror(value in any::<u128>()) {
        let left = left_encode(value);
        let right = right_encode(value);

        prop_assert_eq!(left.len(), right.len());
        let n = left.len() - 1;
        prop_assert_eq!(left.as_bytes()[0] as usize, n);
        prop_assert_eq!(right.as_bytes()[n] as usize, n);
        prop_assert_eq!(&left.as_bytes()[1..], &right.as_bytes()[..n]);

        // Minimal width: no leading zero byte unless the value is zero
        if value != 0 {
            prop_assert_ne!(left.as_bytes()[1], 0);
        }

        let mut be = [0u8; 16];
        be[16 - n..].copy_from_slice(&left.as_bytes()[1..]);
        prop_assert_eq!(u128::from_be_bytes(be), value);
    }
}

// =============================================================================
// encode_string
// =============================================================================

#[test]
fn test_encode_string_empty() {
    assert_eq!(encode_string(b""), vec![0x01, 0x00]);
}

#[test]
fn test_encode_string_kmac() {
    assert_eq!(encode_string(b"KMAC"), vec![0x01, 0x20, b'K', b'M', b'A', b'C']);
}

#[test]
fn test_encode_string_long() {
    let s = vec![0x5au8; 300];
    let encoded = encode_string(&s);

    // 2400 bits = 0x0960
    assert_eq!(&encoded[..3], &[0x02, 0x09, 0x60]);
    assert_eq!(&encoded[3..], s.as_slice());
}

// =============================================================================
// byte_pad
// =============================================================================

#[test]
fn test_byte_pad_small_block() {
    let padded = byte_pad(&[0xaa, 0xbb], 4).expect("Failed to byte_pad(..)");
    assert_eq!(padded, vec![0x01, 0x04, 0xaa, 0xbb]);

    let padded = byte_pad(&[0xaa, 0xbb, 0xcc], 4).expect("Failed to byte_pad(..)");
    assert_eq!(padded, vec![0x01, 0x04, 0xaa, 0xbb, 0xcc, 0x00, 0x00, 0x00]);
}

#[test]
fn test_byte_pad_empty_input() {
    let padded = byte_pad(&[], RATE_128).expect("Failed to byte_pad(..)");

    assert_eq!(padded.len(), RATE_128);
    assert_eq!(&padded[..2], &[0x01, 0xa8]);
    assert!(padded[2..].iter().all(|&b| b == 0));
}

#[test]
fn test_byte_pad_kmac_header() {
    let mut x = encode_string(b"KMAC");
    x.extend_from_slice(&encode_string(b""));

    let padded = byte_pad(&x, RATE_256).expect("Failed to byte_pad(..)");

    assert_eq!(padded.len(), RATE_256);
    assert_eq!(
        &padded[..10],
        &[0x01, 0x88, 0x01, 0x20, b'K', b'M', b'A', b'C', 0x01, 0x00]
    );
    assert!(padded[10..].iter().all(|&b| b == 0));
}

#[test]
fn test_byte_pad_zero_block_size() {
    let result = byte_pad(b"anything", 0);
    assert_eq!(result, Err(KmacError::InvalidBlockSize));
}

proptest! {
    #[test]
    fn prop_byte_pad_is_block_aligned(
        x in proptest::collection::vec(any::<u8>(), 0..600),
        w in 1usize..300,
    ) {
        let padded = byte_pad(&x, w).expect("Failed to byte_pad(..)");
        let prefix = left_encode(w as u128);

        prop_assert_eq!(padded.len() % w, 0);
        prop_assert!(padded.len() >= prefix.len() + x.len());
        prop_assert!(padded.len() < prefix.len() + x.len() + w);
        prop_assert_eq!(&padded[..prefix.len()], prefix.as_bytes());
        prop_assert_eq!(&padded[prefix.len()..prefix.len() + x.len()], x.as_slice());
        prop_assert!(padded[prefix.len() + x.len()..].iter().all(|&b| b == 0));
    }
}

// =============================================================================
// Streaming byte_pad into the sponge
// =============================================================================

fn squeeze_after(mut sponge: Sponge) -> [u8; 32] {
    sponge.finish_absorb(DomainSuffix::CShake);
    let mut out = [0u8; 32];
    sponge.squeeze(&mut out);
    out
}

proptest! {
    #[test]
    fn prop_streamed_byte_pad_matches_materialized(
        a in proptest::collection::vec(any::<u8>(), 0..400),
        b in proptest::collection::vec(any::<u8>(), 0..400),
        wide in any::<bool>(),
    ) {
        let rate = if wide { RATE_256 } else { RATE_128 };

        let mut streamed = Sponge::new(rate);
        absorb_byte_padded_strings(&mut streamed, &[&a, &b]);

        let mut x = encode_string(&a);
        x.extend_from_slice(&encode_string(&b));
        let padded = byte_pad(&x, rate).expect("Failed to byte_pad(..)");
        let mut materialized = Sponge::new(rate);
        materialized.absorb(&padded);

        prop_assert_eq!(streamed.lanes(), materialized.lanes());
        prop_assert_eq!(squeeze_after(streamed), squeeze_after(materialized));
    }
}

#[test]
fn test_streamed_byte_pad_exact_block_fill() {
    // prefix (2) + encode_string prefix (3) + 163 bytes = 168: no zero fill
    let s = vec![0x11u8; RATE_128 - 5];

    let mut streamed = Sponge::new(RATE_128);
    absorb_byte_padded_strings(&mut streamed, &[&s]);

    let padded = byte_pad(&encode_string(&s), RATE_128).expect("Failed to byte_pad(..)");
    assert_eq!(padded.len(), RATE_128);

    let mut materialized = Sponge::new(RATE_128);
    materialized.absorb(&padded);

    assert_eq!(streamed.lanes(), materialized.lanes());
}
