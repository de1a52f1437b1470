// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Length-prefixed encodings per NIST SP 800-185 Section 2.3
//!
//! - `left_encode(x)`: `n || x`, the byte count first
//! - `right_encode(x)`: `x || n`, the byte count last
//! - `encode_string(S)`: `left_encode(bitlen(S)) || S`
//! - `byte_pad(X, w)`: `left_encode(w) || X`, zero-filled to a multiple of `w`
//!
//! `x` is written big-endian in the fewest bytes that hold it, and never in
//! fewer than one byte.

use alloc::vec::Vec;

use crate::consts::{MAX_ENCODED_LEN, MAX_RATE};
use crate::error::KmacError;
use crate::sponge::Sponge;

/// An encoded integer from [`left_encode`] or [`right_encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedLength {
    bytes: [u8; MAX_ENCODED_LEN],
    len: usize,
}

impl EncodedLength {
    /// The encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Number of encoded bytes, length byte included
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: an encoding holds at least two bytes
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for EncodedLength {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Minimal big-endian width of `value`, at least 1
fn value_width(value: u128) -> usize {
    let significant_bits = (u128::BITS - value.leading_zeros()) as usize;
    core::cmp::max(1, significant_bits.div_ceil(8))
}

/// `left_encode(x)`: byte count of `x`, then `x` big-endian
pub fn left_encode(value: u128) -> EncodedLength {
    let width = value_width(value);
    let be = value.to_be_bytes();

    let mut bytes = [0u8; MAX_ENCODED_LEN];
    bytes[0] = width as u8;
    bytes[1..=width].copy_from_slice(&be[be.len() - width..]);

    EncodedLength {
        bytes,
        len: width + 1,
    }
}

/// `right_encode(x)`: `x` big-endian, then its byte count
pub fn right_encode(value: u128) -> EncodedLength {
    let width = value_width(value);
    let be = value.to_be_bytes();

    let mut bytes = [0u8; MAX_ENCODED_LEN];
    bytes[..width].copy_from_slice(&be[be.len() - width..]);
    bytes[width] = width as u8;

    EncodedLength {
        bytes,
        len: width + 1,
    }
}

/// Length of `len` bytes expressed in bits
pub(crate) fn bit_len(len: usize) -> u128 {
    (len as u128) * 8
}

/// `encode_string(S) = left_encode(bitlen(S)) || S`
pub fn encode_string(s: &[u8]) -> Vec<u8> {
    let prefix = left_encode(bit_len(s.len()));

    let mut out = Vec::with_capacity(prefix.len() + s.len());
    out.extend_from_slice(prefix.as_bytes());
    out.extend_from_slice(s);
    out
}

/// `byte_pad(X, w)`: prefix `left_encode(w)` and zero-fill to a multiple of `w`.
///
/// # Errors
///
/// Returns [`KmacError::InvalidBlockSize`] if `w` is zero.
pub fn byte_pad(x: &[u8], w: usize) -> Result<Vec<u8>, KmacError> {
    if w == 0 {
        return Err(KmacError::InvalidBlockSize);
    }

    let prefix = left_encode(w as u128);
    let unpadded = prefix.len() + x.len();
    let padded = unpadded.div_ceil(w) * w;

    let mut out = Vec::with_capacity(padded);
    out.extend_from_slice(prefix.as_bytes());
    out.extend_from_slice(x);
    out.resize(padded, 0);
    Ok(out)
}

/// Absorb `byte_pad(encode_string(s_1) || ... || encode_string(s_n), rate)`
/// without materializing it.
///
/// Leaves the sponge on a block boundary.
pub(crate) fn absorb_byte_padded_strings(sponge: &mut Sponge, strings: &[&[u8]]) {
    const ZEROS: [u8; MAX_RATE] = [0u8; MAX_RATE];

    let w = sponge.rate();
    let prefix = left_encode(w as u128);
    sponge.absorb(prefix.as_bytes());
    let mut written = prefix.len() % w;

    for s in strings {
        let encoded_len = left_encode(bit_len(s.len()));
        sponge.absorb(encoded_len.as_bytes());
        sponge.absorb(s);
        written = (written + encoded_len.len() + s.len() % w) % w;
    }

    if written != 0 {
        sponge.absorb(&ZEROS[..w - written]);
    }
}
