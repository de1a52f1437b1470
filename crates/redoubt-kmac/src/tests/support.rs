// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared fixtures for the KMAC test-suite

use crate::kmac::Kmac;
use crate::level::SecurityLevel;

/// Key used by every NIST SP 800-185 KMAC sample
pub(crate) const NIST_KEY: &str =
    "404142434445464748494A4B4C4D4E4F505152535455565758595A5B5C5D5E5F";

/// Customization string of the tagged NIST samples
pub(crate) const TAGGED_APPLICATION: &[u8] = b"My Tagged Application";

pub(crate) fn hex_to_bytes(s: &str) -> Vec<u8> {
    hex::decode(s).expect("Failed to decode hex")
}

/// `00 01 02 ..` wrapping at 256
pub(crate) fn sequential_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

/// Instance keyed with [`NIST_KEY`]
pub(crate) fn keyed(level: SecurityLevel, customization: &[u8]) -> Kmac {
    let key = hex_to_bytes(NIST_KEY);
    Kmac::with_key(level, &key, customization)
}

/// Bounded tag of `len` bytes
pub(crate) fn tag(kmac: &mut Kmac, len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    kmac.finalize_into(&mut out).expect("Failed to finalize_into(..)");
    out
}

/// Next `len` bytes of the KMACXOF stream
pub(crate) fn stream(kmac: &mut Kmac, len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    kmac.squeeze(&mut out).expect("Failed to squeeze(..)");
    out
}
