// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Keccak-f[1600] state width in bytes
pub const STATE_LEN: usize = 200;

/// Number of 64-bit lanes in the Keccak-f[1600] state
pub(crate) const LANES: usize = 25;

/// Rate of cSHAKE128 / KMAC128 in bytes (1344 bits)
pub const RATE_128: usize = 168;

/// Rate of cSHAKE256 / KMAC256 in bytes (1088 bits)
pub const RATE_256: usize = 136;

/// Largest supported rate, sizes the sponge scratch buffer
pub(crate) const MAX_RATE: usize = RATE_128;

/// Function name N absorbed by every KMAC session (SP 800-185 Section 4.3)
pub const KMAC_FUNCTION_NAME: &[u8] = b"KMAC";

/// Suffix `1111` plus the first pad bit, as used by SHAKE
pub(crate) const SHAKE_PAD: u8 = 0x1f;

/// Suffix `00` plus the first pad bit, as used by cSHAKE
pub(crate) const CSHAKE_PAD: u8 = 0x04;

/// Closing bit of pad10*1, set on the last byte of the rate
pub(crate) const FINAL_PAD_BIT: u8 = 0x80;

/// Largest left/right encoding: one length byte plus a 128-bit value
pub(crate) const MAX_ENCODED_LEN: usize = 17;
