// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! KMAC and KMACXOF over cSHAKE with secure memory handling
//!
//! Implementation per NIST SP 800-185 (cSHAKE, KMAC) on top of a pure Rust
//! Keccak-f[1600] sponge per FIPS 202. Sponge state, including the keyed
//! prefix, is zeroized on drop.
//!
//! Layers, bottom up:
//! - sponge: absorb / pad / squeeze over Keccak-f[1600]
//! - [`CShake`]: function-name and customization header, domain suffix
//! - [`Kmac`]: key block, bounded tag vs. unbounded stream, reset after
//!   finalize
//!
//! References:
//! - NIST SP 800-185: SHA-3 Derived Functions
//!   <https://nvlpubs.nist.gov/nistpubs/SpecialPublications/NIST.SP.800-185.pdf>
//! - FIPS 202: SHA-3 Standard
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod cshake;
pub mod encoding;
mod error;
mod keccak;
mod kmac;
mod level;
mod sponge;

pub use consts::{KMAC_FUNCTION_NAME, RATE_128, RATE_256, STATE_LEN};
pub use cshake::CShake;
pub use error::KmacError;
pub use kmac::{Kmac, OutputMode};
pub use level::SecurityLevel;

/// One-shot KMAC: tag of `out.len()` bytes over `data`.
///
/// # Errors
///
/// Returns [`KmacError::EmptyOutput`] if `out` is empty.
pub fn kmac(
    level: SecurityLevel,
    key: &[u8],
    customization: &[u8],
    data: &[u8],
    out: &mut [u8],
) -> Result<(), KmacError> {
    let mut mac = Kmac::with_key(level, key, customization);
    mac.update(data);
    mac.finalize_into(out)
}

/// One-shot KMACXOF: first `out.len()` bytes of the keyed stream over `data`.
///
/// # Errors
///
/// Returns [`KmacError::EmptyOutput`] if `out` is empty.
pub fn kmac_xof(
    level: SecurityLevel,
    key: &[u8],
    customization: &[u8],
    data: &[u8],
    out: &mut [u8],
) -> Result<(), KmacError> {
    let mut mac = Kmac::with_key(level, key, customization);
    mac.update(data);
    mac.squeeze(out)
}
