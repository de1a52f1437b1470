// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! cSHAKE128 / cSHAKE256 per NIST SP 800-185 Section 3

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::encoding::absorb_byte_padded_strings;
use crate::level::SecurityLevel;
use crate::sponge::{DomainSuffix, Sponge, SpongePhase};

/// Customizable extendable-output function.
///
/// `cSHAKE(X, L, N, S) = KECCAK[2c](bytepad(encode_string(N) ||
/// encode_string(S), rate) || X || 00, L)`. With both `N` and `S` empty the
/// header is skipped and the function is plain SHAKE.
///
/// Sponge state, including the post-header snapshot, is wiped on drop.
#[derive(Clone)]
pub struct CShake {
    sponge: Sponge,
    /// Sponge right after the header, restored by `reset`. `None` for plain
    /// SHAKE, whose post-header state is the zero state.
    primed: Option<Sponge>,
    level: SecurityLevel,
    suffix: DomainSuffix,
}

impl CShake {
    /// Create a cSHAKE instance with function name `N` and customization `S`
    pub fn new(level: SecurityLevel, function_name: &[u8], customization: &[u8]) -> Self {
        let mut sponge = Sponge::new(level.rate());

        let (suffix, primed) = if function_name.is_empty() && customization.is_empty() {
            (DomainSuffix::Shake, None)
        } else {
            absorb_byte_padded_strings(&mut sponge, &[function_name, customization]);
            (DomainSuffix::CShake, Some(sponge.clone()))
        };

        Self {
            primed,
            sponge,
            level,
            suffix,
        }
    }

    /// cSHAKE128 with function name `N` and customization `S`
    pub fn cshake128(function_name: &[u8], customization: &[u8]) -> Self {
        Self::new(SecurityLevel::Bits128, function_name, customization)
    }

    /// cSHAKE256 with function name `N` and customization `S`
    pub fn cshake256(function_name: &[u8], customization: &[u8]) -> Self {
        Self::new(SecurityLevel::Bits256, function_name, customization)
    }

    /// Absorb message bytes.
    ///
    /// # Panics
    ///
    /// Panics if output has already been squeezed since the last reset.
    pub fn update(&mut self, data: &[u8]) {
        self.sponge.absorb(data);
    }

    /// Write the next `out.len()` bytes of output.
    ///
    /// The first call pads the absorbed input; later calls continue the same
    /// stream.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        if self.sponge.phase() == SpongePhase::Absorbing {
            self.sponge.finish_absorb(self.suffix);
        }
        self.sponge.squeeze(out);
    }

    /// Write the next `out.len()` bytes of output, then reset.
    pub fn finalize_into(&mut self, out: &mut [u8]) {
        self.squeeze(out);
        self.reset();
    }

    /// Discard absorbed input and any open output stream, keeping `N` and `S`
    pub fn reset(&mut self) {
        match &self.primed {
            Some(primed) => self.sponge.clone_from(primed),
            None => self.sponge.reset(),
        }
    }

    /// Security strength of this instance
    pub fn security_level(&self) -> SecurityLevel {
        self.level
    }

    /// Sponge rate in bytes
    pub fn rate(&self) -> usize {
        self.sponge.rate()
    }

    /// `true` once output has been requested since the last reset
    pub fn is_squeezing(&self) -> bool {
        self.sponge.phase() == SpongePhase::Squeezing
    }

    /// `true` when `N` and `S` were both empty (plain SHAKE)
    pub fn is_plain_shake(&self) -> bool {
        self.suffix == DomainSuffix::Shake
    }

    /// Absorb a byte-padded block of encoded strings (KMAC key block)
    pub(crate) fn absorb_byte_padded(&mut self, strings: &[&[u8]]) {
        absorb_byte_padded_strings(&mut self.sponge, strings);
    }

    /// Zero the live sponge and the post-header snapshot
    pub(crate) fn wipe(&mut self) {
        self.sponge.zeroize();
        if let Some(primed) = self.primed.as_mut() {
            primed.zeroize();
        }
    }

    #[cfg(test)]
    pub(crate) fn is_zeroized(&self) -> bool {
        self.sponge.is_zeroized() && self.primed.as_ref().is_none_or(Sponge::is_zeroized)
    }
}

impl Drop for CShake {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl ZeroizeOnDrop for CShake {}

impl fmt::Debug for CShake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CShake")
            .field("level", &self.level)
            .field("plain_shake", &self.is_plain_shake())
            .field("squeezing", &self.is_squeezing())
            .finish()
    }
}
