// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keccak sponge per FIPS 202 Section 4

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{CSHAKE_PAD, FINAL_PAD_BIT, LANES, MAX_RATE, SHAKE_PAD};
use crate::keccak::keccak_f1600;

/// Domain separation bits appended before pad10*1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DomainSuffix {
    /// `1111`: plain SHAKE (cSHAKE with empty N and S)
    Shake,
    /// `00`: cSHAKE
    CShake,
}

impl DomainSuffix {
    /// Suffix bits followed by the leading pad bit, packed LSB-first
    pub(crate) const fn pad_byte(self) -> u8 {
        match self {
            Self::Shake => SHAKE_PAD,
            Self::CShake => CSHAKE_PAD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpongePhase {
    Absorbing,
    Squeezing,
}

/// Keccak-f[1600] sponge with a byte-granular absorb/squeeze interface.
///
/// While absorbing, `buffer[..buffer_len]` holds the pending partial block.
/// While squeezing, `buffer[..rate]` holds the current output block and
/// `buffer_len` counts the bytes of it already handed out.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Sponge {
    lanes: [u64; LANES],
    buffer: [u8; MAX_RATE],
    buffer_len: usize,
    #[zeroize(skip)]
    rate: usize,
    #[zeroize(skip)]
    phase: SpongePhase,
}

impl Sponge {
    /// Create a zeroed sponge with the given rate in bytes
    pub fn new(rate: usize) -> Self {
        debug_assert!(rate > 0 && rate <= MAX_RATE && rate % 8 == 0);

        Self {
            lanes: [0u64; LANES],
            buffer: [0u8; MAX_RATE],
            buffer_len: 0,
            rate,
            phase: SpongePhase::Absorbing,
        }
    }

    pub fn rate(&self) -> usize {
        self.rate
    }

    pub fn phase(&self) -> SpongePhase {
        self.phase
    }

    /// XOR `data` into the rate, permuting after every full block.
    ///
    /// # Panics
    ///
    /// Panics if called after [`finish_absorb`](Self::finish_absorb) without
    /// an intervening [`reset`](Self::reset).
    pub fn absorb(&mut self, data: &[u8]) {
        assert!(
            self.phase == SpongePhase::Absorbing,
            "sponge: absorb called while squeezing"
        );

        let rate = self.rate;
        let mut offset = 0;

        // Top up a partially filled block first
        if self.buffer_len > 0 {
            let copy_len = core::cmp::min(rate - self.buffer_len, data.len());
            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;
            offset = copy_len;

            if self.buffer_len == rate {
                xor_block(&mut self.lanes, &self.buffer[..rate]);
                keccak_f1600(&mut self.lanes);
                self.buffer.zeroize();
                self.buffer_len = 0;
            }
        }

        // Full blocks straight from the input
        while offset + rate <= data.len() {
            xor_block(&mut self.lanes, &data[offset..offset + rate]);
            keccak_f1600(&mut self.lanes);
            offset += rate;
        }

        if offset < data.len() {
            let remaining = data.len() - offset;
            self.buffer[..remaining].copy_from_slice(&data[offset..]);
            self.buffer_len = remaining;
        }
    }

    /// Pad the pending block with `suffix || 10*1`, absorb it and switch to
    /// squeezing.
    ///
    /// # Panics
    ///
    /// Panics if the sponge is already squeezing.
    pub fn finish_absorb(&mut self, suffix: DomainSuffix) {
        assert!(
            self.phase == SpongePhase::Absorbing,
            "sponge: finish_absorb called while squeezing"
        );

        let rate = self.rate;

        // buffer_len < rate always holds here: full blocks are absorbed eagerly
        self.buffer[self.buffer_len..rate].fill(0);
        self.buffer[self.buffer_len] ^= suffix.pad_byte();
        self.buffer[rate - 1] ^= FINAL_PAD_BIT;

        xor_block(&mut self.lanes, &self.buffer[..rate]);
        keccak_f1600(&mut self.lanes);

        extract_block(&self.lanes, &mut self.buffer[..rate]);
        self.buffer_len = 0;
        self.phase = SpongePhase::Squeezing;
    }

    /// Write the next `out.len()` bytes of the output stream.
    ///
    /// Successive calls continue the same stream regardless of how the
    /// requests are chunked.
    ///
    /// # Panics
    ///
    /// Panics if called before [`finish_absorb`](Self::finish_absorb).
    pub fn squeeze(&mut self, out: &mut [u8]) {
        assert!(
            self.phase == SpongePhase::Squeezing,
            "sponge: squeeze called before finish_absorb"
        );

        let rate = self.rate;
        let mut offset = 0;

        while offset < out.len() {
            if self.buffer_len == rate {
                keccak_f1600(&mut self.lanes);
                extract_block(&self.lanes, &mut self.buffer[..rate]);
                self.buffer_len = 0;
            }

            let copy_len = core::cmp::min(rate - self.buffer_len, out.len() - offset);
            out[offset..offset + copy_len]
                .copy_from_slice(&self.buffer[self.buffer_len..self.buffer_len + copy_len]);
            self.buffer_len += copy_len;
            offset += copy_len;
        }
    }

    /// Zero the state and return to absorbing
    pub fn reset(&mut self) {
        self.zeroize();
        self.phase = SpongePhase::Absorbing;
    }

    #[cfg(test)]
    pub fn lanes(&self) -> &[u64; LANES] {
        &self.lanes
    }

    #[cfg(test)]
    pub fn is_zeroized(&self) -> bool {
        self.lanes.iter().all(|&l| l == 0)
            && self.buffer.iter().all(|&b| b == 0)
            && self.buffer_len == 0
    }
}

/// XOR a rate-sized block into the leading lanes (little-endian)
pub(crate) fn xor_block(lanes: &mut [u64; LANES], block: &[u8]) {
    let mut word = [0u8; 8];
    for (lane, chunk) in lanes.iter_mut().zip(block.chunks_exact(8)) {
        word.copy_from_slice(chunk);
        *lane ^= u64::from_le_bytes(word);
    }
    word.zeroize();
}

/// Serialize the leading lanes into a rate-sized block (little-endian)
fn extract_block(lanes: &[u64; LANES], block: &mut [u8]) {
    for (chunk, lane) in block.chunks_exact_mut(8).zip(lanes.iter()) {
        chunk.copy_from_slice(&lane.to_le_bytes());
    }
}
