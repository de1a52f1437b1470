// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! KMAC128 / KMAC256 and KMACXOF per NIST SP 800-185 Section 4
//!
//! A session moves `Absorbing -> Squeezing(mode) -> Absorbing`. The first
//! output call picks the mode and the length suffix:
//!
//! | first call        | suffix absorbed        | mode        |
//! |-------------------|------------------------|-------------|
//! | `finalize_into`   | `right_encode(8 * L)`  | `Bounded`   |
//! | `squeeze`         | `right_encode(0)`      | `Unbounded` |
//!
//! `finalize_into` always ends the session (reset to the keyed state, key
//! kept). `squeeze` never does.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use zeroize::ZeroizeOnDrop;

use crate::consts::KMAC_FUNCTION_NAME;
use crate::cshake::CShake;
use crate::encoding::{bit_len, right_encode};
use crate::error::KmacError;
use crate::level::SecurityLevel;

/// Output mode of an open KMAC session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Opened by [`Kmac::finalize_into`]: output length bound into the tag
    Bounded,
    /// Opened by [`Kmac::squeeze`]: KMACXOF, length left unspecified
    Unbounded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Session {
    Absorbing,
    Squeezing { mode: OutputMode, position: u64 },
}

/// KMAC message authentication code and KMACXOF stream.
///
/// Constructed unkeyed; [`init`](Kmac::init) installs a key. Without an
/// explicit `init` the empty key is used, which yields the same output as
/// `init(None)` and `init(Some(&[]))`.
///
/// ```rust
/// use redoubt_kmac::{Kmac, SecurityLevel};
///
/// let mut kmac = Kmac::new(SecurityLevel::Bits128, b"My Tagged Application");
/// kmac.init(Some(b"secret key".as_slice()));
/// kmac.update(b"message");
///
/// let mut tag = [0u8; 32];
/// kmac.finalize_into(&mut tag).expect("Failed to finalize_into(..)");
/// ```
///
/// Keyed and session state are wiped on drop.
#[derive(Clone)]
pub struct Kmac {
    /// Header and key block absorbed, restored at the start of each session
    keyed: CShake,
    /// Current session
    session: CShake,
    level: SecurityLevel,
    phase: Session,
}

impl Kmac {
    /// Create an instance keyed with the empty key
    pub fn new(level: SecurityLevel, customization: &[u8]) -> Self {
        let mut keyed = CShake::new(level, KMAC_FUNCTION_NAME, customization);
        keyed.absorb_byte_padded(&[&[]]);

        Self {
            session: keyed.clone(),
            keyed,
            level,
            phase: Session::Absorbing,
        }
    }

    /// Create an instance and key it
    pub fn with_key(level: SecurityLevel, key: &[u8], customization: &[u8]) -> Self {
        let mut kmac = Self::new(level, customization);
        kmac.init(Some(key));
        kmac
    }

    /// Create an instance from a raw security strength in bits.
    ///
    /// # Errors
    ///
    /// Returns [`KmacError::UnsupportedSecurityLevel`] unless `bits` is 128
    /// or 256.
    pub fn with_bits(bits: usize, customization: &[u8]) -> Result<Self, KmacError> {
        let level = SecurityLevel::try_from(bits)?;
        Ok(Self::new(level, customization))
    }

    /// KMAC128 with the given customization string
    pub fn kmac128(customization: &[u8]) -> Self {
        Self::new(SecurityLevel::Bits128, customization)
    }

    /// KMAC256 with the given customization string
    pub fn kmac256(customization: &[u8]) -> Self {
        Self::new(SecurityLevel::Bits256, customization)
    }

    /// Install `key` and start a new session.
    ///
    /// `None` and an empty key are equivalent. Any absorbed message bytes and
    /// any open output stream are discarded.
    pub fn init(&mut self, key: Option<&[u8]>) {
        let key = key.unwrap_or_default();

        self.keyed.reset();
        self.keyed.absorb_byte_padded(&[key]);
        self.session.clone_from(&self.keyed);
        self.phase = Session::Absorbing;

        tracing::trace!(
            algorithm = self.level.algorithm_name(),
            key_len = key.len(),
            "kmac keyed"
        );
    }

    /// Absorb message bytes. Empty input is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if an output stream is open (after [`squeeze`](Kmac::squeeze)
    /// without a terminating [`finalize_into`](Kmac::finalize_into) or
    /// [`reset`](Kmac::reset)).
    pub fn update(&mut self, data: &[u8]) {
        assert!(
            self.phase == Session::Absorbing,
            "kmac: update called while an output stream is open; call reset() first"
        );

        if data.is_empty() {
            return;
        }
        self.session.update(data);
    }

    /// Write `out.len()` bytes of tag and end the session.
    ///
    /// On the first output call of a session the requested length is bound
    /// into the result (`right_encode(8 * out.len())`). If the session was
    /// already opened by [`squeeze`](Kmac::squeeze), the next bytes of that
    /// stream are returned instead. Either way the instance is reset to the
    /// keyed state afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`KmacError::EmptyOutput`] if `out` is empty; the session is
    /// left untouched.
    pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), KmacError> {
        if out.is_empty() {
            return Err(KmacError::EmptyOutput);
        }

        self.finish(out);
        Ok(())
    }

    /// Write a tag of the default length ([`mac_size`](Kmac::mac_size)) and
    /// end the session.
    pub fn finalize(&mut self) -> Vec<u8> {
        let mut tag = vec![0u8; self.mac_size()];
        self.finish(&mut tag);
        tag
    }

    /// Write the next `out.len()` bytes of the KMACXOF stream.
    ///
    /// The first output call of a session absorbs `right_encode(0)`; later
    /// calls continue the stream. The session stays open until
    /// [`finalize_into`](Kmac::finalize_into), [`reset`](Kmac::reset) or
    /// [`init`](Kmac::init).
    ///
    /// # Errors
    ///
    /// Returns [`KmacError::EmptyOutput`] if `out` is empty.
    pub fn squeeze(&mut self, out: &mut [u8]) -> Result<(), KmacError> {
        if out.is_empty() {
            return Err(KmacError::EmptyOutput);
        }

        if self.phase == Session::Absorbing {
            self.open(OutputMode::Unbounded, 0);
        }
        self.emit(out);

        Ok(())
    }

    /// Discard absorbed message bytes and any open stream, keeping the key
    pub fn reset(&mut self) {
        self.session.clone_from(&self.keyed);
        self.phase = Session::Absorbing;

        tracing::trace!(algorithm = self.level.algorithm_name(), "kmac session reset");
    }

    /// Security strength of this instance
    pub fn security_level(&self) -> SecurityLevel {
        self.level
    }

    /// Sponge rate in bytes
    pub fn rate(&self) -> usize {
        self.level.rate()
    }

    /// Default tag length in bytes: 32 for KMAC128, 64 for KMAC256
    pub fn mac_size(&self) -> usize {
        self.level.mac_size()
    }

    /// `KMACwithSHAKE128` or `KMACwithSHAKE256`
    pub fn algorithm_name(&self) -> &'static str {
        self.level.algorithm_name()
    }

    /// Mode of the open output stream, `None` while absorbing
    pub fn output_mode(&self) -> Option<OutputMode> {
        match self.phase {
            Session::Absorbing => None,
            Session::Squeezing { mode, .. } => Some(mode),
        }
    }

    /// Bytes already emitted from the open output stream, `None` while
    /// absorbing
    pub fn stream_position(&self) -> Option<u64> {
        match self.phase {
            Session::Absorbing => None,
            Session::Squeezing { position, .. } => Some(position),
        }
    }

    /// Absorb `right_encode(8 * output_len)` and switch to squeezing.
    /// `output_len == 0` marks an unbounded stream.
    fn open(&mut self, mode: OutputMode, output_len: usize) {
        debug_assert!(self.phase == Session::Absorbing);

        self.session.update(right_encode(bit_len(output_len)).as_bytes());
        self.phase = Session::Squeezing { mode, position: 0 };

        tracing::trace!(
            algorithm = self.level.algorithm_name(),
            ?mode,
            output_len,
            "kmac output stream opened"
        );
    }

    fn emit(&mut self, out: &mut [u8]) {
        self.session.squeeze(out);

        if let Session::Squeezing { position, .. } = &mut self.phase {
            *position += out.len() as u64;
        }
    }

    /// Bounded output followed by the mandatory reset
    fn finish(&mut self, out: &mut [u8]) {
        if self.phase == Session::Absorbing {
            self.open(OutputMode::Bounded, out.len());
        }
        self.emit(out);
        self.reset();
    }

    /// Zero the keyed snapshot and the session
    pub(crate) fn wipe(&mut self) {
        self.keyed.wipe();
        self.session.wipe();
    }

    #[cfg(test)]
    pub(crate) fn is_zeroized(&self) -> bool {
        self.keyed.is_zeroized() && self.session.is_zeroized()
    }
}

impl Drop for Kmac {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl ZeroizeOnDrop for Kmac {}

impl fmt::Debug for Kmac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kmac")
            .field("algorithm", &self.level.algorithm_name())
            .field("output_mode", &self.output_mode())
            .finish()
    }
}
