// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Security strength selection for cSHAKE and KMAC.

use crate::consts::{RATE_128, RATE_256};
use crate::error::KmacError;

/// Security strength of a cSHAKE / KMAC instance.
///
/// Fixed at construction; selects the sponge rate, the default tag length
/// and the algorithm name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityLevel {
    /// 128-bit strength (cSHAKE128, KMAC128)
    Bits128,
    /// 256-bit strength (cSHAKE256, KMAC256)
    Bits256,
}

impl SecurityLevel {
    /// Security strength in bits
    pub const fn bits(self) -> usize {
        match self {
            Self::Bits128 => 128,
            Self::Bits256 => 256,
        }
    }

    /// Sponge rate in bytes: 168 for 128-bit, 136 for 256-bit
    pub const fn rate(self) -> usize {
        match self {
            Self::Bits128 => RATE_128,
            Self::Bits256 => RATE_256,
        }
    }

    /// Default tag length in bytes (twice the security strength)
    pub const fn mac_size(self) -> usize {
        self.bits() * 2 / 8
    }

    /// Algorithm name, e.g. `KMACwithSHAKE128`
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Self::Bits128 => "KMACwithSHAKE128",
            Self::Bits256 => "KMACwithSHAKE256",
        }
    }
}

impl TryFrom<usize> for SecurityLevel {
    type Error = KmacError;

    fn try_from(bits: usize) -> Result<Self, Self::Error> {
        match bits {
            128 => Ok(Self::Bits128),
            256 => Ok(Self::Bits256),
            other => Err(KmacError::UnsupportedSecurityLevel(other)),
        }
    }
}
