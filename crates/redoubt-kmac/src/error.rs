// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// KMAC error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KmacError {
    /// Security level is neither 128 nor 256 bits
    #[error("unsupported security level: {0} bits (expected 128 or 256)")]
    UnsupportedSecurityLevel(usize),

    /// Output request of zero bytes where a positive length is required
    #[error("requested output length must be greater than zero")]
    EmptyOutput,

    /// byte_pad called with a zero block size
    #[error("byte_pad block size must be greater than zero")]
    InvalidBlockSize,
}
