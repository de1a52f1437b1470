// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keccak-f[1600] permutation per FIPS 202 Section 3.3

use crate::consts::LANES;

const ROUNDS: usize = 24;

/// Round constants RC[i] for the iota step
const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808a, 0x8000000080008000,
    0x000000000000808b, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008a, 0x0000000000000088, 0x0000000080008009, 0x000000008000000a,
    0x000000008000808b, 0x800000000000008b, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800a, 0x800000008000000a,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

/// Rotation offsets for rho, in pi traversal order starting at lane 1
const RHO_OFFSETS: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Destination lane of each pi step, starting from lane 1
const PI_LANES: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Applies the 24-round Keccak-f[1600] permutation in place.
///
/// Lane `(x, y)` lives at index `x + 5 * y`.
pub(crate) fn keccak_f1600(lanes: &mut [u64; LANES]) {
    let mut columns = [0u64; 5];

    for rc in ROUND_CONSTANTS.iter() {
        // theta
        for (x, column) in columns.iter_mut().enumerate() {
            *column = lanes[x] ^ lanes[x + 5] ^ lanes[x + 10] ^ lanes[x + 15] ^ lanes[x + 20];
        }
        for x in 0..5 {
            let d = columns[(x + 4) % 5] ^ columns[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                lanes[x + 5 * y] ^= d;
            }
        }

        // rho + pi
        let mut carry = lanes[1];
        for (&dst, &offset) in PI_LANES.iter().zip(RHO_OFFSETS.iter()) {
            let next = lanes[dst];
            lanes[dst] = carry.rotate_left(offset);
            carry = next;
        }

        // chi
        for y in 0..5 {
            let row = [
                lanes[5 * y],
                lanes[5 * y + 1],
                lanes[5 * y + 2],
                lanes[5 * y + 3],
                lanes[5 * y + 4],
            ];
            for x in 0..5 {
                lanes[5 * y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // iota
        lanes[0] ^= rc;
    }

    columns.fill(0);
}
