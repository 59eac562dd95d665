// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Parity-check matrix and 7-bit group vectors.
//!
//! A group is 7 carrier LSBs. Position `k` of a group is bit `k` of the
//! packed [`BitVector7`], and the same numbering is used for message bytes:
//! position `k` of a message byte is `(byte >> k) & 1`.
//!
//! The split of positions is load-bearing. Positions
//! [`DIRECT_POSITIONS`] `{2,4,5,6}` are copied verbatim between message and
//! carrier; positions [`SYNDROME_POSITIONS`] `{0,1,3}` are carried by the
//! syndrome. Encoder and decoder must agree on both lists and on their order,
//! which fixes the packing of the class index `u` and target value `v`.

use crate::stego::error::StegoError;

/// Number of carrier samples per message byte.
pub const GROUP_LEN: usize = 7;

/// Group positions stored directly, most significant bit of `u` first.
pub const DIRECT_POSITIONS: [usize; 4] = [2, 4, 5, 6];

/// Message positions carried by the syndrome, most significant bit of `v` first.
pub const SYNDROME_POSITIONS: [usize; 3] = [0, 1, 3];

/// Number of parity checks (rows) in the matrix.
pub const PARITY_ROWS: usize = 3;

/// Row-wise Hamming(7,4) parity-check matrix. Column `k` is the binary
/// representation of `k + 1`, least significant bit in row 0.
pub const HAMMING_7_4_ROWS: [[u8; GROUP_LEN]; PARITY_ROWS] = [
    [1, 0, 1, 0, 1, 0, 1],
    [0, 1, 1, 0, 0, 1, 1],
    [0, 0, 0, 1, 1, 1, 1],
];

/// The Hamming(7,4) parity-check matrix used by every encode and decode call.
pub const HAMMING_7_4: ParityMatrix = ParityMatrix {
    rows: [
        pack_row(&HAMMING_7_4_ROWS[0]),
        pack_row(&HAMMING_7_4_ROWS[1]),
        pack_row(&HAMMING_7_4_ROWS[2]),
    ],
};

const fn pack_row(row: &[u8; GROUP_LEN]) -> u8 {
    let mut mask = 0u8;
    let mut k = 0;
    while k < GROUP_LEN {
        mask |= (row[k] & 1) << k;
        k += 1;
    }
    mask
}

/// An ordered group of exactly 7 bits, packed into the low bits of a `u8`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BitVector7(u8);

impl BitVector7 {
    /// Mask of the seven usable bits. Bit 7 never participates.
    pub const MASK: u8 = 0x7F;

    /// Build a vector from the low 7 bits of `bits`.
    pub const fn new(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    /// Collect the LSBs of a 7-sample group.
    ///
    /// Only the first [`GROUP_LEN`] samples are read; a shorter slice leaves
    /// the missing positions at 0.
    pub fn from_lsbs(samples: &[u8]) -> Self {
        let bits = samples
            .iter()
            .take(GROUP_LEN)
            .enumerate()
            .fold(0u8, |acc, (k, &s)| acc | ((s & 1) << k));
        Self::new(bits)
    }

    /// The packed value, 0..=127.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Bit at position `k` (0 or 1).
    #[inline]
    pub const fn bit(self, k: usize) -> u8 {
        (self.0 >> k) & 1
    }

    /// Class index `u`: positions {2,4,5,6} packed as `(p2<<3)|(p4<<2)|(p5<<1)|p6`.
    #[inline]
    pub fn class_index(self) -> usize {
        DIRECT_POSITIONS
            .iter()
            .fold(0usize, |acc, &p| (acc << 1) | self.bit(p) as usize)
    }

    /// Positions {0,1,3} packed as `(p0<<2)|(p1<<1)|p3`.
    ///
    /// For a message byte this is the target syndrome `v`.
    #[inline]
    pub fn target_value(self) -> usize {
        SYNDROME_POSITIONS
            .iter()
            .fold(0usize, |acc, &p| (acc << 1) | self.bit(p) as usize)
    }
}

/// A 3×7 binary parity-check matrix, each row stored as a 7-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParityMatrix {
    rows: [u8; PARITY_ROWS],
}

impl ParityMatrix {
    /// Validate and pack a row-wise matrix.
    ///
    /// # Errors
    /// [`StegoError::InvalidParityMatrix`] if any entry is not 0/1, or if the
    /// columns at [`SYNDROME_POSITIONS`] are linearly dependent over GF(2)
    /// (then some syndromes are unreachable for a fixed class index and the
    /// bit group table cannot be filled).
    pub fn new(rows: [[u8; GROUP_LEN]; PARITY_ROWS]) -> Result<Self, StegoError> {
        if rows.iter().flatten().any(|&b| b > 1) {
            return Err(StegoError::InvalidParityMatrix("entries must be 0 or 1"));
        }
        let matrix = Self {
            rows: [pack_row(&rows[0]), pack_row(&rows[1]), pack_row(&rows[2])],
        };

        // The 8 combinations of the free positions must hit all 8 syndromes.
        let mut seen = 0u8;
        for combo in 0..(1u8 << SYNDROME_POSITIONS.len()) {
            let bits = SYNDROME_POSITIONS
                .iter()
                .enumerate()
                .filter(|&(i, _)| combo & (1 << i) != 0)
                .fold(0u8, |acc, (_, &p)| acc | (1 << p));
            seen |= 1 << matrix.syndrome(BitVector7::new(bits));
        }
        if seen != 0xFF {
            return Err(StegoError::InvalidParityMatrix(
                "columns 0, 1 and 3 must be linearly independent",
            ));
        }

        Ok(matrix)
    }

    /// Row `r` as a 7-bit mask (bit `k` set when `H[r][k] == 1`).
    ///
    /// # Panics
    /// If `r >= PARITY_ROWS`.
    pub fn row_mask(&self, r: usize) -> u8 {
        self.rows[r]
    }

    /// Row `r` as individual 0/1 entries.
    ///
    /// # Panics
    /// If `r >= PARITY_ROWS`.
    pub fn row(&self, r: usize) -> [u8; GROUP_LEN] {
        core::array::from_fn(|k| (self.rows[r] >> k) & 1)
    }

    /// Syndrome `H · v (mod 2)` as three bits `[s0, s1, s2]`.
    #[inline]
    pub fn syndrome_bits(&self, v: BitVector7) -> [u8; PARITY_ROWS] {
        self.rows.map(|mask| ((mask & v.bits()).count_ones() & 1) as u8)
    }

    /// Syndrome packed as `(s0<<2)|(s1<<1)|s2`, 0..=7.
    #[inline]
    pub fn syndrome(&self, v: BitVector7) -> usize {
        self.syndrome_bits(v)
            .iter()
            .fold(0usize, |acc, &s| (acc << 1) | s as usize)
    }
}

impl Default for ParityMatrix {
    fn default() -> Self {
        HAMMING_7_4
    }
}
