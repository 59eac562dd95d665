// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Bit group lookup table.
//!
//! `table[u][v]` is the unique 7-bit vector whose direct positions
//! {2,4,5,6} pack to `u` and whose syndrome under the parity-check matrix is
//! `v`. Fixing the 4 direct bits leaves 3 free bits, and a valid
//! [`ParityMatrix`] maps those bijectively onto the 8 syndromes, so the 128
//! vectors fill the 16×8 cells exactly once.
//!
//! The table is immutable after construction. The Hamming(7,4) instance is
//! built on first use behind a `OnceLock` and shared for the process lifetime.

use super::parity::{BitVector7, ParityMatrix, HAMMING_7_4, GROUP_LEN};

/// Number of class indices `u` (4 direct bits).
pub const CLASS_COUNT: usize = 16;

/// Number of target values `v` (3 syndrome bits).
pub const TARGET_COUNT: usize = 8;

/// Precomputed map from `(u, v)` to the carrier LSB pattern that encodes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGroupTable {
    groups: [[BitVector7; TARGET_COUNT]; CLASS_COUNT],
}

impl BitGroupTable {
    /// Build the table for `matrix` by enumerating all 128 group vectors.
    ///
    /// # Panics
    /// If a cell would be written twice or left empty. A matrix accepted by
    /// [`ParityMatrix::new`] never triggers this.
    pub fn build(matrix: &ParityMatrix) -> Self {
        let mut groups = [[BitVector7::default(); TARGET_COUNT]; CLASS_COUNT];
        let mut filled = 0u128;

        for i in 0..(1u8 << GROUP_LEN) {
            let vec = BitVector7::new(i);
            let u = vec.class_index();
            let v = matrix.syndrome(vec);
            let cell = u * TARGET_COUNT + v;
            assert!(
                filled & (1u128 << cell) == 0,
                "bit group table cell [{u}][{v}] populated twice"
            );
            filled |= 1u128 << cell;
            groups[u][v] = vec;
        }
        assert_eq!(filled, u128::MAX, "bit group table not fully populated");

        tracing::trace!(
            rows = ?[matrix.row_mask(0), matrix.row_mask(1), matrix.row_mask(2)],
            "built bit group table"
        );
        Self { groups }
    }

    /// Shared table for [`HAMMING_7_4`], built once on first access.
    pub fn hamming() -> &'static BitGroupTable {
        use std::sync::OnceLock;
        static TABLE: OnceLock<BitGroupTable> = OnceLock::new();
        TABLE.get_or_init(|| BitGroupTable::build(&HAMMING_7_4))
    }

    /// Replacement vector for class `u` and target syndrome `v`.
    ///
    /// # Panics
    /// If `u >= CLASS_COUNT` or `v >= TARGET_COUNT`.
    #[inline]
    pub fn get(&self, u: usize, v: usize) -> BitVector7 {
        self.groups[u][v]
    }

    /// All 8 vectors of class `u`, indexed by syndrome.
    ///
    /// # Panics
    /// If `u >= CLASS_COUNT`.
    pub fn class(&self, u: usize) -> &[BitVector7; TARGET_COUNT] {
        &self.groups[u]
    }

    /// Replacement vector for a message byte (low 7 bits).
    #[inline]
    pub fn lookup(&self, byte: u8) -> BitVector7 {
        let l = BitVector7::new(byte);
        self.get(l.class_index(), l.target_value())
    }
}

/// Build a bit group table for `matrix`.
pub fn build_table(matrix: &ParityMatrix) -> BitGroupTable {
    BitGroupTable::build(matrix)
}
