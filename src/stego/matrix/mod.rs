// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Matrix encoding with the Hamming(7,4) parity-check matrix.
//!
//! A group of 7 carrier LSBs carries one 7-bit message byte. Four bits are
//! stored directly; the remaining three are the group's syndrome `H · r`.
//! The encoder picks, among the 8 LSB patterns that share the direct bits,
//! the one whose syndrome equals the three message bits. This choice is
//! precomputed in the [`table::BitGroupTable`].
//!
//! The decoder only needs the matrix: direct bits are read back, syndrome
//! bits are recomputed.
//!
//! References:
//! - Crandall. "Some Notes on Steganography", 1998.
//! - Westfeld. "F5 — A Steganographic Algorithm", IH 2001.

pub mod parity;
pub mod table;
pub mod embed;
pub mod extract;
