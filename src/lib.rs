// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! # hamming-stego
//!
//! Matrix-encoding steganography for short ASCII messages. Each message byte
//! is hidden in the least-significant bits of 7 consecutive carrier samples:
//!
//! - bits {2,4,5,6} are stored directly in the LSBs at the same positions;
//! - bits {0,1,3} are stored as the syndrome of the 7 LSBs under the
//!   Hamming(7,4) parity-check matrix.
//!
//! The crate operates on flat byte buffers only. Decoding an image into
//! samples (row-major, channel-interleaved) and writing the result back into
//! an image container is left to the caller.
//!
//! # Quick start
//!
//! ```rust
//! use hamming_stego::{decode_text, encode_text};
//!
//! let carrier = vec![0x80u8; 64];
//! let stego = encode_text(&carrier, "Hi!").unwrap();
//! assert_eq!(decode_text(&stego, 3).unwrap(), "Hi!");
//! ```

pub mod stego;

pub use stego::{StegoError, InputError};
pub use stego::matrix::parity::{ParityMatrix, BitVector7, HAMMING_7_4};
pub use stego::matrix::parity::{GROUP_LEN, DIRECT_POSITIONS, SYNDROME_POSITIONS};
pub use stego::matrix::table::{BitGroupTable, build_table, CLASS_COUNT, TARGET_COUNT};
pub use stego::matrix::embed::{encode, encode_in_place};
pub use stego::matrix::extract::{decode, decode_with};
pub use stego::capacity::{capacity, group_capacity, capacity_for_dimensions};
pub use stego::{encode_text, decode_text};
