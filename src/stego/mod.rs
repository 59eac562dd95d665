// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Steganographic encoding and decoding.
//!
//! The [`matrix`] module holds the codec proper (parity-check matrix, bit
//! group table, embed and extract). [`capacity`] bounds message length for a
//! given carrier, and the text-level entry points `encode_text` /
//! `decode_text` wrap the codec with the shared Hamming(7,4) table.

pub mod error;
pub mod matrix;
pub mod capacity;
mod pipeline;

pub use error::{StegoError, InputError};
pub use pipeline::{encode_text, decode_text};
