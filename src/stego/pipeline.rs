// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Text encode/decode pipelines.
//!
//! Thin wrappers over the matrix codec for callers that work with strings:
//! the message goes in as UTF-8 and must be pure ASCII, and decoded bytes
//! come back as a `String`. Both use the shared Hamming(7,4) table.

use crate::stego::error::StegoError;
use crate::stego::matrix::embed::encode;
use crate::stego::matrix::extract::decode;
use crate::stego::matrix::table::BitGroupTable;

/// Hide `message` in a copy of `carrier`.
///
/// Non-ASCII characters encode to UTF-8 bytes above 127 and are rejected
/// with [`crate::InputError::NonAscii`], where `index` is a byte offset.
pub fn encode_text(carrier: &[u8], message: &str) -> Result<Vec<u8>, StegoError> {
    encode(carrier, message.as_bytes(), BitGroupTable::hamming())
}

/// Recover a `message_len`-character message from `carrier`.
///
/// Every decoded byte is below 128, so the result is always valid ASCII.
pub fn decode_text(carrier: &[u8], message_len: usize) -> Result<String, StegoError> {
    let bytes = decode(carrier, message_len)?;
    Ok(bytes.into_iter().map(char::from).collect())
}
