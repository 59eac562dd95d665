// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Message extraction via syndrome computation.
//!
//! The decoder counterpart to [`super::embed`]. It needs no lookup table:
//! for each 7-sample group the LSBs give the direct bits {2,4,5,6} as-is,
//! and the syndrome of the LSBs gives bits {0,1,3}.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::parity::{BitVector7, ParityMatrix, GROUP_LEN, HAMMING_7_4, DIRECT_POSITIONS, SYNDROME_POSITIONS};
use crate::stego::error::StegoError;

/// Rebuild one message byte from a group's LSBs.
#[inline]
fn extract_group(matrix: &ParityMatrix, samples: &[u8]) -> u8 {
    let r = BitVector7::from_lsbs(samples);
    let s = matrix.syndrome_bits(r);

    let direct = DIRECT_POSITIONS
        .iter()
        .fold(0u8, |acc, &p| acc | (r.bit(p) << p));
    SYNDROME_POSITIONS
        .iter()
        .zip(s)
        .fold(direct, |acc, (&p, bit)| acc | (bit << p))
}

/// Decode `message_len` bytes from `carrier` using the Hamming(7,4) matrix.
///
/// # Errors
/// [`StegoError::InsufficientCarrier`] if the carrier holds fewer than
/// `7 * message_len` samples.
pub fn decode(carrier: &[u8], message_len: usize) -> Result<Vec<u8>, StegoError> {
    decode_with(&HAMMING_7_4, carrier, message_len)
}

/// Decode `message_len` bytes from `carrier` under an explicit parity-check matrix.
///
/// The carrier carries no integrity information: a carrier that was never
/// encoded decodes to arbitrary 7-bit bytes.
pub fn decode_with(
    matrix: &ParityMatrix,
    carrier: &[u8],
    message_len: usize,
) -> Result<Vec<u8>, StegoError> {
    if message_len == 0 {
        return Ok(Vec::new());
    }
    let needed = match message_len.checked_mul(GROUP_LEN) {
        Some(n) if n <= carrier.len() => n,
        other => {
            let e = StegoError::InsufficientCarrier {
                needed: other.unwrap_or(usize::MAX),
                available: carrier.len(),
            };
            tracing::warn!(error = %e, "rejected decode input");
            return Err(e);
        }
    };
    tracing::debug!(bytes = message_len, samples = carrier.len(), "matrix decode");

    let region = &carrier[..needed];

    #[cfg(feature = "parallel")]
    let message: Vec<u8> = region
        .par_chunks(GROUP_LEN)
        .map(|group| extract_group(matrix, group))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let message: Vec<u8> = region
        .chunks(GROUP_LEN)
        .map(|group| extract_group(matrix, group))
        .collect();

    Ok(message)
}
