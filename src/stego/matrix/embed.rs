// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Matrix-encoding embedding.
//!
//! Each message byte `l` selects the replacement vector `table[u][v]`, where
//! `u` packs the bits of `l` at positions {2,4,5,6} and `v` packs positions
//! {0,1,3}. The vector's 7 bits overwrite the LSBs of samples `7i..7i+7`.
//! Upper sample bits and samples past the last group are never touched.
//!
//! All arguments are validated before the first write, so a failed call
//! leaves the carrier exactly as it was.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::parity::{BitVector7, GROUP_LEN};
use super::table::BitGroupTable;
use crate::stego::capacity::capacity;
use crate::stego::error::{InputError, StegoError};

/// Check every encode precondition up front.
fn validate(carrier_len: usize, message: &[u8]) -> Result<(), StegoError> {
    if carrier_len == 0 {
        return Err(InputError::EmptyCarrier.into());
    }
    if message.is_empty() {
        return Err(InputError::EmptyMessage.into());
    }
    let cap = capacity(carrier_len);
    if message.len() > cap {
        return Err(InputError::MessageTooLarge { len: message.len(), capacity: cap }.into());
    }
    // capacity() is a per-sample bound; each byte still needs a full group.
    let needed = message.len() * GROUP_LEN;
    if needed > carrier_len {
        return Err(StegoError::InsufficientCarrier { needed, available: carrier_len });
    }
    if let Some((index, &byte)) = message.iter().enumerate().find(|&(_, &b)| b > 0x7F) {
        return Err(InputError::NonAscii { index, byte }.into());
    }
    Ok(())
}

/// Overwrite the LSBs of one 7-sample group with `replacement`.
#[inline]
fn write_group(samples: &mut [u8], replacement: BitVector7) {
    for (k, s) in samples.iter_mut().enumerate() {
        *s = (*s & !1) | replacement.bit(k);
    }
}

/// Embed `message` into the LSBs of `carrier` in place.
///
/// # Errors
/// - [`StegoError::InvalidInput`] for an empty carrier or message, a message
///   longer than [`capacity`], or any byte above 127.
/// - [`StegoError::InsufficientCarrier`] if the carrier has fewer than
///   `7 * message.len()` samples.
///
/// [`capacity`] counts samples, not 7-sample groups, so it admits messages
/// up to `n - 1` bytes while the carrier physically holds only `n / 7`.
/// Such messages are rejected as `InsufficientCarrier` rather than
/// truncated, so every accepted message decodes back in full.
///
/// On error the carrier is unmodified.
pub fn encode_in_place(
    carrier: &mut [u8],
    message: &[u8],
    table: &BitGroupTable,
) -> Result<(), StegoError> {
    if let Err(e) = validate(carrier.len(), message) {
        tracing::warn!(error = %e, samples = carrier.len(), "rejected encode input");
        return Err(e);
    }
    tracing::debug!(bytes = message.len(), samples = carrier.len(), "matrix encode");

    let region = &mut carrier[..message.len() * GROUP_LEN];

    #[cfg(feature = "parallel")]
    region
        .par_chunks_mut(GROUP_LEN)
        .zip(message.par_iter())
        .for_each(|(group, &l)| write_group(group, table.lookup(l)));

    #[cfg(not(feature = "parallel"))]
    region
        .chunks_mut(GROUP_LEN)
        .zip(message)
        .for_each(|(group, &l)| write_group(group, table.lookup(l)));

    Ok(())
}

/// Embed `message` into a copy of `carrier` and return the copy.
///
/// See [`encode_in_place`] for the error conditions.
pub fn encode(carrier: &[u8], message: &[u8], table: &BitGroupTable) -> Result<Vec<u8>, StegoError> {
    let mut out = carrier.to_vec();
    encode_in_place(&mut out, message, table)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::parity::HAMMING_7_4;

    fn table() -> &'static BitGroupTable {
        BitGroupTable::hamming()
    }

    #[test]
    fn ascii_a_writes_table_vector() {
        let carrier = vec![0u8; 7];
        // 7 samples: capacity 6 >= 1, one full group available.
        let stego = encode(&carrier, b"A", table()).unwrap();
        let lsbs: Vec<u8> = stego.iter().map(|s| s & 1).collect();
        // table[1][4] = 0b100_1010 → positions 1, 3, 6 set.
        assert_eq!(lsbs, vec![0, 1, 0, 1, 0, 0, 1]);
        let group = BitVector7::from_lsbs(&stego);
        assert_eq!(group.class_index(), 1);
        assert_eq!(HAMMING_7_4.syndrome(group), 4);
    }

    #[test]
    fn upper_bits_and_tail_preserved() {
        let carrier: Vec<u8> = (0..40u8).map(|i| i.wrapping_mul(37)).collect();
        let stego = encode(&carrier, b"Hey", table()).unwrap();
        for (i, (&a, &b)) in carrier.iter().zip(&stego).enumerate() {
            assert_eq!(a & !1, b & !1, "upper bits changed at {i}");
            if i >= 21 {
                assert_eq!(a, b, "tail sample {i} changed");
            }
        }
    }

    #[test]
    fn deterministic() {
        let carrier = vec![0x5Au8; 70];
        let a = encode(&carrier, b"same input", table()).unwrap();
        let b = encode(&carrier, b"same input", table()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn reencode_overwrites_region() {
        let carrier = vec![0xA5u8; 35];
        let first = encode(&carrier, b"abcde", table()).unwrap();
        let second = encode(&first, b"vwxyz", table()).unwrap();
        assert_eq!(second, encode(&carrier, b"vwxyz", table()).unwrap());
    }

    #[test]
    fn empty_carrier_rejected() {
        let mut carrier: Vec<u8> = Vec::new();
        let err = encode_in_place(&mut carrier, b"x", table()).unwrap_err();
        assert_eq!(err, StegoError::InvalidInput(InputError::EmptyCarrier));
    }

    #[test]
    fn empty_message_rejected() {
        let err = encode(&[1, 2, 3], b"", table()).unwrap_err();
        assert_eq!(err, StegoError::InvalidInput(InputError::EmptyMessage));
    }

    #[test]
    fn message_over_capacity_rejected() {
        // 8 samples → capacity 7.
        let err = encode(&[0u8; 8], b"12345678", table()).unwrap_err();
        assert_eq!(
            err,
            StegoError::InvalidInput(InputError::MessageTooLarge { len: 8, capacity: 7 })
        );
    }

    #[test]
    fn message_within_capacity_but_short_carrier() {
        // capacity(8) = 7 admits 2 bytes, but they need 14 samples.
        let err = encode(&[0u8; 8], b"hi", table()).unwrap_err();
        assert_eq!(err, StegoError::InsufficientCarrier { needed: 14, available: 8 });
    }

    #[test]
    fn non_ascii_rejected_without_mutation() {
        let original: Vec<u8> = (0..70u8).collect();
        let mut carrier = original.clone();
        let err = encode_in_place(&mut carrier, b"ok\x80no", table()).unwrap_err();
        assert_eq!(
            err,
            StegoError::InvalidInput(InputError::NonAscii { index: 2, byte: 0x80 })
        );
        assert_eq!(carrier, original);
    }

    #[test]
    fn write_group_only_touches_lsb() {
        let mut samples = [0xFFu8, 0xFE, 0x00, 0x01, 0x80, 0x81, 0x7F];
        write_group(&mut samples, BitVector7::new(0));
        assert_eq!(samples, [0xFE, 0xFE, 0x00, 0x00, 0x80, 0x80, 0x7E]);
        write_group(&mut samples, BitVector7::new(0x7F));
        assert_eq!(samples, [0xFF, 0xFF, 0x01, 0x01, 0x81, 0x81, 0x7F]);
    }
}
