// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for the matrix-encoding codec.
//!
//! [`StegoError`] covers every failure mode of encode, decode and parity
//! matrix construction. All of them are raised before any carrier sample is
//! written or any output byte is produced.

use core::fmt;

/// Rejected encode arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The carrier buffer has no samples.
    EmptyCarrier,
    /// The message has no bytes.
    EmptyMessage,
    /// The message is longer than `capacity(carrier.len())`.
    MessageTooLarge { len: usize, capacity: usize },
    /// A message byte is outside the ASCII range (>= 128).
    NonAscii { index: usize, byte: u8 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCarrier => write!(f, "carrier is empty"),
            Self::EmptyMessage => write!(f, "message is empty"),
            Self::MessageTooLarge { len, capacity } => {
                write!(f, "message of {len} bytes exceeds carrier capacity of {capacity}")
            }
            Self::NonAscii { index, byte } => {
                write!(f, "byte {byte:#04x} at index {index} is not ASCII (values above 127 are not supported)")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Errors that can occur during steganographic encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// Encode arguments failed validation; the carrier was not modified.
    InvalidInput(InputError),
    /// The carrier holds fewer than `7 * message_len` samples.
    InsufficientCarrier { needed: usize, available: usize },
    /// A parity-check matrix has non-binary entries or cannot map the free
    /// positions onto every syndrome.
    InvalidParityMatrix(&'static str),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "invalid input: {e}"),
            Self::InsufficientCarrier { needed, available } => {
                write!(f, "carrier too short: need {needed} samples, have {available}")
            }
            Self::InvalidParityMatrix(msg) => write!(f, "invalid parity-check matrix: {msg}"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InputError> for StegoError {
    fn from(e: InputError) -> Self {
        Self::InvalidInput(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn input_error_is_source() {
        let e: StegoError = InputError::EmptyMessage.into();
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "invalid input: message is empty");
    }

    #[test]
    fn insufficient_carrier_has_no_source() {
        let e = StegoError::InsufficientCarrier { needed: 14, available: 9 };
        assert!(e.source().is_none());
        assert_eq!(e.to_string(), "carrier too short: need 14 samples, have 9");
    }

    #[test]
    fn non_ascii_message_names_byte() {
        let e = InputError::NonAscii { index: 3, byte: 0xC3 };
        let msg = e.to_string();
        assert!(msg.contains("0xc3"), "{msg}");
        assert!(msg.contains("index 3"), "{msg}");
    }
}
