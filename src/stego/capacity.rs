// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Message length bounds for a carrier.
//!
//! [`capacity`] is the bound the encoder enforces as `MessageTooLarge`.
//! It is per sample and therefore looser than what the carrier can physically
//! hold; [`group_capacity`] gives the exact number of 7-sample groups.

use crate::stego::matrix::parity::GROUP_LEN;

/// Maximum message length accepted for a carrier of `sample_count` samples:
/// `max(1, sample_count) - 1`.
pub fn capacity(sample_count: usize) -> usize {
    sample_count.max(1) - 1
}

/// Number of message bytes a carrier of `sample_count` samples can hold.
pub fn group_capacity(sample_count: usize) -> usize {
    sample_count / GROUP_LEN
}

/// Maximum message length for an image of `width × height` pixels.
///
/// Uses the pixel count rather than the sample count, matching how the
/// browser frontend sizes its message box. The product saturates.
pub fn capacity_for_dimensions(width: u32, height: u32) -> usize {
    let pixels = (width as usize).saturating_mul(height as usize);
    capacity(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_boundaries() {
        assert_eq!(capacity(0), 0);
        assert_eq!(capacity(1), 0);
        assert_eq!(capacity(2), 1);
        assert_eq!(capacity(8), 7);
    }

    #[test]
    fn group_capacity_rounds_down() {
        assert_eq!(group_capacity(0), 0);
        assert_eq!(group_capacity(6), 0);
        assert_eq!(group_capacity(7), 1);
        assert_eq!(group_capacity(20), 2);
        assert_eq!(group_capacity(21), 3);
    }

    #[test]
    fn group_capacity_never_exceeds_capacity() {
        for n in 1..200 {
            assert!(group_capacity(n) <= capacity(n), "n = {n}");
        }
    }

    #[test]
    fn dimensions() {
        assert_eq!(capacity_for_dimensions(0, 0), 0);
        assert_eq!(capacity_for_dimensions(0, 640), 0);
        assert_eq!(capacity_for_dimensions(1, 1), 0);
        assert_eq!(capacity_for_dimensions(640, 480), 307_199);
    }
}
