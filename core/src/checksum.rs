//! CRC remainder and parity bit for codeword assembly.

use crate::{CRC_BITS, CRC_GENERATOR};

/// Compute the 10-bit CRC for a 21-bit message.
///
/// The message, right-padded with 10 zero bits, is treated as a binary
/// polynomial and divided modulo-2 by the generator polynomial; the remainder
/// is the CRC. Bits above the 21-bit domain must be clear or the result is
/// unspecified.
pub fn crc(message: u32) -> u32 {
    // Align the generator's MSB with the dividend's MSB (bit 30).
    let mut divisor = CRC_GENERATOR << 20;
    let mut remainder = message << CRC_BITS;

    for column in 0..=20 {
        if (remainder >> (30 - column)) & 1 != 0 {
            // XOR stands in for subtraction in modulo-2 long division.
            remainder ^= divisor;
        }
        divisor >>= 1;
    }

    remainder & 0x3FF
}

/// Even-parity bit: 1 if `x` has an odd number of set bits, else 0.
///
/// Appending the returned bit makes the total population count even.
pub fn parity(x: u32) -> u32 {
    x.count_ones() & 1
}
