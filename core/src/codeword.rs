//! Assembly of 21-bit payloads into 32-bit codewords.

use crate::checksum::{crc, parity};
use crate::CRC_BITS;

/// Encode a 21-bit payload as a full 32-bit codeword.
///
/// Layout: `[payload:21][crc:10][parity:1]`. The caller sets bit 20 of the
/// payload to flag the word as address (0) or message (1) before encoding.
pub fn encode_codeword(payload: u32) -> u32 {
    let with_crc = (payload << CRC_BITS) | crc(payload);
    (with_crc << 1) | parity(with_crc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FLAG_MESSAGE, SYNC_WORD};

    #[test]
    fn test_known_codewords() {
        assert_eq!(encode_codeword(0), 0);
        // Address 0 with the text-data function bits set.
        assert_eq!(encode_codeword(0b11), 0x1DA5);
        assert_eq!(encode_codeword(0x12345), 0x091A2C93);
    }

    #[test]
    fn test_sync_word_is_its_own_codeword() {
        assert_eq!(encode_codeword(SYNC_WORD >> 11), SYNC_WORD);
    }

    #[test]
    fn test_top_bits_carry_payload() {
        for payload in [0u32, 1, 0b11, 0x12345, 0xABCDE, 0x1FFFFF] {
            assert_eq!(encode_codeword(payload) >> 11, payload);
        }
    }

    #[test]
    fn test_total_parity_is_even() {
        let payloads = [
            0u32,
            1,
            0b11,
            0x12345,
            0x1FFFFF,
            FLAG_MESSAGE,
            FLAG_MESSAGE | 0x82000,
        ];
        for payload in payloads {
            let word = encode_codeword(payload);
            assert_eq!(word.count_ones() % 2, 0, "odd parity for {payload:#x}");
        }
    }
}
