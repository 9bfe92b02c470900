//! Packing of ASCII text into message codewords.

use crate::codeword::encode_codeword;
use crate::{BATCH_WORDS, FLAG_MESSAGE, SYNC_WORD, TEXT_BITS_PER_CHAR, TEXT_BITS_PER_WORD};

/// Pack `text` into message codewords, inserting a sync word whenever the
/// running batch fills.
///
/// `initial_offset` (0..=15) is the batch position of the first word so that
/// sync insertion stays aligned with the surrounding transmission.
///
/// Each character contributes its low 7 bits, least-significant bit first, to
/// an MSB-first 20-bit accumulator. The character bit order is therefore
/// reversed on the wire, and characters routinely straddle word boundaries;
/// real receivers depend on exactly this layout. A final partial word is
/// zero-padded at the low end before encoding.
pub fn encode_ascii(initial_offset: usize, text: &[u8]) -> Vec<u32> {
    debug_assert!(initial_offset < BATCH_WORDS);

    let mut words = Vec::with_capacity((text.len() * TEXT_BITS_PER_CHAR).div_ceil(TEXT_BITS_PER_WORD));
    let mut current = 0u32;
    let mut bits = 0;
    let mut position = initial_offset;

    for &c in text {
        for i in 0..TEXT_BITS_PER_CHAR {
            // Low bit of the character lands in the accumulator's top slot.
            current = (current << 1) | ((c as u32 >> i) & 1);
            bits += 1;
            if bits == TEXT_BITS_PER_WORD {
                words.push(encode_codeword(current | FLAG_MESSAGE));
                current = 0;
                bits = 0;
                position += 1;
                if position == BATCH_WORDS {
                    words.push(SYNC_WORD);
                    position = 0;
                }
            }
        }
    }

    if bits > 0 {
        current <<= TEXT_BITS_PER_WORD - bits;
        words.push(encode_codeword(current | FLAG_MESSAGE));
        position += 1;
        if position == BATCH_WORDS {
            words.push(SYNC_WORD);
        }
    }

    words
}
