//! Full transmission framing: preamble, batches, address word, text, padding.

use log::debug;

use crate::codeword::encode_codeword;
use crate::error::{PocsagError, Result};
use crate::text::encode_ascii;
use crate::{
    BATCH_WORDS, FLAG_TEXT_DATA, FRAME_WORDS, IDLE_WORD, MAX_ADDRESS, PREAMBLE_WORD,
    PREAMBLE_WORDS, SYNC_WORD, TEXT_BITS_PER_CHAR, TEXT_BITS_PER_WORD,
};

/// Number of idle words that must precede the address codeword.
///
/// The low 3 bits of an address are not transmitted in the address word;
/// they select which of the batch's 8 frames the word occupies.
pub fn address_offset(address: u32) -> usize {
    (address as usize & 0x7) * FRAME_WORDS
}

/// Encode a complete text transmission for `address`.
///
/// Output layout: 18 preamble words, then one or more (sync, 16-word batch)
/// groups holding the idle prefix, the address codeword, the packed text,
/// one idle end-of-message marker, and idle padding out to a whole batch.
/// Padding that lands on a batch boundary emits a sync word first, so every
/// 17th word after the preamble is a sync.
pub fn encode_transmission(address: u32, text: &[u8]) -> Result<Vec<u32>> {
    if address > MAX_ADDRESS {
        return Err(PocsagError::AddressOutOfRange(address));
    }

    let total = text_message_length(address, text.len());
    let mut words = Vec::with_capacity(total);

    words.extend(std::iter::repeat(PREAMBLE_WORD).take(PREAMBLE_WORDS));
    words.push(SYNC_WORD);
    words.extend(std::iter::repeat(IDLE_WORD).take(address_offset(address)));

    // The address word carries the upper 18 address bits plus the two
    // function bits marking alphanumeric content. Bit 20 stays clear.
    words.push(encode_codeword(((address >> 3) << 2) | FLAG_TEXT_DATA));

    words.extend(encode_ascii(address_offset(address) + 1, text));

    // Idle marks end of message.
    words.push(IDLE_WORD);

    // Pad the remainder of the batch with idles. A body that is already
    // batch-complete still gets one full idle batch, mirroring
    // text_message_length.
    let mut body = words.len() - PREAMBLE_WORDS;
    let target = body + (BATCH_WORDS + 1) - body % (BATCH_WORDS + 1);
    while body < target {
        words.push(if body % (BATCH_WORDS + 1) == 0 {
            SYNC_WORD
        } else {
            IDLE_WORD
        });
        body += 1;
    }

    debug_assert_eq!(words.len(), total);
    debug!(
        "encoded transmission: address={address}, {} chars, {} words",
        text.len(),
        words.len()
    );
    Ok(words)
}

/// Exact word count of [`encode_transmission`] for the same inputs, computed
/// without materializing the sequence.
///
/// Callers size output buffers from this; it must never diverge from the
/// builder.
pub fn text_message_length(address: u32, num_chars: usize) -> usize {
    // Idle prefix plus the address word itself.
    let mut words = address_offset(address) + 1;

    // 7 bits per character packed into 20-bit words, rounding up.
    words += (num_chars * TEXT_BITS_PER_CHAR).div_ceil(TEXT_BITS_PER_WORD);

    // End-of-message idle.
    words += 1;

    // Idle padding out to a whole batch, then one sync word per batch.
    words += BATCH_WORDS - words % BATCH_WORDS;
    words += words / BATCH_WORDS;

    words + PREAMBLE_WORDS
}
