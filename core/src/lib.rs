//! POCSAG paging encoder and baseband audio modulator
//!
//! Turns an (address, text) pair into a protocol-compliant 32-bit word stream
//! and renders that stream as 16-bit PCM suitable for driving an external FSK
//! transmitter. Transmit-only; there is no decoder here.

pub mod checksum;
pub mod codeword;
pub mod error;
pub mod modulator;
pub mod text;
pub mod transmission;

pub use codeword::encode_codeword;
pub use error::{PocsagError, Result};
pub use modulator::PcmModulator;
pub use text::encode_ascii;
pub use transmission::{address_offset, encode_transmission, text_message_length};

// Wire-format constants. These are normative for interoperability with real
// POCSAG receivers and must not be changed.

/// Sync word opening every 16-word batch.
pub const SYNC_WORD: u32 = 0x7CD215D8;

/// Idle word used for address-position padding and end-of-message marking.
pub const IDLE_WORD: u32 = 0x7A89C197;

/// Alternating 1,0 bit pattern the preamble is built from.
pub const PREAMBLE_WORD: u32 = 0xAAAAAAAA;

/// The preamble is at least 576 alternating bits so receivers can lock on.
pub const PREAMBLE_BITS: usize = 576;

/// Preamble length in 32-bit words.
pub const PREAMBLE_WORDS: usize = PREAMBLE_BITS / 32;

/// One batch is 16 codewords, preceded by a sync word.
pub const BATCH_WORDS: usize = 16;

/// One frame is a pair of codewords; 8 frames per batch.
pub const FRAME_WORDS: usize = 2;

/// Data bits carried by each message codeword.
pub const TEXT_BITS_PER_WORD: usize = 20;

/// Characters are 7-bit ASCII, transmitted bit-reversed.
pub const TEXT_BITS_PER_CHAR: usize = 7;

/// CRC remainder width in bits.
pub const CRC_BITS: u32 = 10;

/// Generator polynomial for the BCH-style CRC.
pub const CRC_GENERATOR: u32 = 0b11101101001;

/// Type flag for an address codeword (bit 20 of the payload clear).
pub const FLAG_ADDRESS: u32 = 0x000000;

/// Type flag for a message codeword (bit 20 of the payload set).
pub const FLAG_MESSAGE: u32 = 0x100000;

/// Address-word function bits marking alphanumeric (text) content.
pub const FLAG_TEXT_DATA: u32 = 0x3;

/// Largest encodable address (21 bits).
pub const MAX_ADDRESS: u32 = (1 << 21) - 1;

/// Fixed baseband symbol granularity before resampling.
pub const SYMBOL_RATE: u32 = 38_400;

/// Default PCM output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 22_050;

/// Default transmission baud rate.
pub const DEFAULT_BAUD_RATE: u32 = 512;
