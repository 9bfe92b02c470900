//! Bit-to-sample rendering of an encoded transmission.

use log::debug;

use crate::error::{PocsagError, Result};
use crate::SYMBOL_RATE;

/// Amplitude for one symbol level; the sign carries the bit.
const SAMPLE_LEVEL: i16 = i16::MAX / 2;

/// Renders 32-bit word streams as two-level 16-bit PCM.
///
/// Bits are expanded at the fixed 38,400 Hz symbol rate (bit 0 high, bit 1
/// low) and then resampled to the output rate by nearest-index selection.
/// No interpolation or filtering is applied; the external radio performs the
/// actual frequency shifting, so a cheap rate conversion is sufficient.
pub struct PcmModulator {
    sample_rate: u32,
    baud_rate: u32,
}

impl PcmModulator {
    /// The baud rate must evenly divide the symbol rate so each bit maps to a
    /// whole number of symbol-rate samples.
    pub fn new(sample_rate: u32, baud_rate: u32) -> Result<Self> {
        if baud_rate == 0 || SYMBOL_RATE % baud_rate != 0 {
            return Err(PocsagError::UnsupportedBaudRate(baud_rate));
        }
        if sample_rate == 0 {
            return Err(PocsagError::UnsupportedSampleRate);
        }
        Ok(Self {
            sample_rate,
            baud_rate,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn baud_rate(&self) -> u32 {
        self.baud_rate
    }

    /// Output size in bytes for a transmission of `word_count` words.
    ///
    /// 32 bits per word, `sample_rate / baud_rate` samples per bit, 2 bytes
    /// per sample. Integer truncation order matches [`Self::modulate`]; the
    /// two must never diverge.
    pub fn transmission_len_bytes(&self, word_count: usize) -> usize {
        word_count * 32 * self.sample_rate as usize / self.baud_rate as usize * 2
    }

    /// Byte count of `seconds` of silence (zero samples) at the output rate.
    pub fn silence_len_bytes(&self, seconds: u32) -> usize {
        (self.sample_rate * seconds) as usize * 2
    }

    /// Render `words` as little-endian 16-bit PCM bytes.
    ///
    /// The output length always equals
    /// `transmission_len_bytes(words.len())`.
    pub fn modulate(&self, words: &[u32]) -> Vec<u8> {
        let repeats_per_bit = (SYMBOL_RATE / self.baud_rate) as usize;

        // Expand every bit, most significant first, at the symbol rate.
        let mut symbols = Vec::with_capacity(words.len() * 32 * repeats_per_bit);
        for &word in words {
            for bit_num in 0..32 {
                let sample = if (word >> (31 - bit_num)) & 1 == 0 {
                    SAMPLE_LEVEL
                } else {
                    -SAMPLE_LEVEL
                };
                symbols.extend(std::iter::repeat(sample).take(repeats_per_bit));
            }
        }

        // Nearest-index resample down (or up) to the output rate.
        let out_len = self.transmission_len_bytes(words.len());
        let mut out = Vec::with_capacity(out_len);
        let sample_rate = self.sample_rate as usize;
        let symbol_rate = SYMBOL_RATE as usize;
        for i in 0..out_len / 2 {
            let src = (i * symbol_rate / sample_rate).min(symbols.len().saturating_sub(1));
            out.extend_from_slice(&symbols[src].to_le_bytes());
        }

        debug_assert_eq!(out.len(), out_len);
        debug!(
            "modulated {} words into {} bytes at {} Hz / {} baud",
            words.len(),
            out.len(),
            self.sample_rate,
            self.baud_rate
        );
        out
    }
}
