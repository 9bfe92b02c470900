//! Cross-module invariants over whole transmissions.

use rand::{rngs::StdRng, Rng, SeedableRng};

use pagerwave_core::{
    address_offset, encode_codeword, encode_transmission, text_message_length, PcmModulator,
    DEFAULT_BAUD_RATE, DEFAULT_SAMPLE_RATE, IDLE_WORD, MAX_ADDRESS, PREAMBLE_WORD, PREAMBLE_WORDS,
    SYNC_WORD,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_text(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(0x20..0x7F)).collect()
}

#[test]
fn test_length_calculator_matches_builder() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(0xB0C5A6);
    for _ in 0..500 {
        let address = rng.gen_range(0..=MAX_ADDRESS);
        let len = rng.gen_range(0..160);
        let text = random_text(&mut rng, len);

        let words = encode_transmission(address, &text).expect("encode failed");
        assert_eq!(
            words.len(),
            text_message_length(address, len),
            "length mismatch for address={address} len={len}"
        );
    }
}

#[test]
fn test_sync_every_seventeenth_word() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(0x5EC0);
    for _ in 0..200 {
        let address = rng.gen_range(0..=MAX_ADDRESS);
        let len = rng.gen_range(0..200);
        let text = random_text(&mut rng, len);

        let words = encode_transmission(address, &text).expect("encode failed");
        let body = &words[PREAMBLE_WORDS..];
        assert_eq!(body.len() % 17, 0);

        for (i, &word) in body.iter().enumerate() {
            if i % 17 == 0 {
                assert_eq!(word, SYNC_WORD, "word {i} after preamble is not sync");
            } else {
                assert_ne!(word, SYNC_WORD, "stray sync at word {i} after preamble");
            }
        }
    }
}

#[test]
fn test_every_body_word_has_even_parity() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let address = rng.gen_range(0..=MAX_ADDRESS);
        let len = rng.gen_range(0..80);
        let text = random_text(&mut rng, len);

        let words = encode_transmission(address, &text).expect("encode failed");
        for &word in &words[PREAMBLE_WORDS..] {
            assert_eq!(word.count_ones() % 2, 0, "odd parity in {word:#010x}");
        }
    }
}

#[test]
fn test_preamble_is_alternating_bits() {
    init_logging();
    let words = encode_transmission(42, b"page me").expect("encode failed");
    assert_eq!(&words[..PREAMBLE_WORDS], &[PREAMBLE_WORD; PREAMBLE_WORDS]);
}

#[test]
fn test_address_word_lands_in_its_frame() {
    init_logging();
    for address in [0u32, 1, 5, 7, 0x12340, 0x12347, MAX_ADDRESS] {
        let words = encode_transmission(address, b"x").expect("encode failed");
        let offset = address_offset(address);

        // Idle prefix, then the address codeword with bit 20 clear.
        let prefix = &words[PREAMBLE_WORDS + 1..PREAMBLE_WORDS + 1 + offset];
        assert!(prefix.iter().all(|&w| w == IDLE_WORD));

        let addr_word = words[PREAMBLE_WORDS + 1 + offset];
        assert_eq!(addr_word, encode_codeword(((address >> 3) << 2) | 0b11));
        assert_eq!((addr_word >> 31) & 1, 0, "address word flagged as message");
    }
}

#[test]
fn test_pcm_length_matches_calculator_for_real_transmissions() {
    init_logging();
    let modulator = PcmModulator::new(DEFAULT_SAMPLE_RATE, DEFAULT_BAUD_RATE).unwrap();
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..20 {
        let address = rng.gen_range(0..=MAX_ADDRESS);
        let len = rng.gen_range(0..60);
        let text = random_text(&mut rng, len);

        let words = encode_transmission(address, &text).expect("encode failed");
        let pcm = modulator.modulate(&words);
        assert_eq!(pcm.len(), modulator.transmission_len_bytes(words.len()));
        // Whole 16-bit little-endian samples only.
        assert_eq!(pcm.len() % 2, 0);
    }
}
