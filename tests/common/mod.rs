//! Common test utilities for chromapack integration tests.
//!
//! Shared helpers for building event streams and capturing decoders.
#![allow(dead_code)]

use chromapack::constants::SYMBOLS_PER_PACKET;
use chromapack::{Color, DecodedPacket, Decoder, Encoder, TransitionEvent, encode_word};

/// Hold time used by helpers that build events directly.
pub const TEST_DURATION: u32 = 125;

/// A decoder with default timing that records every packet it validates.
pub fn capturing_decoder() -> Decoder<Vec<DecodedPacket>> {
    Decoder::with_sink(Vec::new())
}

/// Events for one packet, chained from `Off` as a fresh encoder would.
pub fn packet_events(index: u8, word: u16) -> Vec<TransitionEvent> {
    let mut prev = Color::Off;
    encode_word(index, word, &mut prev)
        .into_iter()
        .map(|color| TransitionEvent::new(color, TEST_DURATION))
        .collect()
}

/// Full command plan for `bytes` from a default encoder.
pub fn message_events(bytes: &[u8]) -> Vec<TransitionEvent> {
    let mut encoder = Encoder::default();
    encoder.set_send_data(bytes).to_vec()
}

/// Words a default encoder stages for `bytes`.
pub fn message_words(bytes: &[u8]) -> Vec<u16> {
    let mut encoder = Encoder::default();
    encoder.set_send_data(bytes);
    encoder.words().to_vec()
}

/// Feeds `events` one by one and asserts the last event of every packet
/// completes exactly that packet.
///
/// # Panics
/// Panics if any packet boundary fails to validate.
pub fn assert_every_packet_completes(
    decoder: &mut Decoder<Vec<DecodedPacket>>,
    events: &[TransitionEvent],
    words: &[u16],
) {
    assert_eq!(events.len(), words.len() * SYMBOLS_PER_PACKET);
    for (index, chunk) in events.chunks(SYMBOLS_PER_PACKET).enumerate() {
        let mut last = None;
        for event in chunk {
            last = decoder.feed(*event);
        }
        assert_eq!(
            last,
            Some(DecodedPacket {
                index: index as u8,
                word: words[index]
            }),
            "packet {index} did not complete on its final symbol"
        );
    }
}
