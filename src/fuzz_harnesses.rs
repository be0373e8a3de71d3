//! Fuzz testing harnesses for chromapack components.
//!
//! These targets interpret arbitrary input as link traffic and drive the
//! receiver with it. They must never panic.

use crate::color::Color;
use crate::decoder::Decoder;
use crate::encoder::{Encoder, TransitionEvent};
use crate::packet::DecodedPacket;

/// Fuzz tests the receive state machine.
///
/// Each pair of input bytes becomes one event: the first byte picks the colour
/// (modulo the five levels), the second scales to a duration that straddles the
/// default noise floor.
///
/// # Parameters
/// - `data`: Fuzzer-generated input treated as detected holds
pub fn decoder_feed_harness(data: &[u8]) {
    let mut decoder = Decoder::with_sink(Vec::<DecodedPacket>::new());
    for pair in data.chunks_exact(2) {
        let color = Color::from_level(pair[0] % 5).unwrap_or_default();
        let duration = u32::from(pair[1]) * 2;
        if let Some(packet) = decoder.feed(TransitionEvent::new(color, duration)) {
            debug_assert_eq!(decoder.received_word(packet.index), packet.word);
        }
    }
    let _ = decoder.received_data();
}

/// Fuzz tests the transmit path followed by a clean replay.
///
/// Whatever the input, the final packet of the plan must be recovered.
///
/// # Parameters
/// - `data`: Fuzzer-generated payload bytes
pub fn encode_replay_harness(data: &[u8]) {
    let mut encoder = Encoder::default();
    let commands = encoder.set_send_data(data).to_vec();
    let mut decoder = Decoder::with_sink(Vec::<DecodedPacket>::new());
    decoder.feed_all(commands);
    if let Some((index, &word)) = encoder.words().iter().enumerate().last() {
        assert_eq!(
            decoder.sink().last(),
            Some(&DecodedPacket {
                index: index as u8,
                word
            }),
            "final packet of the plan was not recovered"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harnesses_accept_edge_inputs() {
        let inputs: [&[u8]; 4] = [&[], &[0xFF], &[0x00; 64], &[0xFF; 513]];
        for input in inputs {
            decoder_feed_harness(input);
            encode_replay_harness(input);
        }
    }
}
