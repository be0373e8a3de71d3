//! Deterministic simulation of an imperfect optical channel.
//!
//! A seeded generator produces random traffic, glitches and idle periods around
//! real packets, so every run of these tests sees the same stream.

mod common;

use chromapack::constants::SYMBOLS_PER_PACKET;
use chromapack::{Color, DecodedPacket, Decoder, TransitionEvent};

use rand::prelude::*;
use rand::rngs::StdRng;

use common::*;

/// Configuration for a simulation scenario.
#[derive(Debug, Clone)]
struct SimConfig {
    /// Seed for all random number generation to ensure determinism.
    seed: u64,
    /// Number of random events emitted before the real traffic.
    noise_prefix_len: usize,
    /// Probability (0.0 to 1.0) of a sub-threshold glitch before each real event.
    glitch_probability: f64,
    /// Probability (0.0 to 1.0) of re-reporting the current colour after each real event.
    repeat_probability: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            noise_prefix_len: 200,
            glitch_probability: 0.3,
            repeat_probability: 0.3,
        }
    }
}

/// Represents the channel between transmitter and receiver.
struct SimulatedChannel {
    rng: StdRng,
    config: SimConfig,
}

impl SimulatedChannel {
    fn new(config: &SimConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            config: config.clone(),
        }
    }

    fn random_color(&mut self) -> Color {
        Color::ALL[self.rng.random_range(0..Color::ALL.len())]
    }

    /// Arbitrary traffic: any colour, any duration from glitch to long hold.
    fn noise(&mut self) -> Vec<TransitionEvent> {
        (0..self.config.noise_prefix_len)
            .map(|_| {
                let color = self.random_color();
                TransitionEvent::new(color, self.rng.random_range(1..400))
            })
            .collect()
    }

    /// Passes `events` through, adding glitches and repeated holds that the
    /// receiver must filter out.
    fn transmit(&mut self, events: &[TransitionEvent]) -> Vec<TransitionEvent> {
        let mut out = Vec::with_capacity(events.len() * 2);
        for event in events {
            if self.rng.random_bool(self.config.glitch_probability) {
                let color = self.random_color();
                out.push(TransitionEvent::new(color, self.rng.random_range(0..60)));
            }
            let stretched = event.duration.value() + self.rng.random_range(0..50);
            out.push(TransitionEvent::new(event.color, stretched));
            if self.rng.random_bool(self.config.repeat_probability) {
                out.push(TransitionEvent::new(event.color, self.rng.random_range(60..500)));
            }
        }
        out
    }
}

/// Brings the receiver back to `Off` so the next packet's first symbol decodes
/// against the same previous colour the encoder started from.
fn idle_off() -> TransitionEvent {
    TransitionEvent::new(Color::Off, 1000)
}

/// Feeds `events` and reports after how many accepted symbols `expected`
/// validated, plus the total number of accepted symbols.
fn feed_counting_symbols(
    decoder: &mut Decoder<Vec<DecodedPacket>>,
    events: Vec<TransitionEvent>,
    expected: DecodedPacket,
) -> (Option<usize>, usize) {
    let mut accepted = 0;
    let mut completed_at = None;
    for event in events {
        let before = decoder.previous_color();
        let result = decoder.feed(event);
        if decoder.previous_color() != before {
            accepted += 1;
        }
        if result == Some(expected) {
            completed_at = Some(accepted);
        }
    }
    (completed_at, accepted)
}

/// Runs noise, an idle `Off` and one packet through a fresh decoder.
///
/// Returns the packets validated before the real packet started.
fn run_sync_after_noise(seed: u64, index: u8, word: u16) -> Vec<DecodedPacket> {
    let config = SimConfig {
        seed,
        ..Default::default()
    };
    let mut channel = SimulatedChannel::new(&config);
    let mut decoder = capturing_decoder();

    decoder.feed_all(channel.noise());
    decoder.feed(idle_off());
    let from_noise = decoder.set_sink(Vec::new());

    let expected = DecodedPacket { index, word };
    let events = channel.transmit(&packet_events(index, word));
    let (completed_at, accepted) = feed_counting_symbols(&mut decoder, events, expected);

    assert_eq!(accepted, SYMBOLS_PER_PACKET, "seed {seed}: glitch or repeat was accepted");
    assert_eq!(
        completed_at,
        Some(SYMBOLS_PER_PACKET),
        "seed {seed}: packet did not validate on its final symbol"
    );
    assert_eq!(
        decoder.sink().iter().filter(|&&p| p == expected).count(),
        1,
        "seed {seed}: packet reported more than once"
    );
    assert_eq!(decoder.sink().last(), Some(&expected));
    assert_eq!(decoder.received_word(index), word);
    from_noise
}

fn noise_validates_nothing(seed: u64) -> bool {
    let config = SimConfig {
        seed,
        ..Default::default()
    };
    let mut decoder = capturing_decoder();
    decoder.feed_all(SimulatedChannel::new(&config).noise());
    decoder.feed(idle_off());
    decoder.sink().is_empty()
}

#[test]
fn packet_is_recognised_after_random_prefix() {
    for seed in 0..20 {
        run_sync_after_noise(seed, (seed * 13) as u8, 0x1234u16.wrapping_mul(seed as u16 + 1));
    }
}

#[test]
fn clean_noise_prefix_yields_only_the_real_packet() {
    // Roughly 1 in 256 accepted noise symbols lines up a valid checksum, so
    // some seeds do produce false positives. Pick the first seed that does not.
    let seed = (0..64)
        .find(|&seed| noise_validates_nothing(seed))
        .expect("no seed in 0..64 produced a clean noise prefix");

    let from_noise = run_sync_after_noise(seed, 0x2A, 0xC0DE);
    assert!(from_noise.is_empty(), "seed {seed}: noise validated {from_noise:?}");
}

#[test]
fn noise_false_positives_are_rare() {
    let noisy = (0..64).filter(|&seed| !noise_validates_nothing(seed)).count();
    assert!(noisy < 48, "{noisy} of 64 noise prefixes produced a packet");
}

#[test]
fn message_survives_glitches_and_repeated_holds() {
    let message = b"Hello from chromapack";
    let config = SimConfig {
        seed: 42,
        noise_prefix_len: 0,
        ..Default::default()
    };
    let mut channel = SimulatedChannel::new(&config);
    let mut decoder = capturing_decoder();
    for event in channel.transmit(&message_events(message)) {
        decoder.feed(event);
    }
    assert_eq!(&decoder.received_data()[..message.len()], message);

    let words = message_words(message);
    for (index, word) in words.iter().enumerate() {
        assert!(
            decoder.sink().contains(&DecodedPacket {
                index: index as u8,
                word: *word
            }),
            "word {index} missing"
        );
    }
}

#[test]
fn identical_seeds_produce_identical_streams() {
    let config = SimConfig {
        seed: 7,
        ..Default::default()
    };
    let a = SimulatedChannel::new(&config).noise();
    let b = SimulatedChannel::new(&config).noise();
    assert_eq!(a, b);

    let mut first: Decoder<Vec<DecodedPacket>> = capturing_decoder();
    let mut second = capturing_decoder();
    first.feed_all(a);
    second.feed_all(b);
    assert_eq!(first.window(), second.window());
    assert_eq!(first.sink(), second.sink());
}
