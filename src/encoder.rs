//! Transmit side: bytes to words to timed colour commands.
//!
//! Every staged word becomes one packet (its position is its index) and every
//! packet becomes 16 commands, each holding one colour for the configured
//! duration. The colour chain starts from [`Color::Off`] and runs across all
//! packets of one send request.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bounded::BoundedVec;
use crate::color::Color;
use crate::config::LinkConfig;
use crate::constants::{COMMAND_CAPACITY, SEND_BYTE_CAPACITY, SEND_WORD_CAPACITY, SYMBOLS_PER_PACKET};
use crate::crc::CrcCalculator;
use crate::error::ChromaError;
use crate::packet::Packet;
use crate::types::Ticks;

/// A colour held for some number of time units.
///
/// Produced by the encoder as a transmit command and fed to the decoder as an
/// observed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TransitionEvent {
    pub color: Color,
    pub duration: Ticks,
}

impl TransitionEvent {
    /// An event holding `color` for `duration` time units.
    pub const fn new(color: Color, duration: u32) -> Self {
        Self {
            color,
            duration: Ticks::new(duration),
        }
    }
}

/// A transmit command: hold `color` for at least `duration`.
pub type Command = TransitionEvent;

/// Packs bytes into little-endian 16-bit words, two at a time.
///
/// An odd trailing byte becomes a word with a zero high byte. Input beyond
/// [`SEND_BYTE_CAPACITY`] is dropped.
pub fn words_from_bytes(bytes: &[u8]) -> BoundedVec<u16, SEND_WORD_CAPACITY> {
    let mut words = BoundedVec::new();
    for chunk in bytes.chunks(2).take(SEND_WORD_CAPACITY) {
        let low = chunk[0];
        let high = chunk.get(1).copied().unwrap_or(0);
        words.push(u16::from_le_bytes([low, high]));
    }
    words
}

/// Unpacks words back into little-endian bytes.
pub fn bytes_from_words(words: &[u16]) -> Vec<u8> {
    words.iter().flat_map(|word| word.to_le_bytes()).collect()
}

/// Colours for a single packet, chained from `*prev`.
pub fn encode_word(index: u8, word: u16, prev: &mut Color) -> [Color; SYMBOLS_PER_PACKET] {
    Packet::new(index, word).to_colors(prev)
}

/// Owns the staged words and the command sequence derived from them.
#[derive(Debug)]
pub struct Encoder {
    config: LinkConfig,
    crc: CrcCalculator,
    words: BoundedVec<u16, SEND_WORD_CAPACITY>,
    commands: BoundedVec<Command, COMMAND_CAPACITY>,
}

impl Encoder {
    /// Creates an encoder with nothing staged.
    ///
    /// # Errors
    /// - [`ChromaError::InvalidConfig`] - `config` fails validation
    pub fn new(config: LinkConfig) -> Result<Self, ChromaError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: LinkConfig) -> Self {
        Self {
            config,
            crc: CrcCalculator::new(),
            words: BoundedVec::new(),
            commands: BoundedVec::new(),
        }
    }

    /// Timing this encoder was built with.
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Replaces the staged words with `bytes` and rebuilds the command sequence.
    ///
    /// Data beyond the word capacity is truncated silently; compare
    /// [`Encoder::words`] length against the input if overflow matters.
    ///
    /// # Returns
    /// The freshly built commands.
    pub fn set_send_data(&mut self, bytes: &[u8]) -> &[Command] {
        if bytes.len() > SEND_BYTE_CAPACITY {
            debug!(
                given = bytes.len(),
                kept = SEND_BYTE_CAPACITY,
                "send data truncated"
            );
        }
        self.words = words_from_bytes(bytes);
        self.encode();
        self.commands.as_slice()
    }

    /// Replaces the staged words directly and rebuilds the command sequence.
    pub fn set_send_words(&mut self, words: &[u16]) -> &[Command] {
        self.words.clear();
        for &word in words.iter().take(SEND_WORD_CAPACITY) {
            self.words.push(word);
        }
        self.encode();
        self.commands.as_slice()
    }

    /// Words currently staged, in index order.
    pub fn words(&self) -> &[u16] {
        self.words.as_slice()
    }

    /// The current command sequence.
    pub fn commands(&self) -> &[Command] {
        self.commands.as_slice()
    }

    /// Total time needed to play the current command sequence.
    pub fn airtime(&self) -> Ticks {
        self.commands
            .iter()
            .fold(Ticks::ZERO, |total, cmd| total.saturating_add(cmd.duration))
    }

    fn encode(&mut self) {
        self.commands.clear();
        let mut prev = Color::Off;
        for (index, &word) in self.words.iter().enumerate() {
            // SEND_WORD_CAPACITY is 256, so every position fits in a u8 index.
            let packet = Packet::with_calculator(index as u8, word, &self.crc);
            for color in packet.to_colors(&mut prev) {
                self.commands.push(Command {
                    color,
                    duration: self.config.duration,
                });
            }
        }
        debug!(
            words = self.words.len(),
            commands = self.commands.len(),
            "command sequence rebuilt"
        );
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::build(LinkConfig::default())
    }
}
