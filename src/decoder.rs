//! Receive side: a self-synchronising sliding-window state machine.
//!
//! There is no start-of-packet marker on the link. The decoder shifts every
//! accepted symbol into a 32-bit window and re-checks the checksum after each
//! shift; a match is taken as a packet boundary. A mismatch is not an error,
//! it only means a whole packet has not lined up in the window yet.
//!
//! Per event:
//! 1. Holds shorter than `min_duration`, or of the same colour as the previous
//!    accepted event, are ignored entirely.
//! 2. The transition's symbol is shifted into the low two bits of the window.
//! 3. The window is read as `index | word low | word high | crc`; on a checksum
//!    match the word is stored at `index` and the sink is notified.
//! 4. The event's colour becomes the previous colour.

use tracing::{debug, trace};

use crate::color::{Color, symbol_for_transition};
use crate::config::LinkConfig;
use crate::constants::{BITS_PER_SYMBOL, RECEIVE_STORE_SIZE, RECEIVED_DATA_BYTES, WINDOW_SEED};
use crate::crc::CrcCalculator;
use crate::encoder::{TransitionEvent, bytes_from_words};
use crate::error::ChromaError;
use crate::packet::{DecodedPacket, Packet};
use crate::sink::PacketSink;

/// Receiver state for one link.
///
/// Not synchronised: drive [`Decoder::feed`] from a single logical producer.
#[derive(Debug)]
pub struct Decoder<S: PacketSink = ()> {
    config: LinkConfig,
    crc: CrcCalculator,
    window: u32,
    previous_color: Color,
    store: [u16; RECEIVE_STORE_SIZE],
    sink: S,
}

impl Decoder<()> {
    /// A decoder that only records packets in its received-word store.
    ///
    /// # Errors
    /// - [`ChromaError::InvalidConfig`] - `config` fails validation
    pub fn without_sink(config: LinkConfig) -> Result<Self, ChromaError> {
        Self::new(config, ())
    }
}

impl Default for Decoder<()> {
    fn default() -> Self {
        Self::with_sink(())
    }
}

impl<S: PacketSink> Decoder<S> {
    /// Creates a decoder with a seeded window, previous colour `Off` and a zeroed store.
    ///
    /// # Errors
    /// - [`ChromaError::InvalidConfig`] - `config` fails validation
    pub fn new(config: LinkConfig, sink: S) -> Result<Self, ChromaError> {
        config.validate()?;
        Ok(Self::build(config, sink))
    }

    /// A decoder with default timing delivering to `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self::build(LinkConfig::default(), sink)
    }

    fn build(config: LinkConfig, sink: S) -> Self {
        Self {
            config,
            crc: CrcCalculator::new(),
            window: WINDOW_SEED,
            previous_color: Color::Off,
            store: [0; RECEIVE_STORE_SIZE],
            sink,
        }
    }

    /// Processes one observed hold.
    ///
    /// # Returns
    /// The packet completed by this event, if its checksum validated.
    pub fn feed(&mut self, event: TransitionEvent) -> Option<DecodedPacket> {
        if event.duration < self.config.min_duration || event.color == self.previous_color {
            trace!(
                color = %event.color,
                duration = event.duration.value(),
                "event ignored"
            );
            return None;
        }

        let symbol = symbol_for_transition(self.previous_color, event.color);
        self.window = (self.window << BITS_PER_SYMBOL) | u32::from(symbol.value());
        self.previous_color = event.color;

        let packet = Packet::from_window(self.window).verified(&self.crc)?;
        self.store[usize::from(packet.index)] = packet.word;
        debug!(
            index = packet.index,
            word = packet.word,
            "packet validated"
        );
        self.sink.on_packet(packet);
        Some(packet)
    }

    /// Convenience wrapper around [`Decoder::feed`].
    pub fn feed_color(&mut self, color: Color, duration: u32) -> Option<DecodedPacket> {
        self.feed(TransitionEvent::new(color, duration))
    }

    /// Feeds a batch of events in order, returning how many packets validated.
    pub fn feed_all<I>(&mut self, events: I) -> usize
    where
        I: IntoIterator<Item = TransitionEvent>,
    {
        events
            .into_iter()
            .filter_map(|event| self.feed(event))
            .count()
    }

    /// Timing this decoder was built with.
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// The last 16 symbols seen, most recent in the low two bits.
    pub fn window(&self) -> u32 {
        self.window
    }

    /// Colour of the last accepted event.
    pub fn previous_color(&self) -> Color {
        self.previous_color
    }

    /// Most recent word received at `index` (zero if none yet).
    pub fn received_word(&self, index: u8) -> u16 {
        self.store[usize::from(index)]
    }

    /// The whole received-word store.
    pub fn received_words(&self) -> &[u16; RECEIVE_STORE_SIZE] {
        &self.store
    }

    /// Dumps every slot of the store as little-endian bytes.
    pub fn received_data(&self) -> Vec<u8> {
        bytes_from_words(&self.store)
    }

    /// Copies the store dump into `out`.
    ///
    /// # Returns
    /// The number of bytes written (always the full dump size).
    ///
    /// # Errors
    /// - [`ChromaError::BufferTooSmall`] - `out` cannot hold the full dump
    pub fn get_received_data(&self, out: &mut [u8]) -> Result<usize, ChromaError> {
        if out.len() < RECEIVED_DATA_BYTES {
            return Err(ChromaError::BufferTooSmall {
                needed: RECEIVED_DATA_BYTES,
                available: out.len(),
            });
        }
        for (slot, word) in out.chunks_exact_mut(2).zip(self.store.iter()) {
            slot.copy_from_slice(&word.to_le_bytes());
        }
        Ok(RECEIVED_DATA_BYTES)
    }

    /// The packet sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the packet sink, e.g. to drain captured packets.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Replaces the sink, returning the previous one. Decoder state is kept.
    pub fn set_sink(&mut self, sink: S) -> S {
        std::mem::replace(&mut self.sink, sink)
    }

    /// Consumes the decoder, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
