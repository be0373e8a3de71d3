//! Byte-array facade over one encoder and one decoder.
//!
//! This is the surface a firmware integration talks to: stage bytes to send,
//! hand the command plan to the light driver, push every detected hold into
//! [`ColorLink::feed`], and read back whatever words have arrived.

use crate::config::LinkConfig;
use crate::decoder::Decoder;
use crate::encoder::{Command, Encoder, TransitionEvent};
use crate::error::ChromaError;
use crate::packet::DecodedPacket;
use crate::sink::PacketSink;

/// Both ends of a colour link sharing one configuration.
#[derive(Debug)]
pub struct ColorLink<S: PacketSink = ()> {
    encoder: Encoder,
    decoder: Decoder<S>,
}

impl<S: PacketSink> ColorLink<S> {
    /// Creates a link after validating `config`.
    ///
    /// # Errors
    /// - [`ChromaError::InvalidConfig`] - `config` fails validation
    pub fn new(config: LinkConfig, sink: S) -> Result<Self, ChromaError> {
        Ok(Self {
            encoder: Encoder::new(config)?,
            decoder: Decoder::new(config, sink)?,
        })
    }

    /// Stages `bytes` for sending and rebuilds the command plan.
    pub fn set_send_data(&mut self, bytes: &[u8]) -> &[Command] {
        self.encoder.set_send_data(bytes)
    }

    /// The current command plan for the transmit driver.
    pub fn send_commands(&self) -> &[Command] {
        self.encoder.commands()
    }

    /// Pushes one detected hold into the receiver.
    pub fn feed(&mut self, event: TransitionEvent) -> Option<DecodedPacket> {
        self.decoder.feed(event)
    }

    /// Feeds the link's own command plan into its receiver, as an optical loopback would.
    ///
    /// # Returns
    /// The number of packets validated during the replay.
    pub fn loopback(&mut self) -> usize {
        let Self { encoder, decoder } = self;
        decoder.feed_all(encoder.commands().iter().copied())
    }

    /// Full received-word store as little-endian bytes.
    pub fn received_data(&self) -> Vec<u8> {
        self.decoder.received_data()
    }

    /// Copies the received-word store into `out`.
    ///
    /// # Errors
    /// - [`ChromaError::BufferTooSmall`] - `out` is shorter than the full dump
    pub fn get_received_data(&self, out: &mut [u8]) -> Result<usize, ChromaError> {
        self.decoder.get_received_data(out)
    }

    /// The transmit half.
    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    /// The receive half.
    pub fn decoder(&self) -> &Decoder<S> {
        &self.decoder
    }

    /// Mutable receive half, e.g. to swap or drain its sink.
    pub fn decoder_mut(&mut self) -> &mut Decoder<S> {
        &mut self.decoder
    }
}
