//! Packet sinks: where the decoder delivers validated packets.
//!
//! The decoder is generic over a [`PacketSink`], so delivery strategy (discard,
//! capture, queue to another thread, log) is chosen by the integrator.

use std::sync::mpsc::Sender;

use tracing::info;

use crate::packet::DecodedPacket;

/// Receives every packet the decoder validates, synchronously and in order.
pub trait PacketSink {
    /// Called once per validated packet, after the received-word store is updated.
    fn on_packet(&mut self, packet: DecodedPacket);
}

/// Discards packets; the received-word store still records them.
impl PacketSink for () {
    fn on_packet(&mut self, _packet: DecodedPacket) {}
}

/// Captures packets in arrival order.
impl PacketSink for Vec<DecodedPacket> {
    fn on_packet(&mut self, packet: DecodedPacket) {
        self.push(packet);
    }
}

/// Forwards packets to a channel. A disconnected receiver drops packets silently.
impl PacketSink for Sender<DecodedPacket> {
    fn on_packet(&mut self, packet: DecodedPacket) {
        let _ = self.send(packet);
    }
}

/// Adapts any closure into a sink.
#[derive(Debug, Clone)]
pub struct FnSink<F>(pub F);

impl<F: FnMut(DecodedPacket)> PacketSink for FnSink<F> {
    fn on_packet(&mut self, packet: DecodedPacket) {
        (self.0)(packet)
    }
}

/// Logs every packet at `info` level and keeps a running count.
#[derive(Debug, Default, Clone)]
pub struct TracingSink {
    received: u64,
}

impl TracingSink {
    /// A sink with a zero count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of packets seen so far.
    pub fn received(&self) -> u64 {
        self.received
    }
}

impl PacketSink for TracingSink {
    fn on_packet(&mut self, packet: DecodedPacket) {
        self.received += 1;
        info!(
            index = packet.index,
            word = packet.word,
            total = self.received,
            "packet received"
        );
    }
}

impl<S: PacketSink + ?Sized> PacketSink for &mut S {
    fn on_packet(&mut self, packet: DecodedPacket) {
        (**self).on_packet(packet)
    }
}

impl<S: PacketSink + ?Sized> PacketSink for Box<S> {
    fn on_packet(&mut self, packet: DecodedPacket) {
        (**self).on_packet(packet)
    }
}
