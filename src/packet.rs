//! Packet model and its symbol serialization.
//!
//! A packet is four bytes, transmitted in this order:
//!
//! ```text
//!  31      24 23      16 15       8 7        0
//! +----------+----------+----------+----------+
//! |  index   | word low | word high|  CRC-8   |
//! +----------+----------+----------+----------+
//! ```
//!
//! Each byte is split into four 2-bit symbols, most-significant pair first, so the
//! 16 symbols of a packet shifted into a 32-bit register reproduce exactly this layout.

use serde::{Deserialize, Serialize};

use crate::color::{Color, color_for_symbol};
use crate::constants::{PACKET_BYTES, SYMBOLS_PER_BYTE, SYMBOLS_PER_PACKET};
use crate::crc::CrcCalculator;
use crate::types::Symbol;

/// A logical packet with its checksum.
///
/// Construct with [`Packet::new`] for outgoing data; incoming windows are unpacked
/// with [`Packet::from_window`] and checked with [`Packet::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Packet {
    pub index: u8,
    pub word: u16,
    pub checksum: u8,
}

/// A packet whose checksum has been verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DecodedPacket {
    /// Slot in the received-word store.
    pub index: u8,
    /// The payload word.
    pub word: u16,
}

impl Packet {
    /// Builds a packet, computing its checksum.
    pub fn new(index: u8, word: u16) -> Self {
        Self::with_calculator(index, word, &CrcCalculator::new())
    }

    /// Builds a packet using an existing CRC instance.
    pub fn with_calculator(index: u8, word: u16, crc: &CrcCalculator) -> Self {
        Self {
            index,
            word,
            checksum: crc.packet_crc8(word, index),
        }
    }

    /// Unpacks the positional fields of a 32-bit receive window. No validation.
    pub fn from_window(window: u32) -> Self {
        let [index, low, high, checksum] = window.to_be_bytes();
        Self {
            index,
            word: u16::from_le_bytes([low, high]),
            checksum,
        }
    }

    /// The packet as it would sit in a fully shifted receive window.
    pub fn to_window(&self) -> u32 {
        u32::from_be_bytes(self.to_bytes())
    }

    /// The four transmitted bytes: index, word low, word high, checksum.
    pub fn to_bytes(&self) -> [u8; PACKET_BYTES] {
        let [low, high] = self.word.to_le_bytes();
        [self.index, low, high, self.checksum]
    }

    /// `true` if the stored checksum matches the recomputed one.
    pub fn is_valid(&self, crc: &CrcCalculator) -> bool {
        self.checksum == crc.packet_crc8(self.word, self.index)
    }

    /// The validated view of this packet, if its checksum holds.
    pub fn verified(&self, crc: &CrcCalculator) -> Option<DecodedPacket> {
        self.is_valid(crc).then_some(DecodedPacket {
            index: self.index,
            word: self.word,
        })
    }

    /// The 16 symbols of this packet in transmission order.
    pub fn symbols(&self) -> [Symbol; SYMBOLS_PER_PACKET] {
        let mut symbols = [Symbol::NEUTRAL; SYMBOLS_PER_PACKET];
        for (byte_pos, byte) in self.to_bytes().into_iter().enumerate() {
            for offset in 0..SYMBOLS_PER_BYTE {
                let pair = SYMBOLS_PER_BYTE - 1 - offset;
                symbols[byte_pos * SYMBOLS_PER_BYTE + offset] = Symbol::from_byte_pair(byte, pair);
            }
        }
        symbols
    }

    /// Converts the packet's symbols to colours, chaining from `*prev`.
    ///
    /// `*prev` is left at the last emitted colour so consecutive packets chain.
    pub fn to_colors(&self, prev: &mut Color) -> [Color; SYMBOLS_PER_PACKET] {
        self.symbols().map(|symbol| {
            let next = color_for_symbol(*prev, symbol);
            *prev = next;
            next
        })
    }
}

impl From<Packet> for DecodedPacket {
    fn from(packet: Packet) -> Self {
        Self {
            index: packet.index,
            word: packet.word,
        }
    }
}
