//! Packet checksum calculation.
//!
//! Packets are protected by an 8-bit CRC with polynomial `0x07`, initial value `0x00`,
//! no input/output reflection and no final XOR. This is the catalogued CRC-8/SMBUS
//! algorithm, so the `crc` crate's table-driven implementation is used directly.
//!
//! The checksum covers three bytes in this order: word low byte, word high byte, index.

use crc::{CRC_8_SMBUS, Crc};
use std::fmt;

/// A reusable, pre-initialized packet CRC instance.
///
/// The decoder recomputes the checksum after every symbol, so it keeps one of these
/// around instead of rebuilding the lookup table each time.
pub struct CrcCalculator {
    crc8_calculator: Crc<u8>,
}

impl fmt::Debug for CrcCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrcCalculator")
            .field("crc8_calculator", &format_args!("Crc<u8>(CRC8_SMBUS_Algo)"))
            .finish()
    }
}

impl CrcCalculator {
    /// Creates a new `CrcCalculator`.
    pub fn new() -> Self {
        Self {
            crc8_calculator: Crc::<u8>::new(&CRC_8_SMBUS),
        }
    }

    /// Checksum of a `(word, index)` pair.
    #[inline]
    pub fn packet_crc8(&self, word: u16, index: u8) -> u8 {
        let [low, high] = word.to_le_bytes();
        self.crc8(&[low, high, index])
    }

    /// Raw CRC-8 over an arbitrary byte slice.
    #[inline]
    pub fn crc8(&self, input: &[u8]) -> u8 {
        self.crc8_calculator.checksum(input)
    }
}

impl Default for CrcCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculates the packet checksum for `(word, index)` directly.
///
/// Builds a fresh `Crc<u8>` on each call; hot paths should hold a [`CrcCalculator`].
///
/// # Parameters
/// - `word`: The 16-bit payload word.
/// - `index`: The packet index.
///
/// # Returns
/// The CRC-8 over `[word & 0xFF, word >> 8, index]`.
pub fn crc8(word: u16, index: u8) -> u8 {
    CrcCalculator::new().packet_crc8(word, index)
}
