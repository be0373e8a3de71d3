//! Protocol constants shared by the encoder and decoder.

/// Default noise floor: observed holds shorter than this many time units are ignored.
pub const DEFAULT_MIN_DURATION: u32 = 60;
/// Default hold time for every transmitted colour, in time units.
pub const DEFAULT_DURATION: u32 = 125;

/// Initial receive window value. An all-zero window is itself a valid packet
/// (index 0, word 0, checksum 0), so a zero seed would report phantom packets
/// while the first symbols shift in.
pub const WINDOW_SEED: u32 = 12_345_678;

/// Number of payload bits carried by one colour transition.
pub const BITS_PER_SYMBOL: u32 = 2;
/// Mask selecting one symbol's worth of bits.
pub const SYMBOL_MASK: u8 = 0b11;
/// Largest valid symbol value.
pub const MAX_SYMBOL: u8 = 3;
/// Symbols per serialized byte (most-significant pair first).
pub const SYMBOLS_PER_BYTE: usize = 4;
/// Bytes per packet: index, word low, word high, checksum.
pub const PACKET_BYTES: usize = 4;
/// Symbols (and therefore transmitted colours) per packet.
pub const SYMBOLS_PER_PACKET: usize = PACKET_BYTES * SYMBOLS_PER_BYTE;

/// Maximum number of 16-bit words staged for transmission.
pub const SEND_WORD_CAPACITY: usize = 256;
/// Maximum number of bytes accepted by `set_send_data` before silent truncation.
///
/// Derived from the word capacity so that all 256 packet indices are usable. A
/// sender capping at 256 bytes instead stops at 128 words (indices 0 to 127).
pub const SEND_BYTE_CAPACITY: usize = SEND_WORD_CAPACITY * 2;
/// Maximum number of transmit commands; one per symbol of every staged word.
pub const COMMAND_CAPACITY: usize = SEND_WORD_CAPACITY * SYMBOLS_PER_PACKET;

/// Number of slots in the received-word store, one per possible packet index.
pub const RECEIVE_STORE_SIZE: usize = 256;
/// Size in bytes of a full received-store dump.
pub const RECEIVED_DATA_BYTES: usize = RECEIVE_STORE_SIZE * 2;
