//! `chromapack`: short binary messages over a five-colour transition link.
//!
//! The link can only report which colour is showing and how long it was held.
//! Messages are split into 16-bit words; each word travels as a 4-byte packet
//! (index, word, CRC-8) whose 16 two-bit symbols are carried by colour
//! *transitions*. The receiver keeps a sliding 32-bit window and re-checks the
//! checksum after every symbol, so no framing signal is needed.
//!
//! ## Core Concepts
//!
//! - **[`color`]**: the colour alphabet and the differential symbol codec.
//! - **[`Packet`]**: index, word and checksum, and their symbol serialization.
//! - **[`Encoder`]**: bytes to a plan of `(colour, duration)` commands.
//! - **[`Decoder`]**: one observed hold at a time back to validated packets.
//! - **[`PacketSink`]**: where the decoder delivers packets.
//! - **[`ColorLink`]**: encoder and decoder behind a byte-array API.
//!
//! ## Quick Start
//!
//! ```rust
//! use chromapack::{ColorLink, DecodedPacket, LinkConfig};
//!
//! fn main() -> Result<(), chromapack::ChromaError> {
//!     let mut tx = ColorLink::new(LinkConfig::default(), ())?;
//!     let mut rx = ColorLink::new(LinkConfig::default(), Vec::<DecodedPacket>::new())?;
//!
//!     // Plan the light sequence for a message.
//!     let commands = tx.set_send_data(b"hi!").to_vec();
//!     assert_eq!(commands.len(), 2 * 16);
//!
//!     // Every detected hold goes into the receiver.
//!     for event in commands {
//!         rx.feed(event);
//!     }
//!
//!     let received = rx.received_data();
//!     assert_eq!(&received[..3], b"hi!");
//!     assert_eq!(rx.decoder().sink().last().map(|p| p.index), Some(1));
//!     Ok(())
//! }
//! ```

pub mod bounded;
pub mod color;
pub mod config;
pub mod constants;
pub mod crc;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod link;
pub mod packet;
pub mod sink;
pub mod types;

pub use color::{Color, color_for_symbol, symbol_for_transition};
pub use config::LinkConfig;
pub use crate::crc::crc8;
pub use decoder::Decoder;
pub use encoder::{Command, Encoder, TransitionEvent, encode_word};
pub use error::ChromaError;
pub use link::ColorLink;
pub use packet::{DecodedPacket, Packet};
pub use sink::{FnSink, PacketSink, TracingSink};
pub use types::{Symbol, Ticks};
pub mod fuzz_harnesses;
