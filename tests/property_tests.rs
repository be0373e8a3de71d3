//! Property-based tests for the colour codec, checksum and receiver.
//!
//! Uses QuickCheck to generate random inputs that verify invariants of the
//! transition mapping, the packet checksum and the decoder state machine.

mod common;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck as qc_quickcheck;

use chromapack::constants::{SEND_BYTE_CAPACITY, WINDOW_SEED};
use chromapack::{Color, Symbol, TransitionEvent, color_for_symbol, crc8, symbol_for_transition};

use common::*;

fn color_from(byte: u8) -> Color {
    Color::ALL[usize::from(byte) % Color::ALL.len()]
}

/// Property: the transition mapping is a bijection for every previous colour.
#[qc_quickcheck]
fn prop_transition_mapping_is_bijective(prev: u8, symbol: u8) -> bool {
    let prev = color_from(prev);
    let symbol = Symbol::new(symbol % 4);
    let color = color_for_symbol(prev, symbol);
    color != prev && symbol_for_transition(prev, color) == symbol
}

/// Property: decoding any transition yields a valid 2-bit symbol.
#[qc_quickcheck]
fn prop_decoded_symbols_fit_two_bits(prev: u8, curr: u8) -> bool {
    symbol_for_transition(color_from(prev), color_from(curr)).is_valid()
}

/// Property: CRC is deterministic.
#[qc_quickcheck]
fn prop_crc8_is_deterministic(word: u16, index: u8) -> bool {
    crc8(word, index) == crc8(word, index)
}

/// Property: flipping any single input bit changes the checksum.
#[qc_quickcheck]
fn prop_crc8_detects_single_bit_flips(word: u16, index: u8, bit: u8) -> bool {
    let bit = bit % 24;
    let base = crc8(word, index);
    if bit < 16 {
        crc8(word ^ (1 << bit), index) != base
    } else {
        crc8(word, index ^ (1 << (bit - 16))) != base
    }
}

/// Property: a single packet replayed into a fresh decoder completes on its final event.
#[qc_quickcheck]
fn prop_single_packet_is_recovered(index: u8, word: u16) -> bool {
    let mut decoder = capturing_decoder();
    let events = packet_events(index, word);
    let last = events.iter().map(|e| decoder.feed(*e)).last().flatten();
    last.map(|p| (p.index, p.word)) == Some((index, word))
        && decoder.received_word(index) == word
}

/// Property: every packet of a message validates at its boundary.
#[qc_quickcheck]
fn prop_message_packets_complete_at_boundaries(data: Vec<u8>) -> TestResult {
    if data.len() > SEND_BYTE_CAPACITY {
        return TestResult::discard();
    }
    let events = message_events(&data);
    let words = message_words(&data);
    let mut decoder = capturing_decoder();
    assert_every_packet_completes(&mut decoder, &events, &words);
    TestResult::passed()
}

/// Property: holds shorter than the noise floor never change decoder state.
#[qc_quickcheck]
fn prop_debounced_events_change_nothing(events: Vec<(u8, u8)>) -> bool {
    let mut decoder = capturing_decoder();
    for (color, duration) in events {
        let duration = u32::from(duration) % 60;
        decoder.feed(TransitionEvent::new(color_from(color), duration));
    }
    decoder.window() == WINDOW_SEED
        && decoder.previous_color() == Color::Off
        && decoder.sink().is_empty()
        && decoder.received_words().iter().all(|&w| w == 0)
}

/// Property: repeating the previous colour is a no-op however often it happens.
#[qc_quickcheck]
fn prop_neutral_hold_is_idempotent(color: u8, repeats: u8, duration: u16) -> TestResult {
    let color = color_from(color);
    if color == Color::Off {
        return TestResult::discard();
    }
    let mut decoder = capturing_decoder();
    decoder.feed(TransitionEvent::new(color, 125));
    let window = decoder.window();
    let seen = decoder.sink().len();
    for _ in 0..repeats {
        decoder.feed(TransitionEvent::new(color, 60 + u32::from(duration)));
    }
    TestResult::from_bool(
        decoder.window() == window
            && decoder.previous_color() == color
            && decoder.sink().len() == seen,
    )
}
