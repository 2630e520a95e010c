//! Fixed 2-bit encoding of nucleotides: A=00, C=01, G=10, T=11.
//!
//! Only upper-case A, C, G, T are accepted. Everything else is an
//! [SequenceError::InvalidSymbol].

use aethel_core::errors::{Result, SequenceError};

use crate::consts::PAIR_LENGTH;

/// Marks bytes that are not part of the nucleotide alphabet.
const NOT_A_BASE: u8 = 0xFF;

/// A lookup table that maps ASCII nucleotide characters to their 2-bit code.
/// Note this is not the UCSC 2bit order; the codes follow alphabetical order.
const DNA_2BIT_ENCODING_ARRAY: [u8; 256] = {
    let mut arr = [NOT_A_BASE; 256];
    arr[b'A' as usize] = 0b00;
    arr[b'C' as usize] = 0b01;
    arr[b'G' as usize] = 0b10;
    arr[b'T' as usize] = 0b11;
    arr
};

/// 2-bit code rendered as a bit string, indexed by the code.
const DNA_2BIT_STRINGS: [&str; 4] = ["00", "01", "10", "11"];

/// Look up the 2-bit code of a nucleotide, if it is one.
pub fn symbol_bits(symbol: char) -> Option<u8> {
    if !symbol.is_ascii() {
        return None;
    }
    match DNA_2BIT_ENCODING_ARRAY[symbol as usize] {
        NOT_A_BASE => None,
        bits => Some(bits),
    }
}

///
/// Encode a single nucleotide as a 2-character bit string.
///
/// # Arguments
/// * `symbol` - one of A, C, G, T
///
/// # Returns
/// * the bit string, e.g. `"11"` for `T`
///
pub fn encode(symbol: char) -> Result<&'static str> {
    encode_at(symbol, 0)
}

fn encode_at(symbol: char, position: usize) -> Result<&'static str> {
    symbol_bits(symbol)
        .map(|bits| DNA_2BIT_STRINGS[bits as usize])
        .ok_or(SequenceError::InvalidSymbol { symbol, position })
}

///
/// Encode a 2-base sequence as a 4-character bit string, first base first.
///
/// Symbols are checked before the length, so `"Z"` reports the bad symbol
/// rather than the short input.
///
/// # Errors
/// * `InvalidSymbol` if any character is not A, C, G or T
/// * `InvalidLength` if the input does not hold exactly two bases
///
pub fn encode_pair(pair: &str) -> Result<String> {
    let mut encoded = String::with_capacity(PAIR_LENGTH * 2);
    let mut found = 0;

    for (position, symbol) in pair.chars().enumerate() {
        let bits = encode_at(symbol, position)?;
        if found < PAIR_LENGTH {
            encoded.push_str(bits);
        }
        found += 1;
    }

    if found != PAIR_LENGTH {
        return Err(SequenceError::InvalidLength {
            expected: PAIR_LENGTH,
            found,
        });
    }

    Ok(encoded)
}

/// Render the encoded pair as a computational-basis ket, e.g. `|0011>`.
pub fn qubit_ket(pair: &str) -> Result<String> {
    encode_pair(pair).map(|bits| format_ket(&bits))
}

pub(crate) fn format_ket(bits: &str) -> String {
    format!("|{bits}>")
}
