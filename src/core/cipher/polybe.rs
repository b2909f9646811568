//! Polybe square cipher.
//!
//! ```text
//!     1 2 3 4 5
//!   1 A B C D E
//!   2 F G H I K
//!   3 L M N O P
//!   4 Q R S T U
//!   5 V W X Y Z
//! ```
//!
//! I and J share cell `24`, so J does not survive a round trip.

use super::Cipher;
use crate::core::constants::SQUARE_SIDE;
use crate::core::normalize::{is_cipher_letter, is_coordinate_digit};
use crate::error::CipherError;

const SQUARE: [[u8; SQUARE_SIDE]; SQUARE_SIDE] =
    [*b"ABCDE", *b"FGHIK", *b"LMNOP", *b"QRSTU", *b"VWXYZ"];

/// 1-based `(row, col)` of every letter, indexed by `letter - 'A'`.
const COORDINATES: [(u8, u8); 26] = build_coordinates();

const fn build_coordinates() -> [(u8, u8); 26] {
    let mut table = [(0u8, 0u8); 26];
    let mut row = 0;
    while row < SQUARE_SIDE {
        let mut col = 0;
        while col < SQUARE_SIDE {
            let letter = SQUARE[row][col];
            table[(letter - b'A') as usize] = (row as u8 + 1, col as u8 + 1);
            col += 1;
        }
        row += 1;
    }
    table[(b'J' - b'A') as usize] = table[(b'I' - b'A') as usize];
    table
}

/// Coordinates of an uppercase letter; J resolves to I's cell.
pub fn coordinates(letter: u8) -> Option<(u8, u8)> {
    if is_cipher_letter(letter) {
        Some(COORDINATES[(letter - b'A') as usize])
    } else {
        None
    }
}

/// Letter at 1-based `(row, col)`, if inside the square.
pub fn letter_at(row: u8, col: u8) -> Option<u8> {
    let side = SQUARE_SIDE as u8;
    if (1..=side).contains(&row) && (1..=side).contains(&col) {
        Some(SQUARE[(row - 1) as usize][(col - 1) as usize])
    } else {
        None
    }
}

/// Space-separated coordinate tokens for folded text.
///
/// Whitespace separates tokens and is dropped; any other non-letter is
/// emitted as a token of its own.
pub(crate) fn encode_tokens(text: &str) -> String {
    let mut tokens: Vec<String> = Vec::with_capacity(text.len());
    for c in text.chars() {
        match u8::try_from(c).ok().and_then(coordinates) {
            Some((row, col)) => tokens.push(format!("{}{}", row, col)),
            None if c.is_whitespace() => {}
            None => tokens.push(c.to_string()),
        }
    }
    tokens.join(" ")
}

/// Decode whitespace-separated tokens; unrecognized tokens are echoed.
pub(crate) fn decode_tokens(coded: &str) -> String {
    coded
        .split_whitespace()
        .fold(String::with_capacity(coded.len()), |mut out, token| {
            match decode_token(token) {
                Some(letter) => out.push(char::from(letter)),
                None => out.push_str(token),
            }
            out
        })
}

fn decode_token(token: &str) -> Option<u8> {
    match token.as_bytes() {
        [row, col] if is_coordinate_digit(*row) && is_coordinate_digit(*col) => {
            letter_at(row - b'0', col - b'0')
        }
        _ => None,
    }
}

/// Keyless coordinate substitution. Decoding never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Polybe;

impl Cipher for Polybe {
    type Key = ();

    fn encode(&self, text: &str, _key: &()) -> Result<String, CipherError> {
        Ok(encode_tokens(text))
    }

    fn decode(&self, text: &str, _key: &()) -> Result<String, CipherError> {
        Ok(decode_tokens(text))
    }

    fn name(&self) -> &'static str {
        "polybe"
    }
}
