//! RFC 4648 base32 with the standard and "Extended Hex" alphabets.
//!
//! ```
//! use base32kit::{decode, encode, Alphabet};
//!
//! assert_eq!(encode(b"foobar", Alphabet::Standard), b"MZXW6YTBOI======");
//! assert_eq!(decode("cpnmuoj1e8======", Alphabet::Hex).unwrap(), b"foobar");
//! ```

mod enc;
mod dec;
mod error;
mod text;
mod valid;

pub use crate::enc::{encode, encode_into, encoded_len};
pub use crate::dec::{decode, decode_with, DecodeOptions};
pub use crate::error::{DecodingError, TextError};
pub use crate::text::{decode_str, decode_to_string, encode_str};
pub use crate::valid::validate;

/// Fills an incomplete final block. Not a member of either alphabet.
pub const PADDING: u8 = b'=';

pub(crate) const RFC4648_CHARS: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
pub(crate) const RFC4648HEX_CHARS: &[u8; 32] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";

const INVALID: u8 = u8::MAX;

const fn generate_decode_lut(alphabet: &[u8; 32]) -> [u8; 256] {
    let mut lut = [INVALID; 256];
    let mut i = 0u8;
    while i < 32 {
        let char_code = alphabet[i as usize];
        lut[char_code.to_ascii_lowercase() as usize] = i;
        lut[char_code.to_ascii_uppercase() as usize] = i;
        i += 1;
    }
    lut
}

const RFC4648_LUT: [u8; 256] = generate_decode_lut(RFC4648_CHARS);
const RFC4648HEX_LUT: [u8; 256] = generate_decode_lut(RFC4648HEX_CHARS);

/// Selects one of the two symbol sets defined by RFC 4648.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// `A-Z2-7`, RFC 4648 section 6.
    #[default]
    Standard,
    /// `0-9A-V`, RFC 4648 section 7. Preserves sort order of the encoded data.
    Hex,
}

impl Alphabet {
    /// The 32 upper-case symbols, indexed by 5-bit value.
    pub const fn symbols(self) -> &'static [u8; 32] {
        match self {
            Alphabet::Standard => RFC4648_CHARS,
            Alphabet::Hex => RFC4648HEX_CHARS,
        }
    }

    const fn lut(self) -> &'static [u8; 256] {
        match self {
            Alphabet::Standard => &RFC4648_LUT,
            Alphabet::Hex => &RFC4648HEX_LUT,
        }
    }

    /// Returns the symbol for the low 5 bits of `value`.
    #[inline(always)]
    pub fn symbol_for(self, value: u8) -> u8 {
        self.symbols()[(value & 0x1F) as usize]
    }

    /// Returns the 5-bit value of `symbol`, accepting either letter case.
    ///
    /// Padding and anything outside the alphabet yield `None`.
    #[inline(always)]
    pub fn value_for(self, symbol: u8) -> Option<u8> {
        match self.lut()[symbol as usize] {
            INVALID => None,
            value => Some(value),
        }
    }
}
