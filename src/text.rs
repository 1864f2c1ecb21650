//! `&str` conveniences. UTF-8 is handled only at the boundary; lengths and
//! invalid characters are counted in `char`s, so a multi-byte character is
//! reported as one invalid character rather than as a length error.

use crate::dec::decode_blocks;
use crate::valid::validate_symbols;
use crate::{encode, Alphabet, DecodeOptions, DecodingError, TextError};

/// Encodes the UTF-8 bytes of `text`.
pub fn encode_str(text: &str, alphabet: Alphabet) -> String {
    encode(text, alphabet).into_iter().map(char::from).collect()
}

/// Decodes `encoded`, validating it character by character.
pub fn decode_str(encoded: &str, alphabet: Alphabet) -> Result<Vec<u8>, DecodingError> {
    validate_symbols(encoded.chars(), alphabet, DecodeOptions::STRICT)?;
    // validated input is ASCII, so bytes and chars coincide
    decode_blocks(encoded.as_bytes(), alphabet)
}

/// Decodes `encoded` and interprets the result as UTF-8.
pub fn decode_to_string(encoded: &str, alphabet: Alphabet) -> Result<String, TextError> {
    let bytes = decode_str(encoded, alphabet)?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_str() {
        assert_eq!(encode_str("", Alphabet::Standard), "");
        assert_eq!(encode_str("foobar", Alphabet::Standard), "MZXW6YTBOI======");
        assert_eq!(encode_str("foobar", Alphabet::Hex), "CPNMUOJ1E8======");
        assert_eq!(encode_str("\u{e9}", Alphabet::Standard), "YOUQ====");
    }

    #[test]
    fn test_decode_to_string() {
        assert_eq!(decode_to_string("MZXW6YTBOI======", Alphabet::Standard).unwrap(), "foobar");
        assert_eq!(decode_to_string("yOuQ====", Alphabet::Standard).unwrap(), "\u{e9}");
    }

    #[test]
    fn test_decode_to_string_rejects_invalid_utf8() {
        // 0xFF
        let error = decode_to_string("74======", Alphabet::Standard).unwrap_err();
        assert!(matches!(error, TextError::Utf8(_)), "{:?}", error);
    }

    #[test]
    fn test_decode_emoji() {
        let ranges = [0x1F600..=0x1F636, 0x1F645..=0x1F64F, 0x1F910..=0x1F91F, 0x1F30D..=0x1F52D];
        for scalar in ranges.into_iter().flatten() {
            let Some(emoji) = char::from_u32(scalar) else {
                continue;
            };
            let encoded = format!("{}=======", emoji);
            assert_eq!(
                decode_str(&encoded, Alphabet::Standard),
                Err(DecodingError::InvalidCharacter(vec![emoji])),
                "input {:?}",
                encoded
            );
            assert_eq!(
                decode_str(&encoded, Alphabet::Hex),
                Err(DecodingError::InvalidCharacter(vec![emoji])),
                "input {:?}",
                encoded
            );
        }
    }

    #[test]
    fn test_decode_str_length_counts_chars() {
        assert_eq!(
            decode_str("\u{e9}MY=====", Alphabet::Standard),
            Err(DecodingError::InvalidCharacter(vec!['\u{e9}']))
        );
        assert_eq!(
            decode_str("\u{e9}MY======", Alphabet::Standard),
            Err(DecodingError::InvalidLength)
        );
    }

    #[test]
    fn test_decode_str_matches_decode() {
        for input in ["MY======", "mzxw6ytboi======", "MZXW6YQ=", "=ZXW6===", "MZXW6", ""] {
            assert_eq!(
                decode_str(input, Alphabet::Standard),
                crate::decode(input, Alphabet::Standard),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_decode_str_many_distinct_invalid_characters() {
        // Greek and Cyrillic letters, each repeated, between valid symbols
        let offenders: Vec<char> = ('\u{391}'..='\u{3A9}')
            .chain('\u{410}'..='\u{44F}')
            .filter(|c| c.is_alphabetic())
            .collect();
        let mut src = String::new();
        for &offender in offenders.iter().chain(offenders.iter()) {
            src.push(offender);
            src.push('M');
        }
        while src.chars().count() % 8 != 0 {
            src.push('A');
        }
        assert_eq!(
            decode_str(&src, Alphabet::Standard),
            Err(DecodingError::InvalidCharacter(offenders))
        );
    }
}
