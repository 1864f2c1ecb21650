use std::string::FromUtf8Error;
use thiserror::Error;

/// Why a base32 string was rejected. Encoding never fails.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodingError {
    /// The input is empty or its length is not a multiple of 8 characters.
    #[error("invalid length: expected a non-empty multiple of 8 characters")]
    InvalidLength,

    /// Characters that are neither padding nor part of the alphabet.
    ///
    /// Each offender is listed once, in order of first appearance. Raw input
    /// bytes are reported as the `char` with the same code point.
    #[error("invalid character(s): {0:?}")]
    InvalidCharacter(Vec<char>),

    /// Padding at the start of the input, or followed by a non-padding character.
    #[error("invalid padding: '=' may only form a suffix of the final block")]
    InvalidPaddingCharacters,

    /// The input ended where a symbol was still required.
    #[error("missing character: input ended inside a block")]
    MissingCharacter,
}

/// Failure of [`decode_to_string`](crate::decode_to_string).
#[derive(Debug, Error)]
pub enum TextError {
    #[error(transparent)]
    Decoding(#[from] DecodingError),

    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}
