use crate::valid::validate_symbols;
use crate::{Alphabet, DecodingError, PADDING};

/// Controls how much of RFC 4648's framing the decoder insists on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecodeOptions {
    /// Require a non-empty input whose length is a multiple of 8. When unset,
    /// trailing padding may be omitted and empty input decodes to nothing.
    pub strict: bool,
}

impl DecodeOptions {
    pub const STRICT: Self = Self { strict: true };
    pub const LENIENT: Self = Self { strict: false };
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::STRICT
    }
}

#[inline(always)]
fn join_block(values: &[u8; 8]) -> [u8; 5] {
    [
        (values[0] << 3) | (values[1] >> 2),
        (values[1] << 6) | (values[2] << 1) | (values[3] >> 4),
        (values[3] << 4) | (values[4] >> 1),
        (values[4] << 7) | (values[5] << 2) | (values[6] >> 3),
        (values[6] << 5) | values[7],
    ]
}

/// Decodes one block of at most 8 symbols, appending its bytes to `dst`.
///
/// Only the final block may be short or carry padding. A final block with
/// `n` data symbols yields `n * 5 / 8` bytes.
fn decode_block(
    chunk: &[u8],
    alphabet: Alphabet,
    is_final: bool,
    dst: &mut Vec<u8>,
) -> Result<(), DecodingError> {
    let mut values = [0u8; 8];
    let mut data_len = 0;
    for (value, &symbol) in values.iter_mut().zip(chunk) {
        if symbol == PADDING {
            break;
        }
        *value = alphabet
            .value_for(symbol)
            .ok_or_else(|| DecodingError::InvalidCharacter(vec![char::from(symbol)]))?;
        data_len += 1;
    }

    if chunk[data_len..].iter().any(|&symbol| symbol != PADDING) {
        return Err(DecodingError::InvalidPaddingCharacters);
    }
    if !is_final && data_len < 8 {
        return Err(DecodingError::InvalidPaddingCharacters);
    }
    if data_len < 2 {
        // the first byte needs two symbols
        return Err(if data_len < chunk.len() {
            DecodingError::InvalidPaddingCharacters
        } else {
            DecodingError::MissingCharacter
        });
    }

    let bytes = join_block(&values);
    dst.extend_from_slice(&bytes[..data_len * 5 / 8]);
    Ok(())
}

/// Transcodes validated input. Still rejects anything it cannot map, rather
/// than reading it as zero bits.
pub(crate) fn decode_blocks(src: &[u8], alphabet: Alphabet) -> Result<Vec<u8>, DecodingError> {
    let block_count = src.len().div_ceil(8);
    let mut dst = Vec::with_capacity(block_count * 5);
    for (i, chunk) in src.chunks(8).enumerate() {
        decode_block(chunk, alphabet, i + 1 == block_count, &mut dst)?;
    }
    Ok(dst)
}

/// Decodes `src` with the given options.
///
/// Validation runs to completion before any byte is produced, and no partial
/// output is returned alongside an error.
///
/// A final block holding a single data symbol cannot yield a byte. In lenient
/// mode it fails with [`DecodingError::MissingCharacter`] when the input simply
/// ends (`"MZXW6YTBO"`), and with [`DecodingError::InvalidPaddingCharacters`]
/// when padding stands where the second symbol belongs (`"MZXW6YTBO="`).
pub fn decode_with(
    src: impl AsRef<[u8]>,
    alphabet: Alphabet,
    options: DecodeOptions,
) -> Result<Vec<u8>, DecodingError> {
    let src = src.as_ref();
    validate_symbols(src.iter().copied(), alphabet, options)?;
    decode_blocks(src, alphabet)
}

/// Decodes padded base32, accepting either letter case.
///
/// Empty input is rejected with [`DecodingError::InvalidLength`]; use
/// [`decode_with`] and [`DecodeOptions::LENIENT`] to accept it.
pub fn decode(src: impl AsRef<[u8]>, alphabet: Alphabet) -> Result<Vec<u8>, DecodingError> {
    decode_with(src, alphabet, DecodeOptions::STRICT)
}
