use crate::{Alphabet, DecodeOptions, DecodingError, PADDING};
use std::collections::HashSet;

/// One encoded character: a raw byte, or a `char` from text input.
pub(crate) trait Symbol: Copy {
    fn ascii(self) -> Option<u8>;
    fn into_char(self) -> char;
}

impl Symbol for u8 {
    #[inline(always)]
    fn ascii(self) -> Option<u8> {
        Some(self)
    }

    fn into_char(self) -> char {
        char::from(self)
    }
}

impl Symbol for char {
    #[inline(always)]
    fn ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self as u8)
    }

    fn into_char(self) -> char {
        self
    }
}

#[inline(always)]
fn is_padding<S: Symbol>(symbol: S) -> bool {
    symbol.ascii() == Some(PADDING)
}

fn check_length(len: usize, options: DecodeOptions) -> Result<(), DecodingError> {
    if options.strict && (len == 0 || len % 8 != 0) {
        return Err(DecodingError::InvalidLength);
    }
    Ok(())
}

fn check_characters<S: Symbol>(
    symbols: impl Iterator<Item = S>,
    alphabet: Alphabet,
) -> Result<(), DecodingError> {
    // `invalid` keeps first-appearance order, `seen` keeps the scan linear
    let mut invalid: Vec<char> = Vec::new();
    let mut seen: HashSet<char> = HashSet::new();
    for symbol in symbols {
        let legal = match symbol.ascii() {
            Some(PADDING) => true,
            Some(ascii) => alphabet.value_for(ascii).is_some(),
            None => false,
        };
        let character = symbol.into_char();
        if !legal && seen.insert(character) {
            invalid.push(character);
        }
    }

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(DecodingError::InvalidCharacter(invalid))
    }
}

fn check_padding<S: Symbol>(mut symbols: impl Iterator<Item = S>) -> Result<(), DecodingError> {
    match symbols.next() {
        Some(first) if is_padding(first) => return Err(DecodingError::InvalidPaddingCharacters),
        Some(_) => {}
        None => return Ok(()),
    }

    let mut symbols = symbols.skip_while(|&symbol| !is_padding(symbol));
    if symbols.all(is_padding) {
        Ok(())
    } else {
        Err(DecodingError::InvalidPaddingCharacters)
    }
}

pub(crate) fn validate_symbols<S, I>(
    symbols: I,
    alphabet: Alphabet,
    options: DecodeOptions,
) -> Result<(), DecodingError>
where
    S: Symbol,
    I: Iterator<Item = S> + Clone,
{
    check_length(symbols.clone().count(), options)?;
    check_characters(symbols.clone(), alphabet)?;
    check_padding(symbols)
}

/// Checks length, character legality and padding placement, in that order.
///
/// Every character is inspected before a [`DecodingError::InvalidCharacter`]
/// is returned, so the error lists every offender. Successful validation
/// guarantees the input is ASCII.
pub fn validate(
    src: impl AsRef<[u8]>,
    alphabet: Alphabet,
    options: DecodeOptions,
) -> Result<(), DecodingError> {
    validate_symbols(src.as_ref().iter().copied(), alphabet, options)
}
