use crate::{Alphabet, PADDING};

/// Number of symbols produced for `src_len` input bytes, padding included.
pub const fn encoded_len(src_len: usize) -> usize {
    ((src_len + 4) / 5) * 8
}

#[inline(always)]
fn split_block(chunk: &[u8; 5]) -> [u8; 8] {
    [
        (chunk[0] & 0xF8) >> 3,
        ((chunk[0] & 0x07) << 2) | ((chunk[1] & 0xC0) >> 6),
        (chunk[1] & 0x3E) >> 1,
        ((chunk[1] & 0x01) << 4) | ((chunk[2] & 0xF0) >> 4),
        ((chunk[2] & 0x0F) << 1) | (chunk[3] >> 7),
        (chunk[3] & 0x7C) >> 2,
        ((chunk[3] & 0x03) << 3) | ((chunk[4] & 0xE0) >> 5),
        chunk[4] & 0x1F,
    ]
}

/// Encodes `src` into the front of `dst` and returns the number of symbols written.
///
/// # Panics
///
/// Panics if `dst` is shorter than [`encoded_len`]`(src.len())`.
pub fn encode_into(src: &[u8], dst: &mut [u8], alphabet: Alphabet) -> usize {
    let len = encoded_len(src.len());
    if dst.len() < len {
        panic!("destination buffer too small");
    }

    for (src_chunk, dst_chunk) in src.chunks(5).zip(dst.chunks_exact_mut(8)) {
        let mut padded_chunk = [0u8; 5];
        padded_chunk[..src_chunk.len()].copy_from_slice(src_chunk);

        // ceil(src_chunk.len() * 8 / 5): symbols carrying at least one input bit
        let data_len = (src_chunk.len() * 8 + 4) / 5;
        let values = split_block(&padded_chunk);
        for (i, (out, value)) in dst_chunk.iter_mut().zip(values).enumerate() {
            *out = if i < data_len { alphabet.symbol_for(value) } else { PADDING };
        }
    }
    len
}

/// Encodes `src`, padding the final block with `=`. Empty input gives empty output.
pub fn encode(src: impl AsRef<[u8]>, alphabet: Alphabet) -> Vec<u8> {
    let src = src.as_ref();
    let mut dst = vec![0u8; encoded_len(src.len())];
    encode_into(src, &mut dst, alphabet);
    dst
}
