//! Reading packed SSZ bitfields as decoded from the API.
//!
//! Decoders keep `aggregation_bits` and `sync_committee_bits` as raw bytes. Bit `i` lives in
//! byte `i / 8` at position `i % 8` (least significant first). A bitvector's length is fixed by
//! the protocol and has to be supplied by the caller; a bitlist encodes its own length with a
//! single delimiter bit set just past the last element.

/// Whether bit `index` is set. Out-of-range indices read as unset.
pub fn bit_at_vector(bits: &[u8], index: usize) -> bool {
    bits.get(index / 8)
        .is_some_and(|byte| byte & (1 << (index % 8)) != 0)
}

/// Number of set bits among the first `len` positions.
///
/// Positions past the end of `bits` read as unset, so the work is bounded by `bits.len()`.
pub fn count_set_bits(bits: &[u8], len: usize) -> usize {
    let full_bytes = (len / 8).min(bits.len());
    let full: usize = bits[..full_bytes]
        .iter()
        .map(|byte| byte.count_ones() as usize)
        .sum();

    let remainder = len % 8;
    let partial = match bits.get(len / 8) {
        Some(byte) if remainder != 0 => (byte & ((1u8 << remainder) - 1)).count_ones() as usize,
        _ => 0,
    };
    full + partial
}

/// Share of a sync committee of `committee_size` members whose bit is set.
///
/// Returns `0.0` for an empty committee.
pub fn sync_committee_participation(bits: &[u8], committee_size: u64) -> f64 {
    if committee_size == 0 {
        return 0.0;
    }

    let len = usize::try_from(committee_size).unwrap_or(usize::MAX);
    count_set_bits(bits, len) as f64 / committee_size as f64
}

/// Number of elements in an SSZ bitlist, i.e. the position of its delimiter bit.
///
/// `None` if the input is empty or its last byte is zero, which no valid bitlist produces.
pub fn bitlist_len(bits: &[u8]) -> Option<usize> {
    let (&last, _) = bits.split_last()?;
    if last == 0 {
        return None;
    }
    let delimiter = 7 - last.leading_zeros() as usize;
    Some((bits.len() - 1) * 8 + delimiter)
}

/// Share of set bits in an SSZ bitlist, ignoring the delimiter.
pub fn bitlist_participation(bits: &[u8]) -> Option<f64> {
    let len = bitlist_len(bits)?;
    if len == 0 {
        return Some(0.0);
    }
    Some(count_set_bits(bits, len) as f64 / len as f64)
}
