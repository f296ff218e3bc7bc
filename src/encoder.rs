//! Text to CODE128 Subset-B symbol values conversion

use core::ops::Deref;

use crate::tables::{CHECKSUM_MODULO, START_B, STOP};
use crate::Error;

/// First code point of code set B (space), encoded as data value 0.
pub const FIRST_CHAR: u32 = 32;
/// Last code point accepted by code set B (DEL), encoded as data value 95.
pub const LAST_CHAR: u32 = 127;

/// Symbols added around the data values: start, checksum and stop.
pub const OVERHEAD: usize = 3;

/// Returns the number of symbols needed to encode a text of `chars` characters.
#[inline]
pub const fn symbol_count(chars: usize) -> usize {
    chars + OVERHEAD
}

/// Maps a character to its code set B data value.
#[inline]
fn data_value(ch: char) -> Option<u8> {
    let c = ch as u32;
    if (FIRST_CHAR..=LAST_CHAR).contains(&c) {
        Some((c - FIRST_CHAR) as u8)
    } else {
        None
    }
}

/// Scans `text` left to right and returns its length in characters, or the
/// first character code set B cannot represent.
fn validate(text: &str) -> Result<usize, Error> {
    let mut count = 0;
    for (index, ch) in text.chars().enumerate() {
        if data_value(ch).is_none() {
            return Err(Error::UnsupportedChar { index, ch });
        }
        count += 1;
    }
    Ok(count)
}

/// Computes the checksum symbol of the given data values. The accumulator
/// starts at the start B value and the first data value is weighted by 1.
pub fn checksum(data: &[u8]) -> u8 {
    let sum = data.iter()
        .enumerate()
        .fold(START_B as u32, |acc, (i, &v)| {
            // weights only matter modulo 103, which keeps every term small
            let weight = (i % CHECKSUM_MODULO as usize) as u32 + 1;
            (acc + v as u32 * weight) % CHECKSUM_MODULO
        });
    (sum % CHECKSUM_MODULO) as u8
}

/// Encodes `text` into `storage` and returns the number of symbols written.
/// Nothing is written if the text is rejected or `storage` is too short.
pub fn encode_into(text: &str, storage: &mut [u8]) -> Result<usize, Error> {
    let needed = symbol_count(validate(text)?);
    if storage.len() < needed {
        return Err(Error::StorageTooSmall { needed, available: storage.len() });
    }

    storage[0] = START_B;
    let mut i = 1;
    for ch in text.chars() {
        // validated above
        storage[i] = data_value(ch).ok_or(Error::UnsupportedChar { index: i - 1, ch })?;
        i += 1;
    }
    storage[i] = checksum(&storage[1..i]);
    storage[i + 1] = STOP;

    Ok(needed)
}

/// Encodes `text` to a checksummed symbol sequence: start B, data values,
/// checksum, stop.
pub fn encode(text: &str) -> Result<Symbols, Error> {
    // byte length bounds the character count
    let mut storage = vec![0u8; symbol_count(text.len())];
    let used = encode_into(text, &mut storage)?;
    storage.truncate(used);

    Ok(Symbols(storage))
}

/// A checksummed CODE128 Subset-B symbol sequence. Never empty: it always
/// starts with [START_B] and ends with [STOP].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols(Vec<u8>);

impl Symbols {
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Data values, without start, checksum and stop.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.0[1..self.0.len() - 2]
    }

    #[inline]
    pub fn checksum(&self) -> u8 {
        self.0[self.0.len() - 2]
    }

    /// Width of the whole sequence in modules, quiet zones excluded.
    pub fn modules(&self) -> Result<u64, Error> {
        crate::geometry::data_modules(&self.0)
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for Symbols {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Symbols {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Symbols {
    type Item = &'a u8;
    type IntoIter = core::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
