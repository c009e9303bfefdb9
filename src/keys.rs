//! Well known MIFARE Classic keys.
//!
//! The table is stored flat, `KEY_SIZE` bytes per record, and a record is
//! only copied out when asked for.

use super::{Error, Result};

pub const KEY_SIZE: usize = 6;

pub type MifareKey = [u8; KEY_SIZE];

// Do not index this array directly, go through `DEFAULT_KEYS`.
#[rustfmt::skip]
static DEFAULT_KEY_BYTES: [u8; 10 * KEY_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // factory default
    0xA0, 0xB0, 0xC0, 0xD0, 0xE0, 0xF0,
    0xA1, 0xB1, 0xC1, 0xD1, 0xE1, 0xF1,
    0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5, // MAD key A
    0xB0, 0xB1, 0xB2, 0xB3, 0xB4, 0xB5,
    0x4D, 0x3A, 0x99, 0xC3, 0x51, 0xDD,
    0x1A, 0x98, 0x2C, 0x7E, 0x45, 0x9A,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xD3, 0xF7, 0xD3, 0xF7, 0xD3, 0xF7, // NFC Forum key A
    0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF,
];

pub static DEFAULT_KEYS: KeyTable = KeyTable::new(&DEFAULT_KEY_BYTES);

#[derive(Debug, Clone, Copy)]
pub struct KeyTable {
    bytes: &'static [u8],
}

impl KeyTable {
    /// Wraps flat key storage. Panics (at compile time when used in a
    /// `const`/`static`) if `bytes` is not a whole number of keys.
    pub const fn new(bytes: &'static [u8]) -> Self {
        assert!(bytes.len() % KEY_SIZE == 0);
        Self { bytes }
    }

    pub const fn len(&self) -> usize {
        self.bytes.len() / KEY_SIZE
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Copies key `index` into `buffer` and hands the buffer back.
    ///
    /// `buffer` is left untouched when `index` is out of range.
    pub fn get<'a>(&self, index: usize, buffer: &'a mut MifareKey) -> Result<&'a mut MifareKey> {
        if index >= self.len() {
            return Err(Error::OutOfRange);
        }
        let offset = index * KEY_SIZE;
        buffer.copy_from_slice(&self.bytes[offset..offset + KEY_SIZE]);
        Ok(buffer)
    }

    pub fn iter(&self) -> Keys {
        Keys {
            table: *self,
            index: 0,
        }
    }
}

impl IntoIterator for &KeyTable {
    type Item = MifareKey;
    type IntoIter = Keys;

    fn into_iter(self) -> Keys {
        self.iter()
    }
}

/// Yields the keys of a table one at a time.
pub struct Keys {
    table: KeyTable,
    index: usize,
}

impl Iterator for Keys {
    type Item = MifareKey;

    fn next(&mut self) -> Option<MifareKey> {
        let mut key = [0u8; KEY_SIZE];
        self.table.get(self.index, &mut key).ok()?;
        self.index += 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.table.len().saturating_sub(self.index);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Keys {}

/// Parses a key written as 12 hex digits, e.g. `a0b0c0d0e0f0` or
/// `A0:B0:C0:D0:E0:F0`.
pub fn parse_key(s: &str) -> Option<MifareKey> {
    let mut key = [0u8; KEY_SIZE];
    let mut digits = s.bytes().filter(|&c| c != b':');
    for byte in key.iter_mut() {
        let hi = hex_value(digits.next()?)?;
        let lo = hex_value(digits.next()?)?;
        *byte = (hi << 4) | lo;
    }
    if digits.next().is_some() {
        return None;
    }
    Some(key)
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    const GOLDEN: [MifareKey; 10] = [
        [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
        [0xA0, 0xB0, 0xC0, 0xD0, 0xE0, 0xF0],
        [0xA1, 0xB1, 0xC1, 0xD1, 0xE1, 0xF1],
        [0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5],
        [0xB0, 0xB1, 0xB2, 0xB3, 0xB4, 0xB5],
        [0x4D, 0x3A, 0x99, 0xC3, 0x51, 0xDD],
        [0x1A, 0x98, 0x2C, 0x7E, 0x45, 0x9A],
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0xD3, 0xF7, 0xD3, 0xF7, 0xD3, 0xF7],
        [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF],
    ];

    #[test]
    fn default_table_matches_golden() {
        assert_eq!(DEFAULT_KEYS.len(), GOLDEN.len());
        for (i, expected) in GOLDEN.iter().enumerate() {
            let mut key = [0x55u8; KEY_SIZE];
            let got = DEFAULT_KEYS.get(i, &mut key).unwrap();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn get_returns_the_callers_buffer() {
        let mut key = [0u8; KEY_SIZE];
        let ptr = &key as *const MifareKey;
        let got = DEFAULT_KEYS.get(1, &mut key).unwrap();
        assert_eq!(got as *const MifareKey, ptr);
    }

    #[test]
    fn out_of_range_leaves_buffer_alone() {
        let mut key = [0x42u8; KEY_SIZE];
        for &i in &[DEFAULT_KEYS.len(), DEFAULT_KEYS.len() + 1, usize::MAX] {
            assert_eq!(DEFAULT_KEYS.get(i, &mut key), Err(Error::OutOfRange));
            assert_eq!(key, [0x42u8; KEY_SIZE]);
        }
    }

    #[test]
    fn iter_walks_every_key_in_order() {
        let keys: Vec<MifareKey> = DEFAULT_KEYS.iter().collect();
        assert_eq!(keys, GOLDEN.to_vec());
        assert_eq!(DEFAULT_KEYS.iter().len(), 10);
    }

    #[test]
    fn custom_table() {
        static BYTES: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        static TABLE: KeyTable = KeyTable::new(&BYTES);
        assert_eq!(TABLE.len(), 2);
        assert!(!TABLE.is_empty());
        let mut key = [0u8; KEY_SIZE];
        assert_eq!(*TABLE.get(1, &mut key).unwrap(), [7, 8, 9, 10, 11, 12]);

        static EMPTY: KeyTable = KeyTable::new(&[]);
        assert!(EMPTY.is_empty());
        assert_eq!(EMPTY.iter().next(), None);
    }

    #[test]
    #[should_panic]
    fn ragged_table_is_rejected() {
        static BYTES: [u8; 7] = [0; 7];
        let _ = KeyTable::new(&BYTES);
    }

    #[test]
    fn parse_plain_and_colon_keys() {
        assert_eq!(parse_key("a0b0c0d0e0f0"), Some(GOLDEN[1]));
        assert_eq!(parse_key("4D:3A:99:C3:51:DD"), Some(GOLDEN[5]));
        assert_eq!(parse_key("ffffffffffff"), Some(GOLDEN[0]));
    }

    #[test]
    fn parse_rejects_bad_keys() {
        assert_eq!(parse_key(""), None);
        assert_eq!(parse_key("a0b0c0d0e0"), None);
        assert_eq!(parse_key("a0b0c0d0e0f0f1"), None);
        assert_eq!(parse_key("g0b0c0d0e0f0"), None);
    }
}
