use heapless::String;

use super::dump::BLOCK_SIZE;
use super::{Error, Result};

/// Two digits per byte of a block plus a separator between bytes.
pub const HEX_CAPACITY: usize = BLOCK_SIZE * 3 - 1;

pub type HexString = String<HEX_CAPACITY>;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Appends `b` as two uppercase hex digits.
pub fn push_hex_byte<const N: usize>(dst: &mut String<N>, b: u8) -> core::result::Result<(), ()> {
    dst.push(HEX[(b >> 4) as usize] as char)?;
    dst.push(HEX[(b & 0x0f) as usize] as char)
}

/// `[0xA0, 0x05]` -> `"A0:05"`. More than `BLOCK_SIZE` bytes is `NoRoom`.
pub fn fmt_bytes_colon(v: &[u8]) -> Result<HexString> {
    let mut s = HexString::new();
    for (i, b) in v.iter().enumerate() {
        if i > 0 {
            s.push(':').map_err(|_| Error::NoRoom)?;
        }
        push_hex_byte(&mut s, *b).map_err(|_| Error::NoRoom)?;
    }
    Ok(s)
}

/// Renders a data block as four colon joined groups of four, separated by
/// spaces.
pub fn fmt_block(block: &[u8; BLOCK_SIZE]) -> Result<HexString> {
    let mut s = HexString::new();
    for (i, group) in block.chunks(4).enumerate() {
        if i > 0 {
            s.push(' ').map_err(|_| Error::NoRoom)?;
        }
        s.push_str(&fmt_bytes_colon(group)?)
            .map_err(|_| Error::NoRoom)?;
    }
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_byte_is_zero_padded_uppercase() {
        let mut s: String<4> = String::new();
        push_hex_byte(&mut s, 5).unwrap();
        push_hex_byte(&mut s, 0xab).unwrap();
        assert_eq!(s.as_str(), "05AB");
        assert_eq!(push_hex_byte(&mut s, 0), Err(()));
    }

    #[test]
    fn every_byte_parses_back() {
        for b in 0..=255u8 {
            let mut s: String<2> = String::new();
            push_hex_byte(&mut s, b).unwrap();
            assert_eq!(s.len(), 2);
            assert_eq!(u8::from_str_radix(&s, 16), Ok(b));
        }
    }

    #[test]
    fn colon_separated() {
        assert_eq!(fmt_bytes_colon(&[]).unwrap().as_str(), "");
        assert_eq!(fmt_bytes_colon(&[0x0f]).unwrap().as_str(), "0F");
        assert_eq!(
            fmt_bytes_colon(&[0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF])
                .unwrap()
                .as_str(),
            "AA:BB:CC:DD:EE:FF"
        );
    }

    #[test]
    fn block_groups() {
        let mut block = [0u8; 16];
        for (i, b) in block.iter_mut().enumerate() {
            *b = i as u8;
        }
        assert_eq!(
            fmt_block(&block).unwrap().as_str(),
            "00:01:02:03 04:05:06:07 08:09:0A:0B 0C:0D:0E:0F"
        );
    }

    #[test]
    fn sixteen_bytes_fit() {
        let s = fmt_bytes_colon(&[0xFF; BLOCK_SIZE]).unwrap();
        assert_eq!(s.len(), HEX_CAPACITY);
        assert!(s.ends_with("FF"));
    }

    #[test]
    fn longer_input_is_no_room() {
        assert_eq!(fmt_bytes_colon(&[0xFF; BLOCK_SIZE + 1]), Err(Error::NoRoom));
    }
}
