//! The seam to the RFID transceiver driver.
//!
//! Nothing here talks to hardware; a driver implements [`Picc`] and this
//! crate only formats what it hands back.

use core::fmt;

use heapless::Vec;

use super::keys::MifareKey;

/// MIFARE Classic authentication commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MfAuthKeyA = 0x60, // Authenticate a sector with key A
    MfAuthKeyB = 0x61, // Authenticate a sector with key B
}

/// Driver status codes, with the names the driver prints for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    Error,         // Error in communication
    Collision,     // Collission detected
    Timeout,       // Timeout in communication.
    NoRoom,        // A buffer is not big enough.
    InternalError, // Internal error in the code. Should not happen.
    Invalid,       // Invalid argument.
    CrcWrong,      // The CRC_A does not match
    MifareNack,    // A MIFARE PICC responded with NAK.
}

impl StatusCode {
    pub fn name(self) -> &'static str {
        match self {
            StatusCode::Ok => "Success.",
            StatusCode::Error => "Error in communication.",
            StatusCode::Collision => "Collission detected.",
            StatusCode::Timeout => "Timeout in communication.",
            StatusCode::NoRoom => "A buffer is not big enough.",
            StatusCode::InternalError => "Internal error in the code. Should not happen.",
            StatusCode::Invalid => "Invalid argument.",
            StatusCode::CrcWrong => "The CRC_A does not match.",
            StatusCode::MifareNack => "A MIFARE PICC responded with NAK.",
        }
    }

    pub fn is_ok(self) -> bool {
        self == StatusCode::Ok
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Unknown,
    Iso14443_4,    // PICC compliant with ISO/IEC 14443-4
    Iso18092,      // PICC compliant with ISO/IEC 18092 (NFC)
    MifareMini,    // MIFARE Classic protocol, 320 bytes
    Mifare1k,      // MIFARE Classic protocol, 1KB
    Mifare4k,      // MIFARE Classic protocol, 4KB
    MifareUL,      // MIFARE Ultralight or Ultralight C
    MifarePlus,    // MIFARE Plus
    MifareDesfire, // MIFARE DESFire
    TNP3XXX,       // Only mentioned in NXP AN 10833 MIFARE Type Identification Procedure
    NotComplete,   // SAK indicates UID is not complete.
}

impl Type {
    pub fn name(self) -> &'static str {
        match self {
            Type::Iso14443_4 => "PICC compliant with ISO/IEC 14443-4",
            Type::Iso18092 => "PICC compliant with ISO/IEC 18092 (NFC)",
            Type::MifareMini => "MIFARE Mini, 320 bytes",
            Type::Mifare1k => "MIFARE 1KB",
            Type::Mifare4k => "MIFARE 4KB",
            Type::MifareUL => "MIFARE Ultralight or Ultralight C",
            Type::MifarePlus => "MIFARE Plus",
            Type::MifareDesfire => "MIFARE DESFire",
            Type::TNP3XXX => "MIFARE TNP3XXX",
            Type::NotComplete => "SAK indicates UID is not complete.",
            Type::Unknown => "Unknown type",
        }
    }
}

pub fn get_type(sak: u8) -> Type {
    // AN10833 3.2, SAK coding. Bit 8 is ignored, Infineon sets it.
    match sak & 0x7F {
        0x04 => Type::NotComplete,
        0x09 => Type::MifareMini,
        0x08 => Type::Mifare1k,
        0x18 => Type::Mifare4k,
        0x00 => Type::MifareUL,
        0x10 | 0x11 => Type::MifarePlus,
        0x01 => Type::TNP3XXX,
        0x20 => Type::Iso14443_4,
        0x40 => Type::Iso18092,
        _ => Type::Unknown,
    }
}

/// A selected card's UID (4, 7 or 10 bytes) and its SAK.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Uid {
    pub bytes: Vec<u8, 10>,
    pub select_acknowledge: u8,
}

impl Uid {
    /// `None` if `bytes` is longer than 10.
    pub fn new(bytes: &[u8], select_acknowledge: u8) -> Option<Self> {
        Some(Uid {
            bytes: Vec::from_slice(bytes).ok()?,
            select_acknowledge,
        })
    }

    pub fn picc_type(&self) -> Type {
        get_type(self.select_acknowledge)
    }
}

/// What the glue needs from an MFRC522 style driver.
pub trait Picc {
    /// REQA: is there a card in IDLE state in the field?
    fn is_new_card_present(&mut self) -> bool;
    /// WUPA: also wakes cards in HALT state. `atqa` receives the answer.
    fn wakeup_a(&mut self, atqa: &mut [u8; 2]) -> StatusCode;
    /// Anticollision and select; on success `uid()` is valid.
    fn read_card_serial(&mut self) -> bool;
    fn uid(&self) -> &Uid;
    fn halt_a(&mut self) -> StatusCode;
    fn stop_crypto1(&mut self);
    /// `command` is `MfAuthKeyA` or `MfAuthKeyB`.
    fn authenticate(&mut self, command: Command, block: u8, key: &MifareKey) -> StatusCode;
    /// `buffer` holds 16 data bytes plus the CRC_A.
    fn mifare_read(&mut self, block: u8, buffer: &mut [u8; 18]) -> StatusCode;
    fn mifare_write(&mut self, block: u8, buffer: &[u8; 16]) -> StatusCode;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sak_classification() {
        assert_eq!(get_type(0x08), Type::Mifare1k);
        assert_eq!(get_type(0x88), Type::Mifare1k);
        assert_eq!(get_type(0x18), Type::Mifare4k);
        assert_eq!(get_type(0x04), Type::NotComplete);
        assert_eq!(get_type(0x11), Type::MifarePlus);
        assert_eq!(get_type(0x7f), Type::Unknown);
        assert_eq!(get_type(0x20).name(), "PICC compliant with ISO/IEC 14443-4");
    }

    #[test]
    fn status_names() {
        assert_eq!(StatusCode::Ok.name(), "Success.");
        assert_eq!(StatusCode::Timeout.name(), "Timeout in communication.");
        assert!(StatusCode::Ok.is_ok());
        assert!(!StatusCode::MifareNack.is_ok());
        assert_eq!(
            alloc::format!("{}", StatusCode::CrcWrong),
            "The CRC_A does not match."
        );
    }

    #[test]
    fn uid_capacity() {
        let uid = Uid::new(&[0xDE, 0xAD, 0xBE, 0xEF], 0x08).unwrap();
        assert_eq!(uid.bytes.len(), 4);
        assert_eq!(uid.picc_type(), Type::Mifare1k);
        assert!(Uid::new(&[0; 10], 0).is_some());
        assert!(Uid::new(&[0; 11], 0).is_none());
    }
}
