#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use core::fmt;

pub mod com;
pub mod com_serial;
pub mod dump;
pub mod keys;
pub mod picc;
pub mod reader;
pub mod terminal;
pub mod util;

pub use keys::{KeyTable, MifareKey, DEFAULT_KEYS, KEY_SIZE};
pub use picc::{Picc, StatusCode, Uid};
pub use terminal::{Color, Formatting, Style, Terminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// 输出接口出错
    ComErr,
    OutOfRange,     // Key index past the end of the table.
    BufferTooShort, // A buffer is smaller than the fields read from it.
    NoRoom,         // Formatted text does not fit its buffer.
    Status(StatusCode),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ComErr => f.write_str("output interface error"),
            Error::OutOfRange => f.write_str("key index out of range"),
            Error::BufferTooShort => f.write_str("buffer too short"),
            Error::NoRoom => f.write_str("formatted text too long"),
            Error::Status(status) => f.write_str(status.name()),
        }
    }
}

impl From<StatusCode> for Error {
    fn from(status: StatusCode) -> Self {
        Error::Status(status)
    }
}

pub type Result<T> = core::result::Result<T, Error>;
