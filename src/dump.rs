//! Hex dumps of card data for the terminal.
//!
//! Every byte is printed as two uppercase hex digits. The layout is what
//! people grep terminal logs for, so it must not drift.

use core::convert::TryInto;

use super::com::Com;
use super::keys::MifareKey;
use super::picc::Uid;
use super::terminal::{Color, Terminal};
use super::util::{fmt_block, fmt_bytes_colon};
use super::{Error, Result};

pub const BLOCK_SIZE: usize = 16;

fn block(buffer: &[u8]) -> Result<&[u8; BLOCK_SIZE]> {
    buffer
        .get(..BLOCK_SIZE)
        .and_then(|b| b.try_into().ok())
        .ok_or(Error::BufferTooShort)
}

/// Prints block 0 of a MIFARE Classic card split into its fields:
/// UID + BCC (blue), SAK + ATQA (green) and manufacturer data (yellow).
pub fn print_block0_formatted<C: Com>(term: &mut Terminal<C>, buffer: &[u8]) -> Result<()> {
    let buffer = block(buffer)?;

    term.print_with_formatting("UID + BCC   ", Color::Blue)?;
    term.print_with_formatting("SAK+ATAQ ", Color::Green)?;
    term.print_with_formatting_ln("Manufacturer data", Color::Yellow)?;

    term.print_with_formatting(
        format_args!("{} ", fmt_bytes_colon(&buffer[0..5])?),
        Color::Blue,
    )?;
    term.print_with_formatting(
        format_args!("{} ", fmt_bytes_colon(&buffer[5..7])?),
        Color::Green,
    )?;
    term.print_with_formatting_ln(fmt_bytes_colon(&buffer[7..16])?, Color::Yellow)
}

/// Prints a 16 byte block without colors, e.g.
/// `00:01:02:03 04:05:06:07 08:09:0A:0B 0C:0D:0E:0F`.
pub fn print_block<C: Com>(term: &mut Terminal<C>, buffer: &[u8]) -> Result<()> {
    let buffer = block(buffer)?;
    term.println(fmt_block(buffer)?)
}

pub fn print_key<C: Com>(term: &mut Terminal<C>, key: &MifareKey) -> Result<()> {
    term.print_with_formatting_ln(fmt_bytes_colon(key)?, Color::Yellow)
}

pub fn print_uid<C: Com>(term: &mut Terminal<C>, uid: &Uid) -> Result<()> {
    term.print("Card UID: ")?;
    term.print_with_formatting_ln(fmt_bytes_colon(&uid.bytes)?, Color::Blue)?;
    term.print("PICC type: ")?;
    term.println(uid.picc_type().name())
}
