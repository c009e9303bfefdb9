//! ANSI terminal output over a [`Com`] sink.
//!
//! Styles are SGR codes: `ESC [ <code> m`. A color turns into its
//! background variant by adding 10, a formatting turns into its reset
//! variant by adding 20.

use core::fmt::{self, Write};

use super::com::Com;
use super::{Error, Result};

const CSI: &str = "\x1b[";
const CLEAR: &str = "\x1b[H\x1b[J";
const BELL: u8 = 7;
pub const NEWLINE: &str = "\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Formatting {
    ResetAll = 0,
    Bold = 1,
    Dim = 2,
    Underlined = 4,
    Blink = 5,
    Reverse = 7,
    Hidden = 8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Default = 39,
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    LightGray = 37,
    DarkGray = 90,
    LightRed = 91,
    LightGreen = 92,
    LightYellow = 93,
    LightBlue = 94,
    LightMagenta = 95,
    LightCyan = 96,
    White = 97,
}

/// A raw SGR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style(pub u8);

impl Style {
    pub fn code(self) -> u8 {
        self.0
    }
}

impl Color {
    pub fn background(self) -> Style {
        Style(self as u8 + 10)
    }
}

impl Formatting {
    pub fn reset(self) -> Style {
        Style(self as u8 + 20)
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self {
        Style(color as u8)
    }
}

impl From<Formatting> for Style {
    fn from(formatting: Formatting) -> Self {
        Style(formatting as u8)
    }
}

impl From<u8> for Style {
    fn from(code: u8) -> Self {
        Style(code)
    }
}

/// Feeds `core::fmt` output straight into a `Com`.
struct ComFmt<'a, C> {
    com: &'a mut C,
}

impl<C: Com> Write for ComFmt<'_, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.com.write(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

pub struct Terminal<C> {
    com: C,
}

impl<C: Com> Terminal<C> {
    pub fn new(com: C) -> Self {
        Self { com }
    }

    pub fn release(self) -> C {
        self.com
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.com.write(bytes).map_err(|_| Error::ComErr)
    }

    pub fn print<T: fmt::Display>(&mut self, printable: T) -> Result<()> {
        let mut w = ComFmt { com: &mut self.com };
        write!(w, "{}", printable).map_err(|_| Error::ComErr)
    }

    pub fn println<T: fmt::Display>(&mut self, printable: T) -> Result<()> {
        self.print(printable)?;
        self.newline()
    }

    pub fn newline(&mut self) -> Result<()> {
        self.write_bytes(NEWLINE.as_bytes())
    }

    /// Switches the terminal to `style` until the next reset.
    pub fn format<S: Into<Style>>(&mut self, style: S) -> Result<()> {
        let mut w = ComFmt { com: &mut self.com };
        write!(w, "{}{}m", CSI, style.into().code()).map_err(|_| Error::ComErr)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.write_bytes(CLEAR.as_bytes())
    }

    pub fn bell(&mut self) -> Result<()> {
        self.write_bytes(&[BELL])
    }

    pub fn reset_all(&mut self) -> Result<()> {
        self.format(Formatting::ResetAll)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.com.flush().map_err(|_| Error::ComErr)
    }

    /// Prints `printable` in `style`, then resets all attributes.
    pub fn print_with_formatting<T, S>(&mut self, printable: T, style: S) -> Result<()>
    where
        T: fmt::Display,
        S: Into<Style>,
    {
        self.format(style)?;
        self.print(printable)?;
        self.reset_all()
    }

    pub fn print_with_formatting_ln<T, S>(&mut self, printable: T, style: S) -> Result<()>
    where
        T: fmt::Display,
        S: Into<Style>,
    {
        self.print_with_formatting(printable, style)?;
        self.newline()
    }

    pub fn success<T: fmt::Display>(&mut self, printable: T) -> Result<()> {
        self.print_with_formatting_ln(printable, Color::Green)
    }

    pub fn warn<T: fmt::Display>(&mut self, printable: T) -> Result<()> {
        self.print_with_formatting_ln(printable, Color::Yellow)
    }

    pub fn error<T: fmt::Display>(&mut self, printable: T) -> Result<()> {
        self.print_with_formatting_ln(printable, Color::Red)
    }
}
