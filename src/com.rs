use alloc::vec::Vec;

/// Byte sink the terminal writes to, usually a serial console.
pub trait Com {
    fn write(&mut self, value: &[u8]) -> Result<(), ()>;
    fn flush(&mut self) -> Result<(), ()> {
        Ok(())
    }
}

impl<C: Com + ?Sized> Com for &mut C {
    fn write(&mut self, value: &[u8]) -> Result<(), ()> {
        (**self).write(value)
    }
    fn flush(&mut self) -> Result<(), ()> {
        (**self).flush()
    }
}

impl Com for Vec<u8> {
    fn write(&mut self, value: &[u8]) -> Result<(), ()> {
        self.extend_from_slice(value);
        Ok(())
    }
}

#[cfg(feature = "std")]
pub struct ComWrite<W> {
    com: W,
}

#[cfg(feature = "std")]
impl<W> ComWrite<W> {
    pub fn new(w: W) -> Self {
        Self { com: w }
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Com for ComWrite<W> {
    fn write(&mut self, value: &[u8]) -> Result<(), ()> {
        self.com.write_all(value).map_err(|_| ())
    }
    fn flush(&mut self) -> Result<(), ()> {
        self.com.flush().map_err(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_collects_writes() {
        let mut out = Vec::new();
        out.write(b"\x1b[").unwrap();
        out.write(b"0m").unwrap();
        assert_eq!(out, b"\x1b[0m");
        assert_eq!(out.flush(), Ok(()));
    }

    #[test]
    fn borrowed_com_forwards() {
        fn send<C: Com>(mut com: C) {
            com.write(b"ok").unwrap();
        }
        let mut out = Vec::new();
        send(&mut out);
        assert_eq!(out, b"ok");
    }
}
