use super::com::Com;
use embedded_hal::blocking::serial;

pub struct ComSerial<S> {
    com: S,
}
impl<S> ComSerial<S> {
    pub fn new(serial: S) -> Self {
        Self { com: serial }
    }
    pub fn release(self) -> S {
        self.com
    }
}
impl<S> Com for ComSerial<S>
where
    S: serial::Write<u8>,
{
    fn write(&mut self, value: &[u8]) -> Result<(), ()> {
        if let Err(_) = self.com.bwrite_all(value) {
            return Err(());
        }
        return Ok(());
    }
    fn flush(&mut self) -> Result<(), ()> {
        if let Err(_) = self.com.bflush() {
            return Err(());
        }
        return Ok(());
    }
}
