use embedded_hal::blocking::delay::DelayMs;

use super::com::Com;
use super::dump::{print_block, print_key, BLOCK_SIZE};
use super::keys::{KeyTable, MifareKey};
use super::picc::{Command, Picc, StatusCode};
use super::terminal::{Color, Terminal};
use super::{Error, Result};

/// Time handed back to the platform between two card polls.
pub const POLL_INTERVAL_MS: u8 = 1;

/// Blocks until a card is in the field and selected. Halted cards are
/// woken up too.
pub fn wait_for_card_no_print<P, D>(picc: &mut P, delay: &mut D)
where
    P: Picc,
    D: DelayMs<u8>,
{
    let mut atqa = [0u8; 2];
    while !(picc.is_new_card_present() || picc.wakeup_a(&mut atqa).is_ok())
        || !picc.read_card_serial()
    {
        delay.delay_ms(POLL_INTERVAL_MS);
    }
    log::debug!("card selected, sak={:#04x}", picc.uid().select_acknowledge);
}

pub fn wait_for_card<C, P, D>(term: &mut Terminal<C>, picc: &mut P, delay: &mut D) -> Result<()>
where
    C: Com,
    P: Picc,
    D: DelayMs<u8>,
{
    term.print_with_formatting_ln("Place card in front of RFID reader", Color::Blue)?;
    term.flush()?;

    wait_for_card_no_print(picc, delay);

    term.println("Card found!")
}

pub fn halt_rfid<P: Picc>(picc: &mut P) {
    let status = picc.halt_a();
    if !status.is_ok() {
        log::trace!("HLTA: {}", status);
    }
    picc.stop_crypto1();
}

/// Reports `status` on the terminal. A failure also halts the card and is
/// returned as `Error::Status` so the caller can bail out with `?`.
pub fn handle_status<C, P>(term: &mut Terminal<C>, picc: &mut P, status: StatusCode) -> Result<()>
where
    C: Com,
    P: Picc,
{
    if !status.is_ok() {
        let printed = term.error(status.name());
        halt_rfid(picc);
        printed?;
        return Err(Error::Status(status));
    }
    term.success(status.name())
}

/// Tries every key of `keys` on `block` and returns the first one the card
/// accepts. A refused key leaves the card halted, so it is selected again
/// before the next attempt.
pub fn find_key<C, P, D>(
    term: &mut Terminal<C>,
    picc: &mut P,
    delay: &mut D,
    keys: &KeyTable,
    command: Command,
    block: u8,
) -> Result<Option<MifareKey>>
where
    C: Com,
    P: Picc,
    D: DelayMs<u8>,
{
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            halt_rfid(picc);
            wait_for_card_no_print(picc, delay);
        }
        let status = picc.authenticate(command, block, &key);
        log::debug!("key {} on block {}: {}", i, block, status);
        if status.is_ok() {
            term.print("Key found: ")?;
            print_key(term, &key)?;
            return Ok(Some(key));
        }
    }
    term.warn("No key found")?;
    Ok(None)
}

/// Reads and prints `block`. The card must already be authenticated for
/// the block's sector.
pub fn read_block<C, P>(term: &mut Terminal<C>, picc: &mut P, block: u8) -> Result<[u8; BLOCK_SIZE]>
where
    C: Com,
    P: Picc,
{
    let mut buffer = [0u8; BLOCK_SIZE + 2];
    let status = picc.mifare_read(block, &mut buffer);
    handle_status(term, picc, status)?;

    let mut data = [0u8; BLOCK_SIZE];
    data.copy_from_slice(&buffer[..BLOCK_SIZE]);
    term.print(format_args!("Block {}: ", block))?;
    print_block(term, &data)?;
    Ok(data)
}

pub fn write_block<C, P>(
    term: &mut Terminal<C>,
    picc: &mut P,
    block: u8,
    data: &[u8; BLOCK_SIZE],
) -> Result<()>
where
    C: Com,
    P: Picc,
{
    let status = picc.mifare_write(block, data);
    handle_status(term, picc, status)
}
