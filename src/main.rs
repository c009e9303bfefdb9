use std::env;
use std::io;

use rfid_term::com::ComWrite;
use rfid_term::dump::print_key;
use rfid_term::keys::parse_key;
use rfid_term::{Formatting, Terminal, DEFAULT_KEYS, KEY_SIZE};

// Prints the built-in key table, then every key given on the command line.
fn main() -> Result<(), rfid_term::Error> {
    let stdout = io::stdout();
    let mut term = Terminal::new(ComWrite::new(stdout.lock()));

    term.print_with_formatting_ln("Known MIFARE keys", Formatting::Bold)?;
    let mut key = [0u8; KEY_SIZE];
    for i in 0..DEFAULT_KEYS.len() {
        term.print(format_args!("{:>2}: ", i))?;
        print_key(&mut term, DEFAULT_KEYS.get(i, &mut key)?)?;
    }

    for arg in env::args().skip(1) {
        match parse_key(&arg) {
            Some(key) => print_key(&mut term, &key)?,
            None => term.error(format_args!("not a key: {}", arg))?,
        }
    }
    term.flush()
}
