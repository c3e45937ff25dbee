use std::fmt;

use pulse8_core::constants::PROGRAM_OFFSET;
use pulse8_core::Chip8;

/// # Listing
/// The loaded ROM as it sits in memory, one instruction word per line.
///
/// Each line shows the address, the word as two hex bytes and the word as two
/// binary bytes. A ROM with an odd length gets its last word padded from the
/// memory that follows it.
pub struct Listing<'a> {
    start: usize,
    bytes: &'a [u8],
}

impl<'a> Listing<'a> {
    /// Lists the program region covered by the current ROM
    pub fn of(chip8: &'a Chip8) -> Self {
        let len = chip8.rom_len() + chip8.rom_len() % 2;
        Listing {
            start: PROGRAM_OFFSET,
            bytes: chip8.memory_window(PROGRAM_OFFSET, len),
        }
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<7}{:<7}{}", "RAM", "Hex", "Binary")?;
        for (word, pair) in self.bytes.chunks(2).enumerate() {
            let high = pair[0];
            let low = pair.get(1).copied().unwrap_or(0);
            write!(
                f,
                "\n{:#05X}  {:02X} {:02X}  {:08b} {:08b}",
                self.start + word * 2,
                high,
                low,
                high,
                low
            )?;
        }
        Ok(())
    }
}
