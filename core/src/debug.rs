use std::fmt;

use crate::constants::KEY_COUNT;
use crate::state::State;

/// A copy of the registers, timers and keypad taken between instructions.
///
/// Its `Display` impl renders the text a debug overlay shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub pc: u16,
    pub i: u16,
    pub v: [u8; 16],
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub pressed_keys: [bool; KEY_COUNT],
}

impl Registers {
    pub(crate) fn capture(state: &State) -> Self {
        Registers {
            pc: state.pc,
            i: state.i,
            v: state.v,
            delay_timer: state.delay_timer,
            sound_timer: state.sound_timer,
            pressed_keys: state.pressed_keys,
        }
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PC {:#05X}", self.pc)?;
        writeln!(f, "I  {:#05X}", self.i)?;
        for (row, values) in self.v.chunks(2).enumerate() {
            writeln!(
                f,
                "V{:X}={:#04X} V{:X}={:#04X}",
                row * 2,
                values[0],
                row * 2 + 1,
                values[1]
            )?;
        }
        for row in 0..KEY_COUNT / 4 {
            let line: Vec<String> = (row * 4..row * 4 + 4)
                .map(|key| format!("{:X}={}", key, self.pressed_keys[key] as u8))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        writeln!(f, "delay timer {}", self.delay_timer)?;
        write!(f, "sound timer {}", self.sound_timer)
    }
}
