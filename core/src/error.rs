use thiserror::Error;

/// A condition that stops the interpreter.
///
/// Once raised the machine stays halted until another ROM is loaded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    #[error("unhandled instruction {opcode:#06X} at {address:#05X}")]
    UnhandledInstruction { opcode: u16, address: u16 },

    #[error("return with an empty call stack at {address:#05X}")]
    StackUnderflow { address: u16 },
}

/// Malformed input from the host; rejected without touching machine state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("unsupported key {0:#04X}, the keypad only has keys 0x0..=0xF")]
    InvalidKey(u8),
}
