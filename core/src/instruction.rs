use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// Executes a single decoded opcode against the machine state
pub type Operation = fn(op: u16, state: &mut State) -> Outcome;

/// Selects the correct Operation for a given Opcode
/// Returns None for opcodes outside the instruction set.
pub fn from_op(op: u16) -> Option<Operation> {
    let operation: Operation = match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => clr,
        (0x0, 0x0, 0xE, 0xE) => ret,
        (0x1, ..) => jump,
        (0x2, ..) => call,
        (0x3, ..) => skip_eq,
        (0x4, ..) => skip_ne,
        (0x5, .., 0x0) => skip_eq_reg,
        (0x6, ..) => load,
        (0x7, ..) => add,
        (0x8, .., 0x0) => mv,
        (0x8, .., 0x1) => or,
        (0x8, .., 0x2) => and,
        (0x8, .., 0x3) => xor,
        (0x8, .., 0x4) => add_reg,
        (0x8, .., 0x5) => sub,
        (0x8, .., 0x6) => shr,
        (0x8, .., 0x7) => subn,
        (0x8, .., 0xE) => shl,
        (0x9, .., 0x0) => skip_ne_reg,
        (0xA, ..) => load_i,
        (0xB, ..) => jump_v0,
        (0xC, ..) => rand,
        (0xD, ..) => draw,
        (0xE, _, 0x9, 0xE) => skip_key,
        (0xE, _, 0xA, 0x1) => skip_no_key,
        (0xF, _, 0x0, 0x7) => get_delay,
        (0xF, _, 0x0, 0xA) => await_key,
        (0xF, _, 0x1, 0x5) => set_delay,
        (0xF, _, 0x1, 0x8) => set_sound,
        (0xF, _, 0x1, 0xE) => add_i,
        (0xF, _, 0x2, 0x9) => font,
        (0xF, _, 0x3, 0x3) => bcd,
        (0xF, _, 0x5, 0x5) => store,
        (0xF, _, 0x6, 0x5) => restore,
        _ => return None,
    };
    Some(operation)
}
