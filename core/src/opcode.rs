/// # Opcodes
///
/// Chip-8 opcodes are 16 bits each, stored big-endian. Their behavior is cased on some combination of:
/// - `(n, _, _, _)` the opcode family; applies to all opcodes
/// - `(_, _, _, n)` specific behavior within a family (e.g. the 8XY_ arithmetic group)
/// - `(_, _, n, n)` more specific behavior within a family (e.g. FX__)
/// - `(_, n, n, n)` some fixed function that doesn't require variables (e.g. 00E0; clear screen)
///
/// Nibbles not used to determine the operation often (but not always) carry operands.
/// - `(_, n, n, n)` NNN, a 12-bit address
/// - `(_, _, n, n)` NN, a byte that is assigned to and/or compared with Vx
/// - `(_, n, _, _)` X, either the register Vx or the range V0..=Vx
/// - `(_, _, n, _)` Y, the register Vy
/// - `(_, _, _, n)` N, the height of a sprite
pub trait Opcode {
    /// Returns the Opcode's component nibbles.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// The Opcode's second nibble.
    /// `[_X__]`
    fn x(&self) -> usize;

    /// The Opcode's third nibble.
    /// `[__Y_]`
    fn y(&self) -> usize;

    /// The Opcode's fourth nibble.
    /// `[___N]`
    fn n(&self) -> u8;

    /// The Opcode's least significant byte.
    /// `[__NN]`
    fn nn(&self) -> u8;

    /// The Opcode without its most significant nibble.
    /// `[_NNN]`
    fn nnn(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (
            ((self & 0xF000) >> 12) as u8,
            self.x() as u8,
            self.y() as u8,
            self.n(),
        )
    }

    fn x(&self) -> usize {
        ((self & 0x0F00) >> 8) as usize
    }

    fn y(&self) -> usize {
        ((self & 0x00F0) >> 4) as usize
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn nn(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn nnn(&self) -> u16 {
        self & 0x0FFF
    }
}
