use crate::constants::{
    ADDRESS_MASK, DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT, FONT_OFFSET, KEY_COUNT, MEMORY_SIZE,
    PROGRAM_OFFSET,
};

/// The FrameBuffer is indexed as [y][x]; `true` is a lit pixel
pub type FrameBuffer = [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// The Chip8 machine state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) doubles as the carry, borrow and collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Stack
/// - return addresses pushed by calls and popped by returns
///
/// Timers
/// - 2 8-bit timers (delay & sound)
/// - both count down to 0 at 60Hz, driven by the scheduler rather than by instructions
///
/// ## Memory
/// - 4096 bytes of addressable memory
///     - 0x000..0x200 is reserved, with the font glyphs at 0x050
///     - ROMs are loaded at 0x200
/// - 32x64 frame buffer
///     - `draw_flag` is raised whenever it changes so it can be handed to the host
///
/// ## Input
/// - 16 booleans tracking the pressed status of keys 0..F
#[derive(Clone)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub stack: Vec<u16>,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub pressed_keys: [bool; KEY_COUNT],
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        memory[FONT_OFFSET..FONT_OFFSET + FONT.len()].copy_from_slice(&FONT);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_OFFSET as u16,
            stack: Vec::new(),
            delay_timer: 0,
            sound_timer: 0,
            memory,
            frame_buffer: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            draw_flag: false,
            pressed_keys: [false; KEY_COUNT],
        }
    }

    /// Reads the byte at `address`, wrapping around the end of memory
    pub fn read(&self, address: u16) -> u8 {
        self.memory[(address & ADDRESS_MASK) as usize]
    }

    /// Writes the byte at `address`, wrapping around the end of memory
    pub fn write(&mut self, address: u16, value: u8) {
        self.memory[(address & ADDRESS_MASK) as usize] = value;
    }

    /// Gets the opcode currently pointed at by the pc.
    ///
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    pub fn fetch(&self) -> u16 {
        let left = u16::from(self.read(self.pc));
        let right = u16::from(self.read(self.pc.wrapping_add(1)));
        left << 8 | right
    }

    /// Decrements both timers once, stopping at 0
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }

    /// The lowest-numbered key that is currently held down
    pub fn first_pressed_key(&self) -> Option<u8> {
        self.pressed_keys
            .iter()
            .position(|&pressed| pressed)
            .map(|key| key as u8)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_loads_font() {
        let state = State::new();
        // glyph 0
        assert_eq!(
            state.memory[FONT_OFFSET..FONT_OFFSET + 5],
            [0xF0, 0x90, 0x90, 0x90, 0xF0]
        );
        // glyph F ends the table
        assert_eq!(state.memory[FONT_OFFSET + 79], 0x80);
        assert_eq!(state.memory[FONT_OFFSET + 80], 0x00);
    }

    #[test]
    fn test_state_starts_at_program_offset() {
        let state = State::new();
        assert_eq!(state.pc, 0x200);
        assert!(state.stack.is_empty());
    }

    #[test]
    fn test_state_fetches_big_endian() {
        let mut state = State::new();
        state.memory[0x200..0x202].copy_from_slice(&[0xAA, 0xBB]);
        assert_eq!(state.fetch(), 0xAABB);
    }

    #[test]
    fn test_state_fetch_wraps_at_end_of_memory() {
        let mut state = State::new();
        state.pc = 0xFFF;
        state.memory[0xFFF] = 0x12;
        state.memory[0x000] = 0x34;
        assert_eq!(state.fetch(), 0x1234);
    }

    #[test]
    fn test_state_writes_wrap() {
        let mut state = State::new();
        state.write(0x1001, 0x7);
        assert_eq!(state.memory[0x001], 0x7);
        assert_eq!(state.read(0x1001), 0x7);
    }

    #[test]
    fn test_timers_floor_at_zero() {
        let mut state = State::new();
        state.delay_timer = 1;
        state.tick_timers();
        state.tick_timers();
        assert_eq!(state.delay_timer, 0);
        assert_eq!(state.sound_timer, 0);
    }

    #[test]
    fn test_first_pressed_key_is_lowest() {
        let mut state = State::new();
        assert_eq!(state.first_pressed_key(), None);
        state.pressed_keys[0xC] = true;
        state.pressed_keys[0x3] = true;
        assert_eq!(state.first_pressed_key(), Some(0x3));
    }
}
