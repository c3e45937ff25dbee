use std::time::Duration;

/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Mask applied to every address derived from I or the PC
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// 0x200 is where ROMs are loaded into memory
pub const PROGRAM_OFFSET: usize = 0x200;

/// The largest ROM that fits between `PROGRAM_OFFSET` and the end of memory
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_OFFSET;

/// Where the hexadecimal font glyphs live in the reserved region
pub const FONT_OFFSET: usize = 0x050;

/// Each font glyph is 5 rows tall
pub const FONT_GLYPH_SIZE: usize = 5;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Number of keys on the hexadecimal keypad
pub const KEY_COUNT: usize = 16;

/// Timers are decremented at 60Hz
pub const TICKS_PER_SECOND: u32 = 60;

/// ~660 instructions per second while keeping exactly one timer decrement per tick
pub const DEFAULT_INSTRUCTIONS_PER_TICK: u32 = 11;

/// One 60Hz period rounded up to the next nanosecond.
///
/// Advancing by `TICK` always drains at least one period, which makes it the
/// natural step for hosts and tests that want whole ticks.
pub const TICK: Duration = Duration::from_nanos(16_666_667);

/// Hexadecimal glyphs 0..F, each 4 pixels wide and 5 rows tall
#[rustfmt::skip]
pub const FONT: [u8; 16 * FONT_GLYPH_SIZE] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
