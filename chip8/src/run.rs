use std::path::{Path, PathBuf};

use log::{debug, info};

use pulse8_core::constants::TICKS_PER_SECOND;
use pulse8_core::{Chip8, Fault, TICK};
use pulse8_display::{DisplayError, Listing, Terminal};

#[derive(thiserror::Error, Debug)]
pub enum RunError {
    #[error("unable to read ROM {path:?}: {source}")]
    Rom {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Display(#[from] DisplayError),

    #[error(transparent)]
    Input(#[from] pulse8_core::Error),

    #[error("emulation halted: {0}")]
    Halted(Fault),
}

/// Reads a ROM image from disk
pub fn read_rom(path: &Path) -> Result<Vec<u8>, RunError> {
    std::fs::read(path).map_err(|source| RunError::Rom {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a ROM and lists it one instruction word per line
pub fn list_rom(chip8: &mut Chip8, rom: &[u8]) -> String {
    chip8.load_rom(rom, &mut ());
    Listing::of(chip8).to_string()
}

/// Number of 60Hz ticks in `seconds` of emulated time
fn tick_count(seconds: u32) -> u64 {
    u64::from(seconds) * u64::from(TICKS_PER_SECOND)
}

/// Runs a ROM without a window for a fixed amount of emulated time, then prints the last frame
///
/// # Arguments
/// * `chip8` the interpreter to drive
/// * `rom` the ROM image
/// * `seconds` emulated time to run for
/// * `trace_registers` whether to log the registers after every tick
pub fn run_headless(
    chip8: &mut Chip8,
    rom: &[u8],
    seconds: u32,
    trace_registers: bool,
) -> Result<String, RunError> {
    let mut terminal = Terminal::new();
    chip8.load_rom(rom, &mut terminal);

    for _ in 0..tick_count(seconds) {
        chip8.advance(TICK, &mut terminal);
        if trace_registers {
            debug!("\n{}", chip8.registers());
        }
        if !chip8.is_running() {
            break;
        }
    }
    info!(
        "{} frames published in {} emulated seconds",
        terminal.frames_published(),
        seconds
    );

    match terminal.fault() {
        Some(fault) => Err(RunError::Halted(fault)),
        None => Ok(terminal.render()),
    }
}

#[cfg(feature = "sdl")]
pub use window::run_window;

#[cfg(feature = "sdl")]
mod window {
    use std::time::{Duration, Instant};

    use log::{debug, info};
    use sdl2::event::Event;
    use sdl2::keyboard::Keycode;

    use pulse8_core::Chip8;
    use pulse8_display::{Display, DisplayError};

    use super::RunError;
    use crate::keymap::keymap;

    /// How long the event loop sleeps between frames
    const FRAME_TIME: Duration = Duration::from_millis(4);

    /// How much faster time passes while fast forwarding
    const FAST_FORWARD: u32 = 4;

    /// Runs a ROM in an SDL2 window until it is closed
    ///
    /// # Arguments
    /// * `chip8` the interpreter to drive
    /// * `rom` the ROM image
    /// * `scale` the size multiplier for each pixel
    /// * `trace_registers` whether to start out logging the registers after every frame,
    ///   Tab toggles it while running
    pub fn run_window(
        chip8: &mut Chip8,
        rom: &[u8],
        scale: u32,
        mut trace_registers: bool,
    ) -> Result<(), RunError> {
        let sdl: sdl2::Sdl = sdl2::init().map_err(DisplayError::Sdl)?;
        let mut display: Display = Display::new(&sdl, scale)?;
        let mut events = sdl.event_pump().map_err(DisplayError::Sdl)?;

        chip8.load_rom(rom, &mut display);

        // Whether time should pass faster than the wall clock
        let mut fast_forward: bool = false;
        let mut last_frame: Instant = Instant::now();

        'event: loop {
            for event in events.poll_iter() {
                match event {
                    Event::Quit { .. } => break 'event,
                    Event::KeyDown {
                        keycode: Some(key), ..
                    } => match (key, keymap(key)) {
                        (_, Some(kc)) => chip8.set_key(kc, true)?,
                        (Keycode::Space, _) => fast_forward = true,
                        (Keycode::Tab, _) => {
                            trace_registers = !trace_registers;
                            let status = if trace_registers { "on" } else { "off" };
                            info!("register logging {}", status);
                        }
                        (Keycode::Escape, _) => break 'event,
                        _ => continue,
                    },
                    Event::KeyUp {
                        keycode: Some(key), ..
                    } => match (key, keymap(key)) {
                        (_, Some(kc)) => chip8.set_key(kc, false)?,
                        (Keycode::Space, _) => fast_forward = false,
                        _ => continue,
                    },
                    _ => continue,
                };
            }

            let now = Instant::now();
            let mut elapsed = now - last_frame;
            last_frame = now;
            if fast_forward {
                elapsed *= FAST_FORWARD;
            }
            chip8.advance(elapsed, &mut display);

            if trace_registers && chip8.is_running() {
                debug!("\n{}", chip8.registers());
            }

            std::thread::sleep(FRAME_TIME);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_prints_last_frame() {
        let mut chip8 = Chip8::new();
        // I = glyph 0; draw it at 0, 0; spin
        let rom = [0xA0, 0x50, 0xD0, 0x05, 0x12, 0x04];
        let text = run_headless(&mut chip8, &rom, 1, false).unwrap();
        assert!(text.lines().next().unwrap().starts_with("####...."));
        assert_eq!(chip8.pc(), 0x204);
    }

    #[test]
    fn test_headless_reports_halt() {
        let mut chip8 = Chip8::new();
        match run_headless(&mut chip8, &[0xFF, 0xFF], 1, false) {
            Err(RunError::Halted(fault)) => assert_eq!(
                fault,
                Fault::UnhandledInstruction {
                    opcode: 0xFFFF,
                    address: 0x200
                }
            ),
            other => panic!("expected a halt, got {:?}", other),
        }
    }

    #[test]
    fn test_list_rom_starts_at_program_offset() {
        let mut chip8 = Chip8::new();
        let text = list_rom(&mut chip8, &[0x00, 0xE0, 0x12, 0x02]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("0x200  00 E0"));
        assert!(lines[2].starts_with("0x202  12 02"));
    }

    #[test]
    fn test_tick_count_fits_any_duration() {
        assert_eq!(tick_count(5), 300);
        assert_eq!(tick_count(u32::MAX), u64::from(u32::MAX) * 60);
    }

    #[test]
    fn test_missing_rom_is_reported() {
        let err = read_rom(Path::new("/definitely/not/a/rom.ch8")).unwrap_err();
        assert!(matches!(err, RunError::Rom { .. }));
    }
}
