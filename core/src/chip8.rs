use std::time::Duration;

use log::{error, info, trace, warn};

use crate::config::Config;
use crate::constants::{ADDRESS_MASK, KEY_COUNT, MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_OFFSET};
use crate::debug::Registers;
use crate::error::{Error, Fault};
use crate::host::Host;
use crate::instruction::from_op;
use crate::operations::Flow;
use crate::scheduler::Scheduler;
use crate::state::{FrameBuffer, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the `scheduler` that converts host time into 60Hz ticks
///  - whether a ROM is `running`, and the `fault` that stopped it if any
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU and its timers by wall-clock time
/// - inspecting its frame buffer and registers
///
/// Nothing here blocks; the host calls `advance` from its own loop.
pub struct Chip8 {
    state: State,
    scheduler: Scheduler,
    config: Config,
    running: bool,
    fault: Option<Fault>,
    rom_len: usize,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Chip8 {
            state: State::new(),
            scheduler: Scheduler::new(),
            config,
            running: false,
            fault: None,
            rom_len: 0,
        }
    }

    /// Load a rom and start running it
    ///
    /// Everything but the pressed keys is reset. ROMs larger than the program
    /// region are truncated.
    ///
    /// # Arguments
    /// * `rom` the raw ROM image, without any header
    /// * `host` notified of the load and handed the blank frame
    ///
    /// Returns the number of bytes that were loaded.
    pub fn load_rom(&mut self, rom: &[u8], host: &mut dyn Host) -> usize {
        let pressed_keys = self.state.pressed_keys;
        self.state = State::new();
        self.state.pressed_keys = pressed_keys;

        let len = rom.len().min(MAX_ROM_SIZE);
        if len < rom.len() {
            warn!(
                "ROM is {} bytes but only {} fit in memory, truncating",
                rom.len(),
                MAX_ROM_SIZE
            );
        }
        self.state.memory[PROGRAM_OFFSET..PROGRAM_OFFSET + len].copy_from_slice(&rom[..len]);

        self.scheduler.reset();
        self.rom_len = len;
        self.fault = None;
        self.running = true;
        info!("loaded {} bytes of ROM into memory", len);

        host.notify_rom_loaded(len);
        self.publish(host);
        len
    }

    /// Advances the machine by wall-clock time
    ///
    /// Every whole 60Hz period that has accumulated runs
    /// `config.instructions_per_tick` instructions and then decrements the timers.
    ///
    /// # Arguments
    /// * `elapsed` time since the previous call
    /// * `host` receives the frame buffer after each clear or draw, and any fault
    pub fn advance(&mut self, elapsed: Duration, host: &mut dyn Host) {
        self.scheduler.accumulate(elapsed);
        while self.scheduler.take_tick() {
            for _ in 0..self.config.instructions_per_tick {
                self.step(host);
            }
            self.state.tick_timers();
        }
    }

    /// Executes a single instruction if a ROM is running
    pub fn step(&mut self, host: &mut dyn Host) {
        if !self.running {
            return;
        }

        let op = self.state.fetch();
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );

        let outcome = match from_op(op) {
            Some(operation) => operation(op, &mut self.state),
            None => Err(Fault::UnhandledInstruction {
                opcode: op,
                address: self.state.pc,
            }),
        };

        match outcome {
            Ok(flow) => self.state.pc = Self::next_pc(self.state.pc, flow),
            Err(fault) => self.halt(fault, host),
        }

        if self.state.draw_flag {
            self.publish(host);
        }
    }

    fn next_pc(pc: u16, flow: Flow) -> u16 {
        match flow {
            Flow::Next => pc.wrapping_add(2) & ADDRESS_MASK,
            Flow::Skip => pc.wrapping_add(4) & ADDRESS_MASK,
            Flow::Jump(address) => address,
            Flow::Wait => pc,
        }
    }

    fn halt(&mut self, fault: Fault, host: &mut dyn Host) {
        error!("{}, halting", fault);
        self.running = false;
        self.fault = Some(fault);
        host.notify_halt(&fault);
    }

    fn publish(&mut self, host: &mut dyn Host) {
        self.state.draw_flag = false;
        host.publish_framebuffer(&self.state.frame_buffer);
    }

    /// Set the pressed status of a key
    ///
    /// # Arguments
    /// * `key` the keypad key, 0x0..=0xF
    /// * `pressed` whether the key is held down
    pub fn set_key(&mut self, key: u8, pressed: bool) -> Result<(), Error> {
        match self.state.pressed_keys.get_mut(key as usize) {
            Some(state) => {
                *state = pressed;
                Ok(())
            }
            None => {
                let err = Error::InvalidKey(key);
                warn!("{}", err);
                Err(err)
            }
        }
    }

    /// The frame as of the last clear or draw
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The fault that halted the current ROM, if any
    pub fn fault(&self) -> Option<Fault> {
        self.fault
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of bytes of the current ROM
    pub fn rom_len(&self) -> usize {
        self.rom_len
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    pub fn i(&self) -> u16 {
        self.state.i
    }

    pub fn v(&self) -> &[u8; 16] {
        &self.state.v
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.sound_timer
    }

    pub fn keys(&self) -> &[bool; KEY_COUNT] {
        &self.state.pressed_keys
    }

    pub fn stack(&self) -> &[u16] {
        &self.state.stack
    }

    /// A read-only window into memory, cut short at the end of memory
    pub fn memory_window(&self, start: usize, len: usize) -> &[u8] {
        let start = start.min(MEMORY_SIZE);
        let end = start.saturating_add(len).min(MEMORY_SIZE);
        &self.state.memory[start..end]
    }

    /// Snapshot of everything a debug overlay shows
    pub fn registers(&self) -> Registers {
        Registers::capture(&self.state)
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
