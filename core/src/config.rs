use crate::constants::DEFAULT_INSTRUCTIONS_PER_TICK;

/// Tunables for a Chip8 instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How many instructions run in each 60Hz tick, before the timers are decremented
    pub instructions_per_tick: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            instructions_per_tick: DEFAULT_INSTRUCTIONS_PER_TICK,
        }
    }
}
