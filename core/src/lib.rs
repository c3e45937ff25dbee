pub use chip8::Chip8;
pub use config::Config;
pub use constants::TICK;
pub use debug::Registers;
pub use error::{Error, Fault};
pub use host::Host;
pub use state::FrameBuffer;

mod chip8;
mod config;
pub mod constants;
mod debug;
mod error;
mod host;
mod instruction;
mod opcode;
mod operations;
mod scheduler;
pub mod state;
