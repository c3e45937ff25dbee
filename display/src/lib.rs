#[cfg(feature = "sdl")]
pub use sdl::Display;
pub use listing::Listing;
pub use terminal::Terminal;
pub use texture::{frame_to_rgb24, frame_to_text};

#[cfg(feature = "sdl")]
mod sdl;
mod listing;
mod terminal;
mod texture;

/// Failures while setting up or drawing to a display
#[derive(thiserror::Error, Debug)]
pub enum DisplayError {
    #[error("sdl: {0}")]
    Sdl(String),
}
