use log::{error, info};

use pulse8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use pulse8_core::{Fault, FrameBuffer, Host};

use crate::texture::frame_to_text;

/// # Terminal
/// A headless display that keeps the latest frame so it can be printed as text.
pub struct Terminal {
    frame: FrameBuffer,
    frames_published: usize,
    fault: Option<Fault>,
}

impl Terminal {
    pub fn new() -> Self {
        Terminal {
            frame: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            frames_published: 0,
            fault: None,
        }
    }

    /// The latest frame as lines of text
    pub fn render(&self) -> String {
        frame_to_text(&self.frame)
    }

    pub fn frames_published(&self) -> usize {
        self.frames_published
    }

    pub fn fault(&self) -> Option<Fault> {
        self.fault
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for Terminal {
    fn publish_framebuffer(&mut self, frame: &FrameBuffer) {
        self.frame = *frame;
        self.frames_published += 1;
    }

    fn notify_halt(&mut self, fault: &Fault) {
        error!("emulation stopped: {}", fault);
        self.fault = Some(*fault);
    }

    fn notify_rom_loaded(&mut self, len: usize) {
        info!("running {} byte ROM headless", len);
    }
}
