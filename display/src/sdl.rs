use log::{error, info};
use sdl2::pixels::PixelFormatEnum;

use pulse8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use pulse8_core::{Fault, FrameBuffer, Host};

use crate::texture::frame_to_rgb24;
use crate::DisplayError;

/// # Display
/// The Chip-8 display is composed of 64x32 pixels black/white pixels, shown in an SDL2 window.
/// The on/off state of these pixels is encoded as `true`/`false` in a 2d array of 64x32 booleans.
/// The display only redraws when the interpreter publishes an updated FrameBuffer.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    halted: bool,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, DisplayError> {
        let video_subsystem = sdl.video().map_err(DisplayError::Sdl)?;
        let window = video_subsystem
            .window(
                "Pulse-8",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| DisplayError::Sdl(e.to_string()))?;
        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| DisplayError::Sdl(e.to_string()))?;

        Ok(Display {
            canvas,
            halted: false,
        })
    }

    /// Whether the interpreter reported a fault
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Formats the Chip-8 FrameBuffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| DisplayError::Sdl(e.to_string()))?;

        let pixels = frame_to_rgb24(frame);
        texture
            .with_lock(None, |buffer: &mut [u8], pitch: usize| {
                let row_len = DISPLAY_WIDTH * 3;
                for (y, row) in pixels.chunks(row_len).enumerate() {
                    buffer[y * pitch..y * pitch + row_len].copy_from_slice(row);
                }
            })
            .map_err(DisplayError::Sdl)?;

        self.canvas
            .copy(&texture, None, None)
            .map_err(DisplayError::Sdl)?;
        self.canvas.present();
        Ok(())
    }
}

impl Host for Display {
    fn publish_framebuffer(&mut self, frame: &FrameBuffer) {
        if let Err(e) = self.render(frame) {
            error!("failed to render frame: {}", e);
        }
    }

    fn notify_halt(&mut self, fault: &Fault) {
        error!("emulation stopped: {}", fault);
        self.halted = true;
        self.canvas.window_mut().set_title("Pulse-8 (halted)").ok();
    }

    fn notify_rom_loaded(&mut self, len: usize) {
        info!("running {} byte ROM", len);
        self.halted = false;
    }
}
