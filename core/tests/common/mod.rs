#![allow(dead_code)]

use pulse8_core::{Chip8, Fault, FrameBuffer, Host};

/// Remembers everything the interpreter handed to it
#[derive(Default)]
pub struct RecordingHost {
    pub frames: Vec<FrameBuffer>,
    pub halts: Vec<Fault>,
    pub loads: Vec<usize>,
}

impl RecordingHost {
    pub fn last_frame(&self) -> &FrameBuffer {
        self.frames.last().expect("no frame was published")
    }
}

impl Host for RecordingHost {
    fn publish_framebuffer(&mut self, frame: &FrameBuffer) {
        self.frames.push(*frame);
    }

    fn notify_halt(&mut self, fault: &Fault) {
        self.halts.push(*fault);
    }

    fn notify_rom_loaded(&mut self, len: usize) {
        self.loads.push(len);
    }
}

/// Assembles a ROM from opcodes, with optional data placed at `0x200 + offset`
pub fn rom(ops: &[u16], data: &[(usize, &[u8])]) -> Vec<u8> {
    let mut bytes: Vec<u8> = ops.iter().flat_map(|op| op.to_be_bytes().to_vec()).collect();
    for (offset, chunk) in data {
        let end = offset + chunk.len();
        if bytes.len() < end {
            bytes.resize(end, 0);
        }
        bytes[*offset..end].copy_from_slice(chunk);
    }
    bytes
}

/// Loads `ops` and executes exactly `ops.len()` instructions
pub fn run_ops(ops: &[u16], data: &[(usize, &[u8])]) -> (Chip8, RecordingHost) {
    let mut host = RecordingHost::default();
    let mut chip8 = Chip8::new();
    chip8.load_rom(&rom(ops, data), &mut host);
    for _ in 0..ops.len() {
        chip8.step(&mut host);
    }
    (chip8, host)
}

pub fn lit_pixels(frame: &FrameBuffer) -> usize {
    frame.iter().flatten().filter(|pixel| **pixel).count()
}
