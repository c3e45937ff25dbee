use crate::error::Fault;
use crate::state::FrameBuffer;

/// # Host
/// The capabilities the embedding program exposes to the interpreter.
///
/// The interpreter never touches a rendering surface itself; it hands its
/// FrameBuffer over after every clear and draw and reports lifecycle events.
pub trait Host {
    /// Receives the FrameBuffer after it was cleared or drawn to.
    ///
    /// # Arguments
    /// * `frame` the full 64x32 frame, indexed `[y][x]`
    fn publish_framebuffer(&mut self, frame: &FrameBuffer);

    /// Called once when a fault halts execution.
    fn notify_halt(&mut self, _fault: &Fault) {}

    /// Called after a ROM was copied into memory and execution was enabled.
    ///
    /// # Arguments
    /// * `len` the number of ROM bytes that were actually loaded
    fn notify_rom_loaded(&mut self, _len: usize) {}
}

/// A host that ignores everything
impl Host for () {
    fn publish_framebuffer(&mut self, _frame: &FrameBuffer) {}
}
