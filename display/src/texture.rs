use pulse8_core::FrameBuffer;

/// Intensity of a lit pixel
pub const ON: u8 = 0xEE;
/// Intensity of an unlit pixel
pub const OFF: u8 = 0x20;

/// Formats a Chip-8 FrameBuffer as an RGB24 texture.
///
/// An RGB24 texture is a 1D array of bytes that represent concatenated rows of RGB pixels.
///
/// This creates a grey-scale rendering by:
/// - Flattening the 2D frame buffer into a 1D array by concatenating its rows
/// - Mapping each pixel to the `ON` or `OFF` intensity
/// - Triplicating each element of that 1D array to represent the RGB values of each pixel
///
/// # Arguments
/// * `frame` a Chip-8 FrameBuffer
pub fn frame_to_rgb24(frame: &FrameBuffer) -> Vec<u8> {
    frame
        .iter()
        .flat_map(|row| row.iter())
        .map(|&lit| if lit { ON } else { OFF })
        .flat_map(|intensity| std::iter::repeat(intensity).take(3))
        .collect()
}

/// Formats a Chip-8 FrameBuffer as lines of text, `#` for lit pixels and `.` otherwise.
pub fn frame_to_text(frame: &FrameBuffer) -> String {
    frame
        .iter()
        .map(|row| {
            row.iter()
                .map(|&lit| if lit { '#' } else { '.' })
                .collect::<String>()
        })
        .collect::<Vec<String>>()
        .join("\n")
}
