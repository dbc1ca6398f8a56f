use image::{GrayImage, Luma};

/// Side length of the square test images.
pub const IMG_SIZE: u32 = 64;

/// First bright column in the step-edge fixture.
pub const STEP_X: u32 = 32;

/// Creates a constant-valued grayscale test image.
pub fn flat_image(value: u8) -> GrayImage {
    GrayImage::from_pixel(IMG_SIZE, IMG_SIZE, Luma([value]))
}

/// Creates a grayscale test image with a single vertical step edge:
/// columns left of `STEP_X` hold `dark`, the rest hold `bright`.
pub fn step_edge_image(dark: u8, bright: u8) -> GrayImage {
    GrayImage::from_fn(IMG_SIZE, IMG_SIZE, |x, _| {
        if x < STEP_X { Luma([dark]) } else { Luma([bright]) }
    })
}
