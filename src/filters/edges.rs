use image::{GrayImage, Luma};
use imageproc::definitions::Clamp;
use imageproc::edges::canny;
use imageproc::filter::{filter3x3, gaussian_blur_f32};
use imageproc::gradients::{horizontal_sobel, vertical_sobel};
use imageproc::map::map_colors2;

/// Standard deviation of the noise-reduction blur applied before the
/// gradient operators (the usual default for a 3x3 Gaussian window).
const SMOOTHING_SIGMA: f32 = 0.8;

/// Canny hysteresis thresholds.
const CANNY_LOW_THRESHOLD: f32 = 50.0;
const CANNY_HIGH_THRESHOLD: f32 = 90.0;

/// Prewitt kernel responding to horizontal edges, row-major.
const HORIZONTAL_EDGE_PREWITT: &[i16] = &[1, 1, 1, 0, 0, 0, -1, -1, -1];

/// Prewitt kernel responding to vertical edges, row-major.
const VERTICAL_EDGE_PREWITT: &[i16] = &[-1, 0, 1, -1, 0, 1, -1, 0, 1];

/// Edge operators selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOperator {
    Prewitt,
    Sobel,
    Canny,
}

impl EdgeOperator {
    /// Look up an operator by its case-insensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "prewitt" => Some(Self::Prewitt),
            "sobel" => Some(Self::Sobel),
            "canny" => Some(Self::Canny),
            _ => None,
        }
    }

    /// Run this operator on a grayscale image.
    pub fn apply(&self, img: &GrayImage) -> GrayImage {
        match self {
            Self::Prewitt => prewitt(img),
            Self::Sobel => sobel(img),
            // Canny runs on the unsmoothed image; it does its own blurring.
            Self::Canny => canny(img, CANNY_LOW_THRESHOLD, CANNY_HIGH_THRESHOLD),
        }
    }
}

/// Returns the result of the named edge operator (prewitt, sobel or canny),
/// or an unmodified copy of the input if the name matches no operator.
pub fn detect_edges(img: &GrayImage, operator: &str) -> GrayImage {
    match EdgeOperator::from_name(operator) {
        Some(op) => op.apply(img),
        None => img.clone(),
    }
}

/// Blurred copy of the image, to reduce noise before taking gradients.
fn smooth(img: &GrayImage) -> GrayImage {
    gaussian_blur_f32(img, SMOOTHING_SIGMA)
}

fn prewitt(img: &GrayImage) -> GrayImage {
    let smoothed = smooth(img);
    let horizontal = filter3x3::<_, _, u8>(&smoothed, HORIZONTAL_EDGE_PREWITT);
    let vertical = filter3x3::<_, _, u8>(&smoothed, VERTICAL_EDGE_PREWITT);
    map_colors2(&horizontal, &vertical, |h, v| {
        Luma([h[0].saturating_add(v[0])])
    })
}

fn sobel(img: &GrayImage) -> GrayImage {
    let smoothed = smooth(img);
    let horizontal = horizontal_sobel(&smoothed);
    let vertical = vertical_sobel(&smoothed);
    map_colors2(&horizontal, &vertical, |h, v| {
        let h = <u8 as Clamp<i16>>::clamp(h[0]);
        let v = <u8 as Clamp<i16>>::clamp(v[0]);
        Luma([h.saturating_add(v)])
    })
}
