use image::{GrayImage, Luma};
use imageproc::definitions::Clamp;
use imageproc::filter::{gaussian_blur_f32, laplacian_filter};
use imageproc::map::{map_colors, map_colors2};

/// Standard deviation of the low-pass blur the unsharp mask subtracts.
const USM_SIGMA: f32 = 2.0;

/// Fraction of the blurred image subtracted back out by the unsharp mask;
/// the original is amplified by the same fraction.
const USM_AMOUNT: f32 = 0.5;

/// Sharpening methods selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharpenMethod {
    LaPlace,
    Usm,
}

impl SharpenMethod {
    /// Look up a method by its case-insensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "la_place" => Some(Self::LaPlace),
            "usm" => Some(Self::Usm),
            _ => None,
        }
    }

    /// Run this method on a grayscale image.
    pub fn apply(&self, img: &GrayImage) -> GrayImage {
        match self {
            Self::LaPlace => la_place(img),
            Self::Usm => unsharp_mask(img),
        }
    }
}

/// Returns the image sharpened with the named method (la_place or usm),
/// or an unmodified copy of the input if the name matches no method.
pub fn sharpen(img: &GrayImage, method: &str) -> GrayImage {
    match SharpenMethod::from_name(method) {
        Some(m) => m.apply(img),
        None => img.clone(),
    }
}

/// Absolute Laplacian response, converted back to 8-bit range.
fn la_place(img: &GrayImage) -> GrayImage {
    let response = laplacian_filter(img);
    map_colors(&response, |p| Luma([<u8 as Clamp<i16>>::clamp(p[0].abs())]))
}

/// Amplified original minus a fraction of its low-pass blur.
fn unsharp_mask(img: &GrayImage) -> GrayImage {
    let blurred = gaussian_blur_f32(img, USM_SIGMA);
    map_colors2(img, &blurred, |orig, blur| {
        let v = (1.0 + USM_AMOUNT) * orig[0] as f32 - USM_AMOUNT * blur[0] as f32;
        Luma([<u8 as Clamp<f32>>::clamp(v)])
    })
}
