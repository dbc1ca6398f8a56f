pub mod edges;
pub mod sharpen;

pub use edges::{EdgeOperator, detect_edges};
pub use sharpen::{SharpenMethod, sharpen};

/// Edge operators applied by the default run, in output order.
pub const EDGE_OPERATORS: [&str; 3] = ["prewitt", "sobel", "canny"];

/// Sharpening methods applied by the default run, in output order.
pub const SHARPEN_METHODS: [&str; 2] = ["la_place", "usm"];
