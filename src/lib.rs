pub mod export;
pub mod filters;

pub use export::Exporter;
pub use filters::{
    EDGE_OPERATORS, EdgeOperator, SHARPEN_METHODS, SharpenMethod, detect_edges, sharpen,
};
