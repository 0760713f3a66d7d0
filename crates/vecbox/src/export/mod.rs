//! Export formats for rendered frames.

pub mod svg;

pub use svg::{SvgDocument, SvgStyle};
