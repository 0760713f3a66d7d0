#![warn(missing_docs)]

//! Perspective box construction for the vecbox engine.
//!
//! Given three axis tips sharing an origin and one convergence factor
//! per axis, this crate builds a perspective-distorted parallelepiped
//! ("box") on those axes:
//!
//! - **Perspective model**: each axis is either parallel or converges on
//!   a vanishing point along its own ray
//! - **Line intersection**: exact-determinant intersection of infinite lines
//! - **Corner solving**: face corners from cross-wired rays, then the far corner
//! - **Edge classification**: tip-to-face edges visible, face-to-far edges hidden
//!
//! # Example
//!
//! ```
//! use vecbox_drafting::build_box;
//! use vecbox_math::{polar_to_canvas, Point2};
//!
//! let origin = Point2::new(400.0, 400.0);
//! let tips = [
//!     polar_to_canvas(&origin, 120.0, 0.0),
//!     polar_to_canvas(&origin, 100.0, 120.0),
//!     polar_to_canvas(&origin, 80.0, 240.0),
//! ];
//! let geometry = build_box(&origin, &tips, &[0.2, 0.2, 0.0]);
//!
//! // Solid edges
//! for edge in geometry.visible_edges() {
//!     println!("({}, {}) -> ({}, {})", edge.start.x, edge.start.y, edge.end.x, edge.end.y);
//! }
//!
//! // Dashed edges to the far corner
//! assert!(geometry.num_hidden() <= 3);
//! ```

pub mod assemble;
pub mod corner;
pub mod intersect;
pub mod perspective;
pub mod types;

pub use assemble::{assemble_box, build_box};
pub use corner::{construct_corner, face_corner, far_corner};
pub use intersect::intersect_lines;
pub use perspective::{is_parallel, project, PerspectiveInfo, PARALLEL_THRESHOLD};
pub use types::{
    AxisIndex, AxisPair, BoundingBox2D, BoxEdge, BoxGeometry, CornerId, FaceCorners, Point2D,
    Visibility,
};
