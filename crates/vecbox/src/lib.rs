//! vecbox — random axis triples and perspective boxes
//!
//! Generates three well-separated vectors from a common origin and, on
//! demand, the perspective wireframe box spanned by them, with JSON and
//! SVG output.
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use vecbox::{AxisIndex, Scene, SceneConfig, SvgDocument};
//!
//! let config = SceneConfig::default();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let scene = Scene::generate(&config, &mut rng)
//!     .unwrap()
//!     .with_convergence(AxisIndex::A, 0.25)
//!     .with_box_visible(true);
//!
//! let frame = scene.frame();
//! let svg = SvgDocument::new(&frame, config.canvas).to_svg_string().unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod frame;
pub mod scene;

pub use config::{Canvas, SceneConfig};
pub use error::{Result, VecboxError};
pub use export::{SvgDocument, SvgStyle};
pub use frame::{AxisSegment, Frame};
pub use scene::{AxisState, Scene};

pub use vecbox_drafting::{
    AxisIndex, AxisPair, BoxEdge, BoxGeometry, CornerId, Point2D, Visibility,
};
pub use vecbox_sampler::{AngleSampler, AxisSample, LengthBounds, SampleError};
