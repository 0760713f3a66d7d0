//! Renderer-facing snapshot of a scene.

use serde::{Deserialize, Serialize};
use vecbox_drafting::{AxisIndex, BoxGeometry, Point2D};

use crate::error::Result;

/// One drawn axis: a segment from the origin to the tip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSegment {
    /// Which axis this is.
    pub axis: AxisIndex,
    /// Segment start (the origin).
    pub start: Point2D,
    /// Segment end (the tip).
    pub end: Point2D,
    /// Direction in degrees.
    pub angle_degrees: f64,
    /// Length in canvas units.
    pub length: i64,
}

/// Points and segments to draw for one scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Shared origin.
    pub origin: Point2D,
    /// The three axis segments, A, B, C.
    pub axes: [AxisSegment; 3],
    /// Point markers: origin, then the three tips. Drawn last.
    pub markers: [Point2D; 4],
    /// Box wireframe, only while the box is shown.
    pub box_geometry: Option<BoxGeometry>,
}

impl Frame {
    /// Compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
