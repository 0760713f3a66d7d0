//! Core types for perspective box drafting output.

use serde::{Deserialize, Serialize};

/// A 2D point for serializable drafting output.
///
/// We use a custom type instead of nalgebra::Point2 to enable serde serialization
/// without requiring nalgebra's serde feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2D {
    /// Create a new 2D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<vecbox_math::Point2> for Point2D {
    fn from(p: vecbox_math::Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Point2D> for vecbox_math::Point2 {
    fn from(p: Point2D) -> Self {
        vecbox_math::Point2::new(p.x, p.y)
    }
}

/// One of the three origin-anchored axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisIndex {
    /// First axis.
    A,
    /// Second axis.
    B,
    /// Third axis.
    C,
}

impl AxisIndex {
    /// All axes in storage order.
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// Position of this axis in `[A, B, C]`-ordered arrays.
    pub fn index(self) -> usize {
        match self {
            AxisIndex::A => 0,
            AxisIndex::B => 1,
            AxisIndex::C => 2,
        }
    }
}

/// An unordered pair of axes, naming one face corner of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisPair {
    /// Face spanned by A and B.
    AB,
    /// Face spanned by A and C.
    AC,
    /// Face spanned by B and C.
    BC,
}

impl AxisPair {
    /// All pairs in the order their corners are solved.
    pub const ALL: [Self; 3] = [Self::AB, Self::AC, Self::BC];

    /// The two axes of this pair, lower index first.
    pub fn axes(self) -> (AxisIndex, AxisIndex) {
        match self {
            AxisPair::AB => (AxisIndex::A, AxisIndex::B),
            AxisPair::AC => (AxisIndex::A, AxisIndex::C),
            AxisPair::BC => (AxisIndex::B, AxisIndex::C),
        }
    }

    /// Whether `axis` is one of the two axes of this pair.
    pub fn contains(self, axis: AxisIndex) -> bool {
        let (a, b) = self.axes();
        a == axis || b == axis
    }
}

/// Names a vertex of the box wireframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CornerId {
    /// The tip of one axis.
    Tip(AxisIndex),
    /// The corner closing the face spanned by a pair of axes.
    Face(AxisPair),
    /// The corner diagonally opposite the origin.
    Far,
}

/// Visibility of an edge in the wireframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Drawn solid.
    Visible,
    /// Drawn dashed.
    Hidden,
}

/// A wireframe edge between two solved corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxEdge {
    /// Start point in canvas coordinates.
    pub start: Point2D,
    /// End point in canvas coordinates.
    pub end: Point2D,
    /// Corner at `start`.
    pub from: CornerId,
    /// Corner at `end`.
    pub to: CornerId,
    /// Visibility classification.
    pub visibility: Visibility,
}

impl BoxEdge {
    /// Length of the edge in canvas units.
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Whether either endpoint is `corner`.
    pub fn touches(&self, corner: CornerId) -> bool {
        self.from == corner || self.to == corner
    }
}

/// 2D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox2D {
    /// Minimum X coordinate.
    pub min_x: f64,
    /// Minimum Y coordinate.
    pub min_y: f64,
    /// Maximum X coordinate.
    pub max_x: f64,
    /// Maximum Y coordinate.
    pub max_y: f64,
}

impl BoundingBox2D {
    /// Create an empty bounding box.
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Expand the bounding box to include a point.
    pub fn include_point(&mut self, p: Point2D) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Check if the bounding box is valid (non-empty).
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }
}

impl Default for BoundingBox2D {
    fn default() -> Self {
        Self::empty()
    }
}

/// The three face corners, each absent when its rays are degenerate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceCorners {
    /// Corner of the A-B face.
    pub ab: Option<Point2D>,
    /// Corner of the A-C face.
    pub ac: Option<Point2D>,
    /// Corner of the B-C face.
    pub bc: Option<Point2D>,
}

impl FaceCorners {
    /// Corner for `pair`.
    pub fn get(&self, pair: AxisPair) -> Option<Point2D> {
        match pair {
            AxisPair::AB => self.ab,
            AxisPair::AC => self.ac,
            AxisPair::BC => self.bc,
        }
    }

    /// Number of corners that were solved.
    pub fn num_solved(&self) -> usize {
        AxisPair::ALL
            .iter()
            .filter(|p| self.get(**p).is_some())
            .count()
    }
}

/// Complete box construction: solved corners plus classified edges.
///
/// Derived data only. Rebuilt from scratch for every input change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxGeometry {
    /// Shared origin of the axes.
    pub origin: Point2D,
    /// Face corners.
    pub face_corners: FaceCorners,
    /// Far corner, opposite the origin.
    pub far_corner: Option<Point2D>,
    /// Visible edges first, then hidden edges.
    pub edges: Vec<BoxEdge>,
    /// Bounds over every edge endpoint.
    pub bounds: BoundingBox2D,
}

impl BoxGeometry {
    /// Create an empty geometry anchored at `origin`.
    pub fn new(origin: Point2D) -> Self {
        Self {
            origin,
            face_corners: FaceCorners::default(),
            far_corner: None,
            edges: Vec::new(),
            bounds: BoundingBox2D::empty(),
        }
    }

    /// Add an edge and update the bounding box.
    pub fn add_edge(&mut self, edge: BoxEdge) {
        self.bounds.include_point(edge.start);
        self.bounds.include_point(edge.end);
        self.edges.push(edge);
    }

    /// Get only visible edges.
    pub fn visible_edges(&self) -> impl Iterator<Item = &BoxEdge> {
        self.edges
            .iter()
            .filter(|e| e.visibility == Visibility::Visible)
    }

    /// Get only hidden edges.
    pub fn hidden_edges(&self) -> impl Iterator<Item = &BoxEdge> {
        self.edges
            .iter()
            .filter(|e| e.visibility == Visibility::Hidden)
    }

    /// Number of visible edges.
    pub fn num_visible(&self) -> usize {
        self.visible_edges().count()
    }

    /// Number of hidden edges.
    pub fn num_hidden(&self) -> usize {
        self.hidden_edges().count()
    }

    /// Whether the construction closed completely (all corners solved).
    pub fn is_complete(&self) -> bool {
        self.face_corners.num_solved() == 3 && self.far_corner.is_some()
    }
}
