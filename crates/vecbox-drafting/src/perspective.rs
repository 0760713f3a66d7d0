//! Per-axis perspective model: parallel direction or vanishing point.

use vecbox_math::{Point2, Tolerance, Vec2};

/// Convergence at or below this value selects parallel mode.
///
/// Shared by every caller so that values near zero never flip between
/// the two modes.
pub const PARALLEL_THRESHOLD: f64 = 0.001;

/// How edges parallel to one axis are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PerspectiveInfo {
    /// Edges keep the axis direction. `direction` is a displacement, not a point.
    Parallel {
        /// `tip - origin` of the axis.
        direction: Vec2,
    },
    /// Edges converge on a point on the axis ray.
    Converging {
        /// Where projected edges of this axis meet.
        vanishing_point: Point2,
    },
}

impl PerspectiveInfo {
    /// The point a ray starting at `start` is aimed through.
    ///
    /// Parallel: `start + direction`. Converging: the vanishing point.
    pub fn aim_from(&self, start: &Point2) -> Point2 {
        match self {
            PerspectiveInfo::Parallel { direction } => *start + *direction,
            PerspectiveInfo::Converging { vanishing_point } => *vanishing_point,
        }
    }

    /// Whether this axis is drawn without convergence.
    pub fn is_parallel(&self) -> bool {
        matches!(self, PerspectiveInfo::Parallel { .. })
    }
}

/// Whether `convergence` selects parallel mode.
pub fn is_parallel(convergence: f64) -> bool {
    convergence <= PARALLEL_THRESHOLD
}

/// Build the perspective info for the axis `origin -> tip`.
///
/// With `convergence <= 0.001` the result is
/// `Parallel { direction: tip - origin }`. Otherwise the vanishing point
/// sits on the ray from `origin` through `tip` at distance
/// `|tip - origin| / convergence` from the origin, so a convergence of
/// `1.0` puts it exactly on the tip.
///
/// Returns `None` for a zero-length axis in converging mode (no ray to
/// place the vanishing point on) and for a NaN convergence. An infinite
/// convergence puts the vanishing point on the origin.
pub fn project(origin: &Point2, tip: &Point2, convergence: f64) -> Option<PerspectiveInfo> {
    let axis = tip - origin;

    if convergence.is_nan() {
        log::debug!("convergence is NaN; axis has no perspective");
        return None;
    }
    if is_parallel(convergence) {
        return Some(PerspectiveInfo::Parallel { direction: axis });
    }

    let len = axis.norm();
    if Tolerance::DEFAULT.is_zero(len) {
        log::debug!("zero-length axis at ({}, {}); no vanishing point", tip.x, tip.y);
        return None;
    }

    let distance = len / convergence;
    Some(PerspectiveInfo::Converging {
        vanishing_point: origin + (axis / len) * distance,
    })
}
