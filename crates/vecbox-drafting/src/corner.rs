//! Corner solving by cross-wired ray intersection.
//!
//! A face of the box closes where the edge leaving one axis tip, drawn
//! with the *other* axis's perspective, meets the edge leaving the other
//! tip drawn with the first axis's perspective. The same construction,
//! started from two face corners, yields the far corner.

use vecbox_math::Point2;

use crate::intersect::intersect_lines;
use crate::perspective::PerspectiveInfo;
use crate::types::{AxisIndex, AxisPair};

/// Intersect the ray from `s1` aimed by `info2` with the ray from `s2` aimed by `info1`.
///
/// `None` when the two rays are parallel or coincident.
pub fn construct_corner(
    s1: &Point2,
    info1: &PerspectiveInfo,
    s2: &Point2,
    info2: &PerspectiveInfo,
) -> Option<Point2> {
    let p2 = info2.aim_from(s1);
    let p4 = info1.aim_from(s2);
    intersect_lines(s1, &p2, s2, &p4)
}

/// Solve the corner of the face spanned by `pair`.
///
/// `tips` and `infos` are indexed by [`AxisIndex::index`]. A missing
/// perspective on either axis leaves the corner unsolved.
pub fn face_corner(
    pair: AxisPair,
    tips: &[Point2; 3],
    infos: &[Option<PerspectiveInfo>; 3],
) -> Option<Point2> {
    let (a, b) = pair.axes();
    let (ia, ib) = (a.index(), b.index());
    let corner = construct_corner(&tips[ia], infos[ia].as_ref()?, &tips[ib], infos[ib].as_ref()?);
    if corner.is_none() {
        log::debug!("face corner {:?} omitted: rays are parallel", pair);
    }
    corner
}

/// Solve the far corner from the A-B and B-C face corners.
///
/// The ray from `ab` is aimed by C's perspective and the ray from `bc`
/// by A's, i.e. `construct_corner(ab, info_a, bc, info_c)`.
pub fn far_corner(
    ab: Option<Point2>,
    bc: Option<Point2>,
    infos: &[Option<PerspectiveInfo>; 3],
) -> Option<Point2> {
    let (ab, bc) = (ab?, bc?);
    let info_a = infos[AxisIndex::A.index()].as_ref()?;
    let info_c = infos[AxisIndex::C.index()].as_ref()?;
    let corner = construct_corner(&ab, info_a, &bc, info_c);
    if corner.is_none() {
        log::debug!("far corner omitted: rays are parallel");
    }
    corner
}
