//! Box assembly: corners, then visible and hidden edges.

use vecbox_math::Point2;

use crate::corner::{face_corner, far_corner};
use crate::perspective::{project, PerspectiveInfo};
use crate::types::{
    AxisIndex, AxisPair, BoxEdge, BoxGeometry, CornerId, FaceCorners, Point2D, Visibility,
};

/// Tip-to-face-corner edges, in drawing order.
const VISIBLE_EDGES: [(AxisIndex, AxisPair); 6] = [
    (AxisIndex::A, AxisPair::AB),
    (AxisIndex::A, AxisPair::AC),
    (AxisIndex::B, AxisPair::AB),
    (AxisIndex::B, AxisPair::BC),
    (AxisIndex::C, AxisPair::AC),
    (AxisIndex::C, AxisPair::BC),
];

/// Assemble the box from axis tips and their perspective infos.
///
/// Solves `P_AB`, `P_AC`, `P_BC`, then the far corner from `P_AB` and
/// `P_BC`. Emits the six tip-to-face-corner edges as visible and the
/// three face-corner-to-far-corner edges as hidden. An edge whose end is
/// an unsolved corner is left out; the rest of the box is still built.
///
/// Pure: identical inputs give identical output.
pub fn assemble_box(
    origin: &Point2,
    tips: &[Point2; 3],
    infos: &[Option<PerspectiveInfo>; 3],
) -> BoxGeometry {
    let mut geometry = BoxGeometry::new((*origin).into());

    let ab = face_corner(AxisPair::AB, tips, infos);
    let ac = face_corner(AxisPair::AC, tips, infos);
    let bc = face_corner(AxisPair::BC, tips, infos);
    let far = far_corner(ab, bc, infos);

    geometry.face_corners = FaceCorners {
        ab: ab.map(Point2D::from),
        ac: ac.map(Point2D::from),
        bc: bc.map(Point2D::from),
    };
    geometry.far_corner = far.map(Point2D::from);

    for (axis, pair) in VISIBLE_EDGES {
        if let Some(corner) = geometry.face_corners.get(pair) {
            geometry.add_edge(BoxEdge {
                start: tips[axis.index()].into(),
                end: corner,
                from: CornerId::Tip(axis),
                to: CornerId::Face(pair),
                visibility: Visibility::Visible,
            });
        }
    }

    if let Some(far) = geometry.far_corner {
        for pair in AxisPair::ALL {
            if let Some(corner) = geometry.face_corners.get(pair) {
                geometry.add_edge(BoxEdge {
                    start: corner,
                    end: far,
                    from: CornerId::Face(pair),
                    to: CornerId::Far,
                    visibility: Visibility::Hidden,
                });
            }
        }
    }

    log::trace!(
        "assembled box: {} face corner(s), far corner {}, {} visible / {} hidden edges",
        geometry.face_corners.num_solved(),
        if geometry.far_corner.is_some() { "solved" } else { "missing" },
        geometry.num_visible(),
        geometry.num_hidden()
    );

    geometry
}

/// Project every axis with its convergence factor, then assemble the box.
pub fn build_box(origin: &Point2, tips: &[Point2; 3], convergences: &[f64; 3]) -> BoxGeometry {
    let infos = [0, 1, 2].map(|i| project(origin, &tips[i], convergences[i]));
    assemble_box(origin, tips, &infos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vecbox_math::{polar_to_canvas, Vec2};

    fn sample_tips(origin: &Point2) -> [Point2; 3] {
        [
            polar_to_canvas(origin, 120.0, 10.0),
            polar_to_canvas(origin, 90.0, 130.0),
            polar_to_canvas(origin, 150.0, 250.0),
        ]
    }

    #[test]
    fn test_parallel_box_is_complete() {
        let origin = Point2::new(400.0, 400.0);
        let tips = sample_tips(&origin);
        let geometry = build_box(&origin, &tips, &[0.0, 0.0, 0.0]);

        assert!(geometry.is_complete());
        assert_eq!(geometry.num_visible(), 6);
        assert_eq!(geometry.num_hidden(), 3);
        assert!(geometry.bounds.is_valid());

        // parallel limit: far corner = origin + a + b + c
        let sum: Vec2 = tips.iter().map(|t| *t - origin).sum();
        let expected = origin + sum;
        let far = geometry.far_corner.unwrap();
        assert!((far.x - expected.x).abs() < 1e-9);
        assert!((far.y - expected.y).abs() < 1e-9);
    }

    #[test]
    fn test_edge_classification() {
        let origin = Point2::new(400.0, 400.0);
        let geometry = build_box(&origin, &sample_tips(&origin), &[0.2, 0.3, 0.1]);

        for edge in geometry.visible_edges() {
            assert!(matches!(edge.from, CornerId::Tip(_)));
            assert!(matches!(edge.to, CornerId::Face(_)));
        }
        for edge in geometry.hidden_edges() {
            assert!(matches!(edge.from, CornerId::Face(_)));
            assert_eq!(edge.to, CornerId::Far);
        }
        // every tip feeds exactly the two faces it spans
        for edge in geometry.visible_edges() {
            if let (CornerId::Tip(axis), CornerId::Face(pair)) = (edge.from, edge.to) {
                assert!(pair.contains(axis));
            }
        }
    }

    #[test]
    fn test_degenerate_axis_omits_touching_edges_only() {
        let origin = Point2::new(400.0, 400.0);
        let mut tips = sample_tips(&origin);
        // collapse C onto the origin: no vanishing point for C
        tips[2] = origin;
        let geometry = build_box(&origin, &tips, &[0.2, 0.2, 0.2]);

        assert!(geometry.face_corners.ab.is_some());
        assert!(geometry.face_corners.ac.is_none());
        assert!(geometry.face_corners.bc.is_none());
        assert!(geometry.far_corner.is_none());

        assert_eq!(geometry.num_visible(), 2);
        assert_eq!(geometry.num_hidden(), 0);
        for edge in &geometry.edges {
            assert!(edge.touches(CornerId::Face(AxisPair::AB)));
        }
    }

    #[test]
    fn test_unsolved_far_corner_keeps_visible_edges() {
        let origin = Point2::origin();
        let tips = [
            Point2::new(100.0, 0.0),
            Point2::new(0.0, 100.0),
            Point2::new(-100.0, -100.0),
        ];
        let infos = [
            None,
            Some(PerspectiveInfo::Parallel {
                direction: Vec2::new(0.0, 100.0),
            }),
            Some(PerspectiveInfo::Parallel {
                direction: Vec2::new(-100.0, -100.0),
            }),
        ];
        let geometry = assemble_box(&origin, &tips, &infos);

        assert_eq!(geometry.face_corners.num_solved(), 1);
        assert!(geometry.far_corner.is_none());
        assert_eq!(geometry.num_visible(), 2);
        assert_eq!(geometry.num_hidden(), 0);
        assert!(geometry
            .edges
            .iter()
            .all(|e| e.touches(CornerId::Face(AxisPair::BC))));
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let origin = Point2::new(400.0, 400.0);
        let tips = sample_tips(&origin);
        let first = build_box(&origin, &tips, &[0.4, 0.0, 0.7]);
        let second = build_box(&origin, &tips, &[0.4, 0.0, 0.7]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_edges_serialize_with_visibility() {
        let origin = Point2::new(400.0, 400.0);
        let geometry = build_box(&origin, &sample_tips(&origin), &[0.0, 0.0, 0.0]);
        let json = serde_json::to_string(&geometry).unwrap();
        assert!(json.contains("\"Hidden\""));
        assert!(json.contains("\"Visible\""));
        let back: BoxGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.edges.len(), geometry.edges.len());
    }
}
