//! Marching tetrahedra lookup table
//!
//! A tetrahedron is classified by a 4-bit case code, where bit `k` is set if
//! corner `k` is inside (value at or above the threshold).  [`CASES`] maps
//! each code to the triangles that should be emitted, with each triangle
//! vertex placed on a tetrahedron edge.
//!
//! Triangles are wound so that their normals point towards the inside
//! corners.  Complementary cases (`c` and `15 - c`) use the same edges with
//! the opposite winding.
use super::types::Edge;

const E01: Edge = Edge::new(0, 1);
const E02: Edge = Edge::new(0, 2);
const E03: Edge = Edge::new(0, 3);
const E10: Edge = Edge::new(1, 0);
const E12: Edge = Edge::new(1, 2);
const E13: Edge = Edge::new(1, 3);
const E20: Edge = Edge::new(2, 0);
const E21: Edge = Edge::new(2, 1);
const E23: Edge = Edge::new(2, 3);
const E30: Edge = Edge::new(3, 0);
const E31: Edge = Edge::new(3, 1);
const E32: Edge = Edge::new(3, 2);

/// Triangles to emit for each case code
///
/// This assumes a positively oriented tetrahedron, i.e.
/// `(p1 - p0) · ((p2 - p0) × (p3 - p0)) > 0`.
pub const CASES: [&[[Edge; 3]]; 16] = [
    &[],
    &[[E02, E01, E03]],
    &[[E12, E13, E10]],
    &[[E13, E03, E12], [E12, E03, E02]],
    &[[E21, E20, E23]],
    &[[E01, E03, E21], [E03, E23, E21]],
    &[[E20, E13, E10], [E20, E23, E13]],
    &[[E30, E32, E31]],
    &[[E31, E32, E30]],
    &[[E10, E13, E20], [E13, E23, E20]],
    &[[E21, E03, E01], [E21, E23, E03]],
    &[[E23, E20, E21]],
    &[[E12, E03, E13], [E02, E03, E12]],
    &[[E10, E13, E12]],
    &[[E03, E01, E02]],
    &[],
];

/// Computes the case code for the given corner values
pub fn case_code(values: [f64; 4], threshold: f64) -> usize {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v >= threshold)
        .map(|(k, _)| 1usize << k)
        .sum()
}
