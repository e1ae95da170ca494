//! Cells and their decomposition into tetrahedra
use super::{
    builder::MeshBuilder,
    table::{CASES, case_code},
    types::{Corner, Edge},
};
use crate::volume::{IndexMapper, Volume};
use nalgebra::Vector3;

/// Splits a cube into six tetrahedra sharing the `2 → 5` diagonal
///
/// Every tetrahedron is positively oriented, so a single triangle table
/// works for all of them.
pub const TETRAHEDRA: [[Corner; 4]; 6] = [
    corners([0, 1, 2, 5]),
    corners([1, 3, 2, 5]),
    corners([3, 2, 5, 7]),
    corners([0, 2, 4, 5]),
    corners([6, 4, 2, 5]),
    corners([6, 7, 5, 2]),
];

const fn corners(c: [u8; 4]) -> [Corner; 4] {
    [
        Corner::new(c[0]),
        Corner::new(c[1]),
        Corner::new(c[2]),
        Corner::new(c[3]),
    ]
}

/// A single lattice sample, as seen during extraction
#[derive(Copy, Clone, Debug)]
pub struct DataPoint {
    /// Position, normalized to the `[0, 1]` range on each axis
    pub pos: Vector3<f64>,
    /// Sample value
    pub value: f64,
    /// Linear index of the sample within the volume
    pub index: usize,
}

impl DataPoint {
    /// Finds where the surface crosses the edge from `self` to `other`
    ///
    /// If both endpoints have the same value, this returns `self.pos`.
    pub fn interpolate(
        &self,
        other: &DataPoint,
        threshold: f64,
    ) -> Vector3<f64> {
        let t = ((threshold - self.value) / (other.value - self.value)).abs();
        let t = if t.is_finite() { t } else { 0.0 };
        crate::interpolate::linear(self.pos, other.pos, t)
    }
}

/// The eight samples at the corners of one grid cube
#[derive(Copy, Clone, Debug)]
pub struct Cell {
    points: [DataPoint; 8],
}

impl Cell {
    /// Loads the cell whose lowest corner is at `origin`
    ///
    /// # Panics
    /// If the cell extends past the edge of the volume
    pub fn new<V: Volume + ?Sized>(
        volume: &V,
        origin: Vector3<usize>,
    ) -> Self {
        let dims = volume.dims();
        let mapper = IndexMapper::new(dims);
        let scale = (dims - Vector3::repeat(1)).map(|d| d as f64);
        let points = std::array::from_fn(|i| {
            let p = origin + Corner::new(i as u8).offset();
            DataPoint {
                pos: p.map(|c| c as f64).component_div(&scale),
                value: volume.value(p),
                index: mapper.index(p),
            }
        });
        Self { points }
    }

    /// Returns the sample at the given corner
    pub fn point(&self, c: Corner) -> &DataPoint {
        &self.points[c.index()]
    }

    /// Checks whether the cell is entirely inside or outside
    pub fn is_uniform(&self, threshold: f64) -> bool {
        let inside = self.points[0].value >= threshold;
        self.points.iter().all(|p| (p.value >= threshold) == inside)
    }

    /// Iterates over the six tetrahedra of this cell
    pub fn tetrahedra(&self) -> impl Iterator<Item = Tetrahedron> + '_ {
        TETRAHEDRA.iter().map(|t| Tetrahedron {
            points: t.map(|c| *self.point(c)),
        })
    }
}

/// Four samples forming one tetrahedron of a [`Cell`]
#[derive(Copy, Clone, Debug)]
pub struct Tetrahedron {
    points: [DataPoint; 4],
}

impl Tetrahedron {
    /// Builds a tetrahedron from its four samples
    ///
    /// The points must be positively oriented for triangles to be wound
    /// correctly.
    pub fn new(points: [DataPoint; 4]) -> Self {
        Self { points }
    }

    /// Returns the case code at the given threshold
    pub fn case(&self, threshold: f64) -> usize {
        case_code(self.points.map(|p| p.value), threshold)
    }

    fn vertex(
        &self,
        e: Edge,
        threshold: f64,
        out: &mut MeshBuilder,
    ) -> usize {
        let a = &self.points[e.start()];
        let b = &self.points[e.end()];
        let pos = a.interpolate(b, threshold);
        out.add_vertex(pos.map(|c| c as f32), a.index, b.index)
    }

    /// Emits this tetrahedron's triangles into the builder
    ///
    /// Returns the number of triangles emitted.
    pub fn triangulate(
        &self,
        threshold: f64,
        out: &mut MeshBuilder,
    ) -> usize {
        let tris = CASES[self.case(threshold)];
        for t in tris {
            let [a, b, c] = t.map(|e| self.vertex(e, threshold, out));
            out.add_triangle(a, b, c);
        }
        tris.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::volume::Grid;
    use approx::assert_relative_eq;

    fn point(pos: [f64; 3], value: f64, index: usize) -> DataPoint {
        DataPoint {
            pos: Vector3::from(pos),
            value,
            index,
        }
    }

    #[test]
    fn test_orientation() {
        for t in TETRAHEDRA {
            let [p0, p1, p2, p3] = t.map(|c| c.offset().map(|v| v as i64));
            let det = (p1 - p0).dot(&(p2 - p0).cross(&(p3 - p0)));
            assert_eq!(det, 1, "bad orientation for {t:?}");
        }
    }

    #[test]
    fn test_tetrahedra_share_diagonal() {
        for t in TETRAHEDRA {
            assert!(t.contains(&Corner::new(2)));
            assert!(t.contains(&Corner::new(5)));
        }
        for c in Corner::iter() {
            assert!(TETRAHEDRA.iter().any(|t| t.contains(&c)));
        }
    }

    #[test]
    fn test_interpolate() {
        let a = point([0.0, 0.0, 0.0], 0.0, 0);
        let b = point([1.0, 0.0, 0.0], 2.0, 1);
        let expected = Vector3::new(0.25, 0.0, 0.0);
        assert_relative_eq!(a.interpolate(&b, 0.5), expected);
        assert_relative_eq!(b.interpolate(&a, 0.5), expected);

        // Equal values snap to the starting point instead of producing NaN
        let c = point([0.0, 1.0, 0.0], 0.0, 2);
        assert_eq!(a.interpolate(&c, 0.0), a.pos);
        assert_eq!(c.interpolate(&a, 0.5), c.pos);
    }

    #[test]
    fn test_cell_positions() {
        let grid = Grid::from_fn(Vector3::new(3, 5, 2), |p| p.y as f64);
        let cell = Cell::new(&grid, Vector3::new(1, 3, 0));
        let p = cell.point(Corner::new(7));
        assert_relative_eq!(p.pos, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(p.value, 4.0);
        assert_eq!(p.index, 2 + 3 * (4 + 5 * 1));

        let p = cell.point(Corner::new(0));
        assert_relative_eq!(p.pos, Vector3::new(0.5, 0.75, 0.0));
        assert_eq!(p.index, 1 + 3 * 3);

        assert!(!cell.is_uniform(3.5));
        assert!(cell.is_uniform(5.0));
        assert!(cell.is_uniform(3.0));
    }

    #[test]
    fn test_triangulate() {
        let tet = Tetrahedron::new([
            point([0.0, 0.0, 0.0], 1.0, 10),
            point([1.0, 0.0, 0.0], 0.0, 11),
            point([0.0, 1.0, 0.0], 0.0, 12),
            point([0.0, 0.0, 1.0], 0.0, 13),
        ]);
        assert_eq!(tet.case(0.5), 1);

        let mut b = MeshBuilder::default();
        assert_eq!(tet.triangulate(0.5, &mut b), 1);
        let mesh = b.finish();
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.triangles.len(), 1);
        for v in &mesh.vertices {
            assert_relative_eq!(v.position.sum(), 0.5);
            // Normal points towards the inside corner at the origin
            let n = v.normal;
            assert!(n.x < 0.0 && n.y < 0.0 && n.z < 0.0);
        }

        // Fully outside or fully inside emits nothing
        let mut b = MeshBuilder::default();
        assert_eq!(tet.triangulate(2.0, &mut b), 0);
        assert_eq!(tet.triangulate(-1.0, &mut b), 0);
        assert!(b.finish().vertices.is_empty());
    }
}
