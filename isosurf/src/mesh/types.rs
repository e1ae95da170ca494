//! Strongly-typed indexes used during extraction
//!
//! These are public so that the invariants enforced at construction can be
//! checked in `compile_fail` doctests.
use nalgebra::Vector3;

/// Strongly-typed cell corner, in the `[0, 8)` range
///
/// The corner at offset `(x, y, z) ∈ {0, 1}³` has index `x + 2y + 4z`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Corner(u8);

impl Corner {
    /// Builds a new corner
    ///
    /// ```
    /// # use isosurf::mesh::types::Corner;
    /// const C: Corner = Corner::new(5);
    /// ```
    ///
    /// # Panics
    /// If `i >= 8`, which is not a valid corner index
    ///
    /// ```compile_fail
    /// # use isosurf::mesh::types::Corner;
    /// const C: Corner = Corner::new(8);
    /// ```
    pub const fn new(i: u8) -> Self {
        assert!(i < 8);
        Self(i)
    }

    /// Returns the value of this corner as an index
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterates over all 8 corners
    pub fn iter() -> impl Iterator<Item = Corner> {
        (0..8).map(Corner)
    }

    /// Returns the lattice offset of this corner from the cell's origin
    pub fn offset(self) -> Vector3<usize> {
        Vector3::new(
            (self.0 & 1) as usize,
            ((self.0 >> 1) & 1) as usize,
            ((self.0 >> 2) & 1) as usize,
        )
    }
}

/// Directed edge between two corners of a tetrahedron
///
/// Tetrahedron corners are numbered `0..4`.  Interpolation along the edge
/// runs from `start` to `end`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Edge {
    start: u8,
    end: u8,
}

impl Edge {
    /// Builds a new edge
    ///
    /// ```
    /// # use isosurf::mesh::types::Edge;
    /// const E: Edge = Edge::new(0, 3);
    /// ```
    ///
    /// # Panics
    /// If either endpoint is not a valid tetrahedron corner
    ///
    /// ```compile_fail
    /// # use isosurf::mesh::types::Edge;
    /// const E: Edge = Edge::new(0, 4);
    /// ```
    ///
    /// If both endpoints are the same corner
    ///
    /// ```compile_fail
    /// # use isosurf::mesh::types::Edge;
    /// const E: Edge = Edge::new(2, 2);
    /// ```
    pub const fn new(start: u8, end: u8) -> Self {
        assert!(start < 4);
        assert!(end < 4);
        assert!(start != end);
        Self { start, end }
    }

    /// Returns the starting corner, as an index
    pub fn start(self) -> usize {
        self.start as usize
    }

    /// Returns the ending corner, as an index
    pub fn end(self) -> usize {
        self.end as usize
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_corner_offset() {
        for c in Corner::iter() {
            let o = c.offset();
            assert_eq!(o.x + 2 * o.y + 4 * o.z, c.index());
        }
        assert_eq!(Corner::new(6).offset(), Vector3::new(0, 1, 1));
    }

    #[test]
    fn test_edge() {
        let e = Edge::new(3, 1);
        assert_eq!(e.start(), 3);
        assert_eq!(e.end(), 1);
    }
}
