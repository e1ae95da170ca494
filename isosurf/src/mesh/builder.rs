use super::{Mesh, Vertex};
use nalgebra::{Matrix4, Vector3, Vector4};
use std::collections::HashMap;

/// Container used during construction of a [`Mesh`]
pub struct MeshBuilder {
    /// Map from an edge (as an ordered pair of volume sample indices) to an
    /// index in `out.vertices`
    map: HashMap<(usize, usize), usize>,
    color: Vector4<f32>,
    out: Mesh,
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self::new(Vertex::DEFAULT_COLOR)
    }
}

impl MeshBuilder {
    /// Builds a new mesh builder, assigning `color` to every vertex
    pub fn new(color: Vector4<f32>) -> Self {
        Self {
            map: HashMap::new(),
            color,
            out: Mesh::default(),
        }
    }

    /// Sets the transforms that are copied onto the output mesh
    pub fn with_matrices(
        mut self,
        model: Matrix4<f32>,
        world: Matrix4<f32>,
    ) -> Self {
        self.out.model_matrix = model;
        self.out.world_matrix = world;
        self
    }

    /// Looks up the vertex on the edge between samples `i` and `j`
    ///
    /// If this edge hasn't been seen before, a new vertex is created at
    /// `pos`; otherwise, `pos` is ignored and the existing vertex is returned.
    ///
    /// # Panics
    /// If `i == j`, which is not a valid edge
    pub fn add_vertex(
        &mut self,
        pos: Vector3<f32>,
        i: usize,
        j: usize,
    ) -> usize {
        assert_ne!(i, j, "edge endpoints must be distinct");
        let key = (i.min(j), i.max(j));
        *self.map.entry(key).or_insert_with(|| {
            let next = self.out.vertices.len();
            self.out.vertices.push(Vertex {
                position: pos,
                normal: Vector3::zeros(),
                source: pos,
                color: self.color,
            });
            next
        })
    }

    /// Adds a triangle, accumulating its face normal into its vertices
    ///
    /// Zero-area triangles are added but contribute nothing to the normals.
    ///
    /// # Panics
    /// If any two indices are the same
    pub fn add_triangle(&mut self, a: usize, b: usize, c: usize) {
        assert!(
            a != b && b != c && a != c,
            "triangle indices must be distinct"
        );
        self.out.triangles.push(Vector3::new(a, b, c));

        let v = &mut self.out.vertices;
        let ab = v[b].position - v[a].position;
        let ac = v[c].position - v[a].position;
        if let Some(n) = ab.cross(&ac).try_normalize(0.0) {
            for i in [a, b, c] {
                v[i].normal += n;
            }
        }
    }

    /// Number of vertices added so far
    pub fn vertex_count(&self) -> usize {
        self.out.vertices.len()
    }

    /// Normalizes accumulated normals and returns the mesh
    ///
    /// Vertices which didn't receive any normal keep a zero normal.
    pub fn finish(mut self) -> Mesh {
        for v in &mut self.out.vertices {
            if let Some(n) = v.normal.try_normalize(0.0) {
                v.normal = n;
            }
        }
        self.out
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dedup() {
        let mut b = MeshBuilder::default();
        let p = Vector3::new(0.5, 0.0, 0.0);
        let i = b.add_vertex(p, 3, 7);
        assert_eq!(i, 0);
        assert_eq!(b.add_vertex(Vector3::zeros(), 7, 3), 0);
        assert_eq!(b.add_vertex(Vector3::zeros(), 3, 7), 0);
        assert_eq!(b.vertex_count(), 1);

        assert_eq!(b.add_vertex(p, 3, 8), 1);
        assert_eq!(b.vertex_count(), 2);

        let mesh = b.finish();
        assert_eq!(mesh.vertices[0].position, p);
        assert_eq!(mesh.vertices[0].source, p);
        assert_eq!(mesh.vertices[0].color, Vertex::DEFAULT_COLOR);
    }

    #[test]
    #[should_panic]
    fn test_degenerate_edge() {
        let mut b = MeshBuilder::default();
        b.add_vertex(Vector3::zeros(), 4, 4);
    }

    #[test]
    #[should_panic]
    fn test_degenerate_triangle() {
        let mut b = MeshBuilder::default();
        let i = b.add_vertex(Vector3::zeros(), 0, 1);
        let j = b.add_vertex(Vector3::x(), 0, 2);
        b.add_triangle(i, j, i);
    }

    #[test]
    fn test_normals() {
        let mut b = MeshBuilder::default();
        let v0 = b.add_vertex(Vector3::new(0.0, 0.0, 0.0), 0, 1);
        let v1 = b.add_vertex(Vector3::new(1.0, 0.0, 0.0), 0, 2);
        let v2 = b.add_vertex(Vector3::new(0.0, 1.0, 0.0), 0, 3);
        let v3 = b.add_vertex(Vector3::new(0.0, 0.0, 1.0), 0, 4);
        b.add_triangle(v0, v1, v2); // +Z
        b.add_triangle(v0, v3, v1); // +Y
        let mesh = b.finish();

        assert_eq!(mesh.triangles.len(), 2);
        assert_relative_eq!(mesh.vertices[v2].normal, Vector3::z());
        assert_relative_eq!(mesh.vertices[v3].normal, Vector3::y());
        let diag = Vector3::new(0.0f32, 1.0, 1.0).normalize();
        assert_relative_eq!(mesh.vertices[v0].normal, diag);
        assert_relative_eq!(mesh.vertices[v1].normal, diag);
    }

    #[test]
    fn test_zero_area() {
        let mut b = MeshBuilder::default();
        let v0 = b.add_vertex(Vector3::new(0.0, 0.0, 0.0), 0, 1);
        let v1 = b.add_vertex(Vector3::new(1.0, 0.0, 0.0), 0, 2);
        let v2 = b.add_vertex(Vector3::new(2.0, 0.0, 0.0), 0, 3);
        b.add_triangle(v0, v1, v2);
        let mesh = b.finish();
        assert_eq!(mesh.triangles.len(), 1);
        for v in &mesh.vertices {
            assert_eq!(v.normal, Vector3::zeros());
        }
    }
}
