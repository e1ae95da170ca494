//! Isosurface extraction using marching tetrahedra
//!
//! Each cube of the volume lattice is split into six tetrahedra
//! ([`TETRAHEDRA`]).  Each tetrahedron is classified against the
//! threshold, then triangulated with a fixed lookup table
//! ([`CASES`]).  Vertices are placed on tetrahedron edges by linear
//! interpolation, and are shared between every triangle that touches the
//! same edge of the lattice.
//!
//! ```
//! use isosurf::{mesh::Settings, volume::Grid};
//! use nalgebra::Vector3;
//!
//! // A plane at z = 0.5 (in normalized coordinates)
//! let grid = Grid::from_fn(Vector3::new(4, 4, 4), |p| p.z as f64 / 3.0);
//! let mesh = Settings::default().run(&grid);
//! for v in &mesh.vertices {
//!     assert!((v.position.z - 0.5).abs() < 1e-6);
//! }
//! ```
use crate::volume::Volume;
use log::{debug, trace};
use nalgebra::{Matrix4, Vector3, Vector4};

mod builder;
mod cell;
mod output;
mod table;

// Re-export the builder and cell types for advanced users
pub use builder::MeshBuilder;
pub use cell::{Cell, DataPoint, TETRAHEDRA, Tetrahedron};
pub use table::{CASES, case_code};

pub mod types;

/// A single vertex of an output [`Mesh`]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    /// Position, in the volume's normalized `[0, 1]³` space
    pub position: Vector3<f32>,
    /// Unit normal, or zero if no triangle contributed to it
    pub normal: Vector3<f32>,
    /// Original position, before any downstream deformation
    pub source: Vector3<f32>,
    /// RGBA color
    pub color: Vector4<f32>,
}

impl Vertex {
    /// Color assigned to vertices unless otherwise specified
    pub const DEFAULT_COLOR: Vector4<f32> = Vector4::new(0.7, 0.7, 0.7, 1.0);
}

/// An indexed triangle mesh
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mesh {
    /// Triangles, as indexes into [`self.vertices`](Self::vertices)
    pub triangles: Vec<Vector3<usize>>,
    /// Vertex data
    pub vertices: Vec<Vertex>,
    /// Model transform, copied from the source volume
    pub model_matrix: Matrix4<f32>,
    /// World transform, copied from the source volume
    pub world_matrix: Matrix4<f32>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self {
            triangles: vec![],
            vertices: vec![],
            model_matrix: Matrix4::identity(),
            world_matrix: Matrix4::identity(),
        }
    }
}

impl Mesh {
    /// Builds a new, empty mesh
    pub fn new() -> Self {
        Self::default()
    }
}

/// Settings when building a mesh
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    /// Samples with values at or above this threshold are inside
    pub threshold: f64,

    /// Color assigned to every output vertex
    pub color: Vector4<f32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            color: Vertex::DEFAULT_COLOR,
        }
    }
}

impl Settings {
    /// Builds settings with a threshold relative to a value range
    ///
    /// `fraction = 0` selects `range.0` and `fraction = 1` selects `range.1`.
    ///
    /// ```
    /// # use isosurf::mesh::Settings;
    /// let s = Settings::relative(0.25, (-1.0, 3.0));
    /// assert_eq!(s.threshold, 0.0);
    /// ```
    pub fn relative(fraction: f64, range: (f64, f64)) -> Self {
        Self {
            threshold: crate::interpolate::linear(range.0, range.1, fraction),
            ..Self::default()
        }
    }

    /// Extracts a mesh from the given volume
    pub fn run<V: Volume + ?Sized>(&self, volume: &V) -> Mesh {
        let dims = volume.dims();
        let mut out = MeshBuilder::new(self.color)
            .with_matrices(volume.model_matrix(), volume.world_matrix());
        if dims.iter().any(|&d| d < 2) {
            debug!("volume {dims:?} is too thin to mesh");
            return out.finish();
        }

        let mut active = 0;
        for z in 0..dims.z - 1 {
            for y in 0..dims.y - 1 {
                for x in 0..dims.x - 1 {
                    let cell = Cell::new(volume, Vector3::new(x, y, z));
                    if cell.is_uniform(self.threshold) {
                        continue;
                    }
                    let tris: usize = cell
                        .tetrahedra()
                        .map(|t| t.triangulate(self.threshold, &mut out))
                        .sum();
                    trace!("cell ({x}, {y}, {z}): {tris} triangles");
                    active += 1;
                }
            }
        }
        let mesh = out.finish();
        debug!(
            "extracted {} vertices and {} triangles from {active} cells \
             at threshold {}",
            mesh.vertices.len(),
            mesh.triangles.len(),
            self.threshold
        );
        mesh
    }
}

/// Extracts a mesh at the given threshold, using default settings otherwise
pub fn extract<V: Volume + ?Sized>(volume: &V, threshold: f64) -> Mesh {
    Settings {
        threshold,
        ..Settings::default()
    }
    .run(volume)
}
