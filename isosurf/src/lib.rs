//! `isosurf` extracts triangle meshes from regular scalar volumes.
//!
//! A **volume** is a regular 3D lattice of scalar samples.  Given a
//! **threshold**, the level set where the field equals that threshold is a
//! surface; this crate approximates it with an indexed triangle mesh using
//! **marching tetrahedra**.
//!
//! By convention, a sample is **inside** when its value is greater than or
//! equal to the threshold.  Output triangles are wound so that their normals
//! point towards the inside, i.e. along the gradient of the field.
//!
//! # Volumes
//! Anything implementing [`Volume`](crate::volume::Volume) can be meshed.  The
//! crate ships with a dense [`Grid`](crate::volume::Grid):
//! ```
//! use isosurf::volume::Grid;
//! use nalgebra::Vector3;
//!
//! let grid = Grid::from_fn(Vector3::new(8, 8, 8), |p| p.z as f64);
//! assert_eq!(grid.data().len(), 512);
//! ```
//!
//! # Extraction
//! Extraction is configured with [`Settings`](crate::mesh::Settings):
//! ```
//! use isosurf::{mesh::Settings, volume::Grid};
//! use nalgebra::Vector3;
//!
//! let center = Vector3::new(7.5, 7.5, 7.5);
//! let grid = Grid::from_fn(Vector3::new(16, 16, 16), |p| {
//!     (p.map(|c| c as f64) - center).norm()
//! });
//! let settings = Settings { threshold: 5.0, ..Default::default() };
//! let mesh = settings.run(&grid);
//! assert!(!mesh.triangles.is_empty());
//!
//! // Positions are normalized to the unit cube; scale back to lattice units
//! // and check that every vertex sits close to the sphere
//! for v in &mesh.vertices {
//!     let r = (v.position * 15.0 - center.map(|c| c as f32)).norm();
//!     assert!((r - 5.0).abs() < 0.2);
//! }
//! ```
//!
//! # Interpolation
//! The [`interpolate`] module holds the sampling primitives (linear,
//! quadratic, their 2D variants, and barycentric) that reconstruct a field
//! between known samples.
//!
//! # Feature flags
#![doc = document_features::document_features!()]
#![warn(missing_docs)]

mod error;
pub use error::Error;

pub mod interpolate;
pub mod mesh;
pub mod volume;

pub use mesh::{Mesh, Settings, extract};
pub use volume::{Grid, Volume};
