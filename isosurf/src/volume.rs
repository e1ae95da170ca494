//! Regular scalar volumes
//!
//! A volume is a 3D lattice of `nx × ny × nz` samples.  Samples are addressed
//! by integer lattice coordinates; the [`IndexMapper`] converts between those
//! coordinates and the linear index used by dense storage (x varies fastest).
use crate::Error;
use nalgebra::{Matrix4, Vector3};

/// A regular 3D grid of scalar samples
pub trait Volume {
    /// Returns the number of samples along each axis
    fn dims(&self) -> Vector3<usize>;

    /// Returns the sample at the given lattice position
    ///
    /// # Panics
    /// Implementations may panic if `pos` is out of bounds
    fn value(&self, pos: Vector3<usize>) -> f64;

    /// Model transform, copied onto meshes extracted from this volume
    fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::identity()
    }

    /// World transform, copied onto meshes extracted from this volume
    fn world_matrix(&self) -> Matrix4<f32> {
        Matrix4::identity()
    }

    /// Returns the `(min, max)` sample values, or `None` for an empty volume
    ///
    /// The default implementation visits every sample.
    fn value_range(&self) -> Option<(f64, f64)> {
        let dims = self.dims();
        let mut out: Option<(f64, f64)> = None;
        for z in 0..dims.z {
            for y in 0..dims.y {
                for x in 0..dims.x {
                    let v = self.value(Vector3::new(x, y, z));
                    out = Some(match out {
                        None => (v, v),
                        Some((lo, hi)) => (lo.min(v), hi.max(v)),
                    });
                }
            }
        }
        out
    }
}

/// Maps between lattice coordinates and linear storage indices
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct IndexMapper {
    dims: Vector3<usize>,
}

impl IndexMapper {
    /// Builds a new mapper for a volume of the given size
    pub fn new(dims: Vector3<usize>) -> Self {
        Self { dims }
    }

    /// Returns the linear index of the given lattice position
    pub fn index(&self, pos: Vector3<usize>) -> usize {
        debug_assert!(pos.x < self.dims.x);
        debug_assert!(pos.y < self.dims.y);
        debug_assert!(pos.z < self.dims.z);
        pos.x + self.dims.x * (pos.y + self.dims.y * pos.z)
    }

    /// Returns the lattice position of the given linear index
    pub fn position(&self, index: usize) -> Vector3<usize> {
        let x = index % self.dims.x;
        let y = (index / self.dims.x) % self.dims.y;
        let z = index / (self.dims.x * self.dims.y);
        Vector3::new(x, y, z)
    }

    /// Total number of samples
    pub fn len(&self) -> usize {
        self.dims.x * self.dims.y * self.dims.z
    }

    /// Checks whether the mapped volume has no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dense volume, storing one `f64` per sample
#[derive(Clone, Debug)]
pub struct Grid {
    mapper: IndexMapper,
    data: Vec<f64>,
    model: Matrix4<f32>,
    world: Matrix4<f32>,
}

impl Grid {
    /// Builds a grid from samples stored in x-fastest order
    ///
    /// Returns an error if `data.len()` doesn't match `dims`.
    pub fn new(dims: Vector3<usize>, data: Vec<f64>) -> Result<Self, Error> {
        let mapper = IndexMapper::new(dims);
        if data.len() != mapper.len() {
            return Err(Error::BadVolumeSize {
                expected: mapper.len(),
                actual: data.len(),
            });
        }
        Ok(Self {
            mapper,
            data,
            model: Matrix4::identity(),
            world: Matrix4::identity(),
        })
    }

    /// Builds a grid by evaluating `f` at every lattice position
    pub fn from_fn<F: FnMut(Vector3<usize>) -> f64>(
        dims: Vector3<usize>,
        mut f: F,
    ) -> Self {
        let mapper = IndexMapper::new(dims);
        let data = (0..mapper.len()).map(|i| f(mapper.position(i))).collect();
        Self {
            mapper,
            data,
            model: Matrix4::identity(),
            world: Matrix4::identity(),
        }
    }

    /// Builds a grid from little-endian `f32` samples in x-fastest order
    pub fn from_raw_f32(
        dims: Vector3<usize>,
        bytes: &[u8],
    ) -> Result<Self, Error> {
        if bytes.len() % std::mem::size_of::<f32>() != 0 {
            return Err(Error::BadRawLength(bytes.len()));
        }
        let data = bytes
            .chunks_exact(std::mem::size_of::<f32>())
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]) as f64)
            .collect();
        Self::new(dims, data)
    }

    /// Sets the model transform
    pub fn with_model_matrix(mut self, m: Matrix4<f32>) -> Self {
        self.model = m;
        self
    }

    /// Sets the world transform
    pub fn with_world_matrix(mut self, m: Matrix4<f32>) -> Self {
        self.world = m;
        self
    }

    /// Returns the index mapper for this grid
    pub fn mapper(&self) -> IndexMapper {
        self.mapper
    }

    /// Borrows the raw sample data
    pub fn data(&self) -> &[f64] {
        &self.data
    }
}

impl Volume for Grid {
    fn dims(&self) -> Vector3<usize> {
        self.mapper.dims
    }
    fn value(&self, pos: Vector3<usize>) -> f64 {
        self.data[self.mapper.index(pos)]
    }
    fn model_matrix(&self) -> Matrix4<f32> {
        self.model
    }
    fn world_matrix(&self) -> Matrix4<f32> {
        self.world
    }
    fn value_range(&self) -> Option<(f64, f64)> {
        self.data.iter().fold(None, |acc, &v| {
            Some(match acc {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            })
        })
    }
}
