//! Mesh output implementation
use super::Mesh;
use std::io::{BufWriter, Write};

impl Mesh {
    /// Writes a binary STL to the given output
    ///
    /// Facet normals are computed from triangle winding, so they point
    /// towards the inside of the surface.
    pub fn write_stl<F: std::io::Write>(
        &self,
        out: &mut F,
    ) -> Result<(), crate::Error> {
        // We're going to do many small writes and will typically be writing to
        // a file, so using a `BufWriter` saves excessive syscalls.
        let mut out = BufWriter::new(out);
        const HEADER: &[u8] = b"Binary STL exported by isosurf";
        static_assertions::const_assert!(HEADER.len() <= 80);
        out.write_all(HEADER)?;
        out.write_all(&[0u8; 80 - HEADER.len()])?;
        out.write_all(&(self.triangles.len() as u32).to_le_bytes())?;
        for t in &self.triangles {
            let a = self.vertices[t.x].position;
            let b = self.vertices[t.y].position;
            let c = self.vertices[t.z].position;
            let normal = (b - a).cross(&(c - a)).try_normalize(0.0);
            for p in &normal.unwrap_or_default() {
                out.write_all(&p.to_le_bytes())?;
            }
            for p in [a, b, c].iter().flatten() {
                out.write_all(&p.to_le_bytes())?;
            }
            out.write_all(&[0u8; std::mem::size_of::<u16>()])?; // attributes
        }
        out.flush()?;
        Ok(())
    }
}
