use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use nalgebra::Vector3;

use isosurf::{
    mesh::{Mesh, Settings},
    volume::{Grid, Volume},
};

/// Extracts an isosurface from a volume and writes it as an STL file
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    source: Source,

    /// Absolute threshold
    #[clap(short, long, conflicts_with = "relative")]
    threshold: Option<f64>,

    /// Threshold as a fraction of the volume's value range
    #[clap(short, long)]
    relative: Option<f64>,

    /// Name of a `.stl` file to write
    #[clap(short, long)]
    out: Option<PathBuf>,

    /// Number of times to extract (for benchmarking)
    #[clap(short = 'N', default_value_t = 1)]
    n: usize,
}

#[derive(Subcommand)]
enum Source {
    /// Distance from the center of a cubic volume
    Sphere {
        /// Samples along each axis
        #[clap(short, long, default_value_t = 64)]
        size: usize,

        /// Sphere radius, in samples (defaults to a third of the size)
        #[clap(long)]
        radius: Option<f64>,
    },
    /// Normalized Z position, so the surface is a plane
    Gradient {
        /// Samples along each axis
        #[clap(short, long, default_value_t = 64)]
        size: usize,
    },
    /// Little-endian `f32` samples, stored with X varying fastest
    Raw {
        /// Input file
        #[clap(short, long)]
        input: PathBuf,

        /// Samples along each axis
        #[clap(short, long, num_args = 3, value_names = ["NX", "NY", "NZ"])]
        dims: Vec<usize>,
    },
}

fn load(source: &Source) -> Result<Grid> {
    let grid = match source {
        Source::Sphere { size, radius } => {
            let c = size.saturating_sub(1) as f64 / 2.0;
            let center = Vector3::new(c, c, c);
            let radius = radius.unwrap_or(*size as f64 / 3.0);
            info!("Building {size}³ sphere with radius {radius}");
            Grid::from_fn(Vector3::new(*size, *size, *size), |p| {
                (p.map(|v| v as f64) - center).norm() - radius
            })
        }
        Source::Gradient { size } => {
            let scale = size.saturating_sub(1).max(1) as f64;
            info!("Building {size}³ gradient");
            Grid::from_fn(Vector3::new(*size, *size, *size), |p| {
                p.z as f64 / scale
            })
        }
        Source::Raw { input, dims } => {
            let &[nx, ny, nz] = dims.as_slice() else {
                bail!("expected 3 dimensions, got {}", dims.len());
            };
            let bytes = std::fs::read(input)?;
            info!("Loading {nx}×{ny}×{nz} volume from {input:?}");
            Grid::from_raw_f32(Vector3::new(nx, ny, nz), &bytes)?
        }
    };
    Ok(grid)
}

fn run(grid: &Grid, settings: &Settings, n: usize) -> Mesh {
    let mut mesh = Mesh::new();
    for _ in 0..n {
        mesh = settings.run(grid);
    }
    mesh
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .init();

    let args = Args::parse();

    let now = Instant::now();
    let grid = load(&args.source)?;
    info!("Loaded volume in {:?}", now.elapsed());

    let settings = match (args.threshold, args.relative) {
        (Some(t), _) => Settings {
            threshold: t,
            ..Default::default()
        },
        (None, Some(f)) => {
            let Some(range) = grid.value_range() else {
                bail!("cannot use a relative threshold with an empty volume");
            };
            info!("Value range is [{}, {}]", range.0, range.1);
            Settings::relative(f, range)
        }
        (None, None) => match args.source {
            // Sphere values are signed distances, so the surface is at 0
            Source::Sphere { .. } => Settings {
                threshold: 0.0,
                ..Default::default()
            },
            _ => Settings::default(),
        },
    };

    let start = Instant::now();
    let mesh = run(&grid, &settings, args.n);
    info!(
        "Extracted {} vertices and {} triangles at threshold {} in {:?} \
         ({:?}/iter)",
        mesh.vertices.len(),
        mesh.triangles.len(),
        settings.threshold,
        start.elapsed(),
        start.elapsed() / args.n.max(1) as u32,
    );

    if let Some(path) = args.out {
        info!("Writing STL to {path:?}");
        let mut handle = std::fs::File::create(&path)?;
        mesh.write_stl(&mut handle)?;
    }
    Ok(())
}
