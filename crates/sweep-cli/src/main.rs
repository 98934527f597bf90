//! Sweep catalog renderer
//!
//! Builds one of the built-in swept models and writes it as STL.
//!
//! # Commands
//!
//! - `sweep list` - Show the available models
//! - `sweep render <NAME>` - Write `<NAME>.stl`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use mesh_io::{StlEncoding, save_stl};
use mesh_sweep::{EndCaps, FrameMode, SweepConfig, Winding, catalog, find};
use mesh_types::MeshBounds;

/// Guided path extrusion
#[derive(Parser)]
#[command(name = "sweep")]
#[command(about = "Render swept profile models to STL", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog models
    List,

    /// Sweep a catalog model and write it as STL
    Render {
        /// The model to render (e.g., "spring")
        #[arg(name = "NAME")]
        name: String,

        /// Output file [default: <NAME>.stl]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write binary STL instead of ASCII
        #[arg(long)]
        binary: bool,

        /// Close both ends with triangle fans
        #[arg(long)]
        capped: bool,

        /// Keep the cross-section rigid instead of following the guide distance
        #[arg(long)]
        orthonormal: bool,

        /// Orient every side triangle the same way
        #[arg(long)]
        consistent_winding: bool,

        /// Build rings on one thread
        #[arg(long)]
        serial: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            list();
            Ok(())
        }
        Commands::Render {
            name,
            output,
            binary,
            capped,
            orthonormal,
            consistent_winding,
            serial,
        } => {
            let config = sweep_config(capped, orthonormal, consistent_winding, serial);
            let encoding = if binary {
                StlEncoding::Binary
            } else {
                StlEncoding::Ascii
            };
            let output = output.unwrap_or_else(|| default_output(&name));
            render(&name, &config, &output, encoding).map(|_| ())
        }
    }
}

/// Maps the render flags onto a sweep configuration.
#[allow(clippy::fn_params_excessive_bools)]
fn sweep_config(capped: bool, orthonormal: bool, consistent_winding: bool, serial: bool) -> SweepConfig {
    SweepConfig::default()
        .with_ends(if capped { EndCaps::Closed } else { EndCaps::Open })
        .with_frame_mode(if orthonormal {
            FrameMode::Orthonormal
        } else {
            FrameMode::Skewed
        })
        .with_winding(if consistent_winding {
            Winding::Consistent
        } else {
            Winding::AsStitched
        })
        .with_parallel(!serial)
}

fn default_output(name: &str) -> PathBuf {
    PathBuf::from(format!("{name}.stl"))
}

fn list() {
    let width = catalog().iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in catalog() {
        println!("{:<width$}  {}", entry.name, entry.description);
    }
}

/// Sweeps `name` and writes it to `output`, returning the triangle count.
fn render(name: &str, config: &SweepConfig, output: &Path, encoding: StlEncoding) -> Result<usize> {
    let entry = find(name).ok_or_else(|| {
        let known: Vec<_> = catalog().iter().map(|e| e.name).collect();
        anyhow!("unknown model '{name}' (expected one of: {})", known.join(", "))
    })?;

    let mesh = entry
        .build(config)
        .with_context(|| format!("failed to sweep '{name}'"))?;
    save_stl(&mesh, output, encoding)
        .with_context(|| format!("failed to write {}", output.display()))?;

    let bounds = mesh.bounds();
    println!("{}: {} triangles -> {}", entry.description, mesh.len(), output.display());
    println!(
        "  bounds: [{:.3}, {:.3}, {:.3}] .. [{:.3}, {:.3}, {:.3}]",
        bounds.min.x, bounds.min.y, bounds.min.z, bounds.max.x, bounds.max.y, bounds.max.z
    );

    Ok(mesh.len())
}
