//! # Plycase CLI
//!
//! Command-line driver for `case_core`. Picks one of the three input modes
//! from the arguments, validates plywood size, grid spec and baseplate style
//! at the boundary, and prints a text report (or JSON).
//!
//! ## Modes
//!
//! 1. Plain case: `plycase -w 300 -d 200 -H 150`
//! 2. Size-first Gridfinity: `plycase -w 400 -d 300 -H 120 --gridfinity`
//! 3. Exact grid: `plycase --grid 9x7x6`

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use case_core::calculations::{CaseConfig, CaseRequest, GridSpec, SizeSpec};
use case_core::errors::CalcError;
use case_core::file_io::{load_settings, write_scad};
use case_core::report::{render_mode_summary, Report};
use case_core::{BaseplateStyle, PlywoodSize, ShopSettings};

const EXAMPLES: &str = "\
Gridfinity dimensions: 42mm per grid unit, 7mm per height unit
Common bin heights: 3u, 6u, 9u, 12u, 18u, 24u (multiples of 3)

Examples:
  # Size-first: ~400x300x120mm interior, fit Gridfinity (rounds up to 10x7, 12u bins)
  plycase -w 400 -d 300 -H 120 --gridfinity

  # Same but round DOWN (smaller case, fewer grid units)
  plycase -w 400 -d 300 -H 120 --gridfinity --round-down

  # Exact grid: 10x8 grid with 24u bins
  plycase --grid 10x8x24

  # Plain case without Gridfinity
  plycase -w 300 -d 200 -H 150

  # Custom margin and plywood
  plycase -w 400 -d 300 -H 150 --gridfinity --margin 10 --ply 1/2";

/// Plywood case calculator with Gridfinity support
#[derive(Debug, Clone, Parser)]
#[command(name = "plycase", version, after_help = EXAMPLES)]
pub struct Cli {
    /// Interior width in mm
    #[arg(short = 'w', long)]
    pub width: Option<f64>,

    /// Interior depth in mm
    #[arg(short = 'd', long)]
    pub depth: Option<f64>,

    /// Interior height in mm
    #[arg(short = 'H', long)]
    pub height: Option<f64>,

    /// Exact Gridfinity grid: units X x Y x bin height Z (e.g., 6x4x6)
    #[arg(long, value_name = "XxYxZ")]
    pub grid: Option<GridSpec>,

    /// Minimum margin around the baseplate, each side (default: 5mm)
    #[arg(long, value_name = "MM")]
    pub margin: Option<f64>,

    /// Round grid units DOWN (smaller case); default is up
    #[arg(long)]
    pub round_down: bool,

    /// Plywood size: 1/4, 3/8, 1/2, 5/8, 3/4 (default: 3/8)
    #[arg(short = 'p', long, value_name = "SIZE")]
    pub ply: Option<PlywoodSize>,

    /// Bracket wall thickness in mm (default: 3)
    #[arg(long, value_name = "MM")]
    pub wall: Option<f64>,

    /// Fit tolerance in mm (default: 0.2)
    #[arg(long, value_name = "MM")]
    pub tolerance: Option<f64>,

    /// Fit a Gridfinity grid to the given width/depth/height
    #[arg(short = 'g', long)]
    pub gridfinity: bool,

    /// Baseplate style: thin, standard, weighted (default: standard)
    #[arg(long, value_name = "STYLE")]
    pub baseplate: Option<BaseplateStyle>,

    /// Write OpenSCAD config to file
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the calculation as JSON instead of a report
    #[arg(long)]
    pub json: bool,

    /// Load workshop defaults from a JSON settings file
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Install the stderr logger. `RUST_LOG` overrides the default filter.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "plycase=debug,case_cli=debug,case_core=debug"
    } else {
        "plycase=info,case_cli=info,case_core=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Turn parsed arguments into a case request. Flags override settings.
pub fn build_request(cli: &Cli, settings: &ShopSettings) -> anyhow::Result<CaseRequest> {
    let mut materials = settings.materials();
    if let Some(ply) = cli.ply {
        materials.ply_thickness_mm = ply.thickness_mm();
    }
    if let Some(wall) = cli.wall {
        materials.bracket_wall_mm = wall;
    }
    if let Some(tolerance) = cli.tolerance {
        materials.tolerance_mm = tolerance;
    }
    if let Some(style) = cli.baseplate {
        materials.baseplate_style = style;
    }
    let margin = cli.margin.unwrap_or(settings.margin_mm);

    if let Some(grid) = cli.grid {
        return Ok(CaseRequest::Grid {
            spec: grid.with_margin(margin),
            materials,
        });
    }

    match (cli.width, cli.depth, cli.height) {
        (Some(width), Some(depth), Some(height)) if cli.gridfinity => Ok(CaseRequest::Size {
            spec: SizeSpec::new(width, depth, height)
                .with_margin(margin)
                .rounding_down(cli.round_down || settings.round_down),
            materials,
        }),
        (Some(width), Some(depth), Some(height)) => Ok(CaseRequest::Direct(CaseConfig {
            interior_width_mm: width,
            interior_depth_mm: depth,
            interior_height_mm: height,
            ply_thickness_mm: materials.ply_thickness_mm,
            bracket_wall_mm: materials.bracket_wall_mm,
            tolerance_mm: materials.tolerance_mm,
            use_gridfinity: false,
            baseplate_style: materials.baseplate_style,
        })),
        _ => Err(CalcError::missing_field("--width, --depth and --height, or --grid").into()),
    }
}

/// Run one calculation and write the result to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let settings = match &cli.settings {
        Some(path) => load_settings(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => ShopSettings::default(),
    };
    debug!(?settings, "using settings");

    let request = build_request(cli, &settings)?;
    info!(mode = request.mode(), "calculating case");

    let resolved = request.resolve().context("invalid case parameters")?;
    let calc = resolved.calculate();

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &calc)?;
        writeln!(out)?;
    } else {
        if let Some(summary) = render_mode_summary(&request, &resolved) {
            writeln!(out)?;
            writeln!(out, "{}", summary)?;
        }
        write!(out, "{}", Report(&calc))?;
    }

    if let Some(path) = &cli.output {
        write_scad(&calc, path)
            .with_context(|| format!("writing OpenSCAD config to {}", path.display()))?;
        if !cli.json {
            writeln!(out)?;
            writeln!(out, "OpenSCAD config written to: {}", path.display())?;
        }
    }

    Ok(())
}

/// Whether an error means no input mode was selected (show usage).
pub fn is_usage_error(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<CalcError>(), Some(CalcError::MissingField { .. }))
}
