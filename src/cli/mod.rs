//! Command line interface: argument parsing and the render pipeline.

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use fograph_layout::{CurveStyle, LaneSetManager, RepackMode};

use crate::config::{load_config, AppConfig};
use crate::constants::STDIN_MARKER;
use crate::history::{self, History};
use crate::render::write_svg;

/// Turns a git repository's history into an SVG graph.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// SVG output file
    pub outfile: PathBuf,

    /// Input repository. Defaults to the current directory.
    #[arg(short = 'r', long = "repo")]
    pub repo: Option<PathBuf>,

    /// Read a captured `git log --format=%H:%at:%P:%s --date-order --reverse`
    /// instead of a repository ("-" for stdin)
    #[arg(long = "log-file", conflicts_with = "repo")]
    pub log_file: Option<String>,

    /// Keep only the newest N commits
    #[arg(long = "max-count")]
    pub max_count: Option<usize>,

    /// Walk every local branch instead of HEAD only
    #[arg(long = "all")]
    pub all_refs: bool,

    /// Prefix each message with its date
    #[arg(long = "dates")]
    pub show_dates: bool,

    /// Curve style: 1 straight, 2 quadratic, 3 cubic, 4 S-curve
    #[arg(long = "curve-style")]
    pub curve_style: Option<u8>,

    #[arg(long = "lane-spacing")]
    pub lane_spacing: Option<f64>,

    #[arg(long = "row-height")]
    pub row_height: Option<f64>,

    /// Number of lane colours
    #[arg(long = "palette-size")]
    pub palette_size: Option<usize>,

    /// Palette seed, for reproducible colours
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Column repacking: "compact" or "monotonic"
    #[arg(long = "repack", value_parser = parse_repack)]
    pub repack: Option<RepackMode>,

    /// CSS file embedded in the output instead of the built-in style
    #[arg(long = "stylesheet")]
    pub stylesheet: Option<PathBuf>,

    /// Configuration file (defaults to the user config directory)
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_repack(value: &str) -> std::result::Result<RepackMode, String> {
    match value.to_ascii_lowercase().as_str() {
        "compact" => Ok(RepackMode::Compact),
        "monotonic" => Ok(RepackMode::Monotonic),
        other => Err(format!(
            "unknown repack mode '{other}', expected 'compact' or 'monotonic'"
        )),
    }
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub rows: usize,
    pub lanes: usize,
    pub columns: usize,
    pub output: PathBuf,
}

/// Apply command line overrides on top of the loaded configuration
pub fn apply_overrides(config: &mut AppConfig, args: &CliArgs) -> Result<()> {
    let layout = &mut config.layout;
    if let Some(style) = args.curve_style {
        layout.curve_style = CurveStyle::try_from(style)?;
    }
    if let Some(spacing) = args.lane_spacing {
        layout.lane_spacing = spacing;
    }
    if let Some(height) = args.row_height {
        layout.row_height = height;
    }
    if let Some(size) = args.palette_size {
        layout.palette_size = size;
    }
    if args.seed.is_some() {
        layout.palette_seed = args.seed;
    }
    if let Some(repack) = args.repack {
        layout.repack = repack;
    }

    if let Some(stylesheet) = &args.stylesheet {
        config.render.stylesheet = Some(stylesheet.clone());
    }

    let history = &mut config.history;
    if args.max_count.is_some() {
        history.max_count = args.max_count;
    }
    history.all_refs |= args.all_refs;
    history.show_dates |= args.show_dates;
    Ok(())
}

fn load_history(args: &CliArgs, config: &AppConfig) -> Result<History> {
    match args.log_file.as_deref() {
        Some(STDIN_MARKER) => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read log from stdin")?;
            Ok(history::parse_log_with(&text, &config.history)?)
        }
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read log file '{path}'"))?;
            Ok(history::parse_log_with(&text, &config.history)?)
        }
        None => {
            let repo = args.repo.clone().unwrap_or_else(|| PathBuf::from("."));
            history::read_repository(&repo, &config.history).with_context(|| {
                format!("Failed to read history from '{}'", repo.display())
            })
        }
    }
}

/// Load configuration and history, lay the graph out and write the SVG
pub fn handle_command(args: CliArgs) -> Result<RunSummary> {
    let mut config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    apply_overrides(&mut config, &args)?;
    config.validate()?;
    debug!("Effective configuration: {:?}", config);

    let history = load_history(&args, &config)?;
    info!(
        "Loaded {} entries with {} roots",
        history.len(),
        history.roots.len()
    );

    let manager = LaneSetManager::new(config.layout.clone())?;
    info!("Palette seed: {}", manager.seed());
    let layout = manager.run(&history.graph, &history.roots)?;

    write_svg(&layout, &config.render, &args.outfile)?;
    Ok(RunSummary {
        rows: layout.row_count(),
        lanes: layout.lanes_created,
        columns: if layout.is_empty() { 0 } else { layout.max_column + 1 },
        output: args.outfile,
    })
}
