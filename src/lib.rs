//! `gitfograph` turns the history of a git repository into an SVG graph.
//!
//! The lane layout itself lives in the `fograph-layout` crate; this library
//! provides everything around it:
//! - Configuration management (`config`)
//! - Reading history from repositories and captured logs (`history`)
//! - SVG output (`render`)
//! - The command line front end (`cli`)
//! - Error handling (`error`)

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod history;
pub mod render;

pub use config::{load_config, AppConfig, HistoryConfig, RenderConfig};
pub use error::{FographError, Result};
pub use history::{parse_log, read_repository, History};
pub use render::{render_svg, SvgCanvas};
