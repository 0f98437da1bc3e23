//! Output backends for a finished layout.

pub mod svg;

pub use svg::SvgCanvas;

use fograph_layout::Layout;
use std::path::Path;

use crate::config::RenderConfig;
use crate::error::Result;

/// Render `layout` as an SVG document
pub fn render_svg(layout: &Layout, render: &RenderConfig) -> Result<String> {
    let mut canvas = SvgCanvas::from_config(render)?;
    layout.replay(&mut canvas);
    Ok(canvas.into_document())
}

/// Render `layout` and write it to `path`
pub fn write_svg(layout: &Layout, render: &RenderConfig, path: &Path) -> Result<()> {
    let mut canvas = SvgCanvas::from_config(render)?;
    layout.replay(&mut canvas);
    canvas.save(path)
}
