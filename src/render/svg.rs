use fograph_layout::{Canvas, CommitMark, Extents, LanePath, PathCommand, Point, Rgb};
use log::debug;
use std::fs;
use std::path::Path;

use crate::config::RenderConfig;
use crate::constants::DEFAULT_STYLESHEET;
use crate::error::{FographError, Result};

/// Canvas that accumulates an SVG document
///
/// Lane paths are emitted below the commit circles, labels go into their own
/// group to the right of the graph.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    stylesheet: String,
    commit_radius: f64,
    paths: String,
    commits: String,
    labels: String,
    extents: Option<Extents>,
}

impl SvgCanvas {
    pub fn new(stylesheet: impl Into<String>, commit_radius: f64) -> Self {
        Self {
            stylesheet: stylesheet.into(),
            commit_radius,
            paths: String::new(),
            commits: String::new(),
            labels: String::new(),
            extents: None,
        }
    }

    /// Canvas using the configured radius and stylesheet file, if any
    pub fn from_config(render: &RenderConfig) -> Result<Self> {
        let stylesheet = match &render.stylesheet {
            Some(path) => {
                debug!("Embedding stylesheet {}", path.display());
                fs::read_to_string(path)?
            }
            None => DEFAULT_STYLESHEET.to_string(),
        };
        Ok(Self::new(stylesheet, render.commit_radius))
    }

    /// The document drawn so far
    pub fn document(&self) -> String {
        let extents = self.extents.unwrap_or(Extents {
            width: 0.0,
            height: 0.0,
            margins: (0.0, 0.0),
            label_x: 0.0,
        });
        let (margin_x, margin_y) = extents.margins;
        let (width, height) = (extents.width, extents.height);

        let mut svg = String::new();
        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" "
        ));
        svg.push_str(&format!("viewBox=\"0 0 {width} {height}\">\n"));
        svg.push_str("<defs><style type=\"text/css\"><![CDATA[");
        svg.push_str(&escape_cdata(&self.stylesheet));
        svg.push_str("]]></style></defs>\n");

        svg.push_str(&format!(
            "<g class=\"graph\" transform=\"translate({margin_x},{margin_y})\">\n"
        ));
        svg.push_str(&self.paths);
        svg.push_str(&self.commits);
        svg.push_str("</g>\n");

        svg.push_str(&format!(
            "<g class=\"messages\" transform=\"translate({},{margin_y})\">\n",
            margin_x + extents.label_x
        ));
        svg.push_str(&self.labels);
        svg.push_str("</g>\n");

        svg.push_str("</svg>\n");
        svg
    }

    pub fn into_document(self) -> String {
        self.document()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.document()).map_err(|source| FographError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Wrote SVG to {}", path.display());
        Ok(())
    }
}

impl Canvas for SvgCanvas {
    fn commit(&mut self, _mark: &CommitMark, center: Point, color: Rgb) {
        self.commits.push_str(&format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" stroke=\"{color}\"/>\n",
            center.x, center.y, self.commit_radius
        ));
    }

    fn label(&mut self, _row: usize, y: f64, text: &str) {
        self.labels.push_str(&format!(
            "<text x=\"0\" y=\"{y}\" dominant-baseline=\"middle\">{}</text>\n",
            escape_xml(text)
        ));
    }

    fn path(&mut self, path: &LanePath, color: Rgb) {
        self.paths.push_str(&format!(
            "<path d=\"{}\" stroke=\"{color}\" fill=\"none\"/>\n",
            path_data(&path.commands)
        ));
    }

    fn finish(&mut self, extents: &Extents) {
        self.extents = Some(*extents);
    }
}

fn path_data(commands: &[PathCommand]) -> String {
    let parts: Vec<String> = commands
        .iter()
        .map(|command| match command {
            PathCommand::MoveTo(p) => format!("M {} {}", p.x, p.y),
            PathCommand::LineTo(p) => format!("L {} {}", p.x, p.y),
            PathCommand::QuadTo { ctrl, to } => {
                format!("Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y)
            }
            PathCommand::CubicTo { ctrl1, ctrl2, to } => format!(
                "C {} {} {} {} {} {}",
                ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            ),
        })
        .collect();
    parts.join(" ")
}

/// Split any `]]>` so the text cannot end its CDATA section early
fn escape_cdata(input: &str) -> String {
    input.replace("]]>", "]]]]><![CDATA[>")
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
