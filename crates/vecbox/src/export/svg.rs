//! SVG export for scene frames.
//!
//! Draws, in order:
//! - Guide axes through the origin
//! - The three vectors
//! - Box edges, solid for visible and dashed for hidden
//! - Point markers for the origin and tips

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use vecbox_drafting::{BoxEdge, Point2D};

use crate::config::Canvas;
use crate::frame::Frame;

/// Colours and stroke widths for SVG output.
#[derive(Debug, Clone)]
pub struct SvgStyle {
    /// Guide axis colour.
    pub guide_color: String,
    /// Vector colour.
    pub vector_color: String,
    /// Point marker colour.
    pub point_color: String,
    /// Box edge colour.
    pub box_color: String,
    /// Guide axis stroke width.
    pub guide_width: f64,
    /// Vector stroke width.
    pub vector_width: f64,
    /// Box edge stroke width.
    pub box_width: f64,
    /// Dash pattern for hidden edges (dash, gap).
    pub hidden_dash: (f64, f64),
    /// Point marker radius.
    pub point_radius: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            guide_color: "rgb(200, 150, 0)".to_string(),
            vector_color: "rgb(0, 0, 0)".to_string(),
            point_color: "rgb(0, 0, 0)".to_string(),
            box_color: "rgb(50, 50, 200)".to_string(),
            guide_width: 1.0,
            vector_width: 2.0,
            box_width: 1.5,
            hidden_dash: (5.0, 4.0),
            point_radius: 3.0,
        }
    }
}

/// SVG document for a single frame.
pub struct SvgDocument<'a> {
    frame: &'a Frame,
    canvas: Canvas,
    style: SvgStyle,
}

impl<'a> SvgDocument<'a> {
    /// Create a document with the default style.
    pub fn new(frame: &'a Frame, canvas: Canvas) -> Self {
        Self {
            frame,
            canvas,
            style: SvgStyle::default(),
        }
    }

    /// Replace the style.
    pub fn with_style(mut self, style: SvgStyle) -> Self {
        self.style = style;
        self
    }

    /// Render to a string.
    pub fn to_svg_string(&self) -> std::io::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Export to an SVG file.
    pub fn export(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()
    }

    /// Write the SVG markup.
    pub fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        let (width, height) = (self.canvas.width, self.canvas.height);
        let origin = self.frame.origin;
        let style = &self.style;

        writeln!(
            w,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;

        // Guide axes
        writeln!(
            w,
            r#"  <g stroke="{}" stroke-width="{}">"#,
            style.guide_color, style.guide_width
        )?;
        self.write_line(w, &Point2D::new(0.0, origin.y), &Point2D::new(width, origin.y), None)?;
        self.write_line(w, &Point2D::new(origin.x, 0.0), &Point2D::new(origin.x, height), None)?;
        writeln!(w, "  </g>")?;

        // Vectors
        writeln!(
            w,
            r#"  <g stroke="{}" stroke-width="{}">"#,
            style.vector_color, style.vector_width
        )?;
        for seg in &self.frame.axes {
            self.write_line(w, &seg.start, &seg.end, None)?;
        }
        writeln!(w, "  </g>")?;

        // Box
        if let Some(geometry) = &self.frame.box_geometry {
            writeln!(
                w,
                r#"  <g stroke="{}" stroke-width="{}">"#,
                style.box_color, style.box_width
            )?;
            for edge in geometry.visible_edges() {
                self.write_edge(w, edge, None)?;
            }
            let dash = format!("{},{}", style.hidden_dash.0, style.hidden_dash.1);
            for edge in geometry.hidden_edges() {
                self.write_edge(w, edge, Some(&dash))?;
            }
            writeln!(w, "  </g>")?;
        }

        // Points last so they cover line ends
        writeln!(w, r#"  <g fill="{}">"#, style.point_color)?;
        for p in &self.frame.markers {
            writeln!(
                w,
                r#"    <circle cx="{}" cy="{}" r="{}"/>"#,
                fmt_coord(p.x),
                fmt_coord(p.y),
                style.point_radius
            )?;
        }
        writeln!(w, "  </g>")?;

        writeln!(w, "</svg>")
    }

    fn write_edge<W: Write>(&self, w: &mut W, edge: &BoxEdge, dash: Option<&str>) -> std::io::Result<()> {
        self.write_line(w, &edge.start, &edge.end, dash)
    }

    fn write_line<W: Write>(
        &self,
        w: &mut W,
        start: &Point2D,
        end: &Point2D,
        dash: Option<&str>,
    ) -> std::io::Result<()> {
        write!(
            w,
            r#"    <line x1="{}" y1="{}" x2="{}" y2="{}""#,
            fmt_coord(start.x),
            fmt_coord(start.y),
            fmt_coord(end.x),
            fmt_coord(end.y)
        )?;
        if let Some(dash) = dash {
            write!(w, r#" stroke-dasharray="{dash}""#)?;
        }
        writeln!(w, "/>")
    }
}

/// Round to three decimals and drop trailing zeros.
fn fmt_coord(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
