//! Minimal SVG document writer shared by the SVG sinks.

use std::fmt::{self, Write};

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Text styling for [`SvgWriter::text`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct TextStyle<'a> {
    pub size: f64,
    pub anchor: Anchor,
    pub color: &'a str,
    pub bold: bool,
}

impl Default for TextStyle<'_> {
    fn default() -> Self {
        Self {
            size: 10.0,
            anchor: Anchor::Middle,
            color: "black",
            bold: false,
        }
    }
}

/// Appends SVG elements to an in-memory buffer.
pub(crate) struct SvgWriter {
    buf: String,
}

impl SvgWriter {
    pub fn new(width: f64, height: f64) -> Result<Self, fmt::Error> {
        let mut buf = String::new();
        writeln!(
            buf,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.0} {height:.0}">"#
        )?;
        writeln!(
            buf,
            r#"<rect x="0" y="0" width="{width:.0}" height="{height:.0}" fill="white"/>"#
        )?;
        Ok(Self { buf })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: &str,
        stroke: &str,
        stroke_width: f64,
        opacity: f64,
    ) -> fmt::Result {
        writeln!(
            self.buf,
            r#"<rect x="{x:.2}" y="{y:.2}" width="{:.2}" height="{:.2}" fill="{}" fill-opacity="{opacity}" stroke="{}" stroke-width="{stroke_width}"/>"#,
            width.max(0.0),
            height.max(0.0),
            escape(fill),
            escape(stroke),
        )
    }

    pub fn line(
        &mut self,
        (x1, y1): (f64, f64),
        (x2, y2): (f64, f64),
        stroke: &str,
        width: f64,
        dashed: bool,
    ) -> fmt::Result {
        let dash = if dashed { r#" stroke-dasharray="6,4""# } else { "" };
        writeln!(
            self.buf,
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{}" stroke-width="{width}"{dash}/>"#,
            escape(stroke),
        )
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) -> fmt::Result {
        writeln!(
            self.buf,
            r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{}"/>"#,
            escape(fill),
        )
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, style: TextStyle<'_>) -> fmt::Result {
        let weight = if style.bold { "bold" } else { "normal" };
        writeln!(
            self.buf,
            r#"<text x="{x:.2}" y="{y:.2}" font-family="sans-serif" font-size="{}" font-weight="{weight}" text-anchor="{}" dominant-baseline="middle" fill="{}">{}</text>"#,
            style.size,
            style.anchor.as_str(),
            escape(style.color),
            escape(content),
        )
    }

    pub fn finish(mut self) -> Result<String, fmt::Error> {
        writeln!(self.buf, "</svg>")?;
        Ok(self.buf)
    }
}

/// Escapes XML special characters.
pub(crate) fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
