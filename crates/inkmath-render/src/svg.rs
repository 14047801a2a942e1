use crate::color::Color;
use crate::context::DrawingContext;
use crate::params::RenderingParameters;
use inkmath_core::{BoundingBox, Stroke};
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Adds extra space around the computed viewBox.
    pub viewbox_padding: f64,
    /// Outline color of diagnostic ink boxes.
    pub bounding_box_color: Color,
    /// Optional document title (`<title>`), escaped on output.
    pub title: Option<String>,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            viewbox_padding: 8.0,
            bounding_box_color: Color::rgb(0x25, 0x63, 0xeb),
            title: None,
        }
    }
}

/// A drawing surface that writes one SVG element per draw call, in call order.
#[derive(Debug, Clone, Default)]
pub struct SvgContext {
    options: SvgRenderOptions,
    body: String,
    bounds: Option<BoundingBox>,
    elements: usize,
}

impl SvgContext {
    pub fn new(options: SvgRenderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Number of elements written so far.
    pub fn element_count(&self) -> usize {
        self.elements
    }

    /// Wraps the drawn elements in an `<svg>` root whose viewBox covers all of them.
    pub fn finish(&self) -> String {
        let bounds = self
            .bounds
            .unwrap_or(BoundingBox::new(0.0, 0.0, 100.0, 100.0));
        let pad = self.options.viewbox_padding.max(0.0);

        let mut out = String::with_capacity(self.body.len() + 256);
        let _ = writeln!(
            &mut out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            fmt(bounds.x - pad),
            fmt(bounds.y - pad),
            fmt((bounds.width + pad * 2.0).max(1.0)),
            fmt((bounds.height + pad * 2.0).max(1.0))
        );
        if let Some(title) = &self.options.title {
            let _ = writeln!(&mut out, "<title>{}</title>", escape_xml(title));
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn extend_bounds(&mut self, b: &BoundingBox) {
        self.bounds = Some(self.bounds.map_or(*b, |acc| acc.union(b)));
        self.elements += 1;
    }
}

impl DrawingContext for SvgContext {
    fn draw_stroke(&mut self, stroke: &Stroke, parameters: &RenderingParameters) {
        let color = parameters.color();
        let width = parameters.width().max(0.0);
        match stroke.points() {
            [] => return,
            [p] => {
                let _ = writeln!(
                    &mut self.body,
                    r#"<circle class="stroke" cx="{}" cy="{}" r="{}" fill="{}" />"#,
                    fmt(p.x),
                    fmt(p.y),
                    fmt(width / 2.0),
                    color
                );
            }
            points => {
                self.body.push_str(r#"<polyline class="stroke" points=""#);
                for (idx, p) in points.iter().enumerate() {
                    if idx > 0 {
                        self.body.push(' ');
                    }
                    let _ = write!(&mut self.body, "{},{}", fmt(p.x), fmt(p.y));
                }
                let _ = writeln!(
                    &mut self.body,
                    r#"" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round" />"#,
                    color,
                    fmt(width)
                );
            }
        }
        if let Some(b) = stroke.bounding_box() {
            self.extend_bounds(&b);
        }
    }

    fn draw_rectangle(&mut self, bounding_box: &BoundingBox, parameters: &RenderingParameters) {
        let b = bounding_box;
        let _ = writeln!(
            &mut self.body,
            r#"<rect class="shape" x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" />"#,
            fmt(b.x),
            fmt(b.y),
            fmt(b.width),
            fmt(b.height),
            parameters.rect_color(),
            parameters.color()
        );
        self.extend_bounds(b);
    }

    fn draw_bounding_box(&mut self, bounding_box: &BoundingBox) {
        let b = bounding_box;
        let _ = writeln!(
            &mut self.body,
            r#"<rect class="bounding-box" x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-dasharray="4 2" />"#,
            fmt(b.x),
            fmt(b.y),
            fmt(b.width),
            fmt(b.height),
            self.options.bounding_box_color
        );
        self.extend_bounds(b);
    }
}

pub(crate) fn fmt(v: f64) -> String {
    // Round-trippable decimal form without `-0` or tiny float noise.
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    if v == -0.0 {
        v = 0.0;
    }
    format!("{v}")
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
