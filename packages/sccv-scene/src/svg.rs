//! Serialise paint commands into an SVG document.

use crate::PaintScene;
use kurbo::{Affine, Rect, Shape};
use peniko::{BlendMode, BrushRef, Color, Fill};

/// A [`PaintScene`] which writes SVG markup.
///
/// Only solid brushes are written; other brushes are skipped. Layer blend modes
/// are ignored, layer alpha becomes group opacity.
pub struct SvgScene {
    width: f64,
    height: f64,
    tolerance: f64,
    body: String,
    open_layers: usize,
    next_id: usize,
}

impl SvgScene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            tolerance: crate::DEFAULT_TOLERANCE,
            body: String::new(),
            open_layers: 0,
            next_id: 0,
        }
    }

    /// Close any layers left open and return the complete document.
    pub fn finish(mut self) -> String {
        for _ in 0..self.open_layers {
            self.body.push_str("</g>\n");
        }
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }

    fn next_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}{}", self.next_id);
        self.next_id += 1;
        id
    }
}

fn color_attrs(name: &str, color: Color) -> String {
    let rgba = color.to_rgba8();
    let mut out = format!("{name}=\"#{:02x}{:02x}{:02x}\"", rgba.r, rgba.g, rgba.b);
    if rgba.a != 255 {
        out.push_str(&format!(
            " {name}-opacity=\"{}\"",
            f64::from(rgba.a) / 255.0
        ));
    }
    out
}

fn transform_attr(transform: Affine) -> String {
    if transform == Affine::IDENTITY {
        return String::new();
    }
    let [a, b, c, d, e, f] = transform.as_coeffs();
    format!(" transform=\"matrix({a} {b} {c} {d} {e} {f})\"")
}

fn fill_rule(style: Fill) -> &'static str {
    match style {
        Fill::NonZero => "nonzero",
        Fill::EvenOdd => "evenodd",
    }
}

impl PaintScene for SvgScene {
    fn reset(&mut self) {
        self.body.clear();
        self.open_layers = 0;
        self.next_id = 0;
    }

    fn push_layer(
        &mut self,
        _blend: impl Into<BlendMode>,
        alpha: f32,
        transform: Affine,
        clip: &impl Shape,
    ) {
        let id = self.next_id("clip");
        let d = clip.into_path(self.tolerance).to_svg();
        self.body.push_str(&format!(
            "<clipPath id=\"{id}\"><path d=\"{d}\"{}/></clipPath>\n",
            transform_attr(transform)
        ));
        self.body.push_str(&format!("<g clip-path=\"url(#{id})\""));
        if alpha < 1.0 {
            self.body.push_str(&format!(" opacity=\"{alpha}\""));
        }
        self.body.push_str(">\n");
        self.open_layers += 1;
    }

    fn pop_layer(&mut self) {
        if self.open_layers > 0 {
            self.body.push_str("</g>\n");
            self.open_layers -= 1;
        }
    }

    fn fill<'a>(
        &mut self,
        style: Fill,
        transform: Affine,
        brush: impl Into<BrushRef<'a>>,
        _brush_transform: Option<Affine>,
        shape: &impl Shape,
    ) {
        let brush: BrushRef<'_> = brush.into();
        let BrushRef::Solid(color) = brush else {
            return;
        };
        let d = shape.into_path(self.tolerance).to_svg();
        self.body.push_str(&format!(
            "<path d=\"{d}\" {} fill-rule=\"{}\"{}/>\n",
            color_attrs("fill", color),
            fill_rule(style),
            transform_attr(transform)
        ));
    }

    fn draw_box_shadow(
        &mut self,
        transform: Affine,
        rect: Rect,
        brush: Color,
        radius: f64,
        std_dev: f64,
    ) {
        let id = self.next_id("shadow");
        self.body.push_str(&format!(
            "<filter id=\"{id}\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\"><feGaussianBlur stdDeviation=\"{std_dev}\"/></filter>\n"
        ));
        self.body.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{radius}\" ry=\"{radius}\" {} filter=\"url(#{id})\"{}/>\n",
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            color_attrs("fill", brush),
            transform_attr(transform)
        ));
    }
}
