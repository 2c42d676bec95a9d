//! A small 2D canvas abstraction.
//!
//! Widgets paint into anything implementing [`PaintScene`]. Two scenes are provided:
//!
//!  - [`Recording`] captures every command so it can be inspected or replayed.
//!  - [`SvgScene`] serialises the commands into a standalone SVG document.

use kurbo::{Affine, Rect, Shape};
use peniko::{BlendMode, BrushRef, Color, Fill};

mod recording;
mod svg;

pub use recording::{
    BoxShadowCmd, DEFAULT_TOLERANCE, FillCmd, LayerCmd, RecordedPaint, Recording, RenderCommand,
};
pub use svg::SvgScene;

/// The primary drawing abstraction for drawing a single 2D scene
pub trait PaintScene {
    /// Removes all content from the scene
    fn reset(&mut self);

    /// Pushes a new layer clipped by the specified shape and composed with previous layers using the specified blend mode.
    /// Every drawing command after this call will be clipped by the shape until the layer is popped.
    /// However, the transforms are not saved or modified by the layer stack.
    fn push_layer(
        &mut self,
        blend: impl Into<BlendMode>,
        alpha: f32,
        transform: Affine,
        clip: &impl Shape,
    );

    /// Pops the current layer.
    fn pop_layer(&mut self);

    /// Fills a shape using the specified style and brush.
    fn fill<'a>(
        &mut self,
        style: Fill,
        transform: Affine,
        brush: impl Into<BrushRef<'a>>,
        brush_transform: Option<Affine>,
        shape: &impl Shape,
    );

    /// Draw a rounded rectangle blurred with a gaussian filter.
    fn draw_box_shadow(
        &mut self,
        transform: Affine,
        rect: Rect,
        brush: Color,
        radius: f64,
        std_dev: f64,
    );
}
