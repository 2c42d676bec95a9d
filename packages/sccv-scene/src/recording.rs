use crate::PaintScene;
use kurbo::{Affine, BezPath, Rect, Shape};
use peniko::{BlendMode, BrushRef, Color, Fill};

/// Tolerance used to flatten shapes into paths when none is given.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

#[derive(Clone, Debug)]
pub enum RenderCommand {
    PushLayer(LayerCmd),
    PopLayer,
    Fill(FillCmd),
    BoxShadow(BoxShadowCmd),
}

#[derive(Clone, Debug)]
pub enum RecordedPaint {
    /// Solid color brush.
    Solid(Color),
    /// Any brush the recording can't hold on to (gradients, images).
    Unsupported,
}

#[derive(Clone, Debug)]
pub struct LayerCmd {
    pub blend: BlendMode,
    pub alpha: f32,
    pub transform: Affine,
    pub clip: BezPath,
}

#[derive(Clone, Debug)]
pub struct FillCmd {
    pub fill: Fill,
    pub transform: Affine,
    pub brush: RecordedPaint,
    pub brush_transform: Option<Affine>,
    pub shape: BezPath,
}

#[derive(Clone, Debug)]
pub struct BoxShadowCmd {
    pub transform: Affine,
    pub rect: Rect,
    pub brush: Color,
    pub radius: f64,
    pub std_dev: f64,
}

/// A [`PaintScene`] that keeps every command it receives.
#[derive(Clone, Debug)]
pub struct Recording {
    pub tolerance: f64,
    pub cmds: Vec<RenderCommand>,
}

impl Default for Recording {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            cmds: Vec::new(),
        }
    }
}

impl Recording {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn convert_brushref(brush_ref: BrushRef<'_>) -> RecordedPaint {
        match brush_ref {
            BrushRef::Solid(color) => RecordedPaint::Solid(color),
            _ => RecordedPaint::Unsupported,
        }
    }

    /// Replay the recorded commands into another scene.
    pub fn replay(&self, scene: &mut impl PaintScene) {
        for cmd in &self.cmds {
            match cmd {
                RenderCommand::PushLayer(layer) => {
                    scene.push_layer(layer.blend, layer.alpha, layer.transform, &layer.clip)
                }
                RenderCommand::PopLayer => scene.pop_layer(),
                RenderCommand::Fill(fill) => match &fill.brush {
                    RecordedPaint::Solid(color) => scene.fill(
                        fill.fill,
                        fill.transform,
                        *color,
                        fill.brush_transform,
                        &fill.shape,
                    ),
                    RecordedPaint::Unsupported => {}
                },
                RenderCommand::BoxShadow(shadow) => scene.draw_box_shadow(
                    shadow.transform,
                    shadow.rect,
                    shadow.brush,
                    shadow.radius,
                    shadow.std_dev,
                ),
            }
        }
    }
}

impl PaintScene for Recording {
    fn reset(&mut self) {
        self.cmds.clear()
    }

    fn push_layer(
        &mut self,
        blend: impl Into<BlendMode>,
        alpha: f32,
        transform: Affine,
        clip: &impl Shape,
    ) {
        let blend = blend.into();
        let clip = clip.into_path(self.tolerance);
        let layer = LayerCmd {
            blend,
            alpha,
            transform,
            clip,
        };
        self.cmds.push(RenderCommand::PushLayer(layer));
    }

    fn pop_layer(&mut self) {
        self.cmds.push(RenderCommand::PopLayer);
    }

    fn fill<'a>(
        &mut self,
        style: Fill,
        transform: Affine,
        brush: impl Into<BrushRef<'a>>,
        brush_transform: Option<Affine>,
        shape: &impl Shape,
    ) {
        let shape = shape.into_path(self.tolerance);
        let brush = Self::convert_brushref(brush.into());
        let fill = FillCmd {
            fill: style,
            transform,
            brush,
            brush_transform,
            shape,
        };
        self.cmds.push(RenderCommand::Fill(fill));
    }

    fn draw_box_shadow(
        &mut self,
        transform: Affine,
        rect: Rect,
        brush: Color,
        radius: f64,
        std_dev: f64,
    ) {
        let box_shadow = BoxShadowCmd {
            transform,
            rect,
            brush,
            radius,
            std_dev,
        };
        self.cmds.push(RenderCommand::BoxShadow(box_shadow));
    }
}
