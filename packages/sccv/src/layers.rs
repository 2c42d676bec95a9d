use kurbo::{Affine, Shape};
use peniko::Mix;
use sccv_scene::PaintScene;

/// Paint `paint_layer` inside a layer clipped to `shape`.
///
/// The layer's shape is the clip; the layer itself composites normally at full alpha.
pub(crate) fn with_clip_layer<S: PaintScene, F: FnOnce(&mut S)>(
    scene: &mut S,
    transform: Affine,
    shape: &impl Shape,
    paint_layer: F,
) {
    scene.push_layer(Mix::Normal, 1.0, transform, shape);
    paint_layer(scene);
    scene.pop_layer();
}
