use crate::attrs::ShapeCardAttrs;
use crate::layers::with_clip_layer;
use crate::outline::{ShapeKind, build_outline};
use kurbo::{Affine, BezPath, Point, Rect, Vec2};
use peniko::Fill;
use sccv_scene::PaintScene;
use std::f64::consts::{FRAC_PI_4, SQRT_2};

/// Convert a shadow blur radius into the standard deviation of the gaussian blur.
///
/// Same conversion as the blur mask filters used for platform shadow layers.
pub fn shadow_std_dev(radius: f64) -> f64 {
    if radius > 0.0 {
        0.57735 * radius + 0.5
    } else {
        0.0
    }
}

/// A container which fills its silhouette, casts an optional drop shadow and clips
/// its children to the silhouette.
///
/// The outline is only rebuilt in [`ShapeCard::on_size_changed`]; painting just reuses it.
#[derive(Debug, Clone)]
pub struct ShapeCard {
    attrs: ShapeCardAttrs,
    bounds: Rect,
    outline: BezPath,
}

impl ShapeCard {
    pub fn new(attrs: ShapeCardAttrs) -> Self {
        Self {
            attrs,
            bounds: Rect::ZERO,
            outline: BezPath::new(),
        }
    }

    pub fn attrs(&self) -> &ShapeCardAttrs {
        &self.attrs
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn outline(&self) -> &BezPath {
        &self.outline
    }

    /// Called by the layout pass whenever the card gets a new size.
    pub fn on_size_changed(&mut self, width: f64, height: f64) {
        self.bounds = Rect::new(0.0, 0.0, width, height);
        self.outline = build_outline(self.bounds, self.attrs.shape, self.attrs.corners_radius);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Rebuilt {:?} outline for {width}x{height} ({} elements)",
            self.attrs.shape,
            self.outline.elements().len()
        );
    }

    /// Paint the card: shadow, then the filled silhouette, then `paint_children` inside
    /// a layer clipped to the silhouette.
    pub fn paint<S: PaintScene, F: FnOnce(&mut S)>(
        &self,
        scene: &mut S,
        transform: Affine,
        paint_children: F,
    ) {
        if self.attrs.has_shadow() {
            self.draw_shadow(scene, transform);
        }

        scene.fill(
            Fill::NonZero,
            transform,
            self.attrs.background_color,
            None,
            &self.outline,
        );

        with_clip_layer(scene, transform, &self.outline, paint_children);
    }

    fn draw_shadow(&self, scene: &mut impl PaintScene, transform: Affine) {
        let bounds = self.bounds.abs();
        let shortest = bounds.width().min(bounds.height());
        let std_dev = shadow_std_dev(self.attrs.shadow_radius);
        let color = self.attrs.shadow_color;

        match self.attrs.shape {
            ShapeKind::Rectangle => {
                let radius = self.attrs.corners_radius.max(0.0).min(shortest / 2.0);
                scene.draw_box_shadow(transform, bounds, color, radius, std_dev);
            }
            ShapeKind::Oval => {
                scene.draw_box_shadow(transform, bounds, color, shortest / 2.0, std_dev);
            }
            ShapeKind::Rhombus => {
                if shortest <= 0.0 {
                    return;
                }
                // A square turned by 45 degrees and stretched so its corners land on the
                // side midpoints
                let side = shortest / SQRT_2;
                let square = Rect::from_center_size(Point::ORIGIN, (side, side));
                let center: Vec2 = bounds.center().to_vec2();
                let to_bounds = Affine::translate(center)
                    * Affine::scale_non_uniform(
                        bounds.width() / shortest,
                        bounds.height() / shortest,
                    )
                    * Affine::rotate(FRAC_PI_4);
                let radius = (self.attrs.corners_radius / 2.0).max(0.0).min(side / 2.0);
                scene.draw_box_shadow(transform * to_bounds, square, color, radius, std_dev);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn std_dev_conversion() {
        assert_eq!(shadow_std_dev(0.0), 0.0);
        assert_eq!(shadow_std_dev(-3.0), 0.0);
        assert!((shadow_std_dev(10.0) - 6.2735).abs() < 1e-9);
    }

    #[test]
    fn outline_is_empty_until_first_layout() {
        let card = ShapeCard::new(ShapeCardAttrs::default());
        assert_eq!(card.bounds(), Rect::ZERO);
        assert!(card.outline().elements().is_empty());
    }

    #[test]
    fn resize_rebuilds_outline() {
        let mut card = ShapeCard::new(ShapeCardAttrs {
            shape: ShapeKind::Rhombus,
            corners_radius: 20.0,
            ..Default::default()
        });

        card.on_size_changed(100.0, 100.0);
        assert_eq!(card.bounds(), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(card.outline().elements()[0], PathEl::MoveTo((10.0, 40.0).into()));

        card.on_size_changed(200.0, 60.0);
        assert_eq!(card.bounds(), Rect::new(0.0, 0.0, 200.0, 60.0));
        assert_eq!(
            card.outline().elements(),
            build_outline(card.bounds(), ShapeKind::Rhombus, 20.0).elements()
        );
    }

    #[test]
    fn rhombus_shadow_corners_land_on_midpoints() {
        let mut card = ShapeCard::new(ShapeCardAttrs {
            shape: ShapeKind::Rhombus,
            shadow_radius: 4.0,
            ..Default::default()
        });
        card.on_size_changed(120.0, 60.0);

        let mut recording = sccv_scene::Recording::new();
        card.draw_shadow(&mut recording, Affine::IDENTITY);
        let shadow = match &recording.cmds[0] {
            sccv_scene::RenderCommand::BoxShadow(shadow) => shadow.clone(),
            other => panic!("unexpected command {other:?}"),
        };

        let corners = [
            Point::new(shadow.rect.x0, shadow.rect.y0),
            Point::new(shadow.rect.x1, shadow.rect.y0),
            Point::new(shadow.rect.x1, shadow.rect.y1),
            Point::new(shadow.rect.x0, shadow.rect.y1),
        ];
        let mapped: Vec<Point> = corners.iter().map(|p| shadow.transform * *p).collect();
        for midpoint in [
            Point::new(60.0, 0.0),
            Point::new(120.0, 30.0),
            Point::new(60.0, 60.0),
            Point::new(0.0, 30.0),
        ] {
            assert!(
                mapped.iter().any(|p| (*p - midpoint).hypot() < 1e-9),
                "no shadow corner at {midpoint:?}: {mapped:?}"
            );
        }
    }
}
