//! Lay out a shape card and print it as an SVG document.
//!
//! Usage: `sccv-preview <width> <height> [name=value ...]`
//!
//! e.g. `sccv-preview 200 120 sccv_shape=rhombus sccv_corners_radius=24 sccv_shadow_radius=8`

use kurbo::Affine;
use peniko::{Color, Fill};
use sccv::{ShapeCard, ShapeCardAttrs};
use sccv_scene::{PaintScene, SvgScene};

/// Covers the whole card so the clipping shows up in the output
const CHILD_COLOR: Color = Color::from_rgba8(0x21, 0x96, 0xf3, 0x60);

macro_rules! bail {
    ($err:expr) => {{
        eprintln!("{}", $err);
        eprintln!("usage: sccv-preview <width> <height> [name=value ...]");
        std::process::exit(1);
    }};
}

fn parse_size(arg: Option<String>, what: &str) -> f64 {
    let Some(arg) = arg else {
        bail!(format!("missing {what}"));
    };
    match arg.parse::<f64>() {
        Ok(value) if value >= 0.0 && value.is_finite() => value,
        _ => bail!(format!("invalid {what}: {arg}")),
    }
}

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let width = parse_size(args.next(), "width");
    let height = parse_size(args.next(), "height");

    let pairs: Vec<String> = args.collect();
    let mut attrs = Vec::with_capacity(pairs.len());
    for pair in &pairs {
        let Some((name, value)) = pair.split_once('=') else {
            bail!(format!("expected name=value, got {pair}"));
        };
        attrs.push((name, value));
    }

    let attrs = match ShapeCardAttrs::from_attributes(attrs, 1.0) {
        Ok(attrs) => attrs,
        Err(err) => bail!(err),
    };

    let mut card = ShapeCard::new(attrs);
    card.on_size_changed(width, height);

    // Leave room around the card for the shadow
    let margin = (card.attrs().shadow_radius * 2.0).max(0.0);
    let transform = Affine::translate((margin, margin));
    let bounds = card.bounds();

    let mut scene = SvgScene::new(width + margin * 2.0, height + margin * 2.0);
    card.paint(&mut scene, transform, |scene| {
        scene.fill(Fill::NonZero, transform, CHILD_COLOR, None, &bounds);
    });

    print!("{}", scene.finish());
}
