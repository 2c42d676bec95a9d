//! A card container with a configurable silhouette.
//!
//! A [`ShapeCard`] fills a rectangle (with rounded corners), an oval or a rhombus (with cut
//! corners), optionally casts a drop shadow, and clips whatever its children paint to
//! that silhouette. It paints into any [`sccv_scene::PaintScene`].
//!
//! The silhouette itself comes from [`build_outline`], a pure function of the card's
//! bounds, [`ShapeKind`] and corner radius.
//!
//! ## Feature flags
//!  - `default`: Enables the features listed below.
//!  - `tracing`: Enables tracing support.

mod attrs;
mod card;
mod layers;
mod outline;

pub use attrs::{
    AttrError, BACKGROUND_COLOR, CORNERS_RADIUS, DEFAULT_SHADOW_COLOR, SHADOW_COLOR,
    SHADOW_RADIUS, SHAPE, ShapeCardAttrs, parse_color, parse_dimension, parse_shape,
};
pub use card::{ShapeCard, shadow_std_dev};
pub use outline::{ShapeKind, build_outline};
