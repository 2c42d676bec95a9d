//! Parsing of the declarative attribute set a card is configured from.

use crate::outline::ShapeKind;
use peniko::Color;
use peniko::color::palette::css;
use thiserror::Error;

pub const BACKGROUND_COLOR: &str = "sccv_background_color";
pub const SHAPE: &str = "sccv_shape";
pub const CORNERS_RADIUS: &str = "sccv_corners_radius";
pub const SHADOW_RADIUS: &str = "sccv_shadow_radius";
pub const SHADOW_COLOR: &str = "sccv_shadow_color";

/// Shadow colour used when a shadow radius is set without a colour (`#88000000`).
pub const DEFAULT_SHADOW_COLOR: Color = Color::from_rgba8(0, 0, 0, 0x88);

/// Triggered when an attribute value can't be understood.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AttrError {
    #[error("Invalid color for {name}: {value:?}")]
    Color { name: String, value: String },
    #[error("Invalid dimension for {name}: {value:?}")]
    Dimension { name: String, value: String },
    #[error("Invalid shape for {name}: {value:?}")]
    Shape { name: String, value: String },
}

/// Options used when constructing a [`ShapeCard`](crate::ShapeCard)
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeCardAttrs {
    /// Fill of the card's silhouette
    pub background_color: Color,
    pub shape: ShapeKind,
    /// Corner rounding for rectangles, corner cut for rhombuses. Ignored by ovals.
    pub corners_radius: f64,
    /// Blur radius of the drop shadow. No shadow is drawn when this is 0.
    pub shadow_radius: f64,
    pub shadow_color: Color,
}

impl Default for ShapeCardAttrs {
    fn default() -> Self {
        Self {
            background_color: css::WHITE,
            shape: ShapeKind::Rectangle,
            corners_radius: 0.0,
            shadow_radius: 0.0,
            shadow_color: DEFAULT_SHADOW_COLOR,
        }
    }
}

impl ShapeCardAttrs {
    /// Read attributes from `(name, value)` pairs. Unknown names are ignored.
    ///
    /// `density` is the number of pixels per density-independent pixel and scales
    /// `dp`/`dip`/`sp` dimensions.
    pub fn from_attributes<'a, I>(attrs: I, density: f64) -> Result<Self, AttrError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut out = Self::default();
        for (name, value) in attrs {
            let value = value.trim();
            match name {
                BACKGROUND_COLOR => out.background_color = parse_color(name, value)?,
                SHAPE => out.shape = parse_shape(name, value)?,
                CORNERS_RADIUS => out.corners_radius = parse_dimension(name, value, density)?,
                SHADOW_RADIUS => out.shadow_radius = parse_dimension(name, value, density)?,
                SHADOW_COLOR => out.shadow_color = parse_color(name, value)?,
                _ => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Ignoring unknown attribute {name}");
                }
            }
        }
        Ok(out)
    }

    /// Whether a drop shadow should be drawn at all
    pub fn has_shadow(&self) -> bool {
        self.shadow_radius > 0.0 && self.shadow_color.components[3] != 0.0
    }
}

/// Parse `#RGB`, `#ARGB`, `#RRGGBB` or `#AARRGGBB`. Alpha comes first.
pub fn parse_color(name: &str, value: &str) -> Result<Color, AttrError> {
    let err = || AttrError::Color {
        name: name.to_string(),
        value: value.to_string(),
    };

    let hex = value.strip_prefix('#').ok_or_else(err)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(err());
    }
    let digits: Vec<u8> = hex
        .bytes()
        .map(|b| (b as char).to_digit(16).unwrap_or(0) as u8)
        .collect();

    // Short forms repeat every digit
    let full: Vec<u8> = match digits.len() {
        3 | 4 => digits.iter().map(|d| d * 16 + d).collect(),
        6 | 8 => digits.chunks(2).map(|pair| pair[0] * 16 + pair[1]).collect(),
        _ => return Err(err()),
    };
    let (a, rgb) = match full.as_slice() {
        [r, g, b] => (255, [*r, *g, *b]),
        [a, r, g, b] => (*a, [*r, *g, *b]),
        _ => return Err(err()),
    };
    Ok(Color::from_rgba8(rgb[0], rgb[1], rgb[2], a))
}

/// Parse a dimension into pixels: a number with an optional `px`, `dp`, `dip` or `sp` unit.
pub fn parse_dimension(name: &str, value: &str, density: f64) -> Result<f64, AttrError> {
    let err = || AttrError::Dimension {
        name: name.to_string(),
        value: value.to_string(),
    };

    let unit_start = value
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(unit_start);
    let number: f64 = number.trim().parse().map_err(|_| err())?;
    if !number.is_finite() {
        return Err(err());
    }

    match unit {
        "" | "px" => Ok(number),
        "dp" | "dip" | "sp" => Ok(number * density),
        _ => Err(err()),
    }
}

/// Parse a shape name or its integer code.
pub fn parse_shape(name: &str, value: &str) -> Result<ShapeKind, AttrError> {
    if let Ok(code) = value.parse::<i64>() {
        if !(0..=2).contains(&code) {
            #[cfg(feature = "tracing")]
            tracing::warn!("Unknown shape code {code} for {name}, using a rectangle");
        }
        return Ok(ShapeKind::from_code(code));
    }

    match value.to_ascii_lowercase().as_str() {
        "rectangle" => Ok(ShapeKind::Rectangle),
        "oval" => Ok(ShapeKind::Oval),
        "rhombus" => Ok(ShapeKind::Rhombus),
        _ => Err(AttrError::Shape {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let attrs = ShapeCardAttrs::from_attributes(std::iter::empty(), 1.0).unwrap();
        assert_eq!(attrs, ShapeCardAttrs::default());
        assert_eq!(attrs.shape, ShapeKind::Rectangle);
        assert_eq!(attrs.corners_radius, 0.0);
        assert_eq!(attrs.shadow_radius, 0.0);
        assert_eq!(attrs.background_color, css::WHITE);
        assert!(!attrs.has_shadow());
    }

    #[test]
    fn reads_every_attribute() {
        let attrs = ShapeCardAttrs::from_attributes(
            [
                (BACKGROUND_COLOR, "#ff336699"),
                (SHAPE, "rhombus"),
                (CORNERS_RADIUS, "8dp"),
                (SHADOW_RADIUS, "4px"),
                (SHADOW_COLOR, "#40000000"),
                ("android_layout_width", "match_parent"),
            ],
            2.0,
        )
        .unwrap();

        assert_eq!(attrs.background_color, Color::from_rgba8(0x33, 0x66, 0x99, 0xff));
        assert_eq!(attrs.shape, ShapeKind::Rhombus);
        assert_eq!(attrs.corners_radius, 16.0);
        assert_eq!(attrs.shadow_radius, 4.0);
        assert_eq!(attrs.shadow_color, Color::from_rgba8(0, 0, 0, 0x40));
        assert!(attrs.has_shadow());
    }

    #[test]
    fn color_forms() {
        let rgba = |v: &str| {
            let c = parse_color("c", v).unwrap().to_rgba8();
            (c.r, c.g, c.b, c.a)
        };
        assert_eq!(rgba("#f00"), (0xff, 0, 0, 0xff));
        assert_eq!(rgba("#8f00"), (0xff, 0, 0, 0x88));
        assert_eq!(rgba("#123456"), (0x12, 0x34, 0x56, 0xff));
        assert_eq!(rgba("#88000000"), (0, 0, 0, 0x88));
        assert_eq!(rgba("#AbCdEf"), (0xab, 0xcd, 0xef, 0xff));
    }

    #[test]
    fn bad_colors() {
        for value in ["red", "#12345", "#gg0000", "#", "123456"] {
            assert_eq!(
                parse_color(BACKGROUND_COLOR, value),
                Err(AttrError::Color {
                    name: BACKGROUND_COLOR.to_string(),
                    value: value.to_string()
                })
            );
        }
    }

    #[test]
    fn dimensions() {
        assert_eq!(parse_dimension("d", "12", 3.0), Ok(12.0));
        assert_eq!(parse_dimension("d", "12px", 3.0), Ok(12.0));
        assert_eq!(parse_dimension("d", "12dp", 3.0), Ok(36.0));
        assert_eq!(parse_dimension("d", "1.5dip", 2.0), Ok(3.0));
        assert_eq!(parse_dimension("d", "10sp", 1.5), Ok(15.0));
        // No clamping here
        assert_eq!(parse_dimension("d", "-4dp", 1.0), Ok(-4.0));

        for value in ["", "dp", "12in", "twelve", "NaN"] {
            assert!(matches!(
                parse_dimension("d", value, 1.0),
                Err(AttrError::Dimension { .. })
            ));
        }
    }

    #[test]
    fn shapes() {
        assert_eq!(parse_shape("s", "oval"), Ok(ShapeKind::Oval));
        assert_eq!(parse_shape("s", "Rhombus"), Ok(ShapeKind::Rhombus));
        assert_eq!(parse_shape("s", "RECTANGLE"), Ok(ShapeKind::Rectangle));
        assert_eq!(parse_shape("s", "1"), Ok(ShapeKind::Oval));
        assert_eq!(parse_shape("s", "2"), Ok(ShapeKind::Rhombus));
        assert_eq!(parse_shape("s", "9"), Ok(ShapeKind::Rectangle));
        assert!(matches!(
            parse_shape("s", "hexagon"),
            Err(AttrError::Shape { .. })
        ));
    }

    #[test]
    fn error_names_the_attribute() {
        let err = ShapeCardAttrs::from_attributes([(SHADOW_RADIUS, "big")], 1.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid dimension for sccv_shadow_radius: \"big\""
        );
    }

    #[test]
    fn transparent_shadow_is_skipped() {
        let attrs = ShapeCardAttrs {
            shadow_radius: 6.0,
            shadow_color: Color::TRANSPARENT,
            ..Default::default()
        };
        assert!(!attrs.has_shadow());
    }
}
