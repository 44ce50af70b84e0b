use std::str::FromStr;

use glam::{Vec2, Vec4, vec4};

use crate::{error::LayoutError, tree::Visual};

/// A width or height as written in a style sheet.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum Dimension {
    Px(f32),
    /// Percentage of the parent's available space, `50.0` meaning half.
    Percent(f32),
    #[default]
    Auto,
}

impl Dimension {
    pub fn is_zero(self) -> bool {
        self == Dimension::Px(0.0)
    }

    /// Parses `"auto"`, `"120"`, `"120px"` or `"50%"`. Anything else
    /// resolves as `Auto`.
    pub fn parse_lossy(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Dimension::Auto;
        }
        match Length::parse(s) {
            Some(Length::Px(v)) => Dimension::Px(v),
            Some(Length::Percent(p)) => Dimension::Percent(p),
            None => {
                log::warn!("coercing malformed dimension `{s}` to auto");
                Dimension::Auto
            }
        }
    }
}

impl From<f32> for Dimension {
    fn from(px: f32) -> Self {
        Dimension::Px(px)
    }
}

/// A clamp bound: absolute pixels or a share of the available space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
}

impl Length {
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(p) = s.strip_suffix('%') {
            return p.trim().parse::<f32>().ok().filter(|v| v.is_finite()).map(Length::Percent);
        }
        let px = s.strip_suffix("px").unwrap_or(s).trim();
        px.parse::<f32>().ok().filter(|v| v.is_finite()).map(Length::Px)
    }

    pub fn resolve(self, available: f32) -> f32 {
        match self {
            Length::Px(v) => v,
            Length::Percent(p) => p / 100.0 * available,
        }
    }
}

impl From<f32> for Length {
    fn from(px: f32) -> Self {
        Length::Px(px)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum Display {
    #[default]
    Block,
    Inline,
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum FlexDir {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDir {
    pub fn is_reverse(self) -> bool {
        matches!(self, FlexDir::RowReverse | FlexDir::ColumnReverse)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum Justify {
    #[default]
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    /// Accepted for compatibility; lays out like `Start`.
    Stretch,
}

/// Placement of a node inside its parent's box.
///
/// Single-edge names only move along their own axis, so `Top` and `Left`
/// leave the node at the origin like `TopLeft`. The `Center*` names centre
/// the axis they do not name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    Bottom,
    BottomLeft,
    BottomRight,
    CenterTop,
    CenterBottom,
    CenterLeft,
    CenterRight,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Background {
    Color(Vec4),
    Visual(Visual),
}

impl Background {
    /// Intrinsic size of a graphical background; colours have none.
    pub fn intrinsic_size(&self) -> Option<Vec2> {
        match self {
            Background::Color(_) => None,
            Background::Visual(v) => Some(v.size),
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn unrecognized(property: &'static str, value: &str) -> LayoutError {
    LayoutError::Configuration {
        property,
        value: value.to_string(),
    }
}

impl FromStr for Display {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "block" => Ok(Display::Block),
            "inline" | "inlineblock" => Ok(Display::Inline),
            _ => Err(unrecognized("display", s)),
        }
    }
}

impl FromStr for FlexDir {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "row" => Ok(FlexDir::Row),
            "rowreverse" => Ok(FlexDir::RowReverse),
            "column" => Ok(FlexDir::Column),
            "columnreverse" => Ok(FlexDir::ColumnReverse),
            _ => Err(unrecognized("flexDirection", s)),
        }
    }
}

impl FromStr for FlexWrap {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "nowrap" => Ok(FlexWrap::NoWrap),
            "wrap" => Ok(FlexWrap::Wrap),
            "wrapreverse" => Ok(FlexWrap::WrapReverse),
            _ => Err(unrecognized("flexWrap", s)),
        }
    }
}

impl FromStr for Justify {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "start" | "flexstart" | "left" => Ok(Justify::Start),
            "end" | "flexend" | "right" => Ok(Justify::End),
            "center" => Ok(Justify::Center),
            "spacebetween" => Ok(Justify::SpaceBetween),
            "spacearound" => Ok(Justify::SpaceAround),
            "spaceevenly" => Ok(Justify::SpaceEvenly),
            "stretch" => Ok(Justify::Stretch),
            _ => Err(unrecognized("justifyContent", s)),
        }
    }
}

impl FromStr for Anchor {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "topleft" | "lefttop" => Ok(Anchor::TopLeft),
            "top" => Ok(Anchor::Top),
            "topright" | "righttop" => Ok(Anchor::TopRight),
            "left" => Ok(Anchor::Left),
            "center" => Ok(Anchor::Center),
            "right" => Ok(Anchor::Right),
            "bottom" => Ok(Anchor::Bottom),
            "bottomleft" | "leftbottom" => Ok(Anchor::BottomLeft),
            "bottomright" | "rightbottom" => Ok(Anchor::BottomRight),
            "centertop" | "topcenter" => Ok(Anchor::CenterTop),
            "centerbottom" | "bottomcenter" => Ok(Anchor::CenterBottom),
            "centerleft" | "leftcenter" => Ok(Anchor::CenterLeft),
            "centerright" | "rightcenter" => Ok(Anchor::CenterRight),
            _ => Err(unrecognized("position", s)),
        }
    }
}

/// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` into linear 0..1 channels.
pub fn parse_hex_color(s: &str) -> Option<Vec4> {
    let hex = s.trim().strip_prefix('#')?;
    let channel = |i: usize, len: usize| -> Option<f32> {
        let digits = hex.get(i * len..(i + 1) * len)?;
        let v = u8::from_str_radix(digits, 16).ok()?;
        let v = if len == 1 { v * 17 } else { v };
        Some(v as f32 / 255.0)
    };

    match hex.len() {
        3 => Some(vec4(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?, 1.0)),
        6 => Some(vec4(channel(0, 2)?, channel(1, 2)?, channel(2, 2)?, 1.0)),
        8 => Some(vec4(
            channel(0, 2)?,
            channel(1, 2)?,
            channel(2, 2)?,
            channel(3, 2)?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_parse_pixels_percentages_and_auto() {
        assert_eq!(Dimension::parse_lossy("120"), Dimension::Px(120.0));
        assert_eq!(Dimension::parse_lossy("120px"), Dimension::Px(120.0));
        assert_eq!(Dimension::parse_lossy(" 50% "), Dimension::Percent(50.0));
        assert_eq!(Dimension::parse_lossy("AUTO"), Dimension::Auto);
    }

    #[test]
    fn malformed_dimension_falls_back_to_auto() {
        assert_eq!(Dimension::parse_lossy("half"), Dimension::Auto);
        assert_eq!(Dimension::parse_lossy("abc%"), Dimension::Auto);
    }

    #[test]
    fn percent_length_scales_with_available_space() {
        assert_eq!(Length::Percent(50.0).resolve(200.0), 100.0);
        assert_eq!(Length::Px(30.0).resolve(200.0), 30.0);
    }

    #[test]
    fn justify_accepts_css_aliases() {
        assert_eq!("flex-start".parse::<Justify>().unwrap(), Justify::Start);
        assert_eq!("left".parse::<Justify>().unwrap(), Justify::Start);
        assert_eq!("flex-end".parse::<Justify>().unwrap(), Justify::End);
        assert_eq!("space-evenly".parse::<Justify>().unwrap(), Justify::SpaceEvenly);
    }

    #[test]
    fn unknown_direction_is_a_configuration_error() {
        let err = "diagonal".parse::<FlexDir>().unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Configuration { property: "flexDirection", .. }
        ));
    }

    #[test]
    fn anchors_accept_both_word_orders() {
        assert_eq!("bottomRight".parse::<Anchor>().unwrap(), Anchor::BottomRight);
        assert_eq!("right-bottom".parse::<Anchor>().unwrap(), Anchor::BottomRight);
        assert_eq!("centerRight".parse::<Anchor>().unwrap(), Anchor::CenterRight);
    }

    #[test]
    fn hex_colors() {
        assert_eq!(parse_hex_color("#fff"), Some(Vec4::ONE));
        assert_eq!(parse_hex_color("#000000"), Some(vec4(0.0, 0.0, 0.0, 1.0)));
        assert_eq!(parse_hex_color("#00000000"), Some(Vec4::ZERO));
        assert_eq!(parse_hex_color("red"), None);
    }
}
