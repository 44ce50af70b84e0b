//! JSON form of layout descriptions.
//!
//! ```json
//! {
//!   "id": "toolbar",
//!   "style": { "width": "100%", "height": 48, "justifyContent": "space-between" },
//!   "content": ["Open", { "visual": { "width": 24, "height": 24 } }, "Save"]
//! }
//! ```
//!
//! Content may be a string, a visual, a nested description, a list, or any
//! other object, which is read as an ordered keyed mapping. An object whose
//! keys are all drawn from `id`, `style` and `content` is always a nested
//! description, so those three names cannot be used as mapping keys.
//!
//! Style numbers may be written bare or as strings (`"4"`, `"4px"`).
//! Values that do not parse are dropped with a warning.

use std::str::FromStr;

use glam::vec2;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    error::LayoutError,
    style::{
        Background, Dimension, Display, FlexDir, FlexWrap, Justify, Length, Style,
        parse_hex_color,
    },
};

use super::{Content, Description, Visual};

const DESCRIPTION_KEYS: [&str; 3] = ["id", "style", "content"];

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Num(f32),
    Str(String),
    Other(Value),
}

#[derive(Deserialize)]
struct VisualSize {
    width: f32,
    height: f32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBackground {
    Color(String),
    Visual(VisualSize),
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct RawStyle {
    width: Option<Scalar>,
    height: Option<Scalar>,
    max_width: Option<Scalar>,
    max_height: Option<Scalar>,
    scale: Option<Scalar>,
    scale_x: Option<Scalar>,
    scale_y: Option<Scalar>,
    padding: Option<Scalar>,
    padding_left: Option<Scalar>,
    padding_right: Option<Scalar>,
    padding_top: Option<Scalar>,
    padding_bottom: Option<Scalar>,
    margin: Option<Scalar>,
    margin_left: Option<Scalar>,
    margin_right: Option<Scalar>,
    margin_top: Option<Scalar>,
    margin_bottom: Option<Scalar>,
    display: Option<String>,
    flex_direction: Option<String>,
    flex_wrap: Option<String>,
    justify_content: Option<String>,
    position: Option<String>,
    background: Option<RawBackground>,
    font_size: Option<Scalar>,
    line_height: Option<Scalar>,
}

fn dimension(value: Scalar) -> Dimension {
    match value {
        Scalar::Num(px) => Dimension::Px(px),
        Scalar::Str(s) => Dimension::parse_lossy(&s),
        Scalar::Other(v) => {
            log::warn!("coercing non-numeric dimension `{v}` to auto");
            Dimension::Auto
        }
    }
}

fn length(property: &str, value: Scalar) -> Option<Length> {
    let parsed = match &value {
        Scalar::Num(px) => return Some(Length::Px(*px)),
        Scalar::Str(s) => Length::parse(s),
        Scalar::Other(_) => None,
    };
    if parsed.is_none() {
        log::warn!("ignoring malformed {property} {}", describe(&value));
    }
    parsed
}

/// A plain number, from `4`, `"4"` or `"4px"`.
fn number(property: &str, value: Option<Scalar>) -> Option<f32> {
    let value = value?;
    let parsed = match &value {
        Scalar::Num(v) => return Some(*v),
        Scalar::Str(s) => {
            let s = s.trim();
            let s = s.strip_suffix("px").unwrap_or(s).trim();
            s.parse::<f32>().ok().filter(|v| v.is_finite())
        }
        Scalar::Other(_) => None,
    };
    if parsed.is_none() {
        log::warn!("ignoring malformed {property} {}", describe(&value));
    }
    parsed
}

fn describe(value: &Scalar) -> String {
    match value {
        Scalar::Num(v) => v.to_string(),
        Scalar::Str(s) => format!("`{s}`"),
        Scalar::Other(v) => format!("`{v}`"),
    }
}

/// Parses an enum value, falling back to its default when unrecognised.
fn lenient<T: FromStr<Err = LayoutError> + Default>(value: Option<String>) -> T {
    let Some(value) = value else {
        return T::default();
    };
    value.parse().unwrap_or_else(|err: LayoutError| {
        log::warn!("{err}; using the default");
        T::default()
    })
}

impl RawStyle {
    fn into_style(self) -> crate::Result<Style> {
        let mut style = Style::default();

        if let Some(w) = self.width {
            style.width = dimension(w);
        }
        if let Some(h) = self.height {
            style.height = dimension(h);
        }
        style.max_width = self.max_width.and_then(|v| length("maxWidth", v));
        style.max_height = self.max_height.and_then(|v| length("maxHeight", v));

        let uniform = number("scale", self.scale).unwrap_or(1.0);
        style.scale = vec2(
            number("scaleX", self.scale_x).unwrap_or(uniform),
            number("scaleY", self.scale_y).unwrap_or(uniform),
        );

        style.padding = number("padding", self.padding).unwrap_or(0.0);
        style.padding_sides.left = number("paddingLeft", self.padding_left);
        style.padding_sides.right = number("paddingRight", self.padding_right);
        style.padding_sides.top = number("paddingTop", self.padding_top);
        style.padding_sides.bottom = number("paddingBottom", self.padding_bottom);

        let margin = number("margin", self.margin).unwrap_or(0.0);
        style.margin.left = number("marginLeft", self.margin_left).unwrap_or(margin);
        style.margin.right = number("marginRight", self.margin_right).unwrap_or(margin);
        style.margin.top = number("marginTop", self.margin_top).unwrap_or(margin);
        style.margin.bottom = number("marginBottom", self.margin_bottom).unwrap_or(margin);

        style.display = lenient::<Display>(self.display);
        if let Some(dir) = self.flex_direction {
            style.flex.dir = dir.parse::<FlexDir>()?;
        }
        style.flex.wrap = lenient::<FlexWrap>(self.flex_wrap);
        style.flex.justify = lenient::<Justify>(self.justify_content);
        style.position = self.position.and_then(|p| match p.parse() {
            Ok(anchor) => Some(anchor),
            Err(err) => {
                log::warn!("{err}; leaving the node in flow");
                None
            }
        });

        style.background = match self.background {
            None => None,
            Some(RawBackground::Visual(size)) => {
                Some(Background::Visual(Visual::new(size.width, size.height)))
            }
            Some(RawBackground::Color(c)) => match parse_hex_color(&c) {
                Some(rgba) => Some(Background::Color(rgba)),
                None => {
                    log::warn!("ignoring unparseable background colour `{c}`");
                    None
                }
            },
        };

        if let Some(size) = number("fontSize", self.font_size) {
            style.font_size = size;
        }
        style.line_height = number("lineHeight", self.line_height);

        Ok(style)
    }
}

fn is_description(map: &Map<String, Value>) -> bool {
    !map.is_empty() && map.keys().all(|k| DESCRIPTION_KEYS.contains(&k.as_str()))
}

fn parse_content(value: &Value) -> crate::Result<Content> {
    match value {
        Value::String(text) => Ok(Content::Text(text.clone())),
        Value::Array(items) => items
            .iter()
            .map(parse_content)
            .collect::<crate::Result<Vec<_>>>()
            .map(Content::List),
        Value::Object(map) if map.len() == 1 && map.contains_key("visual") => {
            let size = VisualSize::deserialize(&map["visual"])?;
            Ok(Content::Visual(Visual::new(size.width, size.height)))
        }
        Value::Object(map) if is_description(map) => {
            Ok(Content::Layout(Box::new(parse_description(value)?)))
        }
        Value::Object(map) => map
            .iter()
            .map(|(key, v)| Ok((key.clone(), parse_content(v)?)))
            .collect::<crate::Result<Vec<_>>>()
            .map(Content::Keyed),
        other => Err(LayoutError::Description(format!(
            "content must be a string, list or object, got `{other}`"
        ))),
    }
}

fn parse_description(value: &Value) -> crate::Result<Description> {
    let Value::Object(map) = value else {
        return Err(LayoutError::Description(format!(
            "expected a layout object, got `{value}`"
        )));
    };

    let id = match map.get("id") {
        None | Some(Value::Null) => None,
        Some(Value::String(id)) => Some(id.clone()),
        Some(other) => {
            return Err(LayoutError::Description(format!(
                "id must be a string, got `{other}`"
            )));
        }
    };

    let style = match map.get("style") {
        None | Some(Value::Null) => Style::default(),
        Some(raw) => RawStyle::deserialize(raw)?.into_style()?,
    };

    let content = match map.get("content") {
        None | Some(Value::Null) => None,
        Some(content) => Some(parse_content(content)?),
    };

    Ok(Description { id, style, content })
}

impl Description {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        parse_description(&value)
    }
}
