pub mod properties;

use glam::{Vec2, Vec4};

pub use properties::{
    Anchor, Background, Dimension, Display, FlexDir, FlexWrap, Justify, Length, parse_hex_color,
};

use crate::tree::Visual;

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Edges {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Edges {
    pub fn uniform(v: f32) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }

    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(self) -> f32 {
        self.top + self.bottom
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Flex {
    pub dir: FlexDir,
    pub wrap: FlexWrap,
    pub justify: Justify,
}

/// Per-side padding; unset sides fall back to the `padding` shorthand.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct PaddingSides {
    pub left: Option<f32>,
    pub right: Option<f32>,
    pub top: Option<f32>,
    pub bottom: Option<f32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub width: Dimension,
    pub height: Dimension,
    pub max_width: Option<Length>,
    pub max_height: Option<Length>,
    pub scale: Vec2,
    pub padding: f32,
    pub padding_sides: PaddingSides,
    pub margin: Edges,
    pub display: Display,
    pub flex: Flex,
    pub position: Option<Anchor>,
    pub background: Option<Background>,
    pub font_size: f32,
    pub line_height: Option<f32>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            width: Dimension::Auto,
            height: Dimension::Auto,
            max_width: None,
            max_height: None,
            scale: Vec2::ONE,
            padding: 0.0,
            padding_sides: PaddingSides::default(),
            margin: Edges::default(),
            display: Display::Block,
            flex: Flex::default(),
            position: None,
            background: None,
            font_size: 16.0,
            line_height: None,
        }
    }
}

impl Style {
    pub fn padding_edges(&self) -> Edges {
        let p = self.padding_sides;
        Edges {
            left: p.left.unwrap_or(self.padding),
            right: p.right.unwrap_or(self.padding),
            top: p.top.unwrap_or(self.padding),
            bottom: p.bottom.unwrap_or(self.padding),
        }
    }

    pub fn size(mut self, width: impl Into<Dimension>, height: impl Into<Dimension>) -> Self {
        self.width = width.into();
        self.height = height.into();
        self
    }

    pub fn max_size(mut self, width: Option<Length>, height: Option<Length>) -> Self {
        self.max_width = width;
        self.max_height = height;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn flex_direction(mut self, dir: FlexDir) -> Self {
        self.flex.dir = dir;
        self
    }

    pub fn flex_wrap(mut self, wrap: FlexWrap) -> Self {
        self.flex.wrap = wrap;
        self
    }

    pub fn justify_content(mut self, justify: Justify) -> Self {
        self.flex.justify = justify;
        self
    }

    pub fn position(mut self, anchor: Anchor) -> Self {
        self.position = Some(anchor);
        self
    }

    pub fn background_color(mut self, color: impl Into<Vec4>) -> Self {
        self.background = Some(Background::Color(color.into()));
        self
    }

    pub fn background_visual(mut self, visual: Visual) -> Self {
        self.background = Some(Background::Visual(visual));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_side_padding_overrides_shorthand() {
        let mut style = Style::default().padding(8.0);
        style.padding_sides.left = Some(2.0);

        let edges = style.padding_edges();
        assert_eq!(edges.left, 2.0);
        assert_eq!(edges.right, 8.0);
        assert_eq!(edges.horizontal(), 10.0);
        assert_eq!(edges.vertical(), 16.0);
    }
}
