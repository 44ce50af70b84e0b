pub mod cosmic;

pub use cosmic::CosmicTextMeasure;

use glam::{Vec2, vec2};

use crate::style::Style;

/// The subset of a container's style that shapes its text.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub line_height: f32,
}

impl TextStyle {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            line_height: font_size * 1.2,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(16.0)
    }
}

impl From<&Style> for TextStyle {
    fn from(style: &Style) -> Self {
        Self {
            font_size: style.font_size,
            line_height: style.line_height.unwrap_or(style.font_size * 1.2),
        }
    }
}

/// Intrinsic text measurement supplied by the host.
///
/// `wrap_width` of `None` measures the text on its natural lines; `Some`
/// re-flows it at that width and reports the wrapped extent.
pub trait TextMeasure {
    fn measure(&mut self, text: &str, style: &TextStyle, wrap_width: Option<f32>) -> Vec2;
}

/// Fixed-advance measurement: every character is `font_size * advance`
/// wide and lines break greedily between words.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl MonospaceMeasure {
    fn lines(&self, text: &str, char_w: f32, wrap_width: Option<f32>) -> Vec<usize> {
        let mut lines = Vec::new();
        for paragraph in text.lines() {
            let Some(limit) = wrap_width else {
                lines.push(paragraph.chars().count());
                continue;
            };

            let mut current = 0usize;
            for word in paragraph.split_whitespace() {
                let len = word.chars().count();
                if current == 0 {
                    current = len;
                } else if (current + 1 + len) as f32 * char_w > limit {
                    lines.push(current);
                    current = len;
                } else {
                    current += 1 + len;
                }
            }
            lines.push(current);
        }
        lines
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&mut self, text: &str, style: &TextStyle, wrap_width: Option<f32>) -> Vec2 {
        if text.is_empty() {
            return Vec2::ZERO;
        }

        let char_w = style.font_size * self.advance;
        let lines = self.lines(text, char_w, wrap_width);
        let widest = lines.iter().copied().max().unwrap_or(0);
        vec2(
            widest as f32 * char_w,
            lines.len() as f32 * style.line_height,
        )
    }
}

/// Text content owned by the layout tree.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLeaf {
    content: String,
    style: TextStyle,
    wrap_width: Option<f32>,
    measured: Vec2,
}

impl TextLeaf {
    pub fn new(content: impl Into<String>, style: TextStyle) -> Self {
        Self {
            content: content.into(),
            style,
            wrap_width: None,
            measured: Vec2::ZERO,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn is_wrapping(&self) -> bool {
        self.wrap_width.is_some()
    }

    pub fn wrap_width(&self) -> Option<f32> {
        self.wrap_width
    }

    pub fn set_wrap_width(&mut self, width: f32) {
        self.wrap_width = Some(width);
    }

    /// Size reported by the last `measure` call.
    pub fn measured(&self) -> Vec2 {
        self.measured
    }

    pub fn measure(&mut self, measurer: &mut dyn TextMeasure) -> Vec2 {
        self.measured = measurer.measure(&self.content, &self.style, self.wrap_width);
        self.measured
    }
}
