use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping};
use glam::{Vec2, vec2};

use super::{TextMeasure, TextStyle};

/// Measures text with real font metrics through cosmic-text.
pub struct CosmicTextMeasure {
    font_system: FontSystem,
}

impl CosmicTextMeasure {
    /// Loads the system font database.
    pub fn new() -> Self {
        Self::with_font_system(FontSystem::new())
    }

    pub fn with_font_system(font_system: FontSystem) -> Self {
        Self { font_system }
    }

    pub fn font_system(&mut self) -> &mut FontSystem {
        &mut self.font_system
    }
}

impl Default for CosmicTextMeasure {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for CosmicTextMeasure {
    fn measure(&mut self, text: &str, style: &TextStyle, wrap_width: Option<f32>) -> Vec2 {
        if text.is_empty() {
            return Vec2::ZERO;
        }

        let metrics = Metrics::new(style.font_size, style.line_height);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut self.font_system);

        buffer.set_size(wrap_width, None);
        buffer.set_text(text, &Attrs::new(), Shaping::Advanced);
        buffer.shape_until_scroll(true);

        let (width, lines) = buffer
            .layout_runs()
            .fold((0.0f32, 0usize), |(w, n), run| (w.max(run.line_w), n + 1));

        log::trace!("measured {:?} at wrap {:?}: {width}x{lines} lines", text, wrap_width);
        vec2(width, lines as f32 * style.line_height)
    }
}
