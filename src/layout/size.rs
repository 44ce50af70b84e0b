use glam::{Vec2, vec2};

use super::config::{AutoHeight, LayoutConfig};
use crate::{
    style::{Dimension, Display, Style},
    text::{TextLeaf, TextMeasure},
    tree::{Container, Node, NodeKind, node::sole_text},
};

/// How an `auto` dimension is measured.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AutoSizeMode {
    /// Hug the container's only child, a text leaf, plus padding.
    InnerText,
    /// Take the size of the graphical background.
    StickToBackground,
    FitToParent,
}

impl AutoSizeMode {
    pub fn select(style: &Style, children: &[Node]) -> Self {
        if let [only] = children {
            if matches!(only.kind(), NodeKind::Text(_)) {
                return AutoSizeMode::InnerText;
            }
        }

        let graphical = style
            .background
            .as_ref()
            .is_some_and(|bg| bg.intrinsic_size().is_some());
        if style.display != Display::Block && graphical {
            return AutoSizeMode::StickToBackground;
        }

        AutoSizeMode::FitToParent
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolved {
    pub size: Vec2,
    pub scale: Vec2,
}

/// Sizes a container against the space its parent offers.
///
/// `parent_padding` is the parent's padding shorthand, taken off both axes
/// once. Returns `None` when the container resolves to nothing on either
/// axis; its subtree is then left untouched. Auto-sized text may switch to
/// wrapping here, which persists on the leaf across resolves.
pub fn resolve(
    container: &mut Container,
    available: Vec2,
    parent_padding: Option<f32>,
    measurer: &mut dyn TextMeasure,
    config: &LayoutConfig,
) -> Option<Resolved> {
    let Container { style, children } = container;

    if style.width.is_zero() || style.height.is_zero() {
        log::trace!("zero-sized style, skipping subtree");
        return None;
    }

    let mode = AutoSizeMode::select(style, children);
    let padding = style.padding_edges();
    let background = style
        .background
        .as_ref()
        .and_then(|bg| bg.intrinsic_size())
        .unwrap_or(Vec2::ZERO);

    let mut text = match mode {
        AutoSizeMode::InnerText => sole_text(children),
        _ => None,
    };
    if let Some(text) = text.as_deref_mut() {
        text.measure(measurer);
    }

    let width = match style.width {
        Dimension::Px(v) => v,
        Dimension::Percent(p) => p / 100.0 * available.x,
        Dimension::Auto => match mode {
            AutoSizeMode::InnerText => {
                let limit = available.x - padding.horizontal();
                text.as_deref_mut()
                    .map_or(0.0, |t| wrap_to_fit(t, limit, measurer).x)
                    + padding.horizontal()
            }
            AutoSizeMode::StickToBackground => background.x,
            AutoSizeMode::FitToParent => available.x,
        },
    };

    let height = match style.height {
        Dimension::Px(v) => v,
        Dimension::Percent(p) => p / 100.0 * available.y,
        Dimension::Auto => match mode {
            AutoSizeMode::InnerText => {
                text.as_deref().map_or(0.0, |t| t.measured().y) + padding.vertical()
            }
            AutoSizeMode::StickToBackground => background.y,
            AutoSizeMode::FitToParent => match config.auto_height {
                AutoHeight::Collapse => 0.0,
                AutoHeight::FillParent => available.y,
            },
        },
    };

    let mut size = vec2(width, height);
    if let Some(p) = parent_padding {
        size -= Vec2::splat(p);
    }
    let size = size.max(Vec2::ZERO);

    if !(size.x > 0.0 && size.y > 0.0) {
        log::trace!("{mode:?} resolved to {size}, hiding");
        return None;
    }

    let scale = fit_to_size(size, style, available);
    log::trace!("{mode:?} resolved to {size} at scale {scale}");
    Some(Resolved { size, scale })
}

/// Switches unwrapped text to wrapping once it no longer fits `limit`.
fn wrap_to_fit(text: &mut TextLeaf, limit: f32, measurer: &mut dyn TextMeasure) -> Vec2 {
    if !text.is_wrapping() && limit > 0.0 && text.measured().x >= limit {
        log::debug!("wrapping {:?} at {limit}", text.content());
        text.set_wrap_width(limit);
        text.measure(measurer);
    }
    text.measured()
}

/// Style scale, shrunk uniformly when the margin box exceeds a max size.
fn fit_to_size(size: Vec2, style: &Style, available: Vec2) -> Vec2 {
    let scale = style.scale;
    if style.max_width.is_none() && style.max_height.is_none() {
        return scale;
    }

    let margin = style.margin;
    let boxed = size * scale + vec2(margin.horizontal(), margin.vertical());

    let fit = |max: Option<f32>, boxed: f32, current: f32| match max {
        Some(max) if boxed > max => Some(current * max.max(0.0) / boxed),
        _ => None,
    };
    let fit_x = fit(style.max_width.map(|l| l.resolve(available.x)), boxed.x, scale.x);
    let fit_y = fit(style.max_height.map(|l| l.resolve(available.y)), boxed.y, scale.y);

    if fit_x.is_none() && fit_y.is_none() {
        return scale;
    }

    let uniform = fit_x.unwrap_or(scale.x).min(fit_y.unwrap_or(scale.y));
    Vec2::splat(uniform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        style::{Background, Length},
        text::{MonospaceMeasure, TextStyle},
        tree::{Description, Visual},
    };
    use Dimension::{Auto, Percent, Px};

    fn container(desc: Description) -> Container {
        match Node::build(desc).kind {
            NodeKind::Container(c) => c,
            _ => unreachable!(),
        }
    }

    fn run(c: &mut Container, available: Vec2, parent_padding: Option<f32>) -> Option<Resolved> {
        let mut measurer = MonospaceMeasure { advance: 0.5 };
        resolve(c, available, parent_padding, &mut measurer, &LayoutConfig::default())
    }

    fn sized(width: Dimension, height: Dimension) -> Style {
        Style::default().size(width, height)
    }

    #[test]
    fn percentages_resolve_against_available_space() {
        let mut c = container(Description::new().style(sized(Percent(50.0), Px(10.0))));
        let r = run(&mut c, vec2(200.0, 50.0), None).unwrap();
        assert_eq!(r.size, vec2(100.0, 10.0));

        assert_eq!(run(&mut c, vec2(0.0, 50.0), None), None);
    }

    #[test]
    fn literal_zero_hides() {
        let mut c = container(Description::new().style(sized(Px(0.0), Px(10.0))));
        assert_eq!(run(&mut c, vec2(200.0, 50.0), None), None);
    }

    #[test]
    fn parent_padding_is_taken_off_both_axes() {
        let mut c = container(Description::new().style(sized(Px(100.0), Px(40.0))));
        let r = run(&mut c, vec2(200.0, 50.0), Some(10.0)).unwrap();
        assert_eq!(r.size, vec2(90.0, 30.0));
    }

    #[test]
    fn padding_larger_than_the_box_hides() {
        let mut c = container(Description::new().style(sized(Px(10.0), Px(40.0))));
        assert_eq!(run(&mut c, vec2(200.0, 50.0), Some(12.0)), None);
    }

    #[test]
    fn fit_to_parent_height_collapses_by_default() {
        let mut c = container(Description::new());
        assert_eq!(run(&mut c, vec2(200.0, 50.0), None), None);

        let mut measurer = MonospaceMeasure::default();
        let config = LayoutConfig {
            auto_height: AutoHeight::FillParent,
            ..Default::default()
        };
        let r = resolve(&mut c, vec2(200.0, 50.0), None, &mut measurer, &config).unwrap();
        assert_eq!(r.size, vec2(200.0, 50.0));
    }

    #[test]
    fn inline_node_sticks_to_its_background() {
        let mut style = Style::default().background_visual(Visual::new(64.0, 32.0));
        style.display = Display::Inline;
        let mut c = container(Description::new().style(style));
        let r = run(&mut c, vec2(200.0, 50.0), None).unwrap();
        assert_eq!(r.size, vec2(64.0, 32.0));
    }

    #[test]
    fn block_node_ignores_its_background_size() {
        let style = sized(Auto, Px(10.0)).background_visual(Visual::new(64.0, 32.0));
        let mut c = container(Description::new().style(style));
        assert_eq!(AutoSizeMode::select(&c.style, &c.children), AutoSizeMode::FitToParent);
        let r = run(&mut c, vec2(200.0, 50.0), None).unwrap();
        assert_eq!(r.size.x, 200.0);
    }

    #[test]
    fn color_background_never_sticks() {
        let mut style = Style::default().background_color(glam::Vec4::ONE);
        style.display = Display::Inline;
        assert!(matches!(style.background, Some(Background::Color(_))));
        assert_eq!(AutoSizeMode::select(&style, &[]), AutoSizeMode::FitToParent);
    }

    #[test]
    fn inner_text_hugs_and_wraps() {
        let mut style = Style::default().padding(5.0);
        style.font_size = 10.0;
        style.line_height = Some(12.0);
        // 5px per char, "aaaa bbbb cccc" is 70px unwrapped.
        let mut c = container(Description::new().style(style).content("aaaa bbbb cccc"));
        assert_eq!(AutoSizeMode::select(&c.style, &c.children), AutoSizeMode::InnerText);

        let r = run(&mut c, vec2(200.0, 100.0), None).unwrap();
        assert_eq!(r.size, vec2(80.0, 22.0));

        // Limit 60 - 10 = 50: "aaaa bbbb" (45px) and "cccc" (20px).
        let r = run(&mut c, vec2(60.0, 100.0), None).unwrap();
        assert_eq!(r.size, vec2(55.0, 34.0));
        let NodeKind::Text(text) = &c.children[0].kind else {
            unreachable!()
        };
        assert_eq!(text.wrap_width(), Some(50.0));
        assert_eq!(
            *text.style(),
            TextStyle {
                font_size: 10.0,
                line_height: 12.0
            }
        );
    }

    #[test]
    fn max_size_scales_uniformly() {
        let style = sized(Px(300.0), Px(100.0))
            .max_size(Some(Length::Px(150.0)), Some(Length::Px(100.0)));
        let mut c = container(Description::new().style(style));
        let r = run(&mut c, vec2(500.0, 500.0), None).unwrap();
        assert_eq!(r.size, vec2(300.0, 100.0));
        assert_eq!(r.scale, vec2(0.5, 0.5));
    }

    #[test]
    fn max_size_counts_margins_and_percentages() {
        let mut style = sized(Px(90.0), Px(20.0)).max_size(Some(Length::Percent(50.0)), None);
        style.margin.left = 5.0;
        style.margin.right = 5.0;
        let mut c = container(Description::new().style(style));
        // Box is 100 wide against a max of 50.
        let r = run(&mut c, vec2(100.0, 100.0), None).unwrap();
        assert_eq!(r.scale, vec2(0.5, 0.5));
    }

    #[test]
    fn max_size_never_scales_up() {
        let mut style = sized(Px(50.0), Px(20.0))
            .max_size(Some(Length::Px(500.0)), Some(Length::Px(500.0)));
        style.scale = vec2(2.0, 3.0);
        let mut c = container(Description::new().style(style));
        let r = run(&mut c, vec2(100.0, 100.0), None).unwrap();
        assert_eq!(r.scale, vec2(2.0, 3.0));
    }
}
