use glam::{Vec2, vec2};

use super::{
    Geometry, anchor,
    config::{AutoHeight, FlowBox, LayoutConfig, PassOrder},
    flexbox, size,
};
use crate::{
    error::LayoutError,
    notify::RenderNotifier,
    text::TextMeasure,
    tree::{Container, Description, Node, NodeKind},
};

pub(crate) struct LayoutCtx<'a> {
    measurer: &'a mut dyn TextMeasure,
    config: LayoutConfig,
}

/// Owns a layout tree and resolves it against the host's viewport.
pub struct LayoutNode {
    root: Node,
    config: LayoutConfig,
}

impl LayoutNode {
    pub fn new(desc: Description) -> Self {
        Self {
            root: Node::build(desc),
            config: LayoutConfig::default(),
        }
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(Self::new(Description::from_json(json)?))
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_auto_height(mut self, auto_height: AutoHeight) -> Self {
        self.config.auto_height = auto_height;
        self
    }

    pub fn with_pass_order(mut self, pass_order: PassOrder) -> Self {
        self.config.pass_order = pass_order;
        self
    }

    pub fn with_flow_box(mut self, flow_box: FlowBox) -> Self {
        self.config.flow_box = flow_box;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn find(&self, key: &str) -> Option<&Node> {
        self.root.find(key)
    }

    /// Resolves sizes and positions for the whole tree, then reports every
    /// node whose geometry changed since the last call.
    pub fn resolve(
        &mut self,
        available_width: f32,
        available_height: f32,
        measurer: &mut dyn TextMeasure,
        notifier: &mut dyn RenderNotifier,
    ) -> crate::Result<()> {
        let valid = |v: f32| v.is_finite() && v >= 0.0;
        if !valid(available_width) || !valid(available_height) {
            return Err(LayoutError::InvalidSpace {
                width: available_width,
                height: available_height,
            });
        }

        let available = vec2(available_width, available_height);
        let mut ctx = LayoutCtx {
            measurer,
            config: self.config,
        };

        resolve_node(&mut self.root, available, None, &mut ctx);

        let root = &mut self.root;
        root.geometry.position = match root.style().and_then(|s| s.position) {
            Some(a) if root.geometry.visible => {
                anchor::anchor(root.geometry.footprint(), available, a)
            }
            _ => Vec2::ZERO,
        };

        flush(root, notifier);
        Ok(())
    }

    /// Deepest visible node under `point`, in root coordinates.
    pub fn hit(&self, point: Vec2) -> Option<&Node> {
        hit_node(&self.root, point)
    }
}

fn hit_node(node: &Node, point: Vec2) -> Option<&Node> {
    if !node.geometry.contains(point) {
        return None;
    }
    let scale = node.geometry.scale;
    if scale.x == 0.0 || scale.y == 0.0 {
        return Some(node);
    }
    let local = (point - node.geometry.position) / scale;
    node.children()
        .iter()
        .rev()
        .find_map(|child| hit_node(child, local))
        .or(Some(node))
}

fn resolve_node(
    node: &mut Node,
    available: Vec2,
    parent_padding: Option<f32>,
    ctx: &mut LayoutCtx,
) {
    let position = node.geometry.position;

    match &mut node.kind {
        NodeKind::Text(text) => {
            let size = text.measure(ctx.measurer);
            node.geometry = Geometry::shown(size, Vec2::ONE, position);
        }
        NodeKind::Opaque(visual) => {
            node.geometry = Geometry::shown(visual.size, Vec2::ONE, position);
        }
        NodeKind::Container(container) => {
            let resolved =
                size::resolve(container, available, parent_padding, ctx.measurer, &ctx.config);
            match resolved {
                None => node.geometry = Geometry::hidden(),
                Some(resolved) => {
                    node.geometry = Geometry::shown(resolved.size, resolved.scale, position);
                    layout_children(container, resolved.size, ctx);
                }
            }
        }
    }
}

fn layout_children(container: &mut Container, size: Vec2, ctx: &mut LayoutCtx) {
    let padding = Some(container.style.padding);

    match ctx.config.pass_order {
        PassOrder::SizeThenPosition => {
            for child in &mut container.children {
                resolve_node(child, size, padding, ctx);
            }
            position_children(container, size, ctx.config.flow_box);
        }
        PassOrder::SinglePass => {
            position_children(container, size, ctx.config.flow_box);
            for child in &mut container.children {
                resolve_node(child, size, padding, ctx);
            }
        }
    }
}

/// Flows visible, unanchored children through the flex resolver inside
/// `flow_box`, and anchors the rest against the full box.
fn position_children(container: &mut Container, size: Vec2, flow_box: FlowBox) {
    let Container { style, children } = container;
    let (origin, inner_width) = match flow_box {
        FlowBox::Border => (Vec2::ZERO, size.x),
        FlowBox::Content => {
            let padding = style.padding_edges();
            let width = (size.x - padding.horizontal()).max(0.0);
            (vec2(padding.left, padding.top), width)
        }
    };

    let anchored = |node: &Node| node.style().and_then(|s| s.position);
    let flow: Vec<usize> = children
        .iter()
        .enumerate()
        .filter(|(_, c)| c.geometry.visible && anchored(*c).is_none())
        .map(|(i, _)| i)
        .collect();

    let sizes: Vec<Vec2> = flow.iter().map(|&i| children[i].geometry.footprint()).collect();
    let positions = flexbox::align(inner_width, &sizes, style.flex);
    for (&i, p) in flow.iter().zip(positions) {
        children[i].geometry.position = origin + p;
    }

    for child in children.iter_mut().filter(|c| c.geometry.visible) {
        if let Some(a) = anchored(child) {
            child.geometry.position = anchor::anchor(child.geometry.footprint(), size, a);
        }
    }
}

/// Reports changed geometry top-down; hidden containers keep their
/// subtree's last report.
fn flush(node: &mut Node, notifier: &mut dyn RenderNotifier) {
    if node.reported != Some(node.geometry) {
        log::trace!("{:?} ({:?}) -> {:?}", node.id(), node.key(), node.geometry);
        notifier.geometry_changed(node.id(), node.key(), &node.geometry);
        node.reported = Some(node.geometry);
    }

    if !node.geometry.visible {
        return;
    }
    if let NodeKind::Container(container) = &mut node.kind {
        for child in &mut container.children {
            flush(child, notifier);
        }
    }
}
