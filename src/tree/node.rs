use std::sync::atomic::{AtomicU64, Ordering};

use glam::{Vec2, vec2};

use crate::{
    layout::Geometry,
    style::Style,
    text::{TextLeaf, TextStyle},
};

use super::{Content, Description};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);
impl NodeId {
    pub fn new() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VisualId(u64);

static NEXT_VISUAL_ID: AtomicU64 = AtomicU64::new(0);
impl VisualId {
    pub fn new() -> Self {
        Self(NEXT_VISUAL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to an externally owned visual with a fixed intrinsic size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Visual {
    pub id: VisualId,
    pub size: Vec2,
}

impl Visual {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            id: VisualId::new(),
            size: vec2(width, height),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Container {
    pub(crate) style: Style,
    pub(crate) children: Vec<Node>,
}

impl Container {
    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// The text leaf when it is the only child.
pub(crate) fn sole_text(children: &mut [Node]) -> Option<&mut TextLeaf> {
    match children {
        [only] => match &mut only.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        },
        _ => None,
    }
}

#[derive(Clone, Debug)]
pub enum NodeKind {
    Text(TextLeaf),
    Opaque(Visual),
    Container(Container),
}

#[derive(Clone, Debug)]
pub struct Node {
    id: NodeId,
    key: Option<String>,
    pub(crate) kind: NodeKind,
    pub(crate) geometry: Geometry,
    pub(crate) reported: Option<Geometry>,
}

impl Node {
    fn with_kind(kind: NodeKind, key: Option<String>) -> Self {
        Self {
            id: NodeId::new(),
            key,
            kind,
            geometry: Geometry::default(),
            reported: None,
        }
    }

    /// Builds a container and its whole subtree from a description.
    pub fn build(desc: Description) -> Self {
        let key = desc.id.clone();
        Self::container(desc, key)
    }

    fn container(desc: Description, key: Option<String>) -> Self {
        let text_style = TextStyle::from(&desc.style);
        let children = match desc.content {
            None => Vec::new(),
            Some(Content::List(items)) => items
                .into_iter()
                .map(|item| Self::from_content(item, None, text_style))
                .collect(),
            Some(Content::Keyed(entries)) => Self::keyed_children(entries, text_style),
            Some(single) => vec![Self::from_content(single, None, text_style)],
        };

        Self::with_kind(
            NodeKind::Container(Container {
                style: desc.style,
                children,
            }),
            key,
        )
    }

    fn from_content(content: Content, key: Option<String>, text_style: TextStyle) -> Self {
        match content {
            Content::Text(text) => {
                Self::with_kind(NodeKind::Text(TextLeaf::new(text, text_style)), key)
            }
            Content::Visual(visual) => Self::with_kind(NodeKind::Opaque(visual), key),
            Content::Layout(desc) => {
                let key = key.or_else(|| desc.id.clone());
                Self::container(*desc, key)
            }
            nested @ (Content::List(_) | Content::Keyed(_)) => Self::container(
                Description {
                    content: Some(nested),
                    ..Default::default()
                },
                key,
            ),
        }
    }

    fn keyed_children(entries: Vec<(String, Content)>, text_style: TextStyle) -> Vec<Node> {
        entries
            .into_iter()
            .filter_map(|(key, content)| match content {
                Content::Visual(_) => {
                    log::debug!("dropping raw visual under key `{key}`; wrap it in a layout");
                    None
                }
                content => Some(Self::from_content(content, Some(key), text_style)),
            })
            .collect()
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn style(&self) -> Option<&Style> {
        match &self.kind {
            NodeKind::Container(c) => Some(&c.style),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Container(c) => &c.children,
            _ => &[],
        }
    }

    /// Depth-first search by key, including this node.
    pub fn find(&self, key: &str) -> Option<&Node> {
        if self.key() == Some(key) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(key))
    }
}
