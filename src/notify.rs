use crate::{layout::Geometry, tree::NodeId};

/// Host hook for redrawing whatever depends on a node's geometry
/// (backgrounds, clip masks, text).
pub trait RenderNotifier {
    fn geometry_changed(&mut self, id: NodeId, key: Option<&str>, geometry: &Geometry);
}

impl RenderNotifier for () {
    fn geometry_changed(&mut self, _id: NodeId, _key: Option<&str>, _geometry: &Geometry) {}
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeometryChange {
    pub id: NodeId,
    pub key: Option<String>,
    pub geometry: Geometry,
}

/// Records every change, in the order reported.
#[derive(Debug, Default)]
pub struct GeometryLog {
    pub changes: Vec<GeometryChange>,
}

impl GeometryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn clear(&mut self) {
        self.changes.clear();
    }

    /// Most recent geometry reported for `key`.
    pub fn last_for(&self, key: &str) -> Option<&Geometry> {
        self.changes
            .iter()
            .rev()
            .find(|c| c.key.as_deref() == Some(key))
            .map(|c| &c.geometry)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.changes.iter().any(|c| c.id == id)
    }
}

impl RenderNotifier for GeometryLog {
    fn geometry_changed(&mut self, id: NodeId, key: Option<&str>, geometry: &Geometry) {
        self.changes.push(GeometryChange {
            id,
            key: key.map(str::to_string),
            geometry: *geometry,
        });
    }
}
