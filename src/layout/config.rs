use serde::Deserialize;

/// What an `auto` height resolves to when the node has neither a single
/// text child nor a graphical background to measure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutoHeight {
    /// Height 0, which hides the node.
    #[default]
    Collapse,
    FillParent,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PassOrder {
    /// Size every child first, then position them from their final sizes.
    #[default]
    SizeThenPosition,
    /// Position children from their previous sizes, then recurse. Positions
    /// lag one resolve behind any child whose size changed.
    SinglePass,
}

/// The box in-flow children are aligned in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowBox {
    /// The container's full resolved width, from its origin. Padding only
    /// shrinks children while they size.
    #[default]
    Border,
    /// Width minus horizontal padding, offset by the left and top padding.
    Content,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub auto_height: AutoHeight,
    pub pass_order: PassOrder,
    pub flow_box: FlowBox,
}

impl LayoutConfig {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
