use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// A style property carried a value the resolver cannot act on.
    #[error("unrecognized {property} value `{value}`")]
    Configuration {
        property: &'static str,
        value: String,
    },

    #[error("malformed layout description: {0}")]
    Description(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("available space must be finite and non-negative, got {width}x{height}")]
    InvalidSpace { width: f32, height: f32 },
}
