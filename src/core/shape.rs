use serde::{Deserialize, Serialize};

/// Geometry an instance is rendered and collided as.
///
/// `Box` and `Sprite` share the same axis-aligned rectangle semantics: position
/// is the top-left corner and size is `(width, height)`. For `Circle` the
/// position is the center and `size.x` is the radius.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Box,
    Circle,
    /// Rectangle drawn with an image. The source only matters to rendering.
    Sprite { source: String },
}

impl ShapeKind {
    pub fn sprite(source: impl Into<String>) -> Self {
        Self::Sprite {
            source: source.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Box => "box",
            ShapeKind::Circle => "circle",
            ShapeKind::Sprite { .. } => "sprite",
        }
    }
}
