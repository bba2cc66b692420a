//! Draw-call dispatch onto an external drawing surface.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{
    config::DEFAULT_FILL_STYLE,
    core::{instance::Instance, shape::ShapeKind},
};

/// Trait implemented by anything instances can be drawn onto, such as a
/// canvas 2D context bridge.
pub trait DrawSurface {
    fn fill_rect(&mut self, position: Vec2, size: Vec2, fill_style: &str);

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill_style: &str);

    /// Draws `source` stretched into the rectangle at `position` with `size`.
    fn draw_image(&mut self, source: &str, position: Vec2, size: Vec2);
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    FillRect {
        position: Vec2,
        size: Vec2,
        fill_style: String,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        fill_style: String,
    },
    DrawImage {
        source: String,
        position: Vec2,
        size: Vec2,
    },
}

/// Surface that records draw calls so they can be replayed or shipped to a
/// host renderer.
#[derive(Debug, Default, Clone)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl DrawSurface for CommandBuffer {
    fn fill_rect(&mut self, position: Vec2, size: Vec2, fill_style: &str) {
        self.commands.push(DrawCommand::FillRect {
            position,
            size,
            fill_style: fill_style.to_owned(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill_style: &str) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            fill_style: fill_style.to_owned(),
        });
    }

    fn draw_image(&mut self, source: &str, position: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::DrawImage {
            source: source.to_owned(),
            position,
            size,
        });
    }
}

impl Instance {
    /// Issues the draw call matching this instance's shape.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        match self.shape() {
            ShapeKind::Box => surface.fill_rect(self.position, self.size(), DEFAULT_FILL_STYLE),
            ShapeKind::Circle => {
                surface.fill_circle(self.position, self.radius(), DEFAULT_FILL_STYLE)
            }
            ShapeKind::Sprite { source } => surface.draw_image(source, self.position, self.size()),
        }
    }
}
