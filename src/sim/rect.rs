//! Screen-space rectangles for overlap tests
//!
//! Entity positions are percentages of the play area (CSS `left`/`top`), but
//! overlap is decided on the rendered pixel boxes. The container can be resized
//! at any time while entity boxes keep a fixed pixel size, so rectangles are
//! rebuilt from the current `Viewport` on every evaluation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::EntityId;

/// Pixel size of the play area container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert a percentage position to pixel coordinates in this viewport
    #[inline]
    pub fn to_pixels(&self, percent: Vec2) -> Vec2 {
        Vec2::new(
            percent.x / 100.0 * self.width,
            percent.y / 100.0 * self.height,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(600.0, 400.0)
    }
}

/// Rendered square size of each entity kind (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntitySizes {
    pub player: f32,
    pub home: f32,
    pub food: f32,
    pub obstacle: f32,
}

impl Default for EntitySizes {
    fn default() -> Self {
        Self {
            player: 40.0,
            home: 50.0,
            food: 25.0,
            obstacle: 40.0,
        }
    }
}

impl EntitySizes {
    /// Size of the box rendered for an entity
    pub fn of(&self, entity: EntityId) -> f32 {
        match entity {
            EntityId::Player => self.player,
            EntityId::Home => self.home,
            EntityId::Food(_) => self.food,
            EntityId::Obstacle(_) => self.obstacle,
        }
    }

    /// Replace negative or non-finite sizes with the defaults
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let fix = |v: f32, d: f32| if v.is_finite() && v >= 0.0 { v } else { d };
        Self {
            player: fix(self.player, defaults.player),
            home: fix(self.home, defaults.home),
            food: fix(self.food, defaults.food),
            obstacle: fix(self.obstacle, defaults.obstacle),
        }
    }
}

/// Axis-aligned rectangle in screen pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    /// Rendered box of a square entity whose top-left corner sits at `percent`
    pub fn from_percent(percent: Vec2, size: f32, viewport: &Viewport) -> Self {
        let origin = viewport.to_pixels(percent);
        Self::new(origin.x, origin.y, size, size)
    }

    /// Overlap test. Boxes that only touch along an edge still overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.bottom < other.top
            || self.top > other.bottom
            || self.right < other.left
            || self.left > other.right)
    }
}
