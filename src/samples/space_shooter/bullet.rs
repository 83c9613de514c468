//! Projectile fired by the weapon.

use glam::Vec2;
use rgb::RGBA8;

use crate::{color, math::Rect, pool::Poolable, samples::flight};

/// Single bullet, hidden when it leaves the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    /// Area the bullet is visible in, fixed when the bullet is created.
    world_bounds: Rect,
    /// Size of the image.
    size: Vec2,
    /// Position of the bullet.
    position: Vec2,
    /// Color of the weapon that fired the bullet.
    tint: RGBA8,
    /// Whether the bullet is flying.
    is_visible: bool,
}

impl Bullet {
    /// Create a hidden bullet.
    pub(super) const fn new(world_bounds: Rect, size: Vec2) -> Self {
        Self {
            world_bounds,
            size,
            position: Vec2::ZERO,
            tint: color::WHITE,
            is_visible: false,
        }
    }

    /// Position of the bullet.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Color of the weapon that fired the bullet.
    #[must_use]
    pub const fn tint(&self) -> RGBA8 {
        self.tint
    }

    /// Whether the bullet is flying.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.is_visible
    }

    /// Start flying from a position.
    pub(super) fn fire(&mut self, position: Vec2, tint: RGBA8) {
        self.position = position;
        self.tint = tint;
        self.is_visible = true;
    }

    /// Fly upwards, hiding when leaving the world.
    pub(super) fn update(&mut self, delta_time: f32) {
        if !self.is_visible {
            return;
        }

        self.position += flight::PROJECTILE_VELOCITY * delta_time;

        let bounds = Rect::from_position(self.position, self.size);
        if !self.world_bounds.contains_rect(&bounds) {
            self.is_visible = false;
        }
    }
}

impl Poolable for Bullet {
    fn is_active(&self) -> bool {
        self.is_visible
    }
}
