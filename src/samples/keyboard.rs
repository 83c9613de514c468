//! Flying a ship with the arrow keys and firing lasers with space.

use glam::Vec2;
use miette::Result;

use super::flight::{self, Steering};
use crate::{
    assets::Texture,
    math::Rect,
    pool::{Pool, Poolable},
    Config, Context, Game, KeyCode,
};

/// Ship firing lasers.
#[derive(Debug, Default)]
pub struct KeyboardInput {
    /// Image of the ship.
    ship_texture: Option<Texture>,
    /// Image of a single laser.
    laser_texture: Option<Texture>,
    /// Velocity of the ship.
    steering: Steering,
    /// Center of the ship.
    ship_position: Vec2,
    /// Area lasers are visible in.
    world_bounds: Rect,
    /// Every laser ever fired, reused when out of the world.
    lasers: Pool<Laser>,
}

impl KeyboardInput {
    /// Window settings.
    #[must_use]
    pub fn config() -> Config {
        Config::default()
            .with_title("Keyboard Input")
            .with_square_buffer()
    }

    /// Center of the ship.
    #[must_use]
    pub const fn ship_position(&self) -> Vec2 {
        self.ship_position
    }

    /// Every laser in the pool, including the ones not visible.
    #[must_use]
    pub const fn lasers(&self) -> &Pool<Laser> {
        &self.lasers
    }

    /// Fire a laser from the top of the ship.
    fn fire(&mut self) {
        let (Some(ship_texture), Some(laser_texture)) = (&self.ship_texture, &self.laser_texture)
        else {
            return;
        };

        let position = flight::muzzle_position(
            self.ship_position,
            ship_texture.size(),
            laser_texture.height(),
        );

        let world_bounds = self.world_bounds;
        let laser_size = laser_texture.size();
        self.lasers
            .acquire_with(|| Laser::new(world_bounds, laser_size))
            .fire(position);
    }
}

impl Game for KeyboardInput {
    fn load(&mut self, ctx: Context) -> Result<()> {
        self.ship_texture = Some(ctx.texture("ship")?);
        self.laser_texture = Some(ctx.texture("orange-lazer")?);

        let (width, height) = (ctx.width(), ctx.height());
        self.world_bounds = Rect::from_size(width, height);

        // Start in the lower part of the window
        self.ship_position = Vec2::new(width / 2.0, height - height / 4.0);

        Ok(())
    }

    fn update(&mut self, ctx: Context) {
        self.ship_position += self.steering.displacement(&ctx);

        if ctx.key_released(KeyCode::Space) {
            self.fire();
        }

        let delta_time = ctx.delta_time();
        self.lasers
            .iter_mut()
            .for_each(|laser| laser.update(delta_time));
    }

    fn render(&mut self, ctx: Context) {
        let (Some(ship_texture), Some(laser_texture)) = (&self.ship_texture, &self.laser_texture)
        else {
            return;
        };

        ctx.draw_texture(ship_texture)
            .translate(self.ship_position)
            .draw();

        for laser in self.lasers.active() {
            ctx.draw_texture(laser_texture)
                .translate(laser.position())
                .draw();
        }
    }
}

/// Projectile fired by the ship.
#[derive(Debug, Clone, PartialEq)]
pub struct Laser {
    /// Area the laser is visible in.
    world_bounds: Rect,
    /// Size of the image.
    size: Vec2,
    /// Position of the laser.
    position: Vec2,
    /// Whether the laser is flying.
    is_visible: bool,
}

impl Laser {
    /// Create an invisible laser.
    const fn new(world_bounds: Rect, size: Vec2) -> Self {
        Self {
            world_bounds,
            size,
            position: Vec2::ZERO,
            is_visible: false,
        }
    }

    /// Position of the laser.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether the laser is flying.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.is_visible
    }

    /// Start flying from a position.
    fn fire(&mut self, position: Vec2) {
        self.position = position;
        self.is_visible = true;
    }

    /// Fly upwards, hiding when leaving the world.
    fn update(&mut self, delta_time: f32) {
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

impl Poolable for Laser {
    fn is_active(&self) -> bool {
        self.is_visible
    }
}
