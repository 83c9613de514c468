//! Player controlled ship.

use glam::Vec2;
use miette::Result;

use super::{
    signals::{ShipData, WeaponType, WorldData, SHIP_UPDATE},
    weapon::Weapon,
};
use crate::{
    assets::Texture,
    math::Rect,
    samples::flight::Steering,
    signal::Signal,
    Context, KeyCode,
};

/// Ship moved with the arrow keys, carrying a weapon.
#[derive(Debug)]
pub struct Ship {
    /// Image of the ship.
    texture: Texture,
    /// Velocity.
    steering: Steering,
    /// Center of the ship.
    position: Vec2,
    /// Tells the weapon where the ship is.
    ship_signal: Signal<ShipData>,
    /// Weapon fired with space.
    weapon: Weapon,
}

impl Ship {
    /// Load the ship and its weapon, placing it in the lower part of the world.
    ///
    /// # Errors
    ///
    /// - When the ship or weapon images can't be loaded.
    pub(super) fn new(
        ctx: &Context,
        world_bounds: Rect,
        world_signal: &Signal<WorldData>,
        swap_signal: Signal<WeaponType>,
    ) -> Result<Self> {
        let texture = ctx.texture("ship")?;

        let ship_signal = Signal::new();
        let weapon = Weapon::new(ctx, &ship_signal, world_signal, swap_signal)?;

        let position = Vec2::new(
            world_bounds.width / 2.0,
            world_bounds.height - world_bounds.height / 4.0,
        );

        let ship = Self {
            texture,
            steering: Steering::default(),
            position,
            ship_signal,
            weapon,
        };

        // Let the weapon know where the ship starts
        ship.push_position();

        Ok(ship)
    }

    /// Center of the ship.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Weapon of the ship.
    #[must_use]
    pub const fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    /// Move, then fire or swap the weapon on key release.
    pub(super) fn update(&mut self, ctx: &Context) {
        self.position += self.steering.displacement(ctx);
        self.push_position();

        if ctx.key_released(KeyCode::Space) {
            self.weapon.fire();
        }
        if ctx.key_released(KeyCode::Tab) {
            self.weapon.swap_weapon();
        }

        self.weapon.update(ctx.delta_time());
    }

    /// Draw the bullets below the ship.
    pub(super) fn render(&self, ctx: &Context) {
        self.weapon.render(ctx);

        ctx.draw_texture(&self.texture)
            .translate(self.position)
            .draw();
    }

    /// Send the position and size to the weapon.
    fn push_position(&self) {
        self.ship_signal.push(
            &ShipData {
                position: self.position,
                size: self.texture.size(),
            },
            SHIP_UPDATE,
        );
    }
}
