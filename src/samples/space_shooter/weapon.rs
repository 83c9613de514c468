//! Weapon firing bullets from the ship.

use std::{cell::Cell, rc::Rc};

use miette::Result;

use super::{
    bullet::Bullet,
    signals::{ShipData, WeaponType, WorldData, SHIP_UPDATE, SWAP_WEAPON, WORLD_DATA_UPDATE},
};
use crate::{
    assets::Texture,
    math::Rect,
    pool::Pool,
    samples::flight,
    signal::{Signal, Subscription},
    Context,
};

/// Fires bullets from wherever the ship last reported to be.
#[derive(Debug)]
pub struct Weapon {
    /// Image of a bullet.
    texture: Texture,
    /// Every bullet ever fired.
    bullets: Pool<Bullet>,
    /// Currently selected weapon.
    weapon_type: WeaponType,
    /// Last known ship position and size.
    ship: Rc<Cell<ShipData>>,
    /// Last known world bounds.
    world_bounds: Rc<Cell<Rect>>,
    /// Notifies the UI of weapon changes.
    swap_signal: Signal<WeaponType>,
    /// Kept alive to keep receiving ship and world updates.
    _subscriptions: [Subscription; 2],
}

impl Weapon {
    /// Load the bullet image and listen to the ship and the world.
    ///
    /// # Errors
    ///
    /// - When the bullet image can't be loaded.
    pub(super) fn new(
        ctx: &Context,
        ship_signal: &Signal<ShipData>,
        world_signal: &Signal<WorldData>,
        swap_signal: Signal<WeaponType>,
    ) -> Result<Self> {
        let texture = ctx.texture("laser")?;

        let ship = Rc::new(Cell::new(ShipData::default()));
        let ship_subscription = {
            let ship = Rc::clone(&ship);
            ship_signal.subscribe(SHIP_UPDATE, move |data: &ShipData| ship.set(*data))
        };

        let world_bounds = Rc::new(Cell::new(Rect::default()));
        let world_subscription = {
            let world_bounds = Rc::clone(&world_bounds);
            world_signal.subscribe(WORLD_DATA_UPDATE, move |data: &WorldData| {
                world_bounds.set(data.bounds);
            })
        };

        Ok(Self {
            texture,
            bullets: Pool::new(),
            weapon_type: WeaponType::default(),
            ship,
            world_bounds,
            swap_signal,
            _subscriptions: [ship_subscription, world_subscription],
        })
    }

    /// Currently selected weapon.
    #[must_use]
    pub const fn weapon_type(&self) -> WeaponType {
        self.weapon_type
    }

    /// Every bullet in the pool, including the ones not visible.
    #[must_use]
    pub const fn bullets(&self) -> &Pool<Bullet> {
        &self.bullets
    }

    /// Fire a bullet from the top of the ship, reusing a hidden bullet when possible.
    pub fn fire(&mut self) {
        let ship = self.ship.get();
        let position = flight::muzzle_position(ship.position, ship.size, self.texture.height());

        let world_bounds = self.world_bounds.get();
        let size = self.texture.size();
        self.bullets
            .acquire_with(|| Bullet::new(world_bounds, size))
            .fire(position, self.weapon_type.color());
    }

    /// Select the next weapon and tell everyone listening.
    pub fn swap_weapon(&mut self) {
        self.weapon_type = self.weapon_type.next();

        log::debug!("Swapped to the {:?} weapon", self.weapon_type);

        self.swap_signal.push(&self.weapon_type, SWAP_WEAPON);
    }

    /// Move all bullets.
    pub(super) fn update(&mut self, delta_time: f32) {
        self.bullets
            .iter_mut()
            .for_each(|bullet| bullet.update(delta_time));
    }

    /// Draw all visible bullets.
    pub(super) fn render(&self, ctx: &Context) {
        for bullet in self.bullets.active() {
            ctx.draw_texture(&self.texture)
                .translate(bullet.position())
                .tint(bullet.tint())
                .draw();
        }
    }
}
