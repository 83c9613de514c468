//! Ship, weapon and weapon selection UI talking through signals.
//!
//! None of the parts know about each other:
//!
//! | Signal | Pushed by | Received by |
//! | --- | --- | --- |
//! | [`signals::SHIP_UPDATE`] | [`Ship`] after moving | [`Weapon`], to fire from the ship |
//! | [`signals::WORLD_DATA_UPDATE`] | [`SpaceShooter`] on load and resize | [`Weapon`], to bound new bullets |
//! | [`signals::SWAP_WEAPON`] | [`Weapon`] when swapping | [`WeaponSelection`], to move the reticle |

mod bullet;
mod selection;
mod ship;
pub mod signals;
mod weapon;

use glam::Vec2;
use miette::Result;

pub use self::{bullet::Bullet, selection::WeaponSelection, ship::Ship, weapon::Weapon};
use self::signals::{WeaponType, WorldData, WORLD_DATA_UPDATE};
use crate::{math::Rect, signal::Signal, Config, Context, Game};

/// Shoot bullets with space, change the weapon with tab.
#[derive(Debug, Default)]
pub struct SpaceShooter {
    /// Tells the weapon how big the world is.
    world_signal: Signal<WorldData>,
    /// Tells the UI the weapon changed.
    swap_signal: Signal<WeaponType>,
    /// Player.
    ship: Option<Ship>,
    /// UI.
    selection: Option<WeaponSelection>,
}

impl SpaceShooter {
    /// Window settings.
    #[must_use]
    pub fn config() -> Config {
        Config::default()
            .with_title("Space Shooter")
            .with_square_buffer()
    }

    /// Player, available after loading.
    #[must_use]
    pub const fn ship(&self) -> Option<&Ship> {
        self.ship.as_ref()
    }

    /// UI, available after loading.
    #[must_use]
    pub const fn selection(&self) -> Option<&WeaponSelection> {
        self.selection.as_ref()
    }

    /// Tell everyone listening how big the world is.
    fn push_world_data(&self, ctx: &Context) {
        let size = ctx.size();

        self.world_signal.push(
            &WorldData {
                bounds: Rect::from_size(size.x, size.y),
            },
            WORLD_DATA_UPDATE,
        );
    }
}

impl Game for SpaceShooter {
    fn load(&mut self, ctx: Context) -> Result<()> {
        let size = ctx.size();

        self.selection = Some(WeaponSelection::new(&ctx, &self.swap_signal)?);
        self.ship = Some(Ship::new(
            &ctx,
            Rect::from_size(size.x, size.y),
            &self.world_signal,
            self.swap_signal.clone(),
        )?);

        self.push_world_data(&ctx);

        Ok(())
    }

    fn update(&mut self, ctx: Context) {
        if let Some(ship) = &mut self.ship {
            ship.update(&ctx);
        }
    }

    fn render(&mut self, ctx: Context) {
        if let Some(ship) = &self.ship {
            ship.render(&ctx);
        }
        if let Some(selection) = &self.selection {
            selection.render(&ctx);
        }
    }

    fn resize(&mut self, ctx: Context, width: f32, height: f32) {
        self.push_world_data(&ctx);

        if let Some(selection) = &mut self.selection {
            selection.place(Vec2::new(width, height));
        }
    }
}
