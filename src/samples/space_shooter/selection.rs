//! Indicator of the selected weapon.

use std::{cell::Cell, rc::Rc};

use glam::Vec2;
use miette::Result;

use super::signals::{WeaponType, SWAP_WEAPON};
use crate::{
    assets::Texture,
    signal::{Signal, Subscription},
    Context,
};

/// Row of weapon icons with a reticle around the selected one.
#[derive(Debug)]
pub struct WeaponSelection {
    /// Image drawn around the selected icon.
    reticle: Texture,
    /// Image of a single weapon icon.
    icon: Texture,
    /// Center of the row.
    position: Vec2,
    /// Centers of the icons in the order of [`WeaponType::ALL`].
    icon_positions: [Vec2; 4],
    /// Selected weapon, updated by the swap signal.
    weapon_type: Rc<Cell<WeaponType>>,
    /// Kept alive to keep receiving weapon swaps.
    _subscription: Subscription,
}

impl WeaponSelection {
    /// Load the images and listen for weapon swaps.
    ///
    /// # Errors
    ///
    /// - When the images can't be loaded.
    pub(super) fn new(ctx: &Context, swap_signal: &Signal<WeaponType>) -> Result<Self> {
        let reticle = ctx.texture("weapon-selection")?;
        let icon = ctx.texture("laser")?;

        let weapon_type = Rc::new(Cell::new(WeaponType::default()));
        let subscription = {
            let weapon_type = Rc::clone(&weapon_type);
            swap_signal.subscribe(SWAP_WEAPON, move |swapped: &WeaponType| {
                weapon_type.set(*swapped);
            })
        };

        let mut selection = Self {
            reticle,
            icon,
            position: Vec2::ZERO,
            icon_positions: [Vec2::ZERO; 4],
            weapon_type,
            _subscription: subscription,
        };
        selection.place(ctx.size());

        Ok(selection)
    }

    /// Selected weapon.
    #[must_use]
    pub fn weapon_type(&self) -> WeaponType {
        self.weapon_type.get()
    }

    /// Center of an icon.
    #[must_use]
    pub fn icon_position(&self, weapon_type: WeaponType) -> Vec2 {
        self.icon_positions[weapon_type as usize]
    }

    /// Center the row at the bottom of the window.
    pub(super) fn place(&mut self, window_size: Vec2) {
        self.position = Vec2::new(window_size.x / 2.0, window_size.y - self.reticle.height());

        // Red and green surround the center, white and blue are on the outside
        let half_width = self.reticle.width() / 2.0;
        let red_x = self.position.x - half_width;
        let white_x = red_x - half_width;
        let green_x = self.position.x + half_width;
        let blue_x = green_x + half_width;

        self.icon_positions =
            [white_x, red_x, green_x, blue_x].map(|x| Vec2::new(x, self.position.y));
    }

    /// Draw every icon in its weapon color with the reticle over the selected one.
    pub(super) fn render(&self, ctx: &Context) {
        for (weapon_type, position) in WeaponType::ALL.into_iter().zip(self.icon_positions) {
            ctx.draw_texture(&self.icon)
                .translate(position)
                .tint(weapon_type.color())
                .layer(1)
                .draw();
        }

        ctx.draw_texture(&self.reticle)
            .translate(self.icon_position(self.weapon_type()))
            .layer(1)
            .draw();
    }
}
