//! Data sent between the parts of the space shooter.

use glam::Vec2;
use rgb::RGBA8;

use crate::{color, math::Rect, signal::SignalId};

/// The ship moved.
pub const SHIP_UPDATE: SignalId = SignalId::from_u128(0x6c1f_31a2_58d4_4f0e_9b7a_2d35_c4e8_1f01);
/// The size of the world changed.
pub const WORLD_DATA_UPDATE: SignalId =
    SignalId::from_u128(0x6c1f_31a2_58d4_4f0e_9b7a_2d35_c4e8_1f02);
/// A different weapon is selected.
pub const SWAP_WEAPON: SignalId = SignalId::from_u128(0x6c1f_31a2_58d4_4f0e_9b7a_2d35_c4e8_1f03);

/// Where the ship is.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ShipData {
    /// Center of the ship.
    pub position: Vec2,
    /// Size of the ship image.
    pub size: Vec2,
}

/// Area the game takes place in.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WorldData {
    /// Everything visible.
    pub bounds: Rect,
}

/// Kind of weapon, only differs in the color of its bullets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WeaponType {
    /// First weapon.
    #[default]
    White,
    /// Second weapon.
    Red,
    /// Third weapon.
    Green,
    /// Fourth weapon.
    Blue,
}

impl WeaponType {
    /// All weapons in the order they are selected.
    pub const ALL: [Self; 4] = [Self::White, Self::Red, Self::Green, Self::Blue];

    /// Weapon selected after this one, the last one wraps around to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::White => Self::Red,
            Self::Red => Self::Green,
            Self::Green => Self::Blue,
            Self::Blue => Self::White,
        }
    }

    /// Color of the bullets and icon.
    #[must_use]
    pub const fn color(self) -> RGBA8 {
        match self {
            Self::White => color::WHITE,
            Self::Red => color::RED,
            Self::Green => color::GREEN,
            Self::Blue => color::BLUE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WeaponType;

    #[test]
    fn swapping_wraps_around() {
        let mut weapon = WeaponType::default();
        for expected in WeaponType::ALL.into_iter().cycle().skip(1).take(5) {
            weapon = weapon.next();
            assert_eq!(weapon, expected);
        }
    }
}
