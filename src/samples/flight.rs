//! Ship movement shared by the samples flying a ship.

use glam::Vec2;

use crate::{Context, KeyCode};

/// Velocity added every tick an arrow key is held.
const ACCELERATION: f32 = 50.0;
/// Maximum speed on a single axis.
const MAX_VELOCITY: f32 = 350.0;
/// Projectiles spawn this amount of pixels lower than right above the ship.
const MUZZLE_OFFSET: f32 = 15.0;
/// Vertical speed of fired projectiles, upwards.
pub(crate) const PROJECTILE_VELOCITY: Vec2 = Vec2::new(0.0, -400.0);

/// Arrow key controlled velocity.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct Steering {
    /// Pixels per second.
    velocity: Vec2,
}

impl Steering {
    /// Accelerate with the held arrow keys and return how far the ship moves this tick.
    ///
    /// An axis stops immediately when neither of its keys is held.
    pub(crate) fn displacement(&mut self, ctx: &Context) -> Vec2 {
        let left = ctx.key_held(KeyCode::ArrowLeft);
        let right = ctx.key_held(KeyCode::ArrowRight);
        let up = ctx.key_held(KeyCode::ArrowUp);
        let down = ctx.key_held(KeyCode::ArrowDown);

        if left {
            self.velocity.x -= ACCELERATION;
        }
        if right {
            self.velocity.x += ACCELERATION;
        }
        if up {
            self.velocity.y -= ACCELERATION;
        }
        if down {
            self.velocity.y += ACCELERATION;
        }

        if !left && !right {
            self.velocity.x = 0.0;
        }
        if !up && !down {
            self.velocity.y = 0.0;
        }

        self.velocity = self
            .velocity
            .clamp(Vec2::splat(-MAX_VELOCITY), Vec2::splat(MAX_VELOCITY));

        self.velocity * ctx.delta_time()
    }

    /// Current velocity in pixels per second.
    pub(crate) const fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

/// Where a projectile fired from the ship starts, centered horizontally right above the ship.
pub(crate) fn muzzle_position(ship_position: Vec2, ship_size: Vec2, projectile_height: f32) -> Vec2 {
    let ship_top = ship_position.y - ship_size.y / 2.0;

    Vec2::new(
        ship_position.x,
        ship_top - projectile_height / 2.0 + MUZZLE_OFFSET,
    )
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::{muzzle_position, Steering};
    use crate::{AssetSource, Config, Context, Game, KeyCode, Runtime};

    /// Game that only steers.
    #[derive(Default)]
    struct Steer(Steering);

    impl Game for Steer {
        fn update(&mut self, ctx: Context) {
            self.0.displacement(&ctx);
        }

        fn render(&mut self, _ctx: Context) {}
    }

    #[test]
    fn velocity_is_clamped_and_stops() {
        let mut runtime =
            Runtime::new(Steer::default(), AssetSource::new(), Config::default()).unwrap();

        runtime.key_down(KeyCode::ArrowRight);
        runtime.step();
        assert_eq!(runtime.game().0.velocity(), Vec2::new(50.0, 0.0));

        for _ in 0..10 {
            runtime.step();
        }
        assert_eq!(runtime.game().0.velocity(), Vec2::new(350.0, 0.0));

        runtime.key_up(KeyCode::ArrowRight);
        runtime.step();
        assert_eq!(runtime.game().0.velocity(), Vec2::ZERO);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut runtime =
            Runtime::new(Steer::default(), AssetSource::new(), Config::default()).unwrap();

        runtime.key_down(KeyCode::ArrowUp);
        runtime.key_down(KeyCode::ArrowDown);
        runtime.step();

        assert_eq!(runtime.game().0.velocity(), Vec2::ZERO);
    }

    #[test]
    fn muzzle_is_above_ship() {
        assert_eq!(
            muzzle_position(Vec2::new(100.0, 200.0), Vec2::new(40.0, 60.0), 20.0),
            Vec2::new(100.0, 200.0 - 30.0 - 10.0 + 15.0)
        );
    }
}
