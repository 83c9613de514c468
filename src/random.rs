//! Generate random values.
//!
//! All functions take the random number generator of the game so a game can be seeded to behave the same every run.

use fastrand::Rng;
use rgb::RGBA8;

/// Generate a random opaque color.
///
/// Every channel lies in the range `0..255`.
///
/// # Arguments
///
/// * `rng` - Random number generator of the game.
#[inline]
#[must_use]
pub fn random_color(rng: &mut Rng) -> RGBA8 {
    let red = rng.u8(0..255);
    let green = rng.u8(0..255);
    let blue = rng.u8(0..255);

    RGBA8::new(red, green, blue, 255)
}

/// Flip a coin.
///
/// # Arguments
///
/// * `rng` - Random number generator of the game.
#[inline]
#[must_use]
pub fn coin_flip(rng: &mut Rng) -> bool {
    rng.bool()
}

#[cfg(test)]
mod tests {
    use fastrand::Rng;

    #[test]
    fn colors_are_opaque() {
        let mut rng = Rng::with_seed(42);

        for _ in 0..100 {
            assert_eq!(super::random_color(&mut rng).a, 255);
        }
    }

    #[test]
    fn seeded_colors_repeat() {
        let mut first = Rng::with_seed(7);
        let mut second = Rng::with_seed(7);

        assert_eq!(
            super::random_color(&mut first),
            super::random_color(&mut second)
        );
    }
}
