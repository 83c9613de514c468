//! Named colors for tinting textures and text.

use rgb::RGBA8;

/// Opaque white, draws textures unchanged.
pub const WHITE: RGBA8 = RGBA8::new(255, 255, 255, 255);

/// Opaque orange.
pub const ORANGE: RGBA8 = RGBA8::new(255, 165, 0, 255);

/// Opaque red.
pub const RED: RGBA8 = RGBA8::new(255, 0, 0, 255);

/// Opaque green.
pub const GREEN: RGBA8 = RGBA8::new(0, 128, 0, 255);

/// Opaque blue.
pub const BLUE: RGBA8 = RGBA8::new(0, 0, 255, 255);
