//! Types for loading and caching assets.
//!
//! All asset IDs use a `.` symbol instead of a path separator and exclude extensions, here's a list of examples how assets are converted:
//!
//! | Example call | Path(s) on disk |
//! | --- | --- |
//! | `ctx.texture("ship")` | `assets/ship.png` |
//! | `ctx.texture("ui.reticle")` | `assets/ui/reticle.png` |
//! | `ctx.atlas("atlas")` | `assets/atlas.png` & `assets/atlas.toml` |
//! | `ctx.font("font")` | `assets/font.png` & `assets/font.toml` |
//! | `ctx.music("song")` | `assets/song.ogg` or `assets/song.wav` |

mod atlas;
mod font;
pub mod loader;
mod sound;
pub mod source;
mod texture;

use std::any::TypeId;

use downcast_rs::Downcast;
use hashbrown::HashMap;
use miette::Result;
use smol_str::SmolStr;

pub use self::{
    atlas::{Atlas, AtlasFrame},
    font::Font,
    sound::Sound,
    texture::Texture,
};
use self::source::AssetSource;

/// Identifier of an asset, the path relative to the asset directory with `.` as separator and without extension.
pub type Id = SmolStr;

/// Any asset that's loadable from any amount of files in an [`AssetSource`].
///
/// # Example
///
/// ```
/// use arcade_samples::assets::{loader::toml::TomlLoader, source::AssetSource, Id, Loadable};
/// use serde::Deserialize;
///
/// /// We define a custom settings object that will be loaded from a '.toml' file.
/// #[derive(Clone, Deserialize)]
/// struct Settings {
///     lives: u8,
/// }
///
/// impl Loadable for Settings {
///     fn load_if_exists(id: &Id, source: &AssetSource) -> miette::Result<Option<Self>> {
///         // Use the TOML loader to load our asset
///         source.load_if_exists::<TomlLoader, _>(id)
///     }
/// }
/// ```
pub trait Loadable: Downcast {
    /// Convert the files of an asset to this type if they exist, if they don't return `None`.
    ///
    /// # Errors
    ///
    /// - When the files exist but their contents can't be parsed into the type.
    fn load_if_exists(id: &Id, source: &AssetSource) -> Result<Option<Self>>
    where
        Self: Sized;

    /// Convert the files of an asset to this type.
    ///
    /// # Errors
    ///
    /// - When the files exist but their contents can't be parsed into the type.
    /// - When the asset does not exist in the source.
    #[inline]
    fn load(id: &Id, source: &AssetSource) -> Result<Self>
    where
        Self: Sized,
    {
        Self::load_if_exists(id, source)?
            .ok_or_else(|| miette::miette!("Error loading asset: '{id}' does not exist"))
    }
}
downcast_rs::impl_downcast!(Loadable);

/// Cache of every loaded asset.
pub(crate) struct AssetManager {
    /// Where the assets are read from.
    source: AssetSource,
    /// Loaded assets, keyed by their type and ID.
    ///
    /// The type is part of the key because different assets can share the same files.
    cache: HashMap<(TypeId, Id), Box<dyn Loadable>>,
}

impl AssetManager {
    /// Create an empty cache on top of a source.
    pub(crate) fn new(source: AssetSource) -> Self {
        let cache = HashMap::new();

        Self { source, cache }
    }

    /// Get an asset from the cache, loading it from the source when it's not cached yet.
    ///
    /// # Errors
    ///
    /// - When the asset doesn't exist or can't be parsed.
    pub(crate) fn get_or_load<T>(&mut self, id: &str) -> Result<T>
    where
        T: Loadable + Clone,
    {
        let key = (TypeId::of::<T>(), Id::new(id));

        if let Some(asset) = self
            .cache
            .get(&key)
            .and_then(|asset| asset.downcast_ref::<T>())
        {
            return Ok(asset.clone());
        }

        let asset = T::load(&key.1, &self.source)?;
        self.cache.insert(key, Box::new(asset.clone()));

        Ok(asset)
    }

    /// Amount of assets loaded.
    pub(crate) fn len(&self) -> usize {
        self.cache.len()
    }
}
