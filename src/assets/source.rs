//! Where assets are retrieved from.

use std::{
    borrow::Cow,
    io::ErrorKind,
    path::{PathBuf, MAIN_SEPARATOR_STR},
};

use miette::{IntoDiagnostic, Result, WrapErr};

use super::{loader::Loader, Id};

/// Source of all assets.
///
/// Assets added in memory take precedence over the same assets on disk.
#[derive(Debug, Default)]
pub struct AssetSource {
    /// Path to the directory of all assets.
    runtime_asset_dir: Option<PathBuf>,
    /// Assets kept in memory.
    embedded_assets: Vec<EmbeddedRawAsset>,
}

impl AssetSource {
    /// Create a source without any assets.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source loading all assets from a directory on disk.
    #[inline]
    #[must_use]
    pub fn from_dir(runtime_asset_dir: impl Into<PathBuf>) -> Self {
        Self::new().with_runtime_dir(runtime_asset_dir)
    }

    /// Set a runtime asset directory where assets can be loaded from.
    #[inline]
    #[must_use]
    pub fn with_runtime_dir(mut self, runtime_asset_dir: impl Into<PathBuf>) -> Self {
        self.runtime_asset_dir = Some(runtime_asset_dir.into());

        self
    }

    /// Keep a raw asset in memory.
    ///
    /// # Arguments
    ///
    /// * `id` - ID of the asset, see [`crate::assets`] for how IDs map to paths.
    /// * `extension` - File extension without the leading `'.'`.
    /// * `bytes` - Contents of the file.
    #[inline]
    #[must_use]
    pub fn with_embedded_asset(
        mut self,
        id: &str,
        extension: &str,
        bytes: impl Into<Cow<'static, [u8]>>,
    ) -> Self {
        self.embedded_assets.push(EmbeddedRawAsset {
            id: Id::new(id),
            extension: Id::new(extension),
            bytes: bytes.into(),
        });

        self
    }

    /// Load a new asset based on the loader.
    ///
    /// # Errors
    ///
    /// - When the file exists but can't be read.
    /// - When the loader fails parsing the bytes.
    pub fn load_if_exists<L, T>(&self, id: &Id) -> Result<Option<T>>
    where
        L: Loader<T>,
    {
        // First try to read from memory
        if let Some(raw_asset) = self
            .embedded_assets
            .iter()
            .find(|raw_asset| &raw_asset.id == id && raw_asset.extension.as_str() == L::EXTENSION)
        {
            return L::load(&raw_asset.bytes, id).map(Some);
        }

        // If not found load from disk if dir set
        let Some(runtime_asset_dir) = &self.runtime_asset_dir else {
            return Ok(None);
        };

        // Convert ID back to file
        let file_path = runtime_asset_dir.join(format!(
            "{}.{}",
            id.replace('.', MAIN_SEPARATOR_STR),
            L::EXTENSION
        ));

        let bytes = match std::fs::read(&file_path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).into_diagnostic().wrap_err_with(|| {
                    format!("Error reading asset file '{}'", file_path.display())
                })
            }
        };

        log::debug!(
            "Loaded part of asset '{id}' with extension '{}' from disk",
            L::EXTENSION
        );

        L::load(&bytes, id).map(Some)
    }
}

/// Single asset kept in memory.
#[derive(Debug, Clone)]
struct EmbeddedRawAsset {
    /// Parsed ID, excludes the file extension.
    id: Id,
    /// File extension excluding the first `'.'`.
    extension: Id,
    /// Raw bytes of the asset.
    bytes: Cow<'static, [u8]>,
}

#[cfg(test)]
mod tests {
    use miette::Result;

    use super::AssetSource;
    use crate::assets::{loader::Loader, Id};

    /// Loader returning the bytes as a string.
    struct TextLoader;

    impl Loader<String> for TextLoader {
        const EXTENSION: &'static str = "txt";

        fn load(bytes: &[u8], _id: &Id) -> Result<String> {
            Ok(String::from_utf8_lossy(bytes).into_owned())
        }
    }

    #[test]
    fn embedded_asset_is_found() {
        let source = AssetSource::new().with_embedded_asset("greeting", "txt", b"hi".as_slice());

        assert_eq!(
            source
                .load_if_exists::<TextLoader, _>(&Id::new("greeting"))
                .unwrap(),
            Some("hi".to_owned())
        );
    }

    #[test]
    fn extension_must_match() {
        let source = AssetSource::new().with_embedded_asset("greeting", "md", b"hi".as_slice());

        assert_eq!(
            source
                .load_if_exists::<TextLoader, _>(&Id::new("greeting"))
                .unwrap(),
            None
        );
    }

    #[test]
    fn missing_file_on_disk_is_none() {
        let source = AssetSource::from_dir(std::env::temp_dir().join("arcade-samples-missing"));

        assert_eq!(
            source
                .load_if_exists::<TextLoader, _>(&Id::new("nested.greeting"))
                .unwrap(),
            None
        );
    }
}
