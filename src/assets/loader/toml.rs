//! TOML asset loading.

use miette::{IntoDiagnostic, Result, WrapErr};
use serde::de::DeserializeOwned;

use super::Loader;
use crate::assets::Id;

/// TOML asset loader, deserializes into any type.
#[non_exhaustive]
pub struct TomlLoader;

impl<T> Loader<T> for TomlLoader
where
    T: DeserializeOwned,
{
    const EXTENSION: &'static str = "toml";

    #[inline]
    fn load(bytes: &[u8], id: &Id) -> Result<T> {
        // Convert raw bytes to a valid UTF-8 string
        let string = std::str::from_utf8(bytes)
            .into_diagnostic()
            .wrap_err_with(|| format!("Error parsing TOML of asset '{id}' due to invalid UTF-8"))?;

        toml::from_str::<T>(string)
            .into_diagnostic()
            .wrap_err_with(|| format!("Error parsing TOML of asset '{id}'"))
    }
}
