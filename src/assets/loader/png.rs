//! PNG asset loading.

use std::io::Cursor;

use miette::{IntoDiagnostic, Result, WrapErr};
use png::Decoder;

use super::Loader;
use crate::assets::Id;

/// PNG asset loader.
///
/// Only reads the header, the pixels are uploaded by the platform.
/// Loader type returned is `(width, height)`.
#[non_exhaustive]
pub struct PngLoader;

impl Loader<(u32, u32)> for PngLoader {
    const EXTENSION: &'static str = "png";

    #[inline]
    fn load(bytes: &[u8], id: &Id) -> Result<(u32, u32)> {
        // Decode the PNG
        let mut decoder = Decoder::new(Cursor::new(bytes));

        // Discard text chunks
        decoder.set_ignore_text_chunk(true);
        // Make it faster by not checking if it's correct
        decoder.ignore_checksums(true);

        // Start parsing the PNG
        let reader = decoder
            .read_info()
            .into_diagnostic()
            .wrap_err_with(|| format!("Error decoding PNG of asset '{id}'"))?;

        let info = reader.info();
        if info.width == 0 || info.height == 0 {
            miette::bail!("PNG of asset '{id}' has no pixels");
        }

        Ok((info.width, info.height))
    }
}
