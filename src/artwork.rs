//! Cover art loading for section tagging
//!
//! The fetcher drops a thumbnail next to the downloaded media. We read it
//! once per source and embed the same bytes in every section.

use std::fs;
use std::io;
use std::path::Path;

/// Fallback when the image format cannot be recognised
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// Cover image bytes plus the MIME type to declare in the tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverArt {
    /// Raw image bytes, embedded unchanged
    pub data: Vec<u8>,
    /// MIME type of the image
    pub mime_type: String,
}

impl CoverArt {
    /// Wrap image bytes, sniffing the MIME type from the magic number
    pub fn from_bytes(data: Vec<u8>) -> Self {
        let mime_type = image::guess_format(&data)
            .map(|format| format.to_mime_type().to_string())
            .unwrap_or_else(|_| DEFAULT_MIME_TYPE.to_string());

        Self { data, mime_type }
    }

    /// Read a cover image from disk
    pub fn load(path: &Path) -> io::Result<Self> {
        let data = fs::read(path)?;
        let art = Self::from_bytes(data);
        log::debug!(
            "Loaded cover art {:?} ({} bytes, {})",
            path,
            art.data.len(),
            art.mime_type
        );
        Ok(art)
    }
}
