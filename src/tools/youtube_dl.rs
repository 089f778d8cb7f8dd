//! Remote media fetcher backed by youtube-dl (or a compatible fork)

use super::command::ToolCommand;
use super::discard_partial;
use super::traits::Fetcher;
use crate::error::ToolError;
use std::ffi::OsString;
use std::path::Path;

/// Container requested from the extractor; must match the raw media path
pub const RAW_AUDIO_FORMAT: &str = "m4a";

/// Fetches audio plus thumbnails with youtube-dl
pub struct YoutubeDl {
    command: ToolCommand,
}

impl YoutubeDl {
    pub fn new(command: ToolCommand) -> Self {
        Self { command }
    }

    /// Find the binary on PATH (`youtube-dl`, `yt-dlp`, ...)
    pub fn locate(name: &str) -> Result<Self, ToolError> {
        ToolCommand::locate(name).map(Self::new)
    }
}

/// Arguments for extracting audio from `url` into `dest`
pub(crate) fn fetch_args(url: &str, dest: &Path) -> Vec<OsString> {
    vec![
        url.into(),
        "-x".into(),
        "--write-all-thumbnails".into(),
        "--audio-format".into(),
        RAW_AUDIO_FORMAT.into(),
        "-o".into(),
        dest.as_os_str().to_owned(),
    ]
}

impl Fetcher for YoutubeDl {
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), ToolError> {
        if let Err(e) = self.command.run(fetch_args(url, dest)) {
            discard_partial(dest);
            return Err(e);
        }

        Ok(())
    }
}
