//! External tool adapters
//!
//! The pipeline only sees the capability traits ([`Fetcher`], [`Transcoder`],
//! [`Tagger`]); the concrete adapters shell out to `youtube-dl` and `ffmpeg`
//! and write ID3 tags in-process. Every call is synchronous and either
//! succeeds or fails as a whole.

mod command;
mod ffmpeg;
mod tagger;
mod traits;
mod youtube_dl;

pub use command::ToolCommand;
pub use ffmpeg::{AudioSettings, Ffmpeg};
pub use tagger::Id3Tagger;
pub use traits::{Fetcher, Tagger, TrackTags, Transcoder};
pub use youtube_dl::{YoutubeDl, RAW_AUDIO_FORMAT};

use std::path::Path;

/// Remove whatever a failed tool invocation left at `path`
///
/// A leftover output would be mistaken for a finished artifact on the next
/// run, so this is attempted after every failed write.
pub(crate) fn discard_partial(path: &Path) {
    if !path.exists() {
        return;
    }
    match std::fs::remove_file(path) {
        Ok(()) => log::debug!("Removed partial output {:?}", path),
        Err(e) => log::warn!("Failed to remove partial output {:?}: {}", path, e),
    }
}
