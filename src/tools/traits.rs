//! Capability traits the sync pipeline depends on

use crate::artwork::CoverArt;
use crate::error::ToolError;
use std::path::Path;

/// Downloads remote media
pub trait Fetcher {
    /// Fetch `url` into `dest`
    ///
    /// A cover image is written alongside as a side effect, named after
    /// `dest` with an image extension.
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), ToolError>;
}

/// Transcodes whole files and cuts time ranges out of them
pub trait Transcoder {
    /// Re-encode `src` into the standard audio format at `dest`
    fn transcode(&self, src: &Path, dest: &Path) -> Result<(), ToolError>;

    /// Copy the range `start..end` of `src` into `dest` without re-encoding
    ///
    /// `end` of None means "to the end of the media". Timestamps are passed
    /// through untouched, so the tool is the first to reject bad ones.
    fn split(&self, src: &Path, start: &str, end: Option<&str>, dest: &Path)
        -> Result<(), ToolError>;
}

/// Metadata stamped onto one split section
#[derive(Debug, Clone)]
pub struct TrackTags<'a> {
    pub title: &'a str,
    pub album: &'a str,
    pub artist: &'a str,
    /// 1-based position within the source
    pub track_index: usize,
    pub track_total: usize,
    pub cover: &'a CoverArt,
}

impl TrackTags<'_> {
    /// Track position in "N/M" form
    pub fn position(&self) -> String {
        format!("{}/{}", self.track_index, self.track_total)
    }
}

/// Rewrites embedded metadata in place
pub trait Tagger {
    fn tag(&self, path: &Path, tags: &TrackTags<'_>) -> Result<(), ToolError>;
}
