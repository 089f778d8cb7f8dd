//! Source progress, inferred purely from what exists on disk
//!
//! There is no journal: the presence of the master audio file and of the
//! section directory is the whole state. A crash leaves exactly the artifacts
//! finished so far, and the next run picks up from them.

use super::layout::LibraryLayout;
use crate::model::Source;
use std::fmt;

/// The existence checks the pipeline's transitions are guarded by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artifacts {
    pub master_audio: bool,
    pub section_directory: bool,
}

impl Artifacts {
    /// Check the filesystem for a source's artifacts
    pub fn probe(layout: &LibraryLayout, source: &Source) -> Self {
        Self {
            master_audio: layout.master_audio_path(source).exists(),
            section_directory: layout.section_directory(source).exists(),
        }
    }

    /// Fetch and transcode are done (or were done and already consumed)
    pub fn already_fetched(&self) -> bool {
        self.master_audio || self.section_directory
    }

    /// Splitting has started
    ///
    /// Also true for a split that died halfway; see [`SourceState::Split`].
    pub fn already_split(&self) -> bool {
        self.section_directory
    }
}

/// Coarse, human-facing state of one source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceState {
    /// Nothing usable on disk yet
    Unstarted,

    /// Master audio present, waiting to be split
    Fetched,

    /// Source declares no sections; the master audio is the final artifact
    MasterKept,

    /// Section directory exists
    /// `present < expected` means an earlier split was interrupted
    Split { present: usize, expected: usize },
}

impl SourceState {
    /// Inspect a source without changing anything
    pub fn inspect(layout: &LibraryLayout, source: &Source) -> Self {
        let artifacts = Artifacts::probe(layout, source);

        if artifacts.already_split() {
            let present = source
                .sections
                .iter()
                .filter(|section| layout.section_file_path(source, section).is_file())
                .count();
            return SourceState::Split {
                present,
                expected: source.section_count(),
            };
        }

        match (artifacts.already_fetched(), source.sections.is_empty()) {
            (false, _) => SourceState::Unstarted,
            (true, true) => SourceState::MasterKept,
            (true, false) => SourceState::Fetched,
        }
    }

    /// Whether a sync would leave this source alone and it is fully built
    pub fn is_complete(&self) -> bool {
        match self {
            SourceState::MasterKept => true,
            SourceState::Split { present, expected } => present == expected,
            SourceState::Unstarted | SourceState::Fetched => false,
        }
    }
}

impl fmt::Display for SourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceState::Unstarted => write!(f, "not downloaded"),
            SourceState::Fetched => write!(f, "downloaded, not split"),
            SourceState::MasterKept => write!(f, "downloaded (no sections)"),
            SourceState::Split { present, expected } if present == expected => {
                write!(f, "split ({expected} sections)")
            }
            SourceState::Split { present, expected } => {
                write!(f, "partially split ({present}/{expected} sections present)")
            }
        }
    }
}
