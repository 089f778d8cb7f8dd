//! Main sync pipeline orchestration
//!
//! Per source, stages always run in this order:
//!
//! 1. fetch remote media to the raw path, transcode it to the master audio
//!    file, delete the raw file
//! 2. create the section directory, split and tag every section, delete the
//!    master audio file
//!
//! Each stage is skipped when [`Artifacts`] shows its output already exists,
//! so rerunning after a crash only does the remaining work. A stage's input
//! is never deleted before its own output is on disk.

use super::config::SyncConfig;
use super::layout::LibraryLayout;
use super::state::Artifacts;
use crate::artwork::CoverArt;
use crate::error::{display_chain, SyncError};
use crate::model::{Library, Source};
use crate::tools::{discard_partial, Fetcher, Tagger, TrackTags, Transcoder};
use std::fs;
use std::path::Path;

/// What a single source's run actually did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceOutcome {
    /// Fetch and transcode ran during this call
    pub downloaded: bool,
    /// Sections were split and tagged during this call
    pub split: bool,
}

impl SourceOutcome {
    /// Nothing was left to do
    pub fn is_noop(&self) -> bool {
        !self.downloaded && !self.split
    }
}

/// Result of syncing a whole library
#[derive(Debug, Default)]
pub struct SyncSummary {
    /// Sources that finished, with what each run did
    pub completed: Vec<(String, SourceOutcome)>,
    /// Failures collected when continuing past errors
    pub failures: Vec<SyncError>,
}

impl SyncSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Main sync pipeline
pub struct SyncPipeline<F: Fetcher, T: Transcoder, G: Tagger> {
    config: SyncConfig,
    layout: LibraryLayout,
    fetcher: F,
    transcoder: T,
    tagger: G,
}

impl<F: Fetcher, T: Transcoder, G: Tagger> SyncPipeline<F, T, G> {
    /// Create a new sync pipeline
    pub fn new(config: SyncConfig, fetcher: F, transcoder: T, tagger: G) -> Self {
        let layout = LibraryLayout::new(config.root.clone());

        Self {
            config,
            layout,
            fetcher,
            transcoder,
            tagger,
        }
    }

    pub fn layout(&self) -> &LibraryLayout {
        &self.layout
    }

    /// Sync every source in library order
    ///
    /// Stops at the first failing source unless `continue_on_error` is set,
    /// in which case failures are collected in the summary.
    pub fn sync(&self, library: &Library) -> Result<SyncSummary, SyncError> {
        log::info!(
            "Syncing {} source(s) into {:?}",
            library.source_count(),
            self.config.root
        );

        let mut summary = SyncSummary::default();

        for (i, source) in library.sources().iter().enumerate() {
            log::info!(
                "[{}/{}] Downloading '{}'",
                i + 1,
                library.source_count(),
                source.name
            );

            match self.sync_source(source) {
                Ok(outcome) => summary.completed.push((source.name.clone(), outcome)),
                Err(e) if self.config.continue_on_error => {
                    log::error!(
                        "Error while downloading '{}': {}",
                        source.name,
                        display_chain(&e)
                    );
                    summary.failures.push(e);
                }
                Err(e) => return Err(e),
            }
        }

        log::info!(
            "Sync finished: {} completed, {} failed",
            summary.completed.len(),
            summary.failures.len()
        );
        Ok(summary)
    }

    /// Bring one source from whatever is on disk to fully split and tagged
    pub fn sync_source(&self, source: &Source) -> Result<SourceOutcome, SyncError> {
        source.validate().map_err(|e| SyncError::Invalid {
            name: source.name.clone(),
            source: e,
        })?;

        let artifacts = Artifacts::probe(&self.layout, source);

        let downloaded = if artifacts.already_fetched() {
            log::info!("  Already Downloaded");
            false
        } else {
            self.acquire(source)?;
            true
        };

        if source.sections.is_empty() {
            log::info!("  No sections declared, keeping the whole file");
            return Ok(SourceOutcome {
                downloaded,
                split: false,
            });
        }

        log::info!("  Splitting '{}'", source.name);
        // A directory left by an interrupted split also lands here
        if artifacts.already_split() {
            log::info!("  Already Split");
            return Ok(SourceOutcome {
                downloaded,
                split: false,
            });
        }

        self.split_sections(source)?;
        self.remove_transient(source, &self.layout.master_audio_path(source))?;

        Ok(SourceOutcome {
            downloaded,
            split: true,
        })
    }

    /// Fetch, transcode, then drop the raw download
    fn acquire(&self, source: &Source) -> Result<(), SyncError> {
        let raw_path = self.layout.raw_media_path(source);
        let master_path = self.layout.master_audio_path(source);

        if let Some(parent) = raw_path.parent() {
            fs::create_dir_all(parent).map_err(|e| SyncError::Io {
                name: source.name.clone(),
                action: "create directory",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        log::debug!("Fetching {} to {:?}", source.url, raw_path);
        self.fetcher
            .fetch(&source.url, &raw_path)
            .map_err(|e| SyncError::Fetch {
                name: source.name.clone(),
                url: source.url.clone(),
                source: e,
            })?;

        log::debug!("Transcoding {:?} to {:?}", raw_path, master_path);
        self.transcoder
            .transcode(&raw_path, &master_path)
            .map_err(|e| {
                // A leftover master would count as fetched on the next run
                discard_partial(&master_path);
                SyncError::Transcode {
                    name: source.name.clone(),
                    source: e,
                }
            })?;

        self.remove_transient(source, &raw_path)
    }

    /// Split every section out of the master file and tag it
    ///
    /// Not resumable per section: a failure part way through leaves the
    /// directory and the sections written so far, and the next run treats
    /// the source as already split.
    fn split_sections(&self, source: &Source) -> Result<(), SyncError> {
        // Read before the directory exists so a missing cover cannot leave
        // an empty directory that looks split
        let cover_path = self.layout.cover_art_path(source);
        let cover = CoverArt::load(&cover_path).map_err(|e| SyncError::Io {
            name: source.name.clone(),
            action: "read cover art",
            path: cover_path.clone(),
            source: e,
        })?;

        let section_dir = self.layout.section_directory(source);
        fs::create_dir_all(&section_dir).map_err(|e| SyncError::Io {
            name: source.name.clone(),
            action: "create section directory",
            path: section_dir.clone(),
            source: e,
        })?;

        let master_path = self.layout.master_audio_path(source);
        let total = source.section_count();

        for (i, section) in source.sections.iter().enumerate() {
            let output = self.layout.section_file_path(source, section);
            log::debug!("  [{}/{}] {}", i + 1, total, section.name);

            self.transcoder
                .split(&master_path, &section.start, section.end.as_deref(), &output)
                .map_err(|e| SyncError::Split {
                    name: source.name.clone(),
                    section: section.name.clone(),
                    source: e,
                })?;

            let tags = TrackTags {
                title: &section.name,
                album: &source.name,
                artist: &source.artist,
                track_index: i + 1,
                track_total: total,
                cover: &cover,
            };
            self.tagger
                .tag(&output, &tags)
                .map_err(|e| SyncError::Tag {
                    name: source.name.clone(),
                    section: section.name.clone(),
                    source: e,
                })?;
        }

        Ok(())
    }

    /// Delete an intermediate file; failure is fatal like any other stage
    fn remove_transient(&self, source: &Source, path: &Path) -> Result<(), SyncError> {
        fs::remove_file(path).map_err(|e| SyncError::Cleanup {
            name: source.name.clone(),
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Removed {:?}", path);
        Ok(())
    }
}
