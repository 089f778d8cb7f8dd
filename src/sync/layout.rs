//! Where each source's artifacts live under the library root

use crate::model::{Section, Source};
use std::path::PathBuf;

/// Extension of the as-fetched media
pub const RAW_EXTENSION: &str = crate::tools::RAW_AUDIO_FORMAT;

/// Extension of the transcoded master and of every section file
pub const AUDIO_EXTENSION: &str = "mp3";

/// Extension of the cover image written by the fetcher
pub const COVER_EXTENSION: &str = "jpg";

/// Maps sources and sections to paths under a library root
///
/// For a source named `Demo` at `a/`:
/// - `a/Demo.m4a` raw download (transient)
/// - `a/Demo.mp3` master audio (transient)
/// - `a/Demo.jpg` cover art (kept)
/// - `a/Demo/<section>.mp3` one file per section
#[derive(Debug, Clone)]
pub struct LibraryLayout {
    root: PathBuf,
}

impl LibraryLayout {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Directory holding the source's transient files and cover
    fn parent_dir(&self, source: &Source) -> PathBuf {
        // A leading slash must not escape the root
        self.root.join(source.path.trim_start_matches('/'))
    }

    fn sibling(&self, source: &Source, extension: &str) -> PathBuf {
        self.parent_dir(source)
            .join(format!("{}.{}", source.name, extension))
    }

    /// Path the fetcher downloads to
    pub fn raw_media_path(&self, source: &Source) -> PathBuf {
        self.sibling(source, RAW_EXTENSION)
    }

    /// Path of the whole-source transcoded audio
    pub fn master_audio_path(&self, source: &Source) -> PathBuf {
        self.sibling(source, AUDIO_EXTENSION)
    }

    /// Path of the cover image
    pub fn cover_art_path(&self, source: &Source) -> PathBuf {
        self.sibling(source, COVER_EXTENSION)
    }

    /// Directory holding the split sections
    pub fn section_directory(&self, source: &Source) -> PathBuf {
        self.parent_dir(source).join(&source.name)
    }

    /// Final path of one section
    pub fn section_file_path(&self, source: &Source, section: &Section) -> PathBuf {
        self.section_directory(source)
            .join(format!("{}.{}", section.name, AUDIO_EXTENSION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo(path: &str) -> Source {
        Source {
            name: "Demo".to_string(),
            artist: "X".to_string(),
            path: path.to_string(),
            url: "u".to_string(),
            sections: vec![Section::new("One", "0:00", None)],
        }
    }

    #[test]
    fn test_paths() {
        let layout = LibraryLayout::new(PathBuf::from("/lib"));
        let source = demo("a/");

        assert_eq!(layout.raw_media_path(&source), PathBuf::from("/lib/a/Demo.m4a"));
        assert_eq!(layout.master_audio_path(&source), PathBuf::from("/lib/a/Demo.mp3"));
        assert_eq!(layout.cover_art_path(&source), PathBuf::from("/lib/a/Demo.jpg"));
        assert_eq!(layout.section_directory(&source), PathBuf::from("/lib/a/Demo"));
        assert_eq!(
            layout.section_file_path(&source, &source.sections[0]),
            PathBuf::from("/lib/a/Demo/One.mp3")
        );
    }

    #[test]
    fn test_empty_and_nested_paths() {
        let layout = LibraryLayout::new(PathBuf::from("/lib"));

        assert_eq!(
            layout.master_audio_path(&demo("")),
            PathBuf::from("/lib/Demo.mp3")
        );
        assert_eq!(
            layout.section_directory(&demo("vapor/chirpy")),
            PathBuf::from("/lib/vapor/chirpy/Demo")
        );
    }

    #[test]
    fn test_leading_slash_stays_under_root() {
        let layout = LibraryLayout::new(PathBuf::from("/lib"));
        assert_eq!(
            layout.master_audio_path(&demo("/abs/")),
            PathBuf::from("/lib/abs/Demo.mp3")
        );
    }

    #[test]
    fn test_dotted_names_keep_their_dots() {
        let layout = LibraryLayout::new(PathBuf::from("/lib"));
        let mut source = demo("a");
        source.name = "Vol. 2".to_string();
        assert_eq!(
            layout.master_audio_path(&source),
            PathBuf::from("/lib/a/Vol. 2.mp3")
        );
    }

    #[test]
    fn test_paths_are_stable() {
        let layout = LibraryLayout::new(PathBuf::from("/lib"));
        let source = demo("a/");
        assert_eq!(layout.raw_media_path(&source), layout.raw_media_path(&source));
    }
}
