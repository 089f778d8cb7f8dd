//! ID3v2 tag writer for split sections

use super::traits::{Tagger, TrackTags};
use crate::error::ToolError;
use id3::frame::{Picture, PictureType};
use id3::{ErrorKind, Tag, TagLike, Version};
use std::path::Path;

/// Writes ID3v2.4 tags (UTF-8 text frames) in place
#[derive(Debug, Clone, Copy, Default)]
pub struct Id3Tagger;

impl Id3Tagger {
    pub fn new() -> Self {
        Self
    }
}

impl Tagger for Id3Tagger {
    fn tag(&self, path: &Path, tags: &TrackTags<'_>) -> Result<(), ToolError> {
        // Keep whatever the splitter already wrote, but start fresh if there is no tag
        let mut tag = match Tag::read_from_path(path) {
            Ok(tag) => tag,
            Err(e) if matches!(e.kind, ErrorKind::NoTag) => Tag::new(),
            Err(e) => return Err(e.into()),
        };

        tag.set_title(tags.title);
        tag.set_album(tags.album);
        tag.set_artist(tags.artist);
        tag.set_track(tags.track_index as u32);
        tag.set_total_tracks(tags.track_total as u32);

        tag.remove_all_pictures();
        tag.add_frame(Picture {
            mime_type: tags.cover.mime_type.clone(),
            picture_type: PictureType::CoverFront,
            description: "Front cover".to_string(),
            data: tags.cover.data.clone(),
        });

        tag.write_to_path(path, Version::Id3v24)?;

        log::debug!(
            "Tagged {:?}: '{}' ({})",
            path,
            tags.title,
            tags.position()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artwork::CoverArt;
    use std::fs;
    use tempfile::TempDir;

    fn cover() -> CoverArt {
        CoverArt::from_bytes(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR".to_vec())
    }

    #[test]
    fn test_tags_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("One.mp3");
        fs::write(&path, b"dummy audio data").unwrap();

        let cover = cover();
        let tags = TrackTags {
            title: "Henry's Lunch Money – Ⅱ",
            album: "1982",
            artist: "Haircuts for Men",
            track_index: 1,
            track_total: 2,
            cover: &cover,
        };
        Id3Tagger::new().tag(&path, &tags).unwrap();

        let written = Tag::read_from_path(&path).unwrap();
        assert_eq!(written.title(), Some("Henry's Lunch Money – Ⅱ"));
        assert_eq!(written.album(), Some("1982"));
        assert_eq!(written.artist(), Some("Haircuts for Men"));
        assert_eq!(written.track(), Some(1));
        assert_eq!(written.total_tracks(), Some(2));

        let pictures: Vec<_> = written.pictures().collect();
        assert_eq!(pictures.len(), 1);
        assert_eq!(pictures[0].mime_type, "image/png");
        assert_eq!(pictures[0].picture_type, PictureType::CoverFront);
        assert_eq!(pictures[0].data, cover.data);
    }

    #[test]
    fn test_retagging_replaces_picture() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Two.mp3");
        fs::write(&path, b"dummy audio data").unwrap();

        let cover = cover();
        let mut tags = TrackTags {
            title: "Two",
            album: "Demo",
            artist: "X",
            track_index: 2,
            track_total: 2,
            cover: &cover,
        };
        Id3Tagger::new().tag(&path, &tags).unwrap();
        tags.title = "Two (again)";
        Id3Tagger::new().tag(&path, &tags).unwrap();

        let written = Tag::read_from_path(&path).unwrap();
        assert_eq!(written.title(), Some("Two (again)"));
        assert_eq!(written.pictures().count(), 1);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let cover = cover();
        let tags = TrackTags {
            title: "Ghost",
            album: "Demo",
            artist: "X",
            track_index: 1,
            track_total: 1,
            cover: &cover,
        };
        assert!(Id3Tagger::new().tag(&dir.path().join("absent.mp3"), &tags).is_err());
    }
}
