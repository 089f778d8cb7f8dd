//! Raw declaration records as they appear in the document

use crate::error::LibraryError;
use crate::model::Source;
use serde::{Deserialize, Serialize};

/// One `[[source]]` table
///
/// Keys are written lowercase. Capitalized keys (`Name`, `URL`, ...) from
/// older documents are accepted, and any other key is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceDeclaration {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Artist")]
    pub artist: String,
    #[serde(alias = "Path")]
    pub path: String,
    #[serde(alias = "URL", alias = "Url")]
    pub url: String,
    /// Section names, parallel to `timestamps`
    #[serde(alias = "Namestamps", alias = "NameStamps")]
    pub namestamps: Vec<String>,
    /// Section start times, parallel to `namestamps`
    #[serde(alias = "Timestamps", alias = "TimeStamps")]
    pub timestamps: Vec<String>,
}

/// Whole document: an array of `[[source]]` tables
///
/// `[[Source]]` tables are kept apart rather than aliased, since a file
/// written with capitalized tables and then extended by `append_source`
/// holds both spellings at once.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct LibraryDeclaration {
    #[serde(rename = "Source", skip_serializing_if = "Vec::is_empty")]
    pub capitalized: Vec<SourceDeclaration>,
    pub source: Vec<SourceDeclaration>,
}

impl LibraryDeclaration {
    /// Every table, capitalized ones first
    pub fn into_sources(self) -> impl Iterator<Item = SourceDeclaration> {
        self.capitalized.into_iter().chain(self.source)
    }
}

impl SourceDeclaration {
    /// Convert to our unified Source model
    pub fn into_source(self) -> Result<Source, LibraryError> {
        Source::from_stamps(
            self.name,
            self.artist,
            self.path,
            self.url,
            &self.namestamps,
            &self.timestamps,
        )
    }
}
