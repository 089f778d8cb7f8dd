use super::Section;
use crate::error::LibraryError;
use serde::{Deserialize, Serialize};

/// One album or track group to acquire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Album name; also names the output directory and transient files
    pub name: String,

    /// Artist written into every section's tags
    pub artist: String,

    /// Directory under the library root where this source lives
    pub path: String,

    /// Remote media URL handed to the fetcher
    pub url: String,

    /// Sections to split the media into, in track order
    pub sections: Vec<Section>,
}

impl Source {
    /// Build a source from parallel section name / timestamp lists
    ///
    /// Fails when the two lists have different lengths, or when the name or
    /// URL is blank.
    pub fn from_stamps(
        name: impl Into<String>,
        artist: impl Into<String>,
        path: impl Into<String>,
        url: impl Into<String>,
        names: &[String],
        timestamps: &[String],
    ) -> Result<Self, LibraryError> {
        let name = name.into();
        if names.len() != timestamps.len() {
            return Err(LibraryError::Validation {
                source_name: name,
                names: names.len(),
                timestamps: timestamps.len(),
            });
        }

        let source = Self {
            name,
            artist: artist.into(),
            path: path.into(),
            url: url.into(),
            sections: Section::from_stamps(names, timestamps),
        };
        source.validate()?;
        Ok(source)
    }

    /// Check the fields every output path and fetch depends on
    ///
    /// A blank name would put the section directory at the source's parent
    /// directory, which makes a fresh source look finished.
    pub fn validate(&self) -> Result<(), LibraryError> {
        let missing = if self.name.trim().is_empty() {
            Some("name")
        } else if self.url.trim().is_empty() {
            Some("url")
        } else {
            None
        };

        match missing {
            Some(field) => Err(LibraryError::Incomplete {
                source_name: self.name.clone(),
                field,
            }),
            None => Ok(()),
        }
    }

    /// Number of declared sections
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_stamps() {
        let source = Source::from_stamps(
            "Demo",
            "X",
            "a/",
            "u",
            &strings(&["One", "Two"]),
            &strings(&["0:00", "1:00"]),
        )
        .unwrap();

        assert_eq!(source.section_count(), 2);
        assert_eq!(source.sections[0], Section::new("One", "0:00", Some("1:00".into())));
        assert_eq!(source.sections[1], Section::new("Two", "1:00", None));
    }

    #[test]
    fn test_count_mismatch_is_rejected() {
        let err = Source::from_stamps(
            "Broken",
            "X",
            "",
            "u",
            &strings(&["One", "Two"]),
            &strings(&["0:00"]),
        )
        .unwrap_err();

        match err {
            LibraryError::Validation {
                source_name,
                names,
                timestamps,
            } => {
                assert_eq!(source_name, "Broken");
                assert_eq!(names, 2);
                assert_eq!(timestamps, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = Source::from_stamps("  ", "X", "", "u", &strings(&["One"]), &strings(&["0:00"]))
            .unwrap_err();
        assert!(matches!(err, LibraryError::Incomplete { field: "name", .. }));
    }

    #[test]
    fn test_blank_url_is_rejected() {
        let err = Source::from_stamps("Demo", "X", "", "", &[], &[]).unwrap_err();
        assert!(matches!(
            err,
            LibraryError::Incomplete { ref source_name, field: "url" } if source_name == "Demo"
        ));
    }
}
