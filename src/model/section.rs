use serde::{Deserialize, Serialize};

/// One named time range of a source, extracted as a standalone track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Track title, also used as the output file stem
    pub name: String,

    /// Timestamp where this section starts, passed to the splitter as-is
    pub start: String,

    /// Timestamp where this section ends
    /// None means the section runs to the end of the media
    pub end: Option<String>,
}

impl Section {
    pub fn new(name: impl Into<String>, start: impl Into<String>, end: Option<String>) -> Self {
        Self {
            name: name.into(),
            start: start.into(),
            end,
        }
    }

    /// Zip parallel name / timestamp lists into contiguous sections
    ///
    /// Section `i` ends where section `i + 1` starts; the last one is open
    /// ended. Timestamps are not validated here.
    pub fn from_stamps(names: &[String], timestamps: &[String]) -> Vec<Section> {
        names
            .iter()
            .zip(timestamps)
            .enumerate()
            .map(|(i, (name, start))| Section {
                name: name.clone(),
                start: start.clone(),
                end: timestamps.get(i + 1).filter(|_| i + 1 < names.len()).cloned(),
            })
            .collect()
    }
}
