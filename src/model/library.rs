use super::Source;

/// Ordered collection of sources loaded for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    sources: Vec<Source>,
}

impl Library {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// All sources, in declaration order
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Total number of sources
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl FromIterator<Source> for Library {
    fn from_iter<I: IntoIterator<Item = Source>>(iter: I) -> Self {
        Self {
            sources: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(name: &str) -> Source {
        Source {
            name: name.to_string(),
            artist: "Test Artist".to_string(),
            path: "test/".to_string(),
            url: "https://example.com/watch?v=1".to_string(),
            sections: Vec::new(),
        }
    }

    #[test]
    fn test_library_creation() {
        let lib = Library::new();
        assert_eq!(lib.source_count(), 0);
        assert!(lib.is_empty());
    }

    #[test]
    fn test_collect_keeps_order() {
        let lib: Library = vec![source("First"), source("Second")].into_iter().collect();

        assert_eq!(lib.source_count(), 2);
        assert_eq!(lib.sources()[0].name, "First");
        assert_eq!(lib.sources()[1].name, "Second");
    }
}
