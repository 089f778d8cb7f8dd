//! Sync configuration

use std::path::PathBuf;

/// Configuration for a sync run
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Library root; every source's path is relative to this
    pub root: PathBuf,

    /// Keep processing later sources after one fails
    /// Default: stop at the first failing source
    pub continue_on_error: bool,
}

impl SyncConfig {
    /// Create a new sync configuration
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            continue_on_error: false,
        }
    }

    /// Collect failures and carry on instead of halting the run
    pub fn with_continue_on_error(mut self, enable: bool) -> Self {
        self.continue_on_error = enable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_halt_on_error() {
        let config = SyncConfig::new(PathBuf::from("/music"));
        assert_eq!(config.root, PathBuf::from("/music"));
        assert!(!config.continue_on_error);
        assert!(config.with_continue_on_error(true).continue_on_error);
    }
}
