//! Per-source acquisition pipeline and library layout

pub mod config;
pub mod layout;
pub mod pipeline;
pub mod state;

pub use config::SyncConfig;
pub use layout::LibraryLayout;
pub use pipeline::{SourceOutcome, SyncPipeline, SyncSummary};
pub use state::SourceState;
