//! musync - declarative music library sync
//!
//! Fetches each source listed in a library declaration, transcodes it,
//! splits it into tagged per-section tracks, and can be rerun safely: work
//! already on disk is never repeated.

pub mod artwork;
pub mod declaration;
pub mod error;
pub mod model;
pub mod prompt;
pub mod sync;
pub mod tools;

pub use error::{LibraryError, SyncError, ToolError};
pub use sync::config::SyncConfig;
pub use sync::pipeline::SyncPipeline;
