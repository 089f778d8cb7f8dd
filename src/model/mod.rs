//! In-memory representation of a media library
//!
//! These types are independent of the declaration document they are loaded
//! from and of the on-disk layout they are synced into.

mod library;
mod section;
mod source;

pub use library::Library;
pub use section::Section;
pub use source::Source;
