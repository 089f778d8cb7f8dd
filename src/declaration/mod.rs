//! Library declaration documents
//!
//! A declaration is a TOML document with one `[[source]]` table per source.
//! Section names and timestamps are stored as two parallel lists which are
//! zipped into [`Section`](crate::model::Section)s on load.

mod annotated;
mod document;
mod model;

pub use annotated::{annotated_candidates, parse_annotated_lines};
pub use document::{append_source, load_library, load_library_file};
pub use model::SourceDeclaration;
