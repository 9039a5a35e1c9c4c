//! URL handling for image references
//!
//! Resolves possibly-relative image references against the scraped page's
//! URL and derives the on-disk file name for downloads.

mod resolve;

pub use resolve::{file_name, resolve_image_ref};
