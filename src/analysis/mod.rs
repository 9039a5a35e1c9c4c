//! Text analytics over extracted page content
//!
//! Two operations are exposed: [`top_words`], a stopword-filtered word
//! frequency ranking, and [`summarize`], an extractive summary ranked by
//! latent-semantic salience. Both work on plain text and are independent of
//! the scraping pipeline, so they can be run on any string.

mod frequency;
mod lexicon;
mod summarize;

pub use frequency::{top_words, WordCount};
pub use lexicon::Lexicon;
pub use summarize::summarize;
