// file: src/search/mod.rs
// description: similarity search and embedding module exports
// reference: internal module structure

pub mod engine;
pub mod outcome;

pub use engine::SimilaritySearch;
pub use outcome::{EmbedOutcome, SearchOutcome};
