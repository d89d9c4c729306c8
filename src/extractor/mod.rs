// file: src/extractor/mod.rs
// description: action item extraction module exports
// reference: internal module structure

pub mod actions;
pub mod patterns;

pub use actions::ActionExtractor;
