// file: src/text/mod.rs
// description: text analysis module exports (segmentation and part-of-speech tagging)
// reference: internal module structure

pub mod segment;
pub mod tagger;

pub use segment::{split_sentences, word_tokens};
pub use tagger::{PosTag, PosTagger, TaggedToken};
