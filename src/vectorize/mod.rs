// file: src/vectorize/mod.rs
// description: term weighting and vector similarity module exports
// reference: internal module structure

pub mod similarity;
pub mod tfidf;

pub use similarity::cosine_similarity;
pub use tfidf::{TermWeightModel, TfidfVectorizer, tokenize_terms};
