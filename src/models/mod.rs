// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod action;
pub mod document;
pub mod search_result;

pub use action::ActionRecord;
pub use document::{DocumentRecord, IndexAck, IndexRequest, StoreStats};
pub use search_result::SearchHit;
