// file: src/index/mod.rs
// description: in-memory document index module exports
// reference: internal module structure

pub mod store;

pub use store::DocumentStore;
