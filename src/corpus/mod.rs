// file: src/corpus/mod.rs
// description: corpus discovery and preloading module exports
// reference: internal module structure

pub mod loader;
pub mod markdown;
pub mod progress;
pub mod scanner;

pub use loader::CorpusLoader;
pub use markdown::{MarkdownText, strip_markdown};
pub use progress::{IndexProgress, LoadStats};
pub use scanner::{CorpusFile, CorpusScanner};
