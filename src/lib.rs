// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod corpus;
pub mod error;
pub mod extractor;
pub mod index;
pub mod models;
pub mod search;
pub mod server;
pub mod service;
pub mod text;
pub mod utils;
pub mod vectorize;

pub use config::{Config, CorpusConfig, ExtractionConfig, SearchConfig};
pub use corpus::{CorpusLoader, CorpusScanner, LoadStats};
pub use error::{NlpError, Result};
pub use extractor::ActionExtractor;
pub use index::DocumentStore;
pub use models::{ActionRecord, DocumentRecord, IndexAck, IndexRequest, SearchHit, StoreStats};
pub use search::{EmbedOutcome, SearchOutcome, SimilaritySearch};
pub use service::NlpService;
pub use text::{PosTag, PosTagger};
pub use vectorize::{TermWeightModel, TfidfVectorizer, cosine_similarity};
