// file: src/search/outcome.rs
// description: explicit results of search and embedding, with the degrade-to-empty policy
// reference: internal error handling design

use crate::models::SearchHit;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    EmptyCorpus,
    Ranked { hits: Vec<SearchHit> },
    Degraded { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EmbedOutcome {
    EmptyCorpus,
    Vector { values: Vec<f64> },
    Degraded { reason: String },
}

impl SearchOutcome {
    /// Search availability wins over correctness: anything but a ranking is
    /// reported as no hits.
    pub fn into_hits(self) -> Vec<SearchHit> {
        match self {
            SearchOutcome::Ranked { hits } => hits,
            SearchOutcome::EmptyCorpus => Vec::new(),
            SearchOutcome::Degraded { reason } => {
                warn!("Search degraded to empty result: {}", reason);
                Vec::new()
            }
        }
    }
}

impl EmbedOutcome {
    /// Resolves to a vector of exactly `dim` values, zero-filled when no
    /// vector could be computed.
    pub fn into_vector(self, dim: usize) -> Vec<f64> {
        match self {
            EmbedOutcome::Vector { mut values } => {
                values.resize(dim, 0.0);
                values
            }
            EmbedOutcome::EmptyCorpus => vec![0.0; dim],
            EmbedOutcome::Degraded { reason } => {
                warn!("Embedding degraded to zero vector: {}", reason);
                vec![0.0; dim]
            }
        }
    }
}
