// file: src/search/engine.rs
// description: TF-IDF cosine ranking of stored documents against a query, and query embedding
// reference: per-call ad-hoc corpus model, rebuilt from the current documents

use crate::config::SearchConfig;
use crate::error::Result;
use crate::models::{DocumentRecord, SearchHit};
use crate::search::outcome::{EmbedOutcome, SearchOutcome};
use crate::vectorize::{TermWeightModel, TfidfVectorizer, cosine_similarity};
use std::iter;
use tracing::debug;

/// Scores depend on the documents present at call time, so they are only
/// comparable within a single call.
pub struct SimilaritySearch {
    config: SearchConfig,
    vectorizer: TfidfVectorizer,
}

impl SimilaritySearch {
    pub fn new(config: SearchConfig) -> Self {
        let vectorizer = TfidfVectorizer::new(config.max_features);
        Self { config, vectorizer }
    }

    pub fn search(&self, documents: &[DocumentRecord], query: &str, top_k: usize) -> SearchOutcome {
        if documents.is_empty() {
            return SearchOutcome::EmptyCorpus;
        }

        match self.rank(documents, query, top_k) {
            Ok(hits) => SearchOutcome::Ranked { hits },
            Err(e) => SearchOutcome::Degraded {
                reason: e.to_string(),
            },
        }
    }

    pub fn embed(&self, documents: &[DocumentRecord], text: &str) -> EmbedOutcome {
        if documents.is_empty() {
            return EmbedOutcome::EmptyCorpus;
        }

        let vector = self
            .fit(documents, text)
            .and_then(|model| model.row(documents.len()).map(<[f64]>::to_vec));

        match vector {
            Ok(values) => EmbedOutcome::Vector { values },
            Err(e) => EmbedOutcome::Degraded {
                reason: e.to_string(),
            },
        }
    }

    pub fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }

    fn fit(&self, documents: &[DocumentRecord], extra: &str) -> Result<TermWeightModel> {
        let texts: Vec<&str> = documents
            .iter()
            .map(|doc| doc.text.as_str())
            .chain(iter::once(extra))
            .collect();

        self.vectorizer.fit_transform(&texts)
    }

    fn rank(&self, documents: &[DocumentRecord], query: &str, top_k: usize) -> Result<Vec<SearchHit>> {
        let model = self.fit(documents, query)?;
        let query_row = model.row(documents.len())?;

        let mut scored = Vec::with_capacity(documents.len());
        for (index, doc) in documents.iter().enumerate() {
            let score = cosine_similarity(query_row, model.row(index)?)?;
            scored.push((doc, score));
        }

        // Stable: equal scores keep insertion order
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        debug!(
            "Ranked {} documents over {} terms",
            scored.len(),
            model.dimension()
        );

        Ok(scored
            .into_iter()
            .take(top_k)
            .map(|(doc, score)| SearchHit {
                id: doc.id.clone(),
                title: doc.title.clone(),
                url: doc.url.clone(),
                excerpt: doc.excerpt.clone(),
                score,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::IndexRequest;

    fn engine() -> SimilaritySearch {
        SimilaritySearch::new(Config::default_config().search)
    }

    fn doc(id: &str, text: &str) -> DocumentRecord {
        DocumentRecord::from_request(IndexRequest::new(id, text), "Untitled", 200)
    }

    fn hits(outcome: SearchOutcome) -> Vec<SearchHit> {
        match outcome {
            SearchOutcome::Ranked { hits } => hits,
            other => panic!("expected ranking, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_corpus() {
        assert_eq!(engine().search(&[], "anything", 3), SearchOutcome::EmptyCorpus);
        assert_eq!(engine().embed(&[], "anything"), EmbedOutcome::EmptyCorpus);
    }

    #[test]
    fn test_exact_text_scores_one() {
        let docs = vec![doc("runbook", "restart the payment service after deploys")];
        let ranked = hits(engine().search(&docs, "restart the payment service after deploys", 3));

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, "runbook");
        assert!((ranked[0].score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ranking_by_similarity() {
        let docs = vec![
            doc("cooking", "pasta recipe with tomato sauce"),
            doc("deploy", "kubernetes deploy guide for the payment service"),
            doc("oncall", "payment service on-call rotation"),
        ];
        let ranked = hits(engine().search(&docs, "payment service deploy", 3));

        assert_eq!(ranked[0].id, "deploy");
        assert_eq!(ranked[1].id, "oncall");
        assert_eq!(ranked[2].id, "cooking");
        assert_eq!(ranked[2].score, 0.0);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let docs = vec![
            doc("first", "alpha beta"),
            doc("second", "gamma delta"),
            doc("third", "epsilon zeta"),
        ];
        let ranked = hits(engine().search(&docs, "unrelated words", 3));

        let ids: Vec<&str> = ranked.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
        assert!(ranked.iter().all(|h| h.score == 0.0));
    }

    #[test]
    fn test_top_k_limits_results() {
        let docs: Vec<DocumentRecord> = (0..6)
            .map(|i| doc(&format!("d{}", i), "shared words here"))
            .collect();

        assert_eq!(hits(engine().search(&docs, "shared", 3)).len(), 3);
        assert_eq!(hits(engine().search(&docs, "shared", 10)).len(), 6);
        assert!(hits(engine().search(&docs, "shared", 0)).is_empty());
    }

    #[test]
    fn test_unfittable_corpus_degrades() {
        let docs = vec![doc("tiny", "a b c")];
        let outcome = engine().search(&docs, "x", 3);
        assert!(matches!(outcome, SearchOutcome::Degraded { .. }));
        assert!(matches!(engine().embed(&docs, "y"), EmbedOutcome::Degraded { .. }));
    }

    #[test]
    fn test_embed_returns_query_row() {
        let docs = vec![doc("a", "release notes for version two")];
        match engine().embed(&docs, "release notes") {
            EmbedOutcome::Vector { values } => {
                assert_eq!(values.len(), 5);
                let norm: f64 = values.iter().map(|x| x * x).sum();
                assert!((norm - 1.0).abs() < 1e-9);
            }
            other => panic!("expected vector, got {:?}", other),
        }
    }
}
