// file: src/models/search_result.rs
// description: Search hit model with similarity scores
// reference: Used for TF-IDF similarity search results

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Document ID as given at indexing time
    pub id: String,

    pub title: String,

    pub url: Option<String>,

    pub excerpt: String,

    /// Cosine similarity to the query (0.0 when no term overlap)
    pub score: f64,
}

impl SearchHit {
    /// Format as a summary string for display
    pub fn format_summary(&self, max_excerpt_len: usize) -> String {
        let preview = if self.excerpt.chars().count() > max_excerpt_len {
            format!(
                "{}...",
                self.excerpt.chars().take(max_excerpt_len).collect::<String>()
            )
        } else {
            self.excerpt.clone()
        };

        format!(
            "Score: {:.4} | {} ({})\n{}\n",
            self.score,
            self.title,
            self.url.as_deref().unwrap_or(&self.id),
            preview
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_summary() {
        let hit = SearchHit {
            id: "doc-1".to_string(),
            title: "Release checklist".to_string(),
            url: None,
            excerpt: "This is a very long excerpt that will be truncated".to_string(),
            score: 0.87,
        };

        let summary = hit.format_summary(20);
        assert!(summary.contains("0.8700"));
        assert!(summary.contains("Release checklist"));
        assert!(summary.contains("(doc-1)"));
        assert!(summary.contains("..."));
    }
}
