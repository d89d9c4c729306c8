// file: src/models/document.rs
// description: stored document model and indexing request/acknowledgement types
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub title: String,
    pub url: Option<String>,
    pub excerpt: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexRequest {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
}

impl IndexRequest {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }
}

impl DocumentRecord {
    /// Builds a record, filling the title and excerpt defaults. Empty strings
    /// count as missing.
    ///
    /// The default excerpt is the first `excerpt_chars` characters of the text,
    /// counted in Unicode scalar values so multi-byte text is never split.
    pub fn from_request(request: IndexRequest, default_title: &str, excerpt_chars: usize) -> Self {
        let excerpt = request
            .excerpt
            .filter(|excerpt| !excerpt.is_empty())
            .unwrap_or_else(|| request.text.chars().take(excerpt_chars).collect());

        Self {
            id: request.id,
            title: request
                .title
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| default_title.to_string()),
            url: request.url,
            excerpt,
            text: request.text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexAck {
    pub success: bool,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreStats {
    pub status: String,
    pub docs_indexed: usize,
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let text = "x".repeat(250);
        let doc = DocumentRecord::from_request(IndexRequest::new("d1", text), "Untitled", 200);

        assert_eq!(doc.title, "Untitled");
        assert_eq!(doc.excerpt.len(), 200);
        assert!(doc.url.is_none());
    }

    #[test]
    fn test_explicit_fields_kept() {
        let request = IndexRequest::new("d1", "body")
            .with_title("Runbook")
            .with_url("https://wiki.example/runbook")
            .with_excerpt("summary");
        let doc = DocumentRecord::from_request(request, "Untitled", 200);

        assert_eq!(doc.title, "Runbook");
        assert_eq!(doc.url.as_deref(), Some("https://wiki.example/runbook"));
        assert_eq!(doc.excerpt, "summary");
    }

    #[test]
    fn test_empty_title_and_excerpt_use_defaults() {
        let request = IndexRequest::new("d", "some body text here")
            .with_title("")
            .with_excerpt("");
        let doc = DocumentRecord::from_request(request, "Untitled", 200);

        assert_eq!(doc.title, "Untitled");
        assert_eq!(doc.excerpt, "some body text here");
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let text = "é".repeat(300);
        let doc = DocumentRecord::from_request(IndexRequest::new("d1", text), "Untitled", 200);
        assert_eq!(doc.excerpt.chars().count(), 200);
    }

    #[test]
    fn test_request_optional_fields_deserialize() {
        let request: IndexRequest =
            serde_json::from_str(r#"{"id": "a", "text": "hello"}"#).unwrap();
        assert!(request.title.is_none());
        assert!(request.excerpt.is_none());
    }
}
