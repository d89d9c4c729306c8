// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{NlpError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub search: SearchConfig,
    pub corpus: CorpusConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    pub max_actions: usize,
    pub verb_score: f64,
    pub keyword_score: f64,
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Vocabulary cap of the per-call TF-IDF model.
    pub max_features: usize,
    pub default_top_k: usize,
    /// Fixed length of vectors returned by `embed`.
    pub embedding_dim: usize,
    pub excerpt_chars: usize,
    pub default_title: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    pub extensions: Vec<String>,
    #[serde(default)]
    pub skip_patterns: Vec<String>,
    pub max_file_size_mb: usize,
    pub parallel_workers: usize,
}

pub fn default_keywords() -> Vec<String> {
    [
        "please",
        "can you",
        "could you",
        "assign",
        "todo",
        "task",
        "fix",
        "review",
        "test",
        "deploy",
        "send",
        "schedule",
        "need to",
        "should",
    ]
    .iter()
    .map(|kw| kw.to_string())
    .collect()
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CONTEXTSTACK_NLP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| NlpError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| NlpError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            extraction: ExtractionConfig {
                max_actions: 5,
                verb_score: 0.7,
                keyword_score: 0.6,
                keywords: default_keywords(),
            },
            search: SearchConfig {
                max_features: 100,
                default_top_k: 3,
                embedding_dim: 100,
                excerpt_chars: 200,
                default_title: "Untitled".to_string(),
            },
            corpus: CorpusConfig {
                extensions: vec!["md".to_string(), "txt".to_string()],
                skip_patterns: vec![".git/*".to_string(), "target/*".to_string()],
                max_file_size_mb: 10,
                parallel_workers: 4,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.extraction.max_actions == 0 {
            return Err(NlpError::Config(
                "max_actions must be greater than 0".to_string(),
            ));
        }

        for (name, score) in [
            ("verb_score", self.extraction.verb_score),
            ("keyword_score", self.extraction.keyword_score),
        ] {
            if !(0.0..=1.0).contains(&score) {
                return Err(NlpError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, score
                )));
            }
        }

        if self.search.max_features == 0 {
            return Err(NlpError::Config(
                "max_features must be greater than 0".to_string(),
            ));
        }

        if self.search.embedding_dim == 0 {
            return Err(NlpError::Config(
                "embedding_dim must be greater than 0".to_string(),
            ));
        }

        if self.corpus.parallel_workers == 0 {
            return Err(NlpError::Config(
                "parallel_workers must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
