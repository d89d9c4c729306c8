// file: src/models/action.rs
// description: action item record produced by the extractor
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The trimmed sentence the action was found in
    pub text: String,

    /// First `@name` mention, without the `@`
    pub owner: Option<String>,

    /// Best-effort deadline phrase such as "Friday" or "Nov 30"
    pub deadline: Option<String>,

    /// Confidence in [0, 1]
    pub score: f64,
}

impl ActionRecord {
    pub fn new(
        text: String,
        owner: Option<String>,
        deadline: Option<String>,
        score: f64,
    ) -> Self {
        Self {
            text,
            owner,
            deadline,
            score: score.clamp(0.0, 1.0),
        }
    }
}
