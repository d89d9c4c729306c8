// file: src/server/protocol.rs
// description: request and response envelopes of the stdio transport
// reference: https://docs.rs/serde_json

use crate::models::IndexRequest;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    ExtractActions {
        text: String,
    },
    IndexDocument(IndexRequest),
    SearchDocuments {
        text: String,
        #[serde(default, rename = "topK", alias = "top_k")]
        top_k: Option<usize>,
    },
    Embed {
        text: String,
    },
    Stats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn success(result: Value) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_request_with_top_k() {
        let request: Request =
            serde_json::from_str(r#"{"op": "search_documents", "text": "deploy", "topK": 2}"#)
                .unwrap();
        assert!(matches!(
            request,
            Request::SearchDocuments { top_k: Some(2), .. }
        ));
    }

    #[test]
    fn test_parse_index_request() {
        let request: Request = serde_json::from_str(
            r#"{"op": "index_document", "id": "d1", "text": "body", "title": "T"}"#,
        )
        .unwrap();
        match request {
            Request::IndexDocument(req) => {
                assert_eq!(req.id, "d1");
                assert_eq!(req.title.as_deref(), Some("T"));
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_unknown_op_rejected() {
        let result: Result<Request, _> = serde_json::from_str(r#"{"op": "delete_everything"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_failure_serialization_omits_result() {
        let json = serde_json::to_string(&Response::failure("bad input")).unwrap();
        assert_eq!(json, r#"{"ok":false,"error":"bad input"}"#);
    }
}
