// file: src/server/stdio.rs
// description: line-oriented request loop dispatching to the service
// reference: https://docs.rs/tokio/latest/tokio/io/index.html

use crate::error::{NlpError, Result};
use crate::server::protocol::{Request, Response};
use crate::service::NlpService;
use serde_json::json;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

/// Answers one request line. Never fails: problems become error responses.
pub fn handle_line(service: &NlpService, line: &str) -> Response {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected malformed request: {}", e);
            return Response::failure(NlpError::Protocol(e.to_string()).to_string());
        }
    };

    match dispatch(service, request) {
        Ok(value) => Response::success(value),
        Err(e) => Response::failure(e.to_string()),
    }
}

fn dispatch(service: &NlpService, request: Request) -> Result<serde_json::Value> {
    match request {
        Request::ExtractActions { text } => {
            Ok(serde_json::to_value(service.extract_actions(&text))?)
        }
        Request::IndexDocument(request) => Ok(serde_json::to_value(service.index_document(request)?)?),
        Request::SearchDocuments { text, top_k } => {
            Ok(serde_json::to_value(service.search_documents(&text, top_k))?)
        }
        Request::Embed { text } => Ok(json!({ "vector": service.embed(&text) })),
        Request::Stats => Ok(serde_json::to_value(service.stats()?)?),
    }
}

/// Serves requests until the reader is exhausted; blank lines are ignored.
pub async fn serve<R, W>(service: &NlpService, reader: R, mut writer: W) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut handled = 0;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(service, &line);
        debug!("Request {} answered (ok = {})", handled + 1, response.ok);

        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        writer.write_all(&encoded).await?;
        writer.flush().await?;
        handled += 1;
    }

    Ok(handled)
}

pub async fn run_stdio(service: &NlpService) -> Result<()> {
    info!("Serving JSON-lines requests on stdin/stdout");
    let handled = serve(service, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;
    info!("Input closed after {} requests", handled);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IndexRequest;

    #[test]
    fn test_handle_extract() {
        let service = NlpService::default();
        let response = handle_line(
            &service,
            r#"{"op": "extract_actions", "text": "Please review the report by Friday @alice"}"#,
        );

        assert!(response.ok);
        let result = response.result.unwrap();
        assert_eq!(result[0]["owner"], "alice");
        assert_eq!(result[0]["deadline"], "Friday");
    }

    #[test]
    fn test_handle_malformed_line() {
        let service = NlpService::default();
        let response = handle_line(&service, "{not json");

        assert!(!response.ok);
        assert!(response.error.unwrap().starts_with("Protocol error"));
    }

    #[test]
    fn test_handle_embed_on_empty_store() {
        let service = NlpService::default();
        let response = handle_line(&service, r#"{"op": "embed", "text": "anything"}"#);

        let vector = response.result.unwrap()["vector"].as_array().unwrap().clone();
        assert_eq!(vector.len(), 100);
    }

    #[test]
    fn test_handle_index_with_empty_title() {
        let service = NlpService::default();
        handle_line(
            &service,
            r#"{"op": "index_document", "id": "d", "text": "some body text here", "title": ""}"#,
        );

        let hits = service.search_documents("body", None);
        assert_eq!(hits[0].title, "Untitled");
        assert_eq!(hits[0].excerpt, "some body text here");
    }

    #[test]
    fn test_handle_stats() {
        let service = NlpService::default();
        service
            .index_document(IndexRequest::new("a", "some text"))
            .unwrap();

        let response = handle_line(&service, r#"{"op": "stats"}"#);
        assert_eq!(response.result.unwrap()["docs_indexed"], 1);
    }

    #[tokio::test]
    async fn test_serve_session() {
        let service = NlpService::default();
        let input = concat!(
            r#"{"op": "index_document", "id": "d1", "text": "incident postmortem for the database outage"}"#,
            "\n\n",
            r#"{"op": "search_documents", "text": "database outage", "topK": 3}"#,
            "\n",
            "garbage\n",
        );
        let mut output: Vec<u8> = Vec::new();

        let handled = serve(&service, BufReader::new(input.as_bytes()), &mut output)
            .await
            .unwrap();
        assert_eq!(handled, 3);

        let responses: Vec<Response> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(responses[0].result.as_ref().unwrap()["id"], "d1");
        assert_eq!(responses[1].result.as_ref().unwrap()[0]["id"], "d1");
        assert!(!responses[2].ok);
    }
}
