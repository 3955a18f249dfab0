//! # IPC Loop
//!
//! Newline-delimited JSON between the display layer and the site.
//!
//! ## Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin  (one request per line)                                          │
//! │  {"id": 1, "command": "toggle_language"}                                │
//! │  {"id": 2, "command": "add_to_cart", "args": {"dishId": "d1"}}          │
//! │                                                                         │
//! │  stdout (one response per request, same order)                          │
//! │  {"id": 1, "ok": true, "data": {"language": "ta", ...}}                 │
//! │  {"id": 2, "ok": false, "error": {"code": "NOT_FOUND", "message": ...}} │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Blank lines are skipped. A line that is not a valid request gets an
//! `INVALID_ARGUMENTS` response with a null id. The loop ends at EOF.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::commands;
use crate::error::ApiError;
use crate::site::Site;

#[derive(Debug, Clone, Deserialize)]
pub struct IpcRequest {
    /// Echoed back unchanged so callers can match responses
    #[serde(default)]
    pub id: Value,
    pub command: String,
    #[serde(default)]
    pub args: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct IpcResponse {
    pub id: Value,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl IpcResponse {
    fn from_result(id: Value, result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(data) => IpcResponse {
                id,
                ok: true,
                data: Some(data),
                error: None,
            },
            Err(error) => IpcResponse {
                id,
                ok: false,
                data: None,
                error: Some(error),
            },
        }
    }
}

/// Handles one input line. Returns `None` for blank lines.
pub fn handle_line(site: &Site, line: &str) -> Option<IpcResponse> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let response = match serde_json::from_str::<IpcRequest>(line) {
        Ok(request) => {
            let result = commands::invoke(site, &request.command, request.args);
            if let Err(err) = &result {
                debug!(command = %request.command, error = %err, "command failed");
            }
            IpcResponse::from_result(request.id, result)
        }
        Err(err) => {
            warn!(error = %err, "malformed request");
            IpcResponse::from_result(Value::Null, Err(ApiError::from(err)))
        }
    };

    Some(response)
}

/// Serves requests from `reader` until EOF, writing responses to `writer`.
pub async fn serve<R, W>(site: &Site, reader: R, mut writer: W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let Some(response) = handle_line(site, &line) else {
            continue;
        };

        let mut out = serde_json::to_vec(&response)?;
        out.push(b'\n');
        writer.write_all(&out).await?;
        writer.flush().await?;
    }

    debug!("input closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_site;

    async fn run(input: &str) -> Vec<Value> {
        let site = test_site();
        let mut output = Vec::new();

        serve(&site, input.as_bytes(), &mut output).await.unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_responses_in_request_order() {
        let input = concat!(
            r#"{"id": 1, "command": "add_to_cart", "args": {"dishId": "d1"}}"#,
            "\n",
            r#"{"id": 2, "command": "add_to_cart", "args": {"dishId": "d1"}}"#,
            "\n",
            r#"{"id": "three", "command": "get_cart_count"}"#,
            "\n",
        );

        let responses = run(input).await;

        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[2]["id"], "three");
        assert_eq!(responses[2]["ok"], true);
        assert_eq!(responses[2]["data"]["count"], 1);
    }

    #[tokio::test]
    async fn test_errors_are_responses_not_failures() {
        let input = concat!(
            r#"{"id": 1, "command": "add_to_cart", "args": {"dishId": "d99"}}"#,
            "\n",
            "not json\n",
            "\n",
            r#"{"id": 2, "command": "dance"}"#,
            "\n",
        );

        let responses = run(input).await;

        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0]["ok"], false);
        assert_eq!(responses[0]["error"]["code"], "NOT_FOUND");
        assert_eq!(responses[1]["id"], Value::Null);
        assert_eq!(responses[1]["error"]["code"], "INVALID_ARGUMENTS");
        assert_eq!(responses[2]["error"]["code"], "UNKNOWN_COMMAND");
        assert!(responses[2].get("data").is_none());
    }

    #[tokio::test]
    async fn test_language_toggle_over_ipc() {
        let input = concat!(
            r#"{"id": 1, "command": "toggle_language"}"#,
            "\n",
            r#"{"id": 2, "command": "translate", "args": {"key": "menu"}}"#,
            "\n",
        );

        let responses = run(input).await;

        assert_eq!(responses[0]["data"]["language"], "ta");
        assert_eq!(responses[1]["data"], "உணவு பட்டியல்");
    }

    #[test]
    fn test_blank_line_is_skipped() {
        let site = test_site();
        assert!(handle_line(&site, "   ").is_none());
    }
}
