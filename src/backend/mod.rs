//! Backend seam for the chat widget.
//!
//! The widget talks to two endpoints: one that answers questions and one
//! that accepts document uploads. Both return loosely shaped JSON, so the
//! trait hands back the parsed [`Value`] and [`reply_text`] picks the
//! displayable field.
//!
//! - `live` - reqwest client for a real document backend
//! - `stub` - simulated replies after a fixed delay
mod live;
mod stub;

pub use live::LiveBackend;
pub use stub::StubBackend;

use crate::config::{BackendMode, WidgetConfig};
use crate::types::SelectedFile;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type BackendResult<T> = Result<T, BackendError>;

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait Backend: Send + Sync {
    /// Send a question to the query endpoint.
    async fn ask(&self, query: &str) -> BackendResult<Value>;

    /// Send a document to the upload endpoint.
    async fn upload(&self, file: SelectedFile) -> BackendResult<Value>;
}

/// Build the backend selected by the configuration.
pub fn from_config(config: &WidgetConfig) -> Arc<dyn Backend> {
    match config.mode {
        BackendMode::Live => Arc::new(LiveBackend::new(config.ask_url(), config.upload_url())),
        BackendMode::Stub { delay } => Arc::new(StubBackend::new(delay)),
    }
}

/// First field in `fields` holding a displayable value.
///
/// Null, `false`, `0` and the empty string count as absent so the next
/// candidate is tried. Non-object bodies never match.
pub fn reply_text(body: &Value, fields: &[&str]) -> Option<String> {
    let object = body.as_object()?;
    fields
        .iter()
        .filter_map(|field| object.get(*field))
        .find_map(displayable)
}

fn displayable(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ASK_FIELDS: &[&str] = &["answer", "result"];

    #[test]
    fn test_answer_wins_over_result() {
        let body = json!({"answer": "42", "result": "ignored"});
        assert_eq!(reply_text(&body, ASK_FIELDS), Some("42".to_string()));
    }

    #[test]
    fn test_result_used_when_answer_missing() {
        let body = json!({"result": "from chain"});
        assert_eq!(reply_text(&body, ASK_FIELDS), Some("from chain".to_string()));
    }

    #[test]
    fn test_empty_answer_falls_through() {
        let body = json!({"answer": "", "result": "fallback field"});
        assert_eq!(
            reply_text(&body, ASK_FIELDS),
            Some("fallback field".to_string())
        );
        assert_eq!(reply_text(&json!({"answer": null}), ASK_FIELDS), None);
    }

    #[test]
    fn test_no_matching_field() {
        assert_eq!(reply_text(&json!({}), ASK_FIELDS), None);
        assert_eq!(reply_text(&json!({"detail": "Query failed"}), ASK_FIELDS), None);
        assert_eq!(reply_text(&json!(["answer"]), ASK_FIELDS), None);
        assert_eq!(reply_text(&json!("answer"), ASK_FIELDS), None);
    }

    #[test]
    fn test_non_string_values_render_as_json() {
        assert_eq!(
            reply_text(&json!({"answer": 42}), ASK_FIELDS),
            Some("42".to_string())
        );
        assert_eq!(reply_text(&json!({"answer": 0, "result": true}), ASK_FIELDS), Some("true".to_string()));
    }
}
