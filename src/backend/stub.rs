use super::{Backend, BackendResult};
use crate::types::SelectedFile;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::time::Duration;

/// Answers locally after a fixed delay, for running the widget without a
/// document backend.
pub struct StubBackend {
    delay: Duration,
}

impl StubBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Backend for StubBackend {
    async fn ask(&self, query: &str) -> BackendResult<Value> {
        tokio::time::sleep(self.delay).await;
        Ok(json!({ "answer": format!("(simulated) You asked: {query}") }))
    }

    async fn upload(&self, file: SelectedFile) -> BackendResult<Value> {
        tokio::time::sleep(self.delay).await;
        Ok(json!({ "message": format!("(simulated) '{}' received, {} bytes", file.name, file.bytes.len()) }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::reply_text;

    #[tokio::test]
    async fn test_stub_answers_with_query() {
        let backend = StubBackend::new(Duration::ZERO);
        let body = backend.ask("what is in the report?").await.unwrap();
        let text = reply_text(&body, &["answer", "result"]).unwrap();
        assert!(text.contains("what is in the report?"));
    }

    #[tokio::test]
    async fn test_stub_acknowledges_upload() {
        let backend = StubBackend::new(Duration::ZERO);
        let body = backend
            .upload(SelectedFile::new("report.pdf", vec![1, 2, 3]))
            .await
            .unwrap();
        let text = reply_text(&body, &["message"]).unwrap();
        assert!(text.contains("report.pdf"));
        assert!(text.contains("3 bytes"));
    }
}
