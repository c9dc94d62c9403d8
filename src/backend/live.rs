use super::{Backend, BackendResult};
use crate::types::SelectedFile;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;

/// Client for the document backend's HTTP API.
pub struct LiveBackend {
    client: Client,
    ask_url: String,
    upload_url: String,
}

#[derive(Serialize)]
struct AskRequest<'a> {
    query: &'a str,
}

impl LiveBackend {
    pub fn new(ask_url: String, upload_url: String) -> Self {
        Self {
            client: Client::new(),
            ask_url,
            upload_url,
        }
    }

    async fn read_json(&self, response: reqwest::Response) -> BackendResult<Value> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            // Error bodies are still JSON replies; the caller picks a fallback.
            tracing::warn!(%status, %body, "backend returned non-success status");
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Backend for LiveBackend {
    async fn ask(&self, query: &str) -> BackendResult<Value> {
        tracing::debug!(url = %self.ask_url, "sending query");
        let response = self
            .client
            .post(&self.ask_url)
            .json(&AskRequest { query })
            .send()
            .await?;
        self.read_json(response).await
    }

    async fn upload(&self, file: SelectedFile) -> BackendResult<Value> {
        tracing::debug!(url = %self.upload_url, file = %file.name, size = file.bytes.len(), "uploading file");
        let mime = file.mime_type();
        let part = Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(mime)?;
        let form = Form::new().part("file", part);
        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;
        self.read_json(response).await
    }
}
