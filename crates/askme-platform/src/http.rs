//! Backend HTTP adapter.
//!
//! Talks to the AskMe Pro server over browser `fetch()` via gloo-net.
//! No timeouts and no retries.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{Blob, BlobPropertyBag, FormData};

use askme_core::ports::ApiPort;
use askme_types::{
    AskError, Result,
    api::{
        ChatRequest, ChatResponse, ContextResponse, ErrorBody, SummarizeRequest,
        SummarizeResponse, UploadFile, UploadResponse,
    },
    config::ClientConfig,
};

use crate::js::interop;

pub struct HttpApiClient {
    config: ClientConfig,
}

impl HttpApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| AskError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| AskError::Network(e.to_string()))?;
        decode(response).await
    }
}

#[async_trait(?Send)]
impl ApiPort for HttpApiClient {
    async fn chat(&self, req: &ChatRequest) -> Result<ChatResponse> {
        self.post_json("/api/chat", req).await
    }

    async fn upload(&self, file: &UploadFile) -> Result<UploadResponse> {
        let url = self.config.endpoint("/api/upload");
        let form = multipart_form(file)?;

        // No explicit Content-Type: the browser adds the multipart boundary.
        let response = Request::post(&url)
            .body(form)
            .map_err(|e| AskError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AskError::Network(e.to_string()))?;
        decode(response).await
    }

    async fn summarize(&self, req: &SummarizeRequest) -> Result<SummarizeResponse> {
        self.post_json("/api/summarize", req).await
    }

    async fn context(&self, session_id: &str) -> Result<ContextResponse> {
        let url = self.config.context_endpoint(session_id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AskError::Network(e.to_string()))?;
        decode(response).await
    }
}

fn multipart_form(file: &UploadFile) -> Result<FormData> {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(file.bytes.as_slice()));
    let options = BlobPropertyBag::new();
    if let Some(ref mime) = file.mime {
        options.set_type(mime);
    }
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(interop)?;

    let form = FormData::new().map_err(interop)?;
    form.append_with_blob_and_filename("file", &blob, &file.name)
        .map_err(interop)?;
    Ok(form)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AskError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(server_error(status, &body));
    }
    Ok(serde_json::from_str(&body)?)
}

/// Map a non-2xx response to an error, keeping the server's `error` code
/// when the body carries one.
pub fn server_error(status: u16, body: &str) -> AskError {
    let code = match serde_json::from_str::<ErrorBody>(body) {
        Ok(b) => b.error,
        Err(_) => body.chars().take(200).collect(),
    };
    AskError::Server { status, code }
}
