// Copyright 2026 Pixelguess Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the guessing server endpoints.
//!
//! The server is treated as a stateless request/response oracle:
//! `/resized` and `/guess` are parameterized by an [`ImageReference`] and a
//! pixel width, `/upload` takes raw file bytes. Non-success statuses are
//! surfaced with their body text; no retries.

use image::GenericImageView;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::{GuessError, Result};
use crate::types::{GuessReply, ImageReference, Preview, UploadReceipt};

/// Client for one guessing server.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Create a client with the config's timeout.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self {
            http,
            base: config.server.clone(),
        }
    }

    /// Base URL this client talks to.
    pub fn server(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    /// `GET /guess` — ask the model what the picture looks like at the
    /// given pixel width.
    pub async fn guess(&self, reference: &ImageReference, pixel_width: u32) -> Result<String> {
        let url = self.endpoint("/guess")?;
        let (key, value) = reference.query_param();
        let width = pixel_width.to_string();

        debug!(%reference, pixel_width, "requesting guess");
        let response = self
            .http
            .get(url)
            .query(&[(key, value), ("pixelwidth", width.as_str())])
            .send()
            .await?;

        let body = Self::success_body(response).await?;
        let reply: GuessReply = serde_json::from_str(&body)?;
        Ok(reply.answer)
    }

    /// `GET /resized` — fetch the pixelated preview and decode its real
    /// dimensions.
    pub async fn resized(&self, reference: &ImageReference, pixel_width: u32) -> Result<Preview> {
        let url = self.endpoint("/resized")?;
        let (key, value) = reference.query_param();
        let width = pixel_width.to_string();

        let response = self
            .http
            .get(url)
            .query(&[(key, value), ("pixelwidth", width.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GuessError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let decoded = image::load_from_memory(&bytes)?;
        let (width, height) = decoded.dimensions();
        Ok(Preview {
            width,
            height,
            jpeg: bytes.to_vec(),
        })
    }

    /// Fetch a static sample asset and decode its natural dimensions.
    pub async fn sample_dimensions(&self, path: &str) -> Result<(u32, u32)> {
        let url = self.endpoint(path)?;
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GuessError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let decoded = image::load_from_memory(&bytes)?;
        Ok(decoded.dimensions())
    }

    /// `POST /upload` — send raw file bytes, like a file input would.
    pub async fn upload(&self, bytes: Vec<u8>) -> Result<UploadReceipt> {
        let url = self.endpoint("/upload")?;
        debug!(size = bytes.len(), "uploading picture");

        let response = self.http.post(url).body(bytes).send().await?;
        let body = Self::success_body(response).await?;
        let receipt: UploadReceipt = serde_json::from_str(&body)?;
        Ok(receipt)
    }

    /// Read the body text, turning non-success statuses into errors that
    /// carry both the status code and the body.
    async fn success_body(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(GuessError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        let config = Config::new("http://localhost:8080").unwrap();
        ApiClient::new(&config)
    }

    #[test]
    fn test_endpoint_joins_against_base() {
        let client = client();
        assert_eq!(
            client.endpoint("/guess").unwrap().as_str(),
            "http://localhost:8080/guess"
        );
        assert_eq!(
            client.endpoint("samples/sample3.jpg").unwrap().as_str(),
            "http://localhost:8080/samples/sample3.jpg"
        );
    }

    #[test]
    fn test_status_error_formatting() {
        let err = GuessError::Status {
            status: 500,
            body: "error accessing the model".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP error 500: error accessing the model"
        );
    }
}
