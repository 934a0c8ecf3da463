//! ImgBB image-hosting client
//!
//! One outbound multipart POST per image, single attempt, default
//! transport timeout. Failures carry whatever diagnostic payload the
//! remote supplied.

use async_trait::async_trait;
use core_config::imgbb::ImgbbConfig;
use serde_json::Value;
use thiserror::Error;

/// A failed upload attempt, with the upstream diagnostic if one was
/// returned (transport failures carry none).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct UploadError {
    pub message: String,
    pub details: Option<Value>,
}

impl UploadError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self {
            message: format!("Failed to reach image host: {}", err),
            details: None,
        }
    }

    pub fn rejected(message: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            message: message.into(),
            details,
        }
    }
}

pub type UploadResult<T> = Result<T, UploadError>;

/// A successfully hosted image
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Public URL of the stored image
    pub url: String,
    /// Full response body from the image host
    pub raw: Value,
}

/// Client trait for the external image-hosting collaborator
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageUploader: Send + Sync {
    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> UploadResult<UploadedImage>;
}

/// ImgBB implementation of ImageUploader
pub struct ImgbbClient {
    http: reqwest::Client,
    api_key: String,
    upload_url: String,
}

impl ImgbbClient {
    pub fn new(config: &ImgbbConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            upload_url: config.upload_url.clone(),
        }
    }

    fn parse_success(body: &Value) -> Option<String> {
        let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
        if !success {
            return None;
        }
        body.pointer("/data/url")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

#[async_trait]
impl ImageUploader for ImgbbClient {
    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> UploadResult<UploadedImage> {
        let part = reqwest::multipart::Part::bytes(data)
            .file_name(filename.to_string())
            .mime_str(content_type)
            .map_err(UploadError::transport)?;
        let form = reqwest::multipart::Form::new()
            .part("image", part)
            .text("key", self.api_key.clone());

        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(UploadError::transport)?;

        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        match Self::parse_success(&body) {
            Some(url) if status.is_success() => {
                tracing::debug!(%url, "Image uploaded");
                Ok(UploadedImage { url, raw: body })
            }
            _ => {
                tracing::warn!(%status, "Image host rejected upload");
                Err(UploadError::rejected(
                    "Failed to upload image to ImgBB",
                    body.get("error").cloned(),
                ))
            }
        }
    }
}
