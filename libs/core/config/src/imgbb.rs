use crate::{env_or_default, env_required, ConfigError, FromEnv};

/// Default ImgBB upload endpoint
pub const DEFAULT_UPLOAD_URL: &str = "https://api.imgbb.com/1/upload";

/// Configuration for the ImgBB image-hosting collaborator.
///
/// The API key is required and startup fails fast without it. The legacy
/// deployment shipped a hard-coded fallback key; that behavior is
/// intentionally not reproduced here.
#[derive(Clone, Debug)]
pub struct ImgbbConfig {
    pub api_key: String,
    pub upload_url: String,
}

impl ImgbbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
        }
    }
}

impl FromEnv for ImgbbConfig {
    /// Requires IMGBB_API_KEY; IMGBB_UPLOAD_URL is overridable for tests
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: env_required("IMGBB_API_KEY")?,
            upload_url: env_or_default("IMGBB_UPLOAD_URL", DEFAULT_UPLOAD_URL),
        })
    }
}
