//! Widget configuration, read from environment variables.
//!
//! Variables are looked up through a closure so parsing can be exercised
//! without touching the process environment.

use reqwest::Url;
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_SPEECH_LANG: &str = "en-US";
const DEFAULT_STUB_DELAY_MS: u64 = 800;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid base URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("Unknown backend mode {0:?} (expected \"live\" or \"stub\")")]
    UnknownMode(String),

    #[error("Invalid stub delay {0:?}: expected milliseconds")]
    InvalidDelay(String),

    #[error("Stub backend needs a native timer and is not available in the browser")]
    StubUnavailable,
}

// The stub backend sleeps on the tokio timer, which the browser lacks.
const STUB_AVAILABLE: bool = cfg!(not(target_arch = "wasm32"));

/// Whether replies come from the real backend or are simulated locally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendMode {
    Live,
    Stub { delay: Duration },
}

/// Fixed user-visible strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notices {
    pub no_answer: String,
    pub query_failed: String,
    pub listening: String,
    pub mic_error_prefix: String,
    pub speech_unsupported: String,
    pub upload_prefix: String,
    pub upload_succeeded: String,
    pub upload_failed: String,
}

impl Default for Notices {
    fn default() -> Self {
        Self {
            no_answer: "⚠️ No response from backend".to_string(),
            query_failed: "❌ Error connecting to backend".to_string(),
            listening: "🎤 Listening...".to_string(),
            mic_error_prefix: "❌ Mic error: ".to_string(),
            speech_unsupported: "❌ Speech Recognition not supported in this browser".to_string(),
            upload_prefix: "📂 Uploading: ".to_string(),
            upload_succeeded: "✅ PDF uploaded successfully!".to_string(),
            upload_failed: "❌ Failed to upload PDF".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct WidgetConfig {
    pub base_url: Url,
    pub ask_path: String,
    pub upload_path: String,
    pub mode: BackendMode,
    pub speech_lang: String,
    pub notices: Notices,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            ask_path: "/ask".to_string(),
            upload_path: "/upload".to_string(),
            mode: BackendMode::Live,
            speech_lang: DEFAULT_SPEECH_LANG.to_string(),
            notices: Notices::default(),
        }
    }
}

impl WidgetConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(value) = var("DOCCHAT_BASE_URL") {
            config.base_url = Url::parse(&value).map_err(|err| ConfigError::InvalidBaseUrl {
                reason: err.to_string(),
                value,
            })?;
        }

        if let Some(path) = var("DOCCHAT_ASK_PATH") {
            config.ask_path = path;
        }
        if let Some(path) = var("DOCCHAT_UPLOAD_PATH") {
            config.upload_path = path;
        }

        let delay = match var("DOCCHAT_STUB_DELAY_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidDelay(raw))?,
            None => Duration::from_millis(DEFAULT_STUB_DELAY_MS),
        };

        if let Some(mode) = var("DOCCHAT_BACKEND") {
            config.mode = parse_mode(mode, delay, STUB_AVAILABLE)?;
        }

        if let Some(lang) = var("DOCCHAT_SPEECH_LANG") {
            config.speech_lang = lang;
        }

        Ok(config)
    }

    pub fn ask_url(&self) -> String {
        join_endpoint(&self.base_url, &self.ask_path)
    }

    pub fn upload_url(&self) -> String {
        join_endpoint(&self.base_url, &self.upload_path)
    }
}

fn parse_mode(
    mode: String,
    delay: Duration,
    stub_available: bool,
) -> Result<BackendMode, ConfigError> {
    match mode.to_ascii_lowercase().as_str() {
        "live" => Ok(BackendMode::Live),
        "stub" if stub_available => Ok(BackendMode::Stub { delay }),
        "stub" => Err(ConfigError::StubUnavailable),
        _ => Err(ConfigError::UnknownMode(mode)),
    }
}

fn join_endpoint(base: &Url, path: &str) -> String {
    format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
