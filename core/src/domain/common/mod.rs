use std::{fmt, str::FromStr, time::Duration};

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
pub mod services;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_ADVISOR_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_ADVISOR_CONCURRENCY: usize = 8;

#[derive(Clone, Debug)]
pub struct DietcheckConfig {
    pub llm: LLMConfig,
    pub classification: ClassificationConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// `None` disables the advisor entirely.
    pub provider: Option<LlmProvider>,
    pub model: Option<String>,
    pub openai_api_key: Option<String>,
    pub google_api_key: Option<String>,
    pub openai_base_url: String,
    pub gemini_base_url: String,
    pub timeout: Duration,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: None,
            model: None,
            openai_api_key: None,
            google_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: DEFAULT_ADVISOR_TIMEOUT,
        }
    }
}

impl LLMConfig {
    /// Model name for the selected provider, falling back to the provider default.
    pub fn model_name(&self) -> Option<String> {
        let provider = self.provider?;
        Some(
            self.model
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(provider.default_model())
                .to_string(),
        )
    }
}

#[derive(Clone, Debug)]
pub struct ClassificationConfig {
    pub advisor_concurrency: usize,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            advisor_concurrency: DEFAULT_ADVISOR_CONCURRENCY,
        }
    }
}

/// The closed set of advisor providers. Exactly one may be active per process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LlmProvider {
    OpenAI,
    Google,
    HuggingFace,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::OpenAI => "openai",
            LlmProvider::Google => "google",
            LlmProvider::HuggingFace => "huggingface",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            LlmProvider::OpenAI => "gpt-4o-mini",
            LlmProvider::Google => "gemini-1.5-flash",
            LlmProvider::HuggingFace => "microsoft/DialoGPT-medium",
        }
    }

    /// Parses a provider selector. `none`, `disabled` and the empty string
    /// select no provider.
    pub fn from_selector(selector: &str) -> Result<Option<Self>, CoreError> {
        match selector.trim().to_lowercase().as_str() {
            "" | "none" | "disabled" => Ok(None),
            other => other.parse().map(Some),
        }
    }
}

impl FromStr for LlmProvider {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(LlmProvider::OpenAI),
            "google" | "gemini" => Ok(LlmProvider::Google),
            "huggingface" | "local" => Ok(LlmProvider::HuggingFace),
            other => Err(CoreError::InvalidConfiguration(format!(
                "unknown LLM provider '{other}'"
            ))),
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
