use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use dietcheck_core::domain::common::{
    ClassificationConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_OPENAI_BASE_URL, DietcheckConfig,
    LLMConfig, LlmProvider,
};
use tracing::warn;

#[derive(Debug, Clone, Parser)]
#[command(name = "dietcheck-api", version, about = "Diet classification service")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub classification: ClassificationArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 8000)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        num_args = 0..
    )]
    pub allowed_origins: Vec<String>,

    /// Serve Prometheus metrics at `{root_path}/metrics`
    #[arg(
        long = "metrics",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub metrics: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    /// One of `openai`, `google`, `huggingface` or `none`
    #[arg(long = "llm-provider", env = "LLM_PROVIDER", default_value = "google")]
    pub provider: String,

    #[arg(long = "llm-model", env = "LLM_MODEL")]
    pub model: Option<String>,

    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long = "google-api-key", env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub google_api_key: Option<String>,

    #[arg(long = "openai-base-url", env = "OPENAI_BASE_URL", default_value = DEFAULT_OPENAI_BASE_URL)]
    pub openai_base_url: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ClassificationArgs {
    #[arg(long = "advisor-concurrency", env = "ADVISOR_CONCURRENCY", default_value_t = 8)]
    pub advisor_concurrency: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<LlmArgs> for LLMConfig {
    fn from(args: LlmArgs) -> Self {
        let provider = LlmProvider::from_selector(&args.provider).unwrap_or_else(|e| {
            warn!("{}, advisor disabled", e);
            None
        });

        LLMConfig {
            provider,
            model: args.model,
            openai_api_key: args.openai_api_key,
            google_api_key: args.google_api_key,
            openai_base_url: args.openai_base_url,
            gemini_base_url: args.gemini_base_url,
            timeout: Duration::from_secs(args.timeout_secs),
        }
    }
}

impl From<Args> for DietcheckConfig {
    fn from(args: Args) -> Self {
        DietcheckConfig {
            llm: LLMConfig::from(args.llm),
            classification: ClassificationConfig {
                advisor_concurrency: args.classification.advisor_concurrency,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("dietcheck-api").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_unknown_provider_disables_advisor() {
        let config = DietcheckConfig::from(parse(&["--llm-provider", "watson"]));
        assert_eq!(config.llm.provider, None);
    }

    #[test]
    fn test_provider_and_timeout_flags() {
        let config = DietcheckConfig::from(parse(&[
            "--llm-provider",
            "OpenAI",
            "--openai-api-key",
            "sk-test",
            "--llm-timeout-secs",
            "5",
            "--advisor-concurrency",
            "3",
        ]));

        assert_eq!(config.llm.provider, Some(LlmProvider::OpenAI));
        assert_eq!(config.llm.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.llm.timeout, Duration::from_secs(5));
        assert_eq!(config.classification.advisor_concurrency, 3);
    }

    #[test]
    fn test_allowed_origins_are_comma_separated() {
        let args = parse(&[
            "--allowed-origins",
            "http://localhost:3000,https://shop.example.com",
        ]);

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://localhost:3000", "https://shop.example.com"]
        );
    }
}
