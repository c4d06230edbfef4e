use tracing::{info, warn};

use crate::{
    domain::{
        classification::advisor::OverrideAdvisor,
        common::{DietcheckConfig, LLMConfig, LlmProvider, services::Service},
    },
    infrastructure::llm::{GeminiLLMClient, OpenAILLMClient, RemoteLLMClient},
};

pub type DietcheckService = Service<RemoteLLMClient>;

pub fn create_service(config: DietcheckConfig) -> DietcheckService {
    let advisor = create_advisor(&config.llm);
    info!(
        advisor = advisor.kind(),
        concurrency = config.classification.advisor_concurrency,
        "diet classification service ready"
    );

    Service::new(advisor, config.classification.advisor_concurrency)
}

/// Resolves the configured provider into an advisor. Missing credentials or
/// a client that fails to build leave the advisor unavailable; startup
/// continues and every product is decided by the heuristic.
pub fn create_advisor(config: &LLMConfig) -> OverrideAdvisor<RemoteLLMClient> {
    let (Some(provider), Some(model)) = (config.provider, config.model_name()) else {
        info!("no LLM provider configured, advisor disabled");
        return OverrideAdvisor::Unavailable;
    };

    let client = match provider {
        LlmProvider::HuggingFace => {
            info!(%model, "using local inference advisor");
            return OverrideAdvisor::LocalInference;
        }
        LlmProvider::OpenAI => {
            let Some(api_key) = credential(config.openai_api_key.as_deref()) else {
                warn!("OPENAI_API_KEY is not set, advisor disabled");
                return OverrideAdvisor::Unavailable;
            };
            OpenAILLMClient::new(
                api_key,
                model.clone(),
                config.openai_base_url.clone(),
                config.timeout,
            )
            .map(RemoteLLMClient::OpenAI)
        }
        LlmProvider::Google => {
            let Some(api_key) = credential(config.google_api_key.as_deref()) else {
                warn!("GOOGLE_API_KEY is not set, advisor disabled");
                return OverrideAdvisor::Unavailable;
            };
            GeminiLLMClient::new(
                api_key,
                model.clone(),
                config.gemini_base_url.clone(),
                config.timeout,
            )
            .map(RemoteLLMClient::Gemini)
        }
    };

    match client {
        Ok(client) => {
            info!(provider = client.provider_name(), %model, "using remote advisor");
            OverrideAdvisor::remote(client, config.timeout)
        }
        Err(e) => {
            warn!(%provider, error = %e, "failed to initialize LLM client, advisor disabled");
            OverrideAdvisor::Unavailable
        }
    }
}

fn credential(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ClassificationConfig;

    fn llm_config(provider: Option<LlmProvider>) -> LLMConfig {
        LLMConfig {
            provider,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_provider_is_unavailable() {
        assert!(matches!(
            create_advisor(&llm_config(None)),
            OverrideAdvisor::Unavailable
        ));
    }

    #[test]
    fn test_missing_credentials_are_unavailable() {
        let openai = llm_config(Some(LlmProvider::OpenAI));
        assert!(matches!(create_advisor(&openai), OverrideAdvisor::Unavailable));

        let google = LLMConfig {
            google_api_key: Some("   ".to_string()),
            ..llm_config(Some(LlmProvider::Google))
        };
        assert!(matches!(create_advisor(&google), OverrideAdvisor::Unavailable));
    }

    #[test]
    fn test_credentials_select_remote_client() {
        let openai = LLMConfig {
            openai_api_key: Some("sk-test".to_string()),
            ..llm_config(Some(LlmProvider::OpenAI))
        };
        match create_advisor(&openai) {
            OverrideAdvisor::Remote { client, timeout } => {
                assert_eq!(client.provider_name(), "openai");
                assert_eq!(timeout, openai.timeout);
            }
            other => panic!("expected remote advisor, got {}", other.kind()),
        }

        let google = LLMConfig {
            google_api_key: Some("g-test".to_string()),
            ..llm_config(Some(LlmProvider::Google))
        };
        match create_advisor(&google) {
            OverrideAdvisor::Remote { client, .. } => assert_eq!(client.provider_name(), "google"),
            other => panic!("expected remote advisor, got {}", other.kind()),
        }
    }

    #[test]
    fn test_huggingface_uses_local_inference() {
        assert!(matches!(
            create_advisor(&llm_config(Some(LlmProvider::HuggingFace))),
            OverrideAdvisor::LocalInference
        ));
    }

    #[test]
    fn test_create_service_clamps_concurrency() {
        let service = create_service(DietcheckConfig {
            llm: llm_config(None),
            classification: ClassificationConfig {
                advisor_concurrency: 0,
            },
        });

        assert!(!service.advisor().is_available());
        assert_eq!(service.advisor_concurrency, 1);
    }
}
