pub mod gemini_client;
pub mod openai_client;

pub use gemini_client::GeminiLLMClient;
pub use openai_client::OpenAILLMClient;

use crate::domain::{classification::ports::LLMClient, common::entities::app_errors::CoreError};

/// The remote providers a process can be configured with.
#[derive(Debug, Clone)]
pub enum RemoteLLMClient {
    OpenAI(OpenAILLMClient),
    Gemini(GeminiLLMClient),
}

impl RemoteLLMClient {
    pub fn provider_name(&self) -> &'static str {
        match self {
            RemoteLLMClient::OpenAI(_) => "openai",
            RemoteLLMClient::Gemini(_) => "google",
        }
    }
}

impl LLMClient for RemoteLLMClient {
    async fn generate_text(&self, prompt: String) -> Result<String, CoreError> {
        match self {
            RemoteLLMClient::OpenAI(client) => client.generate_text(prompt).await,
            RemoteLLMClient::Gemini(client) => client.generate_text(prompt).await,
        }
    }
}
