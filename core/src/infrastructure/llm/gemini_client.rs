use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{classification::ports::LLMClient, common::entities::app_errors::CoreError};

#[derive(Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

impl std::fmt::Debug for GeminiLLMClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiLLMClient")
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

impl GeminiLLMClient {
    pub fn new(
        api_key: String,
        model_name: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, CoreError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            CoreError::InvalidConfiguration(format!("failed to build Gemini HTTP client: {}", e))
        })?;

        Ok(Self {
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // reqwest errors carry the URL, which holds the key
                let e = e.without_url();
                tracing::debug!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::debug!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::debug!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_text(&self, prompt: String) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig { temperature: 0.0 }),
        };

        self.call_gemini_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{Json, Router, extract::Query, http::StatusCode, routing::post};
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn test_request_shape() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "Is oatmeal healthy?".to_string(),
                }],
            }],
            generation_config: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "contents": [{ "parts": [{ "text": "Is oatmeal healthy?" }] }] })
        );
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GeminiResponse = serde_json::from_str(r#"{"promptFeedback":{}}"#).unwrap();
        assert!(response.candidates.is_empty());
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = GeminiLLMClient::new(
            "key".to_string(),
            "gemini-1.5-flash".to_string(),
            "http://localhost:9000/v1beta/".to_string(),
            Duration::from_secs(1),
        )
        .unwrap();

        assert_eq!(client.base_url, "http://localhost:9000/v1beta");
    }

    const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{addr}/v1beta")
    }

    fn client(base_url: String, timeout: Duration) -> GeminiLLMClient {
        GeminiLLMClient::new(
            "g-secret".to_string(),
            "gemini-1.5-flash".to_string(),
            base_url,
            timeout,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_generate_text_returns_first_part() {
        let router = Router::new().route(
            GENERATE_PATH,
            post(
                |Query(params): Query<HashMap<String, String>>, Json(body): Json<Value>| async move {
                    let echo = format!(
                        "{} {} {}",
                        params.get("key").cloned().unwrap_or_default(),
                        body["generation_config"]["temperature"],
                        body["contents"][0]["parts"][0]["text"].as_str().unwrap_or_default(),
                    );
                    Json(json!({
                        "candidates": [{ "content": { "parts": [{ "text": echo }, { "text": "ignored" }] } }]
                    }))
                },
            ),
        );
        let base_url = serve(router).await;

        let answer = client(base_url, Duration::from_secs(5))
            .generate_text("Is kale healthy?".to_string())
            .await;

        assert_eq!(answer, Ok("g-secret 0.0 Is kale healthy?".to_string()));
    }

    #[tokio::test]
    async fn test_error_status_is_an_error() {
        let router = Router::new().route(
            GENERATE_PATH,
            post(|| async { (StatusCode::TOO_MANY_REQUESTS, "quota exceeded") }),
        );
        let base_url = serve(router).await;

        let result = client(base_url, Duration::from_secs(5))
            .generate_text("prompt".to_string())
            .await;

        match result {
            Err(CoreError::ExternalServiceError(message)) => {
                assert!(message.contains("429"));
                assert!(message.contains("quota exceeded"));
            }
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_candidates_is_an_error() {
        let router = Router::new().route(
            GENERATE_PATH,
            post(|| async { Json(json!({ "promptFeedback": { "blockReason": "SAFETY" } })) }),
        );
        let base_url = serve(router).await;

        let result = client(base_url, Duration::from_secs(5))
            .generate_text("prompt".to_string())
            .await;

        assert_eq!(
            result,
            Err(CoreError::ExternalServiceError("No response from LLM".to_string()))
        );
    }

    #[tokio::test]
    async fn test_client_timeout_hides_key() {
        let router = Router::new().route(
            GENERATE_PATH,
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({}))
            }),
        );
        let base_url = serve(router).await;

        let result = client(base_url, Duration::from_millis(100))
            .generate_text("prompt".to_string())
            .await;

        match result {
            Err(CoreError::ExternalServiceError(message)) => {
                assert!(!message.contains("g-secret"));
            }
            other => panic!("expected provider error, got {:?}", other),
        }
    }
}
