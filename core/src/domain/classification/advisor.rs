use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{
    classification::{
        entities::{Opinion, Product},
        local_inference,
        ports::LLMClient,
        prompt::{build_advice_prompt, parse_answer},
    },
    common::entities::app_errors::CoreError,
};

/// Second opinion on a heuristic decision.
///
/// Built once at startup from configuration and shared read-only by every
/// request. Exactly one variant is active for the lifetime of the process.
#[derive(Debug)]
pub enum OverrideAdvisor<L> {
    /// No provider configured, or its client could not be built.
    Unavailable,
    /// Remote text generation provider, bounded by `timeout`.
    Remote { client: L, timeout: Duration },
    /// In-process keyword and nutrition judgement; never calls out.
    LocalInference,
}

impl<L> OverrideAdvisor<L>
where
    L: LLMClient,
{
    pub fn remote(client: L, timeout: Duration) -> Self {
        Self::Remote { client, timeout }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, Self::Unavailable)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unavailable => "unavailable",
            Self::Remote { .. } => "remote",
            Self::LocalInference => "local_inference",
        }
    }

    /// Asks the configured provider about `product`. Every failure is
    /// returned as an error; nothing is retried.
    pub async fn consult(&self, product: &Product, proposed: bool) -> Result<Opinion, CoreError> {
        match self {
            Self::Unavailable => Err(CoreError::AdvisorUnavailable),
            Self::LocalInference => Ok(Opinion::from(local_inference::judge(product))),
            Self::Remote { client, timeout } => {
                let prompt = build_advice_prompt(product, proposed);

                let answer = tokio::time::timeout(*timeout, client.generate_text(prompt))
                    .await
                    .map_err(|_| CoreError::Timeout(timeout.as_millis()))??;

                parse_answer(&answer)
                    .map(Opinion::from)
                    .ok_or_else(|| CoreError::UnrecognizedAnswer(preview(&answer)))
            }
        }
    }

    /// Same as [`consult`](Self::consult), but any error becomes
    /// [`Opinion::Abstain`]. This is the only place advisor failures are absorbed.
    pub async fn advise(&self, product: &Product, proposed: bool) -> Opinion {
        match self.consult(product, proposed).await {
            Ok(opinion) => {
                debug!(product_id = %product.id, ?opinion, "advisor answered");
                opinion
            }
            Err(CoreError::AdvisorUnavailable) => Opinion::Abstain,
            Err(e) => {
                warn!(product_id = %product.id, error = %e, "advisor abstained");
                Opinion::Abstain
            }
        }
    }
}

fn preview(answer: &str) -> String {
    answer.trim().chars().take(40).collect()
}
