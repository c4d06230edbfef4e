use std::future::Future;

use crate::domain::{
    classification::{entities::ClassificationResult, value_objects::ClassifyBatchInput},
    common::entities::app_errors::CoreError,
};

/// Text generation client for a remote LLM provider
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for batch diet classification
#[cfg_attr(test, mockall::automock)]
pub trait DietClassificationService: Send + Sync {
    /// Returns exactly one result per product, in input order. Never fails.
    fn classify_batch(
        &self,
        input: ClassifyBatchInput,
    ) -> impl Future<Output = Vec<ClassificationResult>> + Send;
}
