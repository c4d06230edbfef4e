use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::{debug, info};

use crate::domain::{
    classification::{
        entities::{ClassificationResult, Opinion, Product},
        ports::{DietClassificationService, LLMClient},
        scoring::score_product,
        value_objects::ClassifyBatchInput,
    },
    common::services::Service,
};

impl<L> DietClassificationService for Service<L>
where
    L: LLMClient,
{
    async fn classify_batch(&self, input: ClassifyBatchInput) -> Vec<ClassificationResult> {
        // Bounds in-flight advisor calls for this batch only.
        let permits = Semaphore::new(self.advisor_concurrency);

        let results = join_all(
            input
                .products
                .iter()
                .map(|product| self.classify_product(product, &permits)),
        )
        .await;

        let diet_count = results.iter().filter(|r| r.is_diet).count();
        info!(
            products = results.len(),
            diet = diet_count,
            advisor = self.advisor.kind(),
            "classified batch"
        );

        results
    }
}

impl<L> Service<L>
where
    L: LLMClient,
{
    async fn classify_product(&self, product: &Product, permits: &Semaphore) -> ClassificationResult {
        let verdict = score_product(product);

        let opinion = if self.advisor.is_available() {
            // A closed semaphore only drops the bound; the call still happens.
            let _permit = permits.acquire().await.ok();
            self.advisor.advise(product, verdict.is_diet).await
        } else {
            Opinion::Abstain
        };

        let is_diet = opinion.resolve(verdict.is_diet);
        if is_diet != verdict.is_diet {
            debug!(
                product_id = %product.id,
                heuristic = verdict.is_diet,
                "advisor overrode heuristic"
            );
        }

        // The reason always describes the heuristic, even when overridden.
        ClassificationResult {
            id: product.id.clone(),
            is_diet,
            reason: Some(verdict.reason),
        }
    }
}
