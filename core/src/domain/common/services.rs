use std::sync::Arc;

use crate::domain::classification::advisor::OverrideAdvisor;

/// Request-independent state shared by every handler.
#[derive(Debug)]
pub struct Service<L> {
    pub(crate) advisor: Arc<OverrideAdvisor<L>>,
    pub(crate) advisor_concurrency: usize,
}

impl<L> Service<L> {
    pub fn new(advisor: OverrideAdvisor<L>, advisor_concurrency: usize) -> Self {
        Self {
            advisor: Arc::new(advisor),
            advisor_concurrency: advisor_concurrency.max(1),
        }
    }

    pub fn advisor(&self) -> &OverrideAdvisor<L> {
        &self.advisor
    }
}

impl<L> Clone for Service<L> {
    fn clone(&self) -> Self {
        Self {
            advisor: Arc::clone(&self.advisor),
            advisor_concurrency: self.advisor_concurrency,
        }
    }
}
