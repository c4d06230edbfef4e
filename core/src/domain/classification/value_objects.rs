use crate::domain::classification::entities::Product;

#[derive(Debug, Clone, Default)]
pub struct ClassifyBatchInput {
    pub products: Vec<Product>,
}
