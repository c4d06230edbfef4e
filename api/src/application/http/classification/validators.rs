use dietcheck_core::domain::classification::entities::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ClassifyBatchRequest {
    #[validate(length(max = 1000, message = "products must contain at most 1000 items"))]
    pub products: Vec<Product>,
}
