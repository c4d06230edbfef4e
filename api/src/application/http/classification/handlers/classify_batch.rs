use axum::extract::State;
use dietcheck_core::domain::classification::{
    entities::ClassificationResult, ports::DietClassificationService,
    value_objects::ClassifyBatchInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    classification::validators::ClassifyBatchRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassifyBatchResponse {
    pub results: Vec<ClassificationResult>,
}

#[utoipa::path(
    post,
    path = "/batch",
    tag = "classification",
    summary = "Classify a batch of products",
    description = "Decides for each product whether it is diet-friendly. Results come back in request order, one per product.",
    request_body = ClassifyBatchRequest,
    responses(
        (status = 200, body = ClassifyBatchResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse)
    )
)]
pub async fn classify_batch(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ClassifyBatchRequest>,
) -> Result<Response<ClassifyBatchResponse>, ApiError> {
    let results = state
        .service
        .classify_batch(ClassifyBatchInput {
            products: payload.products,
        })
        .await;

    Ok(Response::OK(ClassifyBatchResponse { results }))
}
