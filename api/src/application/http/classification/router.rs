use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::handlers::classify_batch::{__path_classify_batch, classify_batch};
use crate::application::http::server::app_state::AppState;

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(paths(classify_batch))]
pub struct ClassificationApiDoc;

pub fn classification_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/classify/batch", state.args.server.root_path),
            post(classify_batch),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
