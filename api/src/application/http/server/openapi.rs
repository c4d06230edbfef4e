use crate::application::http::{
    classification::router::ClassificationApiDoc, health::__path_health,
    server::api_entities::api_error::ApiErrorResponse,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dietcheck API"
    ),
    paths(health),
    components(schemas(ApiErrorResponse)),
    nest(
        (path = "/classify", api = ClassificationApiDoc),
    )
)]
pub struct ApiDoc;
