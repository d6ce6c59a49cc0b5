use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ErrorDto,
    server::{
        controller::{guild::*, message::*},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Guild Log API", description = "Guild configuration and message logs for the chat bot"),
    tags(
        (name = "guild", description = "Per-guild bot configuration"),
        (name = "message", description = "Deleted and edited message logs")
    )
)]
struct ApiDoc;

/// Builds the API routes with request tracing, panic recovery and Swagger UI at
/// `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_prefix, update_prefix))
        .routes(routes!(reset_guild))
        .routes(routes!(store_deleted_message))
        .routes(routes!(get_recent_deleted_messages))
        .routes(routes!(store_edited_message))
        .routes(routes!(get_recent_edited_messages))
        .split_for_parts();

    with_middleware(router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api)))
}

/// Wraps routes in panic recovery and request tracing.
///
/// A panicking handler produces a 500 `ErrorDto` instead of dropping the connection.
fn with_middleware(router: Router<AppState>) -> Router<AppState> {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    tracing::error!("Request handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDto {
            error: "Internal server error".to_string(),
        }),
    )
        .into_response()
}
