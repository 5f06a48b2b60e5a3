use crate::handlers;
use crate::models::ErrorBody;
use crate::state::AppState;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::any::Any;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::error;

/// Only GET is served. Any other method on a known path gets the same 404 as
/// an unknown path.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).fallback(handlers::not_found))
        .route("/health", get(handlers::health).fallback(handlers::not_found))
        .route(
            "/report/overview",
            get(handlers::overview_report).fallback(handlers::not_found),
        )
        .route(
            "/report/member/:member_id",
            get(handlers::member_report).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic payload"
    };
    error!("unhandled error while serving request: {detail}");

    let body = ErrorBody {
        error: "Internal Server Error".to_string(),
        message: "Something went wrong!".to_string(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
