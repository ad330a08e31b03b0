//! HTTP surface: router, extractors, handlers and the `{error}` response shape.

/// Handler error type and its JSON rendering
pub mod error;
/// Validating extractors
pub mod extract;
/// Route handlers
pub mod handlers;
/// Request body checks
pub mod validation;

use std::any::Any as PanicPayload;

use axum::Router;
use axum::response::{
    IntoResponse,
    Response,
};
use axum::routing::{
    delete,
    get,
    post,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{
    Any,
    CorsLayer,
};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
use handlers::{
    conversations,
    languages,
    phrases,
    translate,
    translations,
};

use crate::state::AppState;

/// Builds the application router.
///
/// With `allow_any_origin` every origin, method and header passes CORS; otherwise no
/// cross-origin request is allowed.
pub fn build_router(state: AppState, allow_any_origin: bool) -> Router {
    let cors = if allow_any_origin {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let api = Router::new()
        .route("/translate", post(translate::translate))
        .route("/detect-language", post(translate::detect_language))
        .route("/languages", get(languages::list))
        .route("/languages/download", post(languages::download))
        .route("/languages/downloaded", get(languages::downloaded))
        .route("/languages/:code", get(languages::get))
        .route("/offline-languages", get(languages::downloaded).post(languages::download))
        .route("/offline-languages/:code", delete(languages::remove))
        .route("/translations", get(translations::list).post(translations::create))
        .route("/translations/history", get(translations::list))
        .route("/translations/saved", get(translations::list_saved))
        .route(
            "/translations/:id",
            get(translations::get).patch(translations::update).delete(translations::delete),
        )
        .route("/translations/:id/save", post(translations::save))
        .route("/translations/:id/unsave", post(translations::unsave))
        .route("/saved-phrases", get(phrases::list).post(phrases::create))
        .route("/saved-phrases/:id", get(phrases::get).delete(phrases::delete))
        .route("/conversations", get(conversations::list).post(conversations::create))
        .route(
            "/conversations/:id",
            get(conversations::get)
                .patch(conversations::update_messages)
                .delete(conversations::delete),
        );

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Unknown route.
#[allow(clippy::unused_async)]
async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}

/// A handler panicked. Answered as an internal error; the payload is only logged.
fn panic_response(payload: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let detail = match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => payload
            .downcast::<&'static str>()
            .map_or_else(|_| "non-string panic payload".to_string(), |message| (*message).to_string()),
    };
    ApiError::Internal(format!("Handler panicked: {detail}")).into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use axum::body::Body;
    use axum::http::{
        Request,
        StatusCode,
    };
    use googletest::prelude::*;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    /// Always panics.
    async fn explode() -> &'static str {
        panic!("store invariant broken")
    }

    #[tokio::test]
    async fn panicking_handler_becomes_internal_error() {
        let app: Router = Router::new()
            .route("/boom", get(explode))
            .layer(CatchPanicLayer::custom(panic_response));

        let response =
            app.oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap()).await.unwrap();

        assert_that!(response.status(), eq(StatusCode::INTERNAL_SERVER_ERROR));
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_that!(
            String::from_utf8_lossy(&body).as_ref(),
            eq(r#"{"error":"Internal server error"}"#)
        );
    }
}
