// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::errors::ApiError;
use crate::domain::clients::DynBookClient;

/// Builds the application router
///
/// The route table is explicit: one entry per verb+path, all book routes
/// nested under `prefix`, the client injected as shared state. Both
/// `main` and the integration tests construct the app through here so
/// the surface under test is the surface that ships.
pub fn router(prefix: &str, client: DynBookClient) -> Router {
    let books = Router::new()
        .route("/", get(handlers::books::get_all_books))
        .route("/new", post(handlers::books::create_book))
        .route("/title/:title", get(handlers::books::get_books_by_title))
        .route("/author/:author", get(handlers::books::get_books_by_author))
        .route(
            "/:id",
            get(handlers::books::get_book_by_id)
                .put(handlers::books::update_book)
                .delete(handlers::books::delete_book),
        )
        .with_state(client);

    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest(prefix, books)
        .layer(CatchPanicLayer::custom(render_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Renders a handler panic as the structured unknown-failure response
///
/// Last line of defense: nothing escapes without an ApiError body.
fn render_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    };
    tracing::error!(panic = %detail, "handler panicked");

    ApiError::unknown_failure().into_response()
}
