// Review HTTP interface - maps the four /reviews routes onto a ReviewStore

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, warn};

use crate::{
    app_state::AppState,
    error::{AppError, AppResult},
    extractors::{ReviewId, ValidReview},
    models::{MessageResponse, Review},
};

// HTTP Handlers

pub async fn list_reviews_handler(State(state): State<AppState>) -> AppResult<Json<Vec<Review>>> {
    let reviews = state.store.list_all().await?;
    debug!(count = reviews.len(), "Listed reviews");
    Ok(Json(reviews))
}

pub async fn create_review_handler(
    State(state): State<AppState>,
    ValidReview(fields): ValidReview,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let review = state.store.create(fields).await?;
    info!(id = review.id, title = %review.title, "Review added");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Review added successfully!")),
    ))
}

pub async fn update_review_handler(
    State(state): State<AppState>,
    ReviewId(id): ReviewId,
    ValidReview(fields): ValidReview,
) -> AppResult<Json<MessageResponse>> {
    let review = state
        .store
        .update(id, fields)
        .await
        .inspect_err(|err| warn!(id, "Update rejected: {}", err))?;
    info!(id = review.id, title = %review.title, "Review updated");

    Ok(Json(MessageResponse::new("Review updated successfully!")))
}

pub async fn delete_review_handler(
    State(state): State<AppState>,
    ReviewId(id): ReviewId,
) -> AppResult<Json<MessageResponse>> {
    state
        .store
        .delete(id)
        .await
        .inspect_err(|err| warn!(id, "Delete rejected: {}", err))?;
    info!(id, "Review deleted");

    Ok(Json(MessageResponse::new("Review deleted successfully!")))
}

async fn not_found_handler() -> AppError {
    AppError::NotFound("Resource not found".to_string())
}

async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed("Method not allowed for this resource".to_string())
}

/// Routes only, no middleware.
pub fn create_review_router(state: AppState) -> Router {
    Router::new()
        .route("/reviews", get(list_reviews_handler).post(create_review_handler))
        .route("/reviews/{id}", put(update_review_handler).delete(delete_review_handler))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .with_state(state)
}

/// The full application: review routes behind request tracing and a
/// permissive CORS policy (any origin, method and header).
pub fn create_app(state: AppState) -> Router {
    create_review_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
