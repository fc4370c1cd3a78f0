pub mod health;
pub mod upload;

use axum::{
    Router,
    routing::{get, post},
};

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/upload_resume/", post(upload::upload_resume_handler))
}
