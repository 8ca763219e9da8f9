pub mod answer;
pub mod docs;
pub mod health;
pub mod question;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{middleware::cors::permissive_cors, AppState};

const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .route(
            "/questions",
            get(question::list_questions).post(question::create_question),
        )
        .route(
            "/questions/:question_id",
            get(question::get_question)
                .put(question::update_question)
                .delete(question::delete_question),
        )
        .route(
            "/questions/:question_id/answers",
            get(answer::list_answers).post(answer::create_answer),
        )
        .route(
            "/questions/:question_id/answers/:answer_id",
            put(answer::update_answer).delete(answer::delete_answer),
        )
        .with_state(state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
