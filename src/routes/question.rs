use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::question_dto::{QuestionPayload, QuestionResponse},
    error::Result,
    extract::{AppJson, AppPath, Id},
    AppState,
};

#[utoipa::path(
    get,
    path = "/questions",
    responses(
        (status = 200, description = "All questions", body = [QuestionResponse])
    ),
    tag = "questions"
)]
#[axum::debug_handler]
pub async fn list_questions(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let questions = state.question_service.list().await?;
    let items: Vec<QuestionResponse> = questions.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/questions",
    request_body = QuestionPayload,
    responses(
        (status = 200, description = "Question created", body = QuestionResponse),
        (status = 400, description = "Invalid payload")
    ),
    tag = "questions"
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    AppJson(payload): AppJson<QuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let question = state
        .question_service
        .create(payload.title.unwrap_or_default(), payload.description)
        .await?;
    Ok(Json(QuestionResponse::from(question)))
}

#[utoipa::path(
    get,
    path = "/questions/{question_id}",
    params(
        ("question_id" = i64, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question found", body = QuestionResponse),
        (status = 404, description = "Question not found")
    ),
    tag = "questions"
)]
#[axum::debug_handler]
pub async fn get_question(
    State(state): State<AppState>,
    AppPath(Id(question_id)): AppPath<Id>,
) -> Result<impl IntoResponse> {
    let question = state.question_service.get_by_id(question_id).await?;
    Ok(Json(QuestionResponse::from(question)))
}

#[utoipa::path(
    put,
    path = "/questions/{question_id}",
    params(
        ("question_id" = i64, Path, description = "Question ID")
    ),
    request_body = QuestionPayload,
    responses(
        (status = 200, description = "Question updated", body = QuestionResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Question not found")
    ),
    tag = "questions"
)]
#[axum::debug_handler]
pub async fn update_question(
    State(state): State<AppState>,
    AppPath(Id(question_id)): AppPath<Id>,
    AppJson(payload): AppJson<QuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let question = state
        .question_service
        .update(
            question_id,
            payload.title.unwrap_or_default(),
            payload.description,
        )
        .await?;
    Ok(Json(QuestionResponse::from(question)))
}

#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    params(
        ("question_id" = i64, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question and its answers deleted"),
        (status = 404, description = "Question not found")
    ),
    tag = "questions"
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    AppPath(Id(question_id)): AppPath<Id>,
) -> Result<impl IntoResponse> {
    state.question_service.delete(question_id).await?;
    Ok(StatusCode::OK)
}
