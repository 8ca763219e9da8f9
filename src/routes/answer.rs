use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::answer_dto::{AnswerPayload, AnswerResponse},
    error::Result,
    extract::{AppJson, AppPath, Id},
    AppState,
};

#[utoipa::path(
    get,
    path = "/questions/{question_id}/answers",
    params(
        ("question_id" = i64, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Answers of the question, empty when it does not exist", body = [AnswerResponse]),
        (status = 400, description = "Malformed question id")
    ),
    tag = "answers"
)]
#[axum::debug_handler]
pub async fn list_answers(
    State(state): State<AppState>,
    AppPath(Id(question_id)): AppPath<Id>,
) -> Result<impl IntoResponse> {
    let answers = state.answer_service.list_by_question(question_id).await?;
    let items: Vec<AnswerResponse> = answers.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/questions/{question_id}/answers",
    params(
        ("question_id" = i64, Path, description = "Question ID")
    ),
    request_body = AnswerPayload,
    responses(
        (status = 200, description = "Answer created", body = AnswerResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Question not found")
    ),
    tag = "answers"
)]
#[axum::debug_handler]
pub async fn create_answer(
    State(state): State<AppState>,
    AppPath(Id(question_id)): AppPath<Id>,
    AppJson(payload): AppJson<AnswerPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let answer = state
        .answer_service
        .create(question_id, payload.into_text())
        .await?;
    Ok(Json(AnswerResponse::from(answer)))
}

#[utoipa::path(
    put,
    path = "/questions/{question_id}/answers/{answer_id}",
    params(
        ("question_id" = i64, Path, description = "Question ID"),
        ("answer_id" = i64, Path, description = "Answer ID")
    ),
    request_body = AnswerPayload,
    responses(
        (status = 200, description = "Answer updated", body = AnswerResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Question or answer not found")
    ),
    tag = "answers"
)]
#[axum::debug_handler]
pub async fn update_answer(
    State(state): State<AppState>,
    AppPath(ids): AppPath<(Id, Id)>,
    AppJson(payload): AppJson<AnswerPayload>,
) -> Result<impl IntoResponse> {
    let (Id(question_id), Id(answer_id)) = ids;
    payload.validate()?;
    let answer = state
        .answer_service
        .update(question_id, answer_id, payload.into_text())
        .await?;
    Ok(Json(AnswerResponse::from(answer)))
}

#[utoipa::path(
    delete,
    path = "/questions/{question_id}/answers/{answer_id}",
    params(
        ("question_id" = i64, Path, description = "Question ID"),
        ("answer_id" = i64, Path, description = "Answer ID")
    ),
    responses(
        (status = 200, description = "Answer deleted"),
        (status = 404, description = "Question or answer not found")
    ),
    tag = "answers"
)]
#[axum::debug_handler]
pub async fn delete_answer(
    State(state): State<AppState>,
    AppPath(ids): AppPath<(Id, Id)>,
) -> Result<impl IntoResponse> {
    let (Id(question_id), Id(answer_id)) = ids;
    state.answer_service.delete(question_id, answer_id).await?;
    Ok(StatusCode::OK)
}
