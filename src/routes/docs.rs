use axum::Json;
use utoipa::OpenApi;

use crate::dto::{
    answer_dto::{AnswerPayload, AnswerResponse},
    question_dto::{QuestionPayload, QuestionResponse},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::question::list_questions,
        crate::routes::question::create_question,
        crate::routes::question::get_question,
        crate::routes::question::update_question,
        crate::routes::question::delete_question,
        crate::routes::answer::list_answers,
        crate::routes::answer::create_answer,
        crate::routes::answer::update_answer,
        crate::routes::answer::delete_answer,
    ),
    components(schemas(AnswerPayload, AnswerResponse, QuestionPayload, QuestionResponse)),
    tags(
        (name = "questions", description = "Question maintenance"),
        (name = "answers", description = "Answers nested under a question")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
