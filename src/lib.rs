pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

use std::sync::Arc;

use crate::services::{answer_service::AnswerService, question_service::QuestionService};
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub question_service: QuestionService,
    pub answer_service: AnswerService,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            question_service: QuestionService::new(store.clone()),
            answer_service: AnswerService::new(store),
        }
    }
}
