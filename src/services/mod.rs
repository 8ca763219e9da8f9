pub mod answer_service;
pub mod question_service;
