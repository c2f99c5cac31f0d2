// src/web/handlers/interview_handlers.rs
use crate::completion::{relay_json, CompletionGateway};
use crate::error::ApiError;
use crate::prompts;
use crate::web::types::{
    AptitudeEvaluationRequest, AptitudeQuestionRequest, InterviewEvaluationRequest,
    InterviewQuestionRequest,
};
use rocket::serde::json::{Json, Value};
use rocket::State;
use std::sync::Arc;

pub async fn generate_interview_question_handler(
    request: Json<InterviewQuestionRequest>,
    gateway: &State<Arc<dyn CompletionGateway>>,
) -> Result<Json<Value>, ApiError> {
    let completion = prompts::interview_questions(
        &request.resume_text,
        &request.job_description,
        &request.difficulty,
        &request.question_type,
    );
    let raw = gateway.complete(&completion).await?;
    Ok(Json(relay_json(&raw)?))
}

pub async fn evaluate_interview_answer_handler(
    request: Json<InterviewEvaluationRequest>,
    gateway: &State<Arc<dyn CompletionGateway>>,
) -> Result<Json<Value>, ApiError> {
    let completion = prompts::interview_evaluation(
        &request.question,
        &request.answer,
        &request.job_description,
    );
    let raw = gateway.complete(&completion).await?;
    Ok(Json(relay_json(&raw)?))
}

pub async fn generate_aptitude_question_handler(
    request: Json<AptitudeQuestionRequest>,
    gateway: &State<Arc<dyn CompletionGateway>>,
) -> Result<Json<Value>, ApiError> {
    let completion = prompts::aptitude_question(&request.topic, &request.difficulty);
    let raw = gateway.complete(&completion).await?;
    Ok(Json(relay_json(&raw)?))
}

pub async fn evaluate_aptitude_answer_handler(
    request: Json<AptitudeEvaluationRequest>,
    gateway: &State<Arc<dyn CompletionGateway>>,
) -> Result<Json<Value>, ApiError> {
    let completion = prompts::aptitude_evaluation(&request.question, &request.answer);
    let raw = gateway.complete(&completion).await?;
    Ok(Json(relay_json(&raw)?))
}
