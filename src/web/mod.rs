// src/web/mod.rs
pub mod handlers;
pub mod types;

pub use types::*;

use crate::completion::{CompletionGateway, GroqClient};
use crate::config::ProviderConfig;
use crate::error::{ApiError, ErrorBody};
use anyhow::{Context, Result};
use rocket::data::{Limits, ToByteUnit};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::http::{Header, Status};
use rocket::serde::json::{Json, Value};
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use std::sync::Arc;
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

// API routes

#[get("/")]
pub async fn status() -> Json<StatusResponse> {
    handlers::status_handler().await
}

#[post("/analyze-resume", data = "<upload>")]
pub async fn analyze_resume(
    upload: Form<ResumeUploadForm<'_>>,
    gateway: &State<Arc<dyn CompletionGateway>>,
) -> Result<Json<Value>, ApiError> {
    handlers::analyze_resume_handler(upload, gateway).await
}

#[post("/match-job", data = "<request>")]
pub async fn match_job(
    request: Json<MatchRequest>,
    gateway: &State<Arc<dyn CompletionGateway>>,
) -> Result<Json<Value>, ApiError> {
    handlers::match_job_handler(request, gateway).await
}

#[post("/chat", data = "<request>")]
pub async fn chat(
    request: Json<ChatRequest>,
    gateway: &State<Arc<dyn CompletionGateway>>,
) -> Result<Json<Value>, ApiError> {
    handlers::chat_handler(request, gateway).await
}

#[post("/recommend-jobs", data = "<request>")]
pub async fn recommend_jobs(
    request: Json<RecommendationRequest>,
    gateway: &State<Arc<dyn CompletionGateway>>,
) -> Result<Json<Value>, ApiError> {
    handlers::recommend_jobs_handler(request, gateway).await
}

#[post("/generate-roadmap", data = "<request>")]
pub async fn generate_roadmap(
    request: Json<RoadmapRequest>,
    gateway: &State<Arc<dyn CompletionGateway>>,
) -> Result<Json<Value>, ApiError> {
    handlers::generate_roadmap_handler(request, gateway).await
}

#[post("/generate-interview-question", data = "<request>")]
pub async fn generate_interview_question(
    request: Json<InterviewQuestionRequest>,
    gateway: &State<Arc<dyn CompletionGateway>>,
) -> Result<Json<Value>, ApiError> {
    handlers::generate_interview_question_handler(request, gateway).await
}

#[post("/evaluate-interview-answer", data = "<request>")]
pub async fn evaluate_interview_answer(
    request: Json<InterviewEvaluationRequest>,
    gateway: &State<Arc<dyn CompletionGateway>>,
) -> Result<Json<Value>, ApiError> {
    handlers::evaluate_interview_answer_handler(request, gateway).await
}

#[post("/generate-aptitude-question", data = "<request>")]
pub async fn generate_aptitude_question(
    request: Json<AptitudeQuestionRequest>,
    gateway: &State<Arc<dyn CompletionGateway>>,
) -> Result<Json<Value>, ApiError> {
    handlers::generate_aptitude_question_handler(request, gateway).await
}

#[post("/evaluate-aptitude-answer", data = "<request>")]
pub async fn evaluate_aptitude_answer(
    request: Json<AptitudeEvaluationRequest>,
    gateway: &State<Arc<dyn CompletionGateway>>,
) -> Result<Json<Value>, ApiError> {
    handlers::evaluate_aptitude_answer_handler(request, gateway).await
}

#[options("/<_..>")]
pub async fn preflight() -> Status {
    Status::Ok
}

// Error catchers

#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorBody> {
    Json(ErrorBody::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
    ))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorBody> {
    Json(ErrorBody::new(
        "Unknown endpoint".to_string(),
        "NOT_FOUND".to_string(),
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<ErrorBody> {
    Json(ErrorBody::new(
        "Request body is missing required fields or malformed".to_string(),
        "UNPROCESSABLE".to_string(),
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorBody> {
    Json(ErrorBody::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
    ))
}

/// Assemble the Rocket instance with the given gateway as managed
/// state. Kept separate from launch so tests can inject a stub.
pub fn build_rocket(gateway: Arc<dyn CompletionGateway>) -> Rocket<Build> {
    let limits = Limits::default()
        .limit("form", 10.mebibytes())
        .limit("data-form", 12.mebibytes())
        .limit("file", 12.mebibytes())
        .limit("string", 10.mebibytes())
        .limit("json", 10.mebibytes());

    let figment = rocket::Config::figment().merge(("limits", limits));

    rocket::custom(figment)
        .attach(Cors)
        .manage(gateway)
        .register("/", catchers![bad_request, not_found, unprocessable, internal_error])
        .mount(
            "/",
            routes![
                status,
                analyze_resume,
                match_job,
                chat,
                recommend_jobs,
                generate_roadmap,
                generate_interview_question,
                evaluate_interview_answer,
                generate_aptitude_question,
                evaluate_aptitude_answer,
                preflight,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: ProviderConfig) -> Result<()> {
    info!("Starting JobMate AI service");
    info!("Provider: {} (model: {})", config.base_url, config.model);

    let gateway: Arc<dyn CompletionGateway> = Arc::new(GroqClient::new(config)?);

    let _rocket = build_rocket(gateway)
        .launch()
        .await
        .context("Rocket server failed")?;

    Ok(())
}
