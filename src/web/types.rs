// src/web/types.rs
use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::serde::{Deserialize, Serialize};

/// Multipart upload for resume analysis. Exactly one of the two fields
/// must carry usable content; the handler enforces that.
#[derive(FromForm)]
pub struct ResumeUploadForm<'f> {
    pub file: Option<TempFile<'f>>,
    pub text: Option<String>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct MatchRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Clone, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct RecommendationRequest {
    pub jobs: Vec<Job>,
    pub profile: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct RoadmapRequest {
    pub resume_text: String,
    pub skills: Vec<String>,
    pub desired_role: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct InterviewQuestionRequest {
    pub resume_text: String,
    pub job_description: String,
    pub difficulty: String,
    #[serde(rename = "type")]
    pub question_type: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct InterviewEvaluationRequest {
    pub question: String,
    pub answer: String,
    pub job_description: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct AptitudeQuestionRequest {
    pub topic: String,
    pub difficulty: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct AptitudeEvaluationRequest {
    pub question: String,
    pub answer: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StatusResponse {
    pub status: &'static str,
    pub service: &'static str,
}
