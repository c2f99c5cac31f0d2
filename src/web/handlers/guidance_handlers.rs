// src/web/handlers/guidance_handlers.rs
use crate::completion::{relay_json, CompletionGateway};
use crate::error::ApiError;
use crate::prompts;
use crate::web::types::{RecommendationRequest, RoadmapRequest};
use rocket::serde::json::{Json, Value};
use rocket::State;
use std::sync::Arc;
use tracing::info;

pub async fn recommend_jobs_handler(
    request: Json<RecommendationRequest>,
    gateway: &State<Arc<dyn CompletionGateway>>,
) -> Result<Json<Value>, ApiError> {
    info!("Recommending from {} candidate jobs", request.jobs.len());

    let completion = prompts::job_recommendation(&request.jobs, &request.profile);
    let raw = gateway.complete(&completion).await?;
    Ok(Json(relay_json(&raw)?))
}

pub async fn generate_roadmap_handler(
    request: Json<RoadmapRequest>,
    gateway: &State<Arc<dyn CompletionGateway>>,
) -> Result<Json<Value>, ApiError> {
    let completion =
        prompts::career_roadmap(&request.resume_text, &request.skills, &request.desired_role);
    let raw = gateway.complete(&completion).await?;
    Ok(Json(relay_json(&raw)?))
}

#[cfg(test)]
mod tests {
    use crate::completion::testing::StubGateway;
    use crate::web::build_rocket;
    use rocket::http::{ContentType, Status};
    use rocket::local::blocking::Client;
    use rocket::serde::json::Value;
    use std::sync::Arc;

    fn client(stub: Arc<StubGateway>) -> Client {
        Client::tracked(build_rocket(stub)).expect("valid rocket instance")
    }

    #[test]
    fn test_recommend_jobs_relays_provider_json() {
        let stub = Arc::new(StubGateway::replying(
            r#"{"recommendations":[{"jobId":"job-1","reason":"Strong skill overlap"}]}"#,
        ));
        let client = client(stub.clone());

        let response = client
            .post("/recommend-jobs")
            .header(ContentType::JSON)
            .body(
                r#"{
                    "jobs": [{"id": "job-1", "title": "Backend Engineer", "description": "Rust services", "skills": ["Rust"]}],
                    "profile": "Systems programmer"
                }"#,
            )
            .dispatch();

        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().unwrap();
        assert_eq!(body["recommendations"][0]["jobId"], "job-1");
        assert_eq!(stub.call_count(), 1);
    }

    #[test]
    fn test_generate_roadmap_gateway_failure_is_server_error() {
        let stub = Arc::new(StubGateway::failing("Provider returned 429: rate limited"));
        let client = client(stub.clone());

        let response = client
            .post("/generate-roadmap")
            .header(ContentType::JSON)
            .body(
                r#"{"resume_text": "Python developer", "skills": ["Python"], "desired_role": "ML Engineer"}"#,
            )
            .dispatch();

        assert_eq!(response.status(), Status::InternalServerError);
        let body: Value = response.into_json().unwrap();
        assert_eq!(body["error_code"], "GATEWAY_ERROR");
        assert_eq!(stub.call_count(), 1);
    }
}
