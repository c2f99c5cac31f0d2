// src/web/handlers/chat_handlers.rs
use crate::completion::CompletionGateway;
use crate::error::ApiError;
use crate::prompts;
use crate::web::types::ChatRequest;
use rocket::serde::json::{json, Json, Value};
use rocket::State;
use std::sync::Arc;
use tracing::info;

/// The one capability that relays raw text instead of parsed JSON: the
/// provider reply is wrapped as `{"message": <text>}`.
pub async fn chat_handler(
    request: Json<ChatRequest>,
    gateway: &State<Arc<dyn CompletionGateway>>,
) -> Result<Json<Value>, ApiError> {
    info!("Chat request with {} prior turns", request.history.len());

    let completion = prompts::chat(&request.message, &request.history);
    let reply = gateway.complete(&completion).await?;
    Ok(Json(json!({ "message": reply })))
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
    fn test_chat_replays_full_history_to_provider() {
        let stub = Arc::new(StubGateway::replying("Remote roles are a great fit."));
        let client = client(stub.clone());

        let response = client
            .post("/chat")
            .header(ContentType::JSON)
            .body(
                r#"{
                    "message": "What about remote roles?",
                    "history": [
                        {"role": "user", "content": "Hi"},
                        {"role": "assistant", "content": "Hello! How can I help?"},
                        {"role": "user", "content": "I need a job"}
                    ]
                }"#,
            )
            .dispatch();

        assert_eq!(response.status(), Status::Ok);

        let recorded = stub.recorded();
        assert_eq!(recorded.len(), 1);
        let messages = &recorded[0].messages;
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].content, "Hi");
        assert_eq!(messages[2].content, "Hello! How can I help?");
        assert_eq!(messages[3].content, "I need a job");
        assert_eq!(messages[4].content, "What about remote roles?");
    }

    #[test]
    fn test_chat_wraps_raw_reply() {
        let stub = Arc::new(StubGateway::replying("Here is some career advice."));
        let client = client(stub.clone());

        let response = client
            .post("/chat")
            .header(ContentType::JSON)
            .body(r#"{"message": "Any advice?"}"#)
            .dispatch();

        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().unwrap();
        assert_eq!(body["message"], "Here is some career advice.");
        assert_eq!(stub.call_count(), 1);
    }
}
