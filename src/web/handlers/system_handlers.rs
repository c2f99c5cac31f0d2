// src/web/handlers/system_handlers.rs
use crate::web::types::StatusResponse;
use rocket::serde::json::Json;

pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online",
        service: "JobMate AI Service",
    })
}

#[cfg(test)]
mod tests {
    use crate::completion::testing::StubGateway;
    use crate::web::build_rocket;
    use rocket::http::Status;
    use rocket::local::blocking::Client;
    use rocket::serde::json::Value;
    use std::sync::Arc;

    #[test]
    fn test_status_endpoint() {
        let stub = Arc::new(StubGateway::replying("{}"));
        let client = Client::tracked(build_rocket(stub)).expect("valid rocket instance");

        let response = client.get("/").dispatch();

        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().unwrap();
        assert_eq!(body["status"], "online");
        assert_eq!(body["service"], "JobMate AI Service");
    }
}
