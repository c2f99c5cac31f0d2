// src/error.rs
use rocket::http::{ContentType, Status};
use rocket::response::{self, Responder};
use rocket::serde::Serialize;
use rocket::{Request, Response};
use std::io::Cursor;
use thiserror::Error;
use tracing::{error, warn};

/// Failure kinds for the request pipeline. Client-side problems map to
/// 400 and never reach the completion provider; provider and parse
/// failures map to 500.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No resume provided (file or text required)")]
    MissingInput,
    #[error("Could not extract text from resume")]
    EmptyContent,
    #[error("{0}")]
    InvalidFormat(String),
    #[error("File size exceeds 10MB limit")]
    FileTooLarge,
    #[error("{0}")]
    Internal(String),
    #[error("{0}")]
    Gateway(String),
    #[error("{0}")]
    MalformedResponse(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::MissingInput
            | ApiError::EmptyContent
            | ApiError::InvalidFormat(_)
            | ApiError::FileTooLarge => Status::BadRequest,
            ApiError::Internal(_) | ApiError::Gateway(_) | ApiError::MalformedResponse(_) => {
                Status::InternalServerError
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::MissingInput => "MISSING_INPUT",
            ApiError::EmptyContent => "EMPTY_CONTENT",
            ApiError::InvalidFormat(_) => "INVALID_FORMAT",
            ApiError::FileTooLarge => "FILE_TOO_LARGE",
            ApiError::Internal(_) => "INTERNAL_ERROR",
            ApiError::Gateway(_) => "GATEWAY_ERROR",
            ApiError::MalformedResponse(_) => "MALFORMED_RESPONSE",
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub error_code: String,
}

impl ErrorBody {
    pub fn new(error: String, error_code: String) -> Self {
        Self {
            success: false,
            error,
            error_code,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();

        if status == Status::InternalServerError {
            error!("Request failed: {} ({})", self, self.code());
        } else {
            warn!("Rejected request: {} ({})", self, self.code());
        }

        let body = ErrorBody::new(self.to_string(), self.code().to_string());
        let json = serde_json::to_string(&body).map_err(|_| Status::InternalServerError)?;

        Response::build()
            .status(status)
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}
