use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::error::ErrorResponse;
use thiserror::Error;
use crate::processor::VoteError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Server error carrying the underlying message, or `fallback` when that
    /// message is empty.
    pub fn internal(err: impl std::fmt::Display, fallback: &str) -> Self {
        let message = err.to_string();
        if message.trim().is_empty() {
            ApiError::Internal(fallback.to_string())
        } else {
            ApiError::Internal(message)
        }
    }

    pub fn from_vote_error(err: VoteError, fallback: &str) -> Self {
        match err {
            VoteError::Validation(e) => ApiError::BadRequest(e.to_string()),
            VoteError::Store(e) => ApiError::internal(e, fallback),
        }
    }

    pub fn status(&self) -> Status {
        match self {
            ApiError::BadRequest(_) => Status::BadRequest,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();

        rocket::Response::build_from(Json(ErrorResponse::new(self.to_string())).respond_to(req)?)
            .status(status)
            .ok()
    }
}
