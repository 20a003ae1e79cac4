use crate::error::{Result, ValidationError};
use crate::models::{Vote, VoteRequest};

pub const MAX_IDENTITY_TOKEN_LENGTH: usize = 128;

/// Accepts a vote only when both `cardId` and `answer` are present and non-empty.
pub fn validate_vote_request(request: &VoteRequest) -> Result<Vote> {
    match (request.card_id.as_deref(), request.answer.as_deref()) {
        (Some(card_id), Some(answer)) if !card_id.is_empty() && !answer.is_empty() => Ok(Vote {
            card_id: card_id.to_string(),
            answer: answer.to_string(),
        }),
        _ => Err(ValidationError::MissingField),
    }
}

pub fn is_valid_identity_token(token: &str) -> bool {
    !token.is_empty()
        && token.len() <= MAX_IDENTITY_TOKEN_LENGTH
        && token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
