use std::sync::Arc;
use futures::future::try_join_all;
use shared::breakdown::{breakdown, total_votes};
use shared::error::ValidationError;
use shared::models::{AnswerShare, Badge, VoteRequest};
use shared::validation::validate_vote_request;
use tracing::debug;
use crate::store::{PollStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum VoteError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Records votes and computes per-answer breakdowns. Built once at startup
/// and shared across requests as managed state.
#[derive(Clone)]
pub struct VoteProcessor {
    store: Arc<dyn PollStore>,
}

impl VoteProcessor {
    pub fn new(store: Arc<dyn PollStore>) -> Self {
        Self { store }
    }

    /// Stores the user's answer for the card, replacing any earlier answer,
    /// and returns the card's breakdown including this vote.
    pub async fn cast_vote(&self, user_id: &str, request: &VoteRequest) -> Result<Vec<AnswerShare>, VoteError> {
        let vote = validate_vote_request(request)?;

        self.store.record_vote(user_id, &vote.card_id, &vote.answer).await?;
        debug!("Recorded vote on {}", vote.card_id);

        Ok(self.breakdown(&vote.card_id).await?)
    }

    /// One badge per card the user has answered, each with the card's
    /// current breakdown. Empty when the user never voted.
    pub async fn progress(&self, user_id: &str) -> Result<Vec<Badge>, VoteError> {
        let responses = self.store.user_responses(user_id).await?;

        let badges = try_join_all(responses.into_iter().map(|response| async move {
            let percentages = self.breakdown(&response.card_id).await?;
            Ok::<_, StoreError>(Badge {
                card_id: response.card_id,
                user_answer: response.answer,
                percentages,
            })
        }))
        .await?;

        Ok(badges)
    }

    pub async fn breakdown(&self, card_id: &str) -> Result<Vec<AnswerShare>, StoreError> {
        let counts = self.store.answer_counts(card_id).await?;
        let shares = breakdown(&counts);
        debug!("Breakdown for {} over {} votes", card_id, total_votes(&shares));
        Ok(shares)
    }
}
