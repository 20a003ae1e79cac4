use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use shared::models::{AnswerCount, ResponseRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),
    #[error("Failed to acquire store lock")]
    LockFailed,
}

/// Persistence for users and their poll responses.
///
/// Implementations own the (user, card) uniqueness rule: recording a vote for
/// a pair that already has a response replaces its answer.
#[rocket::async_trait]
pub trait PollStore: Send + Sync {
    /// Creates the user if absent, then creates or overwrites the response.
    /// Both writes happen atomically.
    async fn record_vote(&self, user_id: &str, card_id: &str, answer: &str) -> Result<(), StoreError>;

    /// Distinct answers recorded for a card with their counts, in no
    /// particular order.
    async fn answer_counts(&self, card_id: &str) -> Result<Vec<AnswerCount>, StoreError>;

    /// Every response stored for the user, oldest first.
    async fn user_responses(&self, user_id: &str) -> Result<Vec<ResponseRecord>, StoreError>;
}

#[derive(Debug, Default)]
struct MemoryTables {
    users: HashSet<String>,
    // keyed by (user_id, card_id); the sequence number keeps first-vote order
    responses: HashMap<(String, String), (u64, String)>,
    next_seq: u64,
}

/// In-process store backing the service and HTTP tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<MemoryTables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.tables.lock().map(|t| t.users.len()).unwrap_or(0)
    }

    pub fn response_count(&self) -> usize {
        self.tables.lock().map(|t| t.responses.len()).unwrap_or(0)
    }
}

#[rocket::async_trait]
impl PollStore for MemoryStore {
    async fn record_vote(&self, user_id: &str, card_id: &str, answer: &str) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().map_err(|_| StoreError::LockFailed)?;
        let MemoryTables { users, responses, next_seq } = &mut *tables;
        users.insert(user_id.to_string());

        responses
            .entry((user_id.to_string(), card_id.to_string()))
            .and_modify(|(_, existing)| *existing = answer.to_string())
            .or_insert_with(|| {
                let seq = *next_seq;
                *next_seq += 1;
                (seq, answer.to_string())
            });
        Ok(())
    }

    async fn answer_counts(&self, card_id: &str) -> Result<Vec<AnswerCount>, StoreError> {
        let tables = self.tables.lock().map_err(|_| StoreError::LockFailed)?;
        let mut counts: HashMap<&str, i64> = HashMap::new();
        for ((_, card), (_, answer)) in tables.responses.iter() {
            if card == card_id {
                *counts.entry(answer.as_str()).or_insert(0) += 1;
            }
        }

        Ok(counts
            .into_iter()
            .map(|(answer, count)| AnswerCount { answer: answer.to_string(), count })
            .collect())
    }

    async fn user_responses(&self, user_id: &str) -> Result<Vec<ResponseRecord>, StoreError> {
        let tables = self.tables.lock().map_err(|_| StoreError::LockFailed)?;
        let mut rows: Vec<_> = tables
            .responses
            .iter()
            .filter(|((user, _), _)| user == user_id)
            .map(|((user, card), (seq, answer))| {
                (*seq, ResponseRecord {
                    user_id: user.clone(),
                    card_id: card.clone(),
                    answer: answer.clone(),
                })
            })
            .collect();
        rows.sort_by_key(|(seq, _)| *seq);

        Ok(rows.into_iter().map(|(_, record)| record).collect())
    }
}
