use sqlx::PgPool;
use shared::models::{AnswerCount, ResponseRecord};
use crate::store::{PollStore, StoreError};

/// PostgreSQL-backed store. The pool is created once at startup and shared by
/// every request.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[rocket::async_trait]
impl PollStore for PgStore {
    async fn record_vote(&self, user_id: &str, card_id: &str, answer: &str) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO users (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO responses (user_id, card_id, answer)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id, card_id)
             DO UPDATE SET answer = EXCLUDED.answer, updated_at = NOW()",
        )
        .bind(user_id)
        .bind(card_id)
        .bind(answer)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn answer_counts(&self, card_id: &str) -> Result<Vec<AnswerCount>, StoreError> {
        let counts = sqlx::query_as::<_, AnswerCount>(
            "SELECT answer, COUNT(*) AS count FROM responses WHERE card_id = $1 GROUP BY answer",
        )
        .bind(card_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(counts)
    }

    async fn user_responses(&self, user_id: &str) -> Result<Vec<ResponseRecord>, StoreError> {
        let records = sqlx::query_as::<_, ResponseRecord>(
            "SELECT user_id, card_id, answer FROM responses
             WHERE user_id = $1
             ORDER BY created_at, card_id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
