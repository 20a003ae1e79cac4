use serde::{Serialize, Deserialize};

/// Body of `POST /vote`. Both fields are optional on the wire so a missing
/// field is reported as a validation error rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    #[serde(default)]
    pub card_id: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

/// A vote that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub card_id: String,
    pub answer: String,
}

/// Number of recorded responses carrying one answer for a card.
#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerCount {
    pub answer: String,
    pub count: i64,
}

/// One user's stored answer to one card's question.
#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    pub user_id: String,
    pub card_id: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerShare {
    pub answer: String,
    pub count: i64,
    pub percentage: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub success: bool,
    pub percentages: Vec<AnswerShare>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub card_id: String,
    pub user_answer: String,
    pub percentages: Vec<AnswerShare>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub badges: Vec<Badge>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    pub earned: bool,
    pub clickable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: Option<String>,
    pub answers: Vec<String>,
    pub clickable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardsResponse {
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardDetail {
    pub card: Card,
    pub question: Option<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

