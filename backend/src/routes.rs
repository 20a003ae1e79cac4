use rocket::{State, get, post, http::Status, serde::json::{self, Json}};
use tracing::{error, warn, instrument};
use shared::catalog;
use shared::models::*;
use crate::{
    error::ApiError,
    identity::Identity,
    processor::VoteProcessor,
};

pub struct AppState {
    pub processor: VoteProcessor,
}

impl AppState {
    pub fn new(processor: VoteProcessor) -> Self {
        Self { processor }
    }
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

#[instrument(skip(state, identity, request), fields(new_user = identity.is_new))]
#[post("/vote", data = "<request>")]
pub async fn cast_vote(
    state: &State<AppState>,
    identity: Identity,
    request: Result<Json<VoteRequest>, json::Error<'_>>,
) -> Result<Json<VoteResponse>, ApiError> {
    let request = match request {
        Ok(body) => body.into_inner(),
        Err(e) => {
            warn!("Rejected vote body: {}", e);
            return Err(ApiError::BadRequest(format!("Invalid vote body: {}", e)));
        }
    };

    match state.processor.cast_vote(&identity.user_id, &request).await {
        Ok(percentages) => Ok(Json(VoteResponse { success: true, percentages })),
        Err(e) => {
            let err = ApiError::from_vote_error(e, "Failed to save vote");
            if let ApiError::Internal(message) = &err {
                error!("Vote endpoint error: {}", message);
            }
            Err(err)
        }
    }
}

#[instrument(skip(state, identity), fields(new_user = identity.is_new))]
#[get("/progress")]
pub async fn get_progress(
    state: &State<AppState>,
    identity: Identity,
) -> Result<Json<ProgressResponse>, ApiError> {
    state.processor
        .progress(&identity.user_id)
        .await
        .map(|badges| Json(ProgressResponse { badges }))
        .map_err(|e| {
            error!("Progress endpoint error: {}", e);
            ApiError::from_vote_error(e, "Failed to fetch progress")
        })
}

#[get("/cards")]
pub async fn list_cards() -> Json<CardsResponse> {
    Json(CardsResponse { cards: catalog::cards() })
}

#[get("/cards/<id>")]
pub async fn get_card(id: &str) -> Result<Json<CardDetail>, ApiError> {
    let card = catalog::find_card(id)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown card: {}", id)))?;

    Ok(Json(CardDetail {
        question: catalog::question_for_card(&card.id),
        card,
    }))
}

#[get("/questions")]
pub async fn list_questions() -> Json<QuestionsResponse> {
    Json(QuestionsResponse { questions: catalog::questions() })
}
