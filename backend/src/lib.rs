pub mod processor;
pub mod routes;
pub mod store;
pub mod queries;
pub mod cors;
pub mod config;
pub mod error;
pub mod identity;
pub mod catchers;
pub use shared::{models::*, error::*};

use rocket::{Build, Rocket, catchers, routes};
use rocket::figment::Figment;
use crate::{
    catchers::{bad_request, internal_error, not_found},
    config::AppConfig,
    cors::CORS,
    routes::{all_options, cast_vote, get_card, get_progress, list_cards, list_questions, AppState},
};

/// Assembles the application on top of `figment` with the given state.
pub fn build_rocket(figment: Figment, state: AppState) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(AppConfig::fairing())
        .attach(CORS)
        .manage(state)
        .mount(
            "/api",
            routes![
                cast_vote,
                get_progress,
                list_cards,
                get_card,
                list_questions,
                all_options
            ],
        )
        .register(
            "/",
            catchers![
                bad_request,
                not_found,
                internal_error
            ],
        )
}
