use std::sync::Arc;
use cardgame_backend::{
    build_rocket,
    processor::VoteProcessor,
    queries::PgStore,
    routes::AppState,
};
use shuttle_runtime::CustomError;
use sqlx::PgPool;
use tracing::info;

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_shared_db::Postgres] pool: PgPool,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting card poll server");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(CustomError::new)?;

    info!("📋 Migrations complete");

    let processor = VoteProcessor::new(Arc::new(PgStore::new(pool)));
    let rocket = build_rocket(rocket::Config::figment(), AppState::new(processor));

    Ok(rocket.into())
}
