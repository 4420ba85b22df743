pub mod routes;

use axum::{
    routing::{delete, get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::web::routes::{activities, campers, signups};

pub fn app(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(home))
        .route(
            "/campers",
            get(campers::list_campers_handler).post(campers::create_camper_handler),
        )
        .route(
            "/campers/:id",
            get(campers::get_camper_handler).patch(campers::update_camper_handler),
        )
        .route("/activities", get(activities::list_activities_handler))
        .route("/activities/:id", delete(activities::delete_activity_handler))
        .route("/signups", post(signups::create_signup_handler))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

async fn home() {}
