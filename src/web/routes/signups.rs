use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::services::signup_service::{self, SignupDetailView};

#[derive(Debug, Deserialize)]
pub struct CreateSignupBody {
    pub camper_id: Option<i64>,
    pub activity_id: Option<i64>,
    pub time: Option<i64>,
}

pub async fn create_signup_handler(
    State(pool): State<SqlitePool>,
    Json(body): Json<CreateSignupBody>,
) -> Result<(StatusCode, Json<SignupDetailView>), ApiError> {
    let signup =
        signup_service::create_signup(&pool, body.camper_id, body.activity_id, body.time).await?;
    Ok((StatusCode::CREATED, Json(signup)))
}
