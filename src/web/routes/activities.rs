use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::services::activity_service::{self, ActivityView};

pub async fn list_activities_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<ActivityView>>, ApiError> {
    let activities = activity_service::list_activities(&pool).await?;
    Ok(Json(activities))
}

pub async fn delete_activity_handler(
    Path(activity_id): Path<i64>,
    State(pool): State<SqlitePool>,
) -> Result<StatusCode, ApiError> {
    if !activity_service::delete_activity(&pool, activity_id).await? {
        return Err(ApiError::NotFound("Activity"));
    }
    Ok(StatusCode::NO_CONTENT)
}
