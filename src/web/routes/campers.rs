use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::services::camper_service::{self, CamperDetailView, CamperView};

pub async fn list_campers_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<CamperView>>, ApiError> {
    let campers = camper_service::list_campers(&pool).await?;
    Ok(Json(campers))
}

pub async fn get_camper_handler(
    Path(camper_id): Path<i64>,
    State(pool): State<SqlitePool>,
) -> Result<Json<CamperDetailView>, ApiError> {
    let Some(camper) = camper_service::load_camper_detail(&pool, camper_id).await? else {
        return Err(ApiError::NotFound("Camper"));
    };
    Ok(Json(camper))
}

#[derive(Debug, Deserialize)]
pub struct CreateCamperBody {
    pub name: Option<String>,
    pub age: Option<i64>,
}

pub async fn create_camper_handler(
    State(pool): State<SqlitePool>,
    Json(body): Json<CreateCamperBody>,
) -> Result<(StatusCode, Json<CamperView>), ApiError> {
    let camper = camper_service::create_camper(&pool, body.name, body.age).await?;
    Ok((StatusCode::CREATED, Json(camper)))
}

#[derive(Debug, Deserialize)]
pub struct UpdateCamperBody {
    pub name: Option<String>,
    pub age: Option<i64>,
}

pub async fn update_camper_handler(
    Path(camper_id): Path<i64>,
    State(pool): State<SqlitePool>,
    Json(body): Json<UpdateCamperBody>,
) -> Result<(StatusCode, Json<CamperView>), ApiError> {
    let Some(camper) =
        camper_service::update_camper(&pool, camper_id, body.name, body.age).await?
    else {
        return Err(ApiError::NotFound("Camper"));
    };
    Ok((StatusCode::ACCEPTED, Json(camper)))
}
