use serde::Serialize;
use sqlx::SqlitePool;

use crate::database::{activities_repo, campers_repo, signups_repo};
use crate::error::ApiError;
use crate::services::activity_service::ActivityView;
use crate::services::camper_service::CamperView;

pub const EARLIEST_HOUR: i64 = 0;
pub const LATEST_HOUR: i64 = 23;

#[derive(Debug, Serialize)]
pub struct SignupDetailView {
    pub id: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub time: i64,
    pub camper: CamperView,
    pub activity: ActivityView,
}

// A signup must name an hour within the camp day and point at rows that
// actually exist; a dangling camper/activity id counts as a validation
// failure. Nothing is written until every check has passed.
pub async fn create_signup(
    pool: &SqlitePool,
    camper_id: Option<i64>,
    activity_id: Option<i64>,
    time: Option<i64>,
) -> Result<SignupDetailView, ApiError> {
    let mut errors = Vec::new();

    let time = match time {
        Some(t) if (EARLIEST_HOUR..=LATEST_HOUR).contains(&t) => Some(t),
        Some(t) => {
            errors.push(format!(
                "time must be between {} and {}, got {}",
                EARLIEST_HOUR, LATEST_HOUR, t
            ));
            None
        }
        None => {
            errors.push("time is required".to_string());
            None
        }
    };

    let camper = match camper_id {
        Some(id) => {
            let found = campers_repo::load_camper_by_id(pool, id).await?;
            if found.is_none() {
                errors.push(format!("camper {} does not exist", id));
            }
            found
        }
        None => {
            errors.push("camper_id is required".to_string());
            None
        }
    };

    let activity = match activity_id {
        Some(id) => {
            let found = activities_repo::load_activity_by_id(pool, id).await?;
            if found.is_none() {
                errors.push(format!("activity {} does not exist", id));
            }
            found
        }
        None => {
            errors.push("activity_id is required".to_string());
            None
        }
    };

    let (Some(time), Some(camper), Some(activity)) = (time, camper, activity) else {
        return Err(ApiError::Validation(errors));
    };

    let id = signups_repo::insert_signup(
        pool,
        signups_repo::NewSignup {
            camper_id: camper.id,
            activity_id: activity.id,
            time,
        },
    )
    .await?;

    Ok(SignupDetailView {
        id,
        camper_id: camper.id,
        activity_id: activity.id,
        time,
        camper: CamperView::from(camper),
        activity: ActivityView::from(activity),
    })
}
