use serde::Serialize;
use sqlx::SqlitePool;

use crate::database::activities_repo;
use crate::error::ApiError;
use crate::models::ActivityRow;

#[derive(Debug, Serialize)]
pub struct ActivityView {
    pub id: i64,
    pub name: String,
    pub difficulty: i64,
}

impl From<ActivityRow> for ActivityView {
    fn from(row: ActivityRow) -> Self {
        ActivityView {
            id: row.id,
            name: row.name,
            difficulty: row.difficulty,
        }
    }
}

pub async fn list_activities(pool: &SqlitePool) -> Result<Vec<ActivityView>, ApiError> {
    let rows = activities_repo::list_activities(pool).await?;
    Ok(rows.into_iter().map(ActivityView::from).collect())
}

// Returns false when no activity had that id. The activity's signups are
// deleted together with it.
pub async fn delete_activity(pool: &SqlitePool, activity_id: i64) -> Result<bool, ApiError> {
    let deleted = activities_repo::delete_activity(pool, activity_id).await?;
    Ok(deleted > 0)
}
