use sqlx::SqlitePool;

use crate::models::ActivityRow;

const SQL_LIST_ACTIVITIES: &str = r#"
SELECT id, name, difficulty
FROM activities
ORDER BY id
"#;

pub async fn list_activities(pool: &SqlitePool) -> sqlx::Result<Vec<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LIST_ACTIVITIES)
        .fetch_all(pool)
        .await
}

const SQL_LOAD_ACTIVITY: &str = r#"
SELECT id, name, difficulty
FROM activities
WHERE id = ?1
LIMIT 1
"#;

pub async fn load_activity_by_id(
    pool: &SqlitePool,
    activity_id: i64,
) -> sqlx::Result<Option<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LOAD_ACTIVITY)
        .bind(activity_id)
        .fetch_optional(pool)
        .await
}

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (name, difficulty) VALUES (?, ?)
"#;

pub struct NewActivity<'a> {
    pub name: &'a str,
    pub difficulty: i64,
}

pub async fn insert_activity(pool: &SqlitePool, activity: NewActivity<'_>) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity.name)
        .bind(activity.difficulty)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}

// Dependent signups are removed by the schema's ON DELETE CASCADE.
const SQL_DELETE_ACTIVITY: &str = r#"
DELETE FROM activities WHERE id = ?1
"#;

pub async fn delete_activity(pool: &SqlitePool, activity_id: i64) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_ACTIVITY)
        .bind(activity_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
