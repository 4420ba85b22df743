use sqlx::SqlitePool;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SignupActivityRow {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity_name: String,
    pub activity_difficulty: i64,
}

const SQL_LIST_FOR_CAMPER: &str = r#"
SELECT
  s.id,
  s.time,
  s.camper_id,
  s.activity_id,
  a.name AS activity_name,
  a.difficulty AS activity_difficulty
FROM signups s
JOIN activities a ON a.id = s.activity_id
WHERE s.camper_id = ?1
ORDER BY s.id
"#;

pub async fn list_signups_for_camper(
    pool: &SqlitePool,
    camper_id: i64,
) -> sqlx::Result<Vec<SignupActivityRow>> {
    sqlx::query_as::<_, SignupActivityRow>(SQL_LIST_FOR_CAMPER)
        .bind(camper_id)
        .fetch_all(pool)
        .await
}

const SQL_INSERT_SIGNUP: &str = r#"
INSERT INTO signups (camper_id, activity_id, time) VALUES (?, ?, ?)
"#;

pub struct NewSignup {
    pub camper_id: i64,
    pub activity_id: i64,
    pub time: i64,
}

pub async fn insert_signup(pool: &SqlitePool, signup: NewSignup) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_SIGNUP)
        .bind(signup.camper_id)
        .bind(signup.activity_id)
        .bind(signup.time)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}
