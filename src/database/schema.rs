use sqlx::SqlitePool;

const SQL_CREATE_CAMPERS: &str = r#"
CREATE TABLE IF NOT EXISTS campers (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL CHECK (length(name) > 0),
  age INTEGER NOT NULL CHECK (age BETWEEN 8 AND 18)
)
"#;

const SQL_CREATE_ACTIVITIES: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL CHECK (length(name) > 0),
  difficulty INTEGER NOT NULL
)
"#;

const SQL_CREATE_SIGNUPS: &str = r#"
CREATE TABLE IF NOT EXISTS signups (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  time INTEGER NOT NULL CHECK (time BETWEEN 0 AND 23),
  camper_id INTEGER NOT NULL REFERENCES campers(id),
  activity_id INTEGER NOT NULL REFERENCES activities(id) ON DELETE CASCADE
)
"#;

const SQL_INDEX_SIGNUPS_CAMPER: &str =
    "CREATE INDEX IF NOT EXISTS idx_signups_camper_id ON signups(camper_id)";

const SQL_INDEX_SIGNUPS_ACTIVITY: &str =
    "CREATE INDEX IF NOT EXISTS idx_signups_activity_id ON signups(activity_id)";

// Idempotent bootstrap; runs at server startup, in the seed tool, and in tests.
pub async fn ensure_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_CAMPERS).execute(pool).await?;
    sqlx::query(SQL_CREATE_ACTIVITIES).execute(pool).await?;
    sqlx::query(SQL_CREATE_SIGNUPS).execute(pool).await?;
    sqlx::query(SQL_INDEX_SIGNUPS_CAMPER).execute(pool).await?;
    sqlx::query(SQL_INDEX_SIGNUPS_ACTIVITY).execute(pool).await?;
    Ok(())
}
