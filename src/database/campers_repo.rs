use sqlx::SqlitePool;

use crate::models::CamperRow;

const SQL_LIST_CAMPERS: &str = r#"
SELECT id, name, age
FROM campers
ORDER BY id
"#;

pub async fn list_campers(pool: &SqlitePool) -> sqlx::Result<Vec<CamperRow>> {
    sqlx::query_as::<_, CamperRow>(SQL_LIST_CAMPERS)
        .fetch_all(pool)
        .await
}

const SQL_LOAD_CAMPER: &str = r#"
SELECT id, name, age
FROM campers
WHERE id = ?1
LIMIT 1
"#;

pub async fn load_camper_by_id(
    pool: &SqlitePool,
    camper_id: i64,
) -> sqlx::Result<Option<CamperRow>> {
    sqlx::query_as::<_, CamperRow>(SQL_LOAD_CAMPER)
        .bind(camper_id)
        .fetch_optional(pool)
        .await
}

const SQL_INSERT_CAMPER: &str = r#"
INSERT INTO campers (name, age) VALUES (?, ?)
"#;

pub struct NewCamper<'a> {
    pub name: &'a str,
    pub age: i64,
}

pub async fn insert_camper(pool: &SqlitePool, camper: NewCamper<'_>) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_CAMPER)
        .bind(camper.name)
        .bind(camper.age)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}

const SQL_UPDATE_CAMPER: &str = r#"
UPDATE campers SET name = ?, age = ? WHERE id = ?
"#;

pub async fn update_camper(
    pool: &SqlitePool,
    camper_id: i64,
    name: &str,
    age: i64,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_UPDATE_CAMPER)
        .bind(name)
        .bind(age)
        .bind(camper_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
