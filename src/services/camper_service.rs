use serde::Serialize;
use sqlx::SqlitePool;

use crate::database::{campers_repo, signups_repo};
use crate::error::ApiError;
use crate::models::CamperRow;
use crate::services::activity_service::ActivityView;

pub const MIN_AGE: i64 = 8;
pub const MAX_AGE: i64 = 18;

#[derive(Debug, Serialize)]
pub struct CamperView {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl From<CamperRow> for CamperView {
    fn from(row: CamperRow) -> Self {
        CamperView {
            id: row.id,
            name: row.name,
            age: row.age,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CamperSignupView {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity: ActivityView,
}

#[derive(Debug, Serialize)]
pub struct CamperDetailView {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub signups: Vec<CamperSignupView>,
}

pub async fn list_campers(pool: &SqlitePool) -> Result<Vec<CamperView>, ApiError> {
    let rows = campers_repo::list_campers(pool).await?;
    Ok(rows.into_iter().map(CamperView::from).collect())
}

pub async fn load_camper_detail(
    pool: &SqlitePool,
    camper_id: i64,
) -> Result<Option<CamperDetailView>, ApiError> {
    let Some(camper) = campers_repo::load_camper_by_id(pool, camper_id).await? else {
        return Ok(None);
    };

    let signups = signups_repo::list_signups_for_camper(pool, camper_id)
        .await?
        .into_iter()
        .map(|s| CamperSignupView {
            id: s.id,
            time: s.time,
            camper_id: s.camper_id,
            activity_id: s.activity_id,
            activity: ActivityView {
                id: s.activity_id,
                name: s.activity_name,
                difficulty: s.activity_difficulty,
            },
        })
        .collect();

    Ok(Some(CamperDetailView {
        id: camper.id,
        name: camper.name,
        age: camper.age,
        signups,
    }))
}

pub async fn create_camper(
    pool: &SqlitePool,
    name: Option<String>,
    age: Option<i64>,
) -> Result<CamperView, ApiError> {
    let (name, age) = validate_camper_fields(name.as_deref(), age)?;
    let id = campers_repo::insert_camper(pool, campers_repo::NewCamper { name: &name, age }).await?;
    Ok(CamperView { id, name, age })
}

// Only the fields present in the request change; the rest keep their stored
// value. Validation runs on the merged result, so a bad patch writes nothing.
pub async fn update_camper(
    pool: &SqlitePool,
    camper_id: i64,
    name: Option<String>,
    age: Option<i64>,
) -> Result<Option<CamperView>, ApiError> {
    let Some(current) = campers_repo::load_camper_by_id(pool, camper_id).await? else {
        return Ok(None);
    };

    let name = name.unwrap_or(current.name);
    let age = age.unwrap_or(current.age);
    let (name, age) = validate_camper_fields(Some(name.as_str()), Some(age))?;

    campers_repo::update_camper(pool, camper_id, &name, age).await?;
    Ok(Some(CamperView {
        id: camper_id,
        name,
        age,
    }))
}

fn validate_camper_fields(
    name: Option<&str>,
    age: Option<i64>,
) -> Result<(String, i64), ApiError> {
    let mut errors = Vec::new();

    let name = match name {
        Some(n) if !n.is_empty() => Some(n.to_string()),
        Some(_) => {
            errors.push("name must not be empty".to_string());
            None
        }
        None => {
            errors.push("name is required".to_string());
            None
        }
    };

    let age = match age {
        Some(a) if (MIN_AGE..=MAX_AGE).contains(&a) => Some(a),
        Some(a) => {
            errors.push(format!(
                "age must be between {} and {}, got {}",
                MIN_AGE, MAX_AGE, a
            ));
            None
        }
        None => {
            errors.push("age is required".to_string());
            None
        }
    };

    match (name, age) {
        (Some(name), Some(age)) => Ok((name, age)),
        _ => Err(ApiError::Validation(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_name_and_age_within_range() {
        let (name, age) = validate_camper_fields(Some("Alex"), Some(12)).unwrap();
        assert_eq!(name, "Alex");
        assert_eq!(age, 12);
    }

    #[test]
    fn accepts_age_bounds() {
        assert!(validate_camper_fields(Some("Alex"), Some(MIN_AGE)).is_ok());
        assert!(validate_camper_fields(Some("Alex"), Some(MAX_AGE)).is_ok());
    }

    #[test]
    fn rejects_age_outside_range() {
        assert!(validate_camper_fields(Some("Alex"), Some(MIN_AGE - 1)).is_err());
        assert!(validate_camper_fields(Some("Alex"), Some(MAX_AGE + 1)).is_err());
    }

    #[test]
    fn rejects_empty_or_missing_name() {
        assert!(validate_camper_fields(Some(""), Some(12)).is_err());
        assert!(validate_camper_fields(None, Some(12)).is_err());
    }

    #[test]
    fn rejects_missing_age() {
        assert!(validate_camper_fields(Some("Alex"), None).is_err());
    }

    #[test]
    fn collects_every_violation() {
        let err = validate_camper_fields(Some(""), Some(42)).unwrap_err();
        match err {
            ApiError::Validation(reasons) => assert_eq!(reasons.len(), 2),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
