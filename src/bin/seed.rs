use dotenvy::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::env;
use std::str::FromStr;

use camp_signup::database::{activities_repo, campers_repo, schema, signups_repo};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let db_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:camp.db".to_string());
    let options = SqliteConnectOptions::from_str(&db_url)
        .expect("DATABASE_URL is not a valid sqlite connection string")
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .expect("could not connect to database");

    schema::ensure_schema(&pool)
        .await
        .expect("could not initialize database schema");

    let campers = [("Caitlin", 8), ("Lizzie", 9), ("Juan", 12), ("Sasha", 16)];
    let activities = [("Archery", 2), ("Swimming", 3), ("Woodworking", 4)];

    let mut camper_ids = Vec::new();
    for (name, age) in campers {
        match campers_repo::insert_camper(&pool, campers_repo::NewCamper { name, age }).await {
            Ok(id) => camper_ids.push(id),
            Err(e) => {
                eprintln!("seed failed inserting camper {}: {}", name, e);
                std::process::exit(1);
            }
        }
    }

    let mut activity_ids = Vec::new();
    for (name, difficulty) in activities {
        match activities_repo::insert_activity(
            &pool,
            activities_repo::NewActivity { name, difficulty },
        )
        .await
        {
            Ok(id) => activity_ids.push(id),
            Err(e) => {
                eprintln!("seed failed inserting activity {}: {}", name, e);
                std::process::exit(1);
            }
        }
    }

    // One signup per camper, rotating through the activities at morning hours.
    let mut signup_count = 0;
    for (i, camper_id) in camper_ids.iter().enumerate() {
        let signup = signups_repo::NewSignup {
            camper_id: *camper_id,
            activity_id: activity_ids[i % activity_ids.len()],
            time: (9 + i as i64) % 24,
        };
        if let Err(e) = signups_repo::insert_signup(&pool, signup).await {
            eprintln!("seed failed inserting signup: {}", e);
            std::process::exit(1);
        }
        signup_count += 1;
    }

    println!(
        "seeded: campers={}, activities={}, signups={}",
        camper_ids.len(),
        activity_ids.len(),
        signup_count
    );
}
