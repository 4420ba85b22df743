use dotenvy::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

use camp_signup::database::schema;
use camp_signup::web;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let db_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:camp.db".to_string());
    tracing::info!("connecting to database: {}", db_url);

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

    let app = web::app(pool);

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5555);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("invalid HOST/PORT");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("could not bind address");
    tracing::info!("listening on http://{}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
