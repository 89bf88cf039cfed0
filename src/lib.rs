use handlebars::Handlebars;
use log::*;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use std::str::FromStr;
use std::sync::Arc;

pub mod config;
pub mod dao;
pub mod models;
pub mod routes;
pub mod templates;

use config::Config;

/**
 * Struct for carrying application state into tide request handlers
 */
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub templates: Arc<Handlebars<'static>>,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Result<Self, handlebars::TemplateError> {
        Ok(Self {
            db,
            templates: Arc::new(templates::registry()?),
        })
    }
}

/**
 * Create the sqlx connection pool for sqlite and bring the schema up to date
 */
pub async fn create_pool(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool = SqlitePoolOptions::new().max_connections(config.max_connections);

    if config.is_in_memory() {
        /*
         * The in-memory database disappears along with its last connection, so that connection
         * must never be reaped
         */
        pool = pool.max_connections(1).idle_timeout(None).max_lifetime(None);
    }

    let pool = pool.connect_with(options).await?;
    sqlx::migrate!().run(&pool).await?;
    debug!("Database ready at {}", config.database_url);
    Ok(pool)
}

/**
 * Wire up every route against the given state
 */
pub fn app(state: AppState) -> tide::Server<AppState> {
    let mut app = tide::with_state(state);
    app.at("/").get(routes::index);
    app.at("/:id/").get(routes::questions::detail);
    app.at("/:id/results/").get(routes::questions::results);
    app.at("/:id/vote/").post(routes::questions::vote);
    app
}
