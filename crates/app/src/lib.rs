//! Jobly application composition root
//!
//! Composes all domain routers into a single application.

use axum::Router;
use jobly_auth::AuthConfig;
use jobly_common::config::Config;
use jobly_jobs::{JobsRepositories, JobsState};
use sqlx::PgPool;

/// Create the main application router with all routes
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    let jobs_state = JobsState {
        repos: JobsRepositories::new(pool),
        auth: AuthConfig {
            jwt_secret: config.jwt_secret.clone(),
        },
    };

    // Compose domain routers with shared infrastructure routes
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(jobly_jobs::routes().with_state(jobs_state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
