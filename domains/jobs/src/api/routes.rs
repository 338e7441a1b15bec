//! Route definitions for Jobs domain API

use axum::{routing::get, Router};

use super::handlers::jobs;
use super::middleware::JobsState;

/// Create all Jobs domain API routes
///
/// Reads are public; mutations require an admin token.
pub fn routes() -> Router<JobsState> {
    Router::new()
        .route("/jobs", get(jobs::list_jobs).post(jobs::create_job))
        .route(
            "/jobs/{id}",
            get(jobs::get_job)
                .patch(jobs::update_job)
                .delete(jobs::delete_job),
        )
}
