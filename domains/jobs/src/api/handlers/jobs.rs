//! Job management API handlers

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use jobly_auth::AdminUser;
use jobly_common::{Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};

use crate::api::middleware::JobsState;
use crate::domain::entities::{Job, JobFilters, JobUpdate, NewJob};

/// Single job response
#[derive(Debug, Serialize, Deserialize)]
pub struct JobResponse {
    pub job: Job,
}

/// Job list response
#[derive(Debug, Serialize, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<Job>,
}

/// Delete confirmation
#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: i32,
}

/// Query parameters for listing jobs
///
/// `hasEquity` must be `true` or `false`; any other value is rejected rather
/// than treated as truthy.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobSearchQuery {
    pub title: Option<String>,
    pub min_salary: Option<i32>,
    pub has_equity: Option<bool>,
    pub company_handle: Option<String>,
}

impl TryFrom<JobSearchQuery> for JobFilters {
    type Error = Error;

    fn try_from(query: JobSearchQuery) -> Result<Self> {
        if matches!(query.min_salary, Some(min) if min < 0) {
            return Err(Error::Validation(
                "minSalary must be non-negative".to_string(),
            ));
        }

        Ok(JobFilters {
            title: query.title,
            min_salary: query.min_salary,
            has_equity: query.has_equity.unwrap_or(false),
            company_handle: query.company_handle,
        })
    }
}

/// Job id from the path; a non-integer id is a validation error
fn job_id(path: std::result::Result<Path<i32>, PathRejection>) -> Result<i32> {
    let Path(id) = path.map_err(|e| Error::Validation(e.body_text()))?;
    Ok(id)
}

/// List jobs, optionally filtered
pub async fn list_jobs(
    State(state): State<JobsState>,
    query: std::result::Result<Query<JobSearchQuery>, QueryRejection>,
) -> Result<Json<JobsResponse>> {
    let Query(query) = query.map_err(|e| Error::Validation(e.body_text()))?;
    let filters = JobFilters::try_from(query)?;

    let jobs = state.repos.jobs.find_all(&filters).await?;
    Ok(Json(JobsResponse { jobs }))
}

/// Get a single job by ID
pub async fn get_job(
    State(state): State<JobsState>,
    path: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<JobResponse>> {
    let job = state.repos.jobs.get(job_id(path)?).await?;
    Ok(Json(JobResponse { job }))
}

/// Create a job (admin only)
pub async fn create_job(
    AdminUser(admin): AdminUser,
    State(state): State<JobsState>,
    ValidatedJson(req): ValidatedJson<NewJob>,
) -> Result<(StatusCode, Json<JobResponse>)> {
    let job = state.repos.jobs.create(&req).await?;

    tracing::info!(job_id = job.id, admin = %admin.username, "Job created via API");
    Ok((StatusCode::CREATED, Json(JobResponse { job })))
}

/// Partially update a job (admin only)
pub async fn update_job(
    AdminUser(admin): AdminUser,
    State(state): State<JobsState>,
    path: std::result::Result<Path<i32>, PathRejection>,
    ValidatedJson(req): ValidatedJson<JobUpdate>,
) -> Result<Json<JobResponse>> {
    let id = job_id(path)?;
    let job = state.repos.jobs.update(id, req).await?;

    tracing::info!(job_id = id, admin = %admin.username, "Job updated via API");
    Ok(Json(JobResponse { job }))
}

/// Delete a job (admin only)
pub async fn delete_job(
    AdminUser(admin): AdminUser,
    State(state): State<JobsState>,
    path: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<DeletedResponse>> {
    let deleted = state.repos.jobs.remove(job_id(path)?).await?;

    tracing::info!(job_id = deleted, admin = %admin.username, "Job deleted via API");
    Ok(Json(DeletedResponse { deleted }))
}
