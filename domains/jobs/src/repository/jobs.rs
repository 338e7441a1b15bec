//! Job repository

use std::collections::HashMap;

use crate::domain::entities::{Job, JobFilters, JobUpdate, NewJob};
use crate::repository::companies::CompanyRepository;
use jobly_common::{bind_values, sql_for_partial_update, Error, Result};
use sqlx::PgPool;

/// Columns selected for every `Job` read
const JOB_COLUMNS: &str = "id, title, salary, equity, company_handle";

fn job_not_found(id: i32) -> Error {
    Error::NotFound(format!("No job with id: {}", id))
}

#[derive(Clone)]
pub struct JobRepository {
    pool: PgPool,
    companies: CompanyRepository,
}

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            companies: CompanyRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new job for an existing company
    pub async fn create(&self, new_job: &NewJob) -> Result<Job> {
        if !self.companies.exists(&new_job.company_handle).await? {
            return Err(Error::ReferenceNotFound(format!(
                "Company not found: {}",
                new_job.company_handle
            )));
        }

        let job = sqlx::query_as::<_, Job>(&format!(
            r#"
            INSERT INTO jobs (title, salary, equity, company_handle)
            VALUES ($1, $2, $3, $4)
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(&new_job.title)
        .bind(new_job.salary)
        .bind(new_job.equity)
        .bind(&new_job.company_handle)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(job_id = job.id, company = %job.company_handle, "Job created");
        Ok(job)
    }

    /// List jobs matching `filters`, ordered by title
    pub async fn find_all(&self, filters: &JobFilters) -> Result<Vec<Job>> {
        let predicates = filters.to_predicates();
        let query = format!(
            "SELECT {JOB_COLUMNS} FROM jobs {} ORDER BY title",
            predicates.where_clause()
        );
        tracing::debug!(sql = %query, "Listing jobs");

        let jobs = bind_values(sqlx::query_as::<_, Job>(&query), predicates.into_values())
            .fetch_all(&self.pool)
            .await?;
        Ok(jobs)
    }

    /// Get job by ID
    pub async fn get(&self, id: i32) -> Result<Job> {
        sqlx::query_as::<_, Job>(&format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| job_not_found(id))
    }

    /// Apply a partial update and return the full updated job
    pub async fn update(&self, id: i32, changes: JobUpdate) -> Result<Job> {
        // Storage columns match field names for jobs
        let update = sql_for_partial_update(changes.into_fields(), &HashMap::new())?;
        let query = format!(
            "UPDATE jobs SET {} WHERE id = ${} RETURNING {JOB_COLUMNS}",
            update.set_cols,
            update.next_placeholder()
        );
        tracing::debug!(sql = %query, job_id = id, "Updating job");

        let job = bind_values(sqlx::query_as::<_, Job>(&query), update.values)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| job_not_found(id))?;

        tracing::info!(job_id = id, "Job updated");
        Ok(job)
    }

    /// Delete a job by ID, returning the deleted ID
    pub async fn remove(&self, id: i32) -> Result<i32> {
        let deleted = sqlx::query_scalar::<_, i32>("DELETE FROM jobs WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| job_not_found(id))?;

        tracing::info!(job_id = deleted, "Job removed");
        Ok(deleted)
    }
}
