//! Company lookups needed by the Jobs domain
//!
//! Companies are managed elsewhere; jobs only need to know that one exists.

use jobly_common::Result;
use sqlx::PgPool;

#[derive(Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check whether a company with `handle` exists
    pub async fn exists(&self, handle: &str) -> Result<bool> {
        let row = sqlx::query_scalar::<_, String>("SELECT handle FROM companies WHERE handle = $1")
            .bind(handle)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }
}
