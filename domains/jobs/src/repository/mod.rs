//! Repository implementations for Jobs domain

pub mod companies;
pub mod jobs;

use sqlx::PgPool;

pub use companies::CompanyRepository;
pub use jobs::JobRepository;

/// Combined repository access for the Jobs domain
#[derive(Clone)]
pub struct JobsRepositories {
    pub jobs: JobRepository,
}

impl JobsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            jobs: JobRepository::new(pool),
        }
    }
}
