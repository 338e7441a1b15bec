//! Jobly integration tests
//!
//! HTTP tests run the full router with `tower::ServiceExt::oneshot`.
//! Tests that touch Postgres read `TEST_DATABASE_URL` (or `DATABASE_URL`)
//! and are skipped when neither is set.

#![allow(dead_code)]

mod common;
mod job_repository;
mod jobs;
