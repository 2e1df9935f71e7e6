//! Ownership-checked project service.
//!
//! Serves per-user project records backed by a DynamoDB metadata table and an
//! S3 bucket holding each project's floorplan document. Domain logic lives
//! behind ports so the HTTP layer and the tests can share one implementation.

pub mod api;
pub mod config;
pub mod domain;
pub mod outbound;
