//! service-core: Shared infrastructure for the billing frontend workspace.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
