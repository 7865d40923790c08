pub mod analytics;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod exit;
pub mod job;
pub mod reporting;
pub mod store;
