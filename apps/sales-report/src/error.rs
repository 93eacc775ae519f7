//! Error types for the sales report.

use std::io;

use ecom_db::DbError;

use crate::config::ConfigError;

/// Anything that stops the report. The binary prints it and exits non-zero.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}
