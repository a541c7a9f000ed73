//! Error types shared across the crate

use thiserror::Error;

use crate::records::RecordId;

/// Errors raised while loading records, gathering inputs or validating configuration.
///
/// The projection engine itself never fails; everything here happens at its boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// No monthly income/expense record exists and the caller asked for strict handling
    #[error("no monthly financial record found; enter monthly income and expense first")]
    MissingMonthlyFinancial,

    /// A record failed data-entry validation
    #[error("invalid {kind}: {reason}")]
    InvalidRecord { kind: &'static str, reason: String },

    /// Lookup by id found nothing
    #[error("{kind} #{id} not found")]
    NotFound { kind: &'static str, id: RecordId },

    /// Projection parameters rejected before invoking the engine
    #[error("invalid projection config: {0}")]
    InvalidConfig(String),

    /// A stored percentage could not be turned into a rate
    #[error("invalid {name} rate: {value}")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(kind: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidRecord { kind, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
