use thiserror::Error as ThisError;

/// Hard rejection of a whole request payload. No partial record is produced.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ValidationError {
    #[error("invalid interface data: {}", errors.join("; "))]
    InvalidInterface { errors: Vec<String> },

    #[error("invalid value for 'method': {method:?}")]
    InvalidMethod { method: String },
}
