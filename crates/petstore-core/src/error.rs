use petstore_domain::SchemaMismatch;

/// Every way a contract scenario can fail.
///
/// Each variant ends only the scenario that produced it. Nothing here is
/// retried: the harness exists to surface contract drift.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("{endpoint}: expected status {expected}, got {actual}")]
    UnexpectedStatus {
        expected: u16,
        actual: u16,
        endpoint: String,
    },
    #[error("schema mismatch at `{field}`: {reason}")]
    SchemaMismatch { field: String, reason: String },
    #[error("{expectation}: expected {expected}, got {actual}")]
    AssertionFailure {
        expectation: String,
        expected: String,
        actual: String,
    },
    #[error("{endpoint}: request failed: {reason}")]
    Transport { endpoint: String, reason: String },
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ContractError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnexpectedStatus { .. } => "UNEXPECTED_STATUS",
            Self::SchemaMismatch { .. } => "SCHEMA_MISMATCH",
            Self::AssertionFailure { .. } => "ASSERTION_FAILURE",
            Self::Transport { .. } => "TRANSPORT",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// `true` for a failed post-condition, as opposed to a transport or
    /// schema problem.
    pub fn is_assertion(&self) -> bool {
        matches!(self, Self::AssertionFailure { .. })
    }
}

impl From<SchemaMismatch> for ContractError {
    fn from(err: SchemaMismatch) -> Self {
        Self::SchemaMismatch {
            field: err.field,
            reason: err.reason,
        }
    }
}
