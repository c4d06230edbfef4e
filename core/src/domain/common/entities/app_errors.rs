use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Advisor did not answer within {0} ms")]
    Timeout(u128),

    #[error("Unrecognized advisor answer: {0}")]
    UnrecognizedAnswer(String),

    #[error("No advisor provider is available")]
    AdvisorUnavailable,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
