use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClockError {
    #[error("Invalid timezone: {0}")]
    UnknownTimezone(String),
}
