use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid zone record data: {0}")]
    InvalidRecordData(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
