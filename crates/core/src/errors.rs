use thiserror::Error;

/// Errors surfaced by the booking domain.
///
/// `Validation` and `Conflict` carry the exact message shown to clients, so
/// their display form is the bare message without a prefix.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

impl BookingError {
    /// Whether the caller caused this error (and may see its message).
    pub fn is_client_error(&self) -> bool {
        matches!(self, BookingError::Validation(_) | BookingError::Conflict(_))
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
