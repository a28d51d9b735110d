use derive_more::Display;

use crate::domain::gallery::PayloadShape;

/// Any failure of the fetch operation. The store treats every variant the
/// same way: errored state, empty snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TransportError {
    #[display(fmt = "Request failed: {}", _0)]
    Request(String),
    #[display(fmt = "HTTP error: {} {}", status, status_text)]
    Status { status: u16, status_text: String },
    #[display(fmt = "Malformed body: {}", _0)]
    MalformedBody(String),
    #[display(fmt = "Request timed out after {} ms", _0)]
    Timeout(u32),
}

impl std::error::Error for TransportError {}

/// A date whose value does not have the shape the selector implies.
/// Recovered by skipping the date.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "Date '{}' does not match {} shape: {}", date, expected, reason)]
pub struct ShapeMismatchError {
    pub date: String,
    pub expected: PayloadShape,
    pub reason: String,
}

impl std::error::Error for ShapeMismatchError {}

pub type TransportResult<T> = Result<T, TransportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reads_like_http() {
        let err = TransportError::Status { status: 404, status_text: "Not Found".into() };
        assert_eq!(err.to_string(), "HTTP error: 404 Not Found");
    }

    #[test]
    fn mismatch_names_date_and_expected_shape() {
        let err = ShapeMismatchError {
            date: "2024-01-01".into(),
            expected: PayloadShape::Aggregate,
            reason: "found a flat record".into(),
        };
        assert_eq!(
            err.to_string(),
            "Date '2024-01-01' does not match aggregate shape: found a flat record"
        );
    }
}
