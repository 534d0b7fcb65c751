use thiserror::Error;

/// Errors that can occur while parsing decimal text into a
/// [`BigInt`](crate::BigInt).
///
/// Every variant is a malformed-input condition. Parsing fails fast: it
/// yields either a fully canonical value or one of these, never a partial
/// result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBigIntError {
    #[error("empty input: expected an optional sign followed by digits")]
    Empty,

    #[error("input is a bare sign: at least one digit must follow '+' or '-'")]
    SignOnly,

    #[error("invalid character {0:?}: expected a decimal digit")]
    InvalidDigit(char),
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseBigIntError>;
