use thiserror::Error;

/// Errors returned while decoding SimpleIcon text.
///
/// # Examples
/// ```
/// use simpleicon_core::{DecodeError, decode};
///
/// let err = decode("sword;;3;;2x2;;1001").unwrap_err();
/// assert!(matches!(err, DecodeError::UnknownVersion { version: 3 }));
/// assert!(err.to_string().contains("unknown icon version"));
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("empty icon text")]
    EmptyInput,
    #[error("malformed header: expected 4 ';;'-delimited fields, got {fields}")]
    MalformedHeader { fields: usize },
    #[error("empty icon name")]
    EmptyName,
    #[error("malformed version '{value}'")]
    MalformedVersion { value: String },
    #[error("malformed size '{value}': expected <width>x<height>")]
    MalformedSize { value: String },
    #[error("invalid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimensions { width: usize, height: usize },
    #[error("dimensions {width}x{height} are too large")]
    DimensionsTooLarge { width: usize, height: usize },
    #[error("unknown icon version: {version}")]
    UnknownVersion { version: u32 },
    #[error("insufficient pixel data: need {needed} characters, got {actual}")]
    InsufficientData { needed: usize, actual: usize },
}
