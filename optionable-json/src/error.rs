use serde_json::error::Category;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is valid JSON but a value has the wrong type,
    /// e.g. a string where a number was expected
    #[error("decode type error: {0}")]
    DecodeType(#[source] serde_json::Error),
    /// The input is valid JSON and the types match, but it does not fit the
    /// target, e.g. a missing required field or a duplicate field
    #[error("invalid data: {0}")]
    Invalid(#[source] serde_json::Error),
    /// The input is not valid JSON or ended early
    #[error("syntax error: {0}")]
    Syntax(#[source] serde_json::Error),
    /// IO error
    #[error("io error: {0}")]
    Io(#[source] serde_json::Error),
    /// The value could not be encoded
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Error {
    pub(crate) fn decode(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data if is_type_mismatch(&err) => Self::DecodeType(err),
            Category::Data => Self::Invalid(err),
            Category::Syntax | Category::Eof => Self::Syntax(err),
            Category::Io => Self::Io(err),
        }
    }

    pub fn is_decode_type(&self) -> bool {
        matches!(self, Self::DecodeType(_))
    }

    /// Line and column of the failure in the input, if any
    pub fn position(&self) -> Option<(usize, usize)> {
        let err = match self {
            Self::DecodeType(err) | Self::Invalid(err) | Self::Syntax(err) | Self::Io(err) => err,
            Self::Encode(_) => return None,
        };

        match err.line() {
            0 => None,
            line => Some((line, err.column())),
        }
    }
}

// serde only exposes the kind of a data error through its message,
// see `serde::de::Error::invalid_type` and `invalid_value`.
fn is_type_mismatch(err: &serde_json::Error) -> bool {
    let msg = err.to_string();
    msg.starts_with("invalid type:") || msg.starts_with("invalid value:")
}
