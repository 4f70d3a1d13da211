use std::str::Utf8Error;

pub type HeadResult<T> = std::result::Result<T, HeadDecodeError>;

/// `HeadDecodeError` is the only hard failure of a head parse: the head
/// section could not be read as text. No partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadDecodeError {
    InvalidUtf8 {
        /// offset of the first byte that is not valid UTF-8 within the head section.
        valid_up_to: usize,
        source: Utf8Error,
    },
}

impl HeadDecodeError {
    #[must_use]
    pub fn valid_up_to(&self) -> usize {
        match self {
            Self::InvalidUtf8 { valid_up_to, .. } => *valid_up_to,
        }
    }
}

impl From<Utf8Error> for HeadDecodeError {
    fn from(value: Utf8Error) -> Self {
        Self::InvalidUtf8 {
            valid_up_to: value.valid_up_to(),
            source: value,
        }
    }
}

impl std::error::Error for HeadDecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidUtf8 { source, .. } => Some(source),
        }
    }
}

impl core::fmt::Display for HeadDecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
