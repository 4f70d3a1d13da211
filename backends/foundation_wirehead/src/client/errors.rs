use crate::head::HeadDecodeError;
use derive_more::From;

pub type TargetResult<T> = std::result::Result<T, TargetError>;
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Errors raised while turning a URL into a connectable target.
#[derive(From, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    InvalidUrl(url::ParseError),

    MissingHost,

    /// only `http` and `https` are understood.
    #[from(ignore)]
    UnsupportedScheme(String),
}

impl std::error::Error for TargetError {}

impl core::fmt::Display for TargetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Errors raised while fetching a response head from a remote target.
#[derive(From, Debug)]
pub enum FetchError {
    Target(TargetError),

    #[from(ignore)]
    Resolve(String),

    #[from(ignore)]
    Connect(std::io::Error),

    #[from(ignore)]
    Write(std::io::Error),

    #[from(ignore)]
    Read(std::io::Error),

    /// the response grew beyond the configured limit (in bytes).
    #[from(ignore)]
    ResponseTooLarge(usize),

    Decode(HeadDecodeError),

    TlsUnsupported,
}

impl std::error::Error for FetchError {}

impl core::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
