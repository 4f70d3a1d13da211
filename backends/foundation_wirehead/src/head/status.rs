use lazy_static::lazy_static;
use regex::Regex;

// Scheme token is case-sensitive; the reason phrase grammar only takes the
// first word made of letters, `_` and `-`.
const STATUS_LINE_PATTERN: &str = r"HTTP/([0-9.]+)\s+([0-9]+)\s+([A-Za-z_\-]+)";

lazy_static! {
    static ref STATUS_LINE_REGEX: Regex =
        Regex::new(STATUS_LINE_PATTERN).expect("status line pattern should compile");
}

/// A status line that passed every check: grammar match and a code that
/// renders as exactly three decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusLine {
    pub version: String,
    pub code: u16,
    pub text: String,
}

impl core::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP/{} {} {}", self.version, self.code, self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    Accepted(StatusLine),

    /// line does not contain `HTTP/<version> <code> <text>` at all.
    NoMatch,

    /// grammar matched but the code digits do not denote a number in 100..=999.
    CodeOutOfRange { digits: String },
}

impl StatusOutcome {
    #[must_use]
    pub fn into_status(self) -> Option<StatusLine> {
        match self {
            Self::Accepted(status) => Some(status),
            Self::NoMatch | Self::CodeOutOfRange { .. } => None,
        }
    }
}

/// Returns true when `code` renders as exactly three decimal digits.
#[must_use]
pub fn is_three_digit_code(code: u64) -> bool {
    (100..=999).contains(&code)
}

/// Parses the status line candidate of a response head.
///
/// Leading zeros in the code are accepted (`0200` is read as `200`) as long as
/// the resulting number still has three digits. A rejected code rejects the
/// whole status line: version, code and text are accepted or refused together.
#[must_use]
pub fn parse_status_line(line: &str) -> StatusOutcome {
    let Some(captures) = STATUS_LINE_REGEX.captures(line) else {
        return StatusOutcome::NoMatch;
    };

    let version = &captures[1];
    let digits = &captures[2];
    let text = &captures[3];

    let code = digits
        .parse::<u64>()
        .ok()
        .filter(|code| is_three_digit_code(*code))
        .and_then(|code| u16::try_from(code).ok());

    match code {
        Some(code) => StatusOutcome::Accepted(StatusLine {
            version: version.to_string(),
            code,
            text: text.to_string(),
        }),
        None => StatusOutcome::CodeOutOfRange {
            digits: digits.to_string(),
        },
    }
}
