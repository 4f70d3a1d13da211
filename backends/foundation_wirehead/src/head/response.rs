use crate::head::diagnostics::{ParseEvent, ParseObserver, TracingObserver};
use crate::head::errors::HeadResult;
use crate::head::frame::split_head;
use crate::head::headers::{classify_header_line, HeaderLine, HeaderPair};
use crate::head::lines::decode_lines;
use crate::head::status::{is_three_digit_code, parse_status_line, StatusLine};

const REPORT_RULE: &str = "==================================================";

/// The parsed head of one HTTP/1.x response.
///
/// Built once from a raw buffer and never mutated afterwards. The status line
/// is either entirely present or entirely absent; every header line sits in
/// exactly one of `good_headers` or `bad_headers`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseHead {
    status: Option<StatusLine>,
    good_headers: Vec<HeaderPair>,
    bad_headers: Vec<String>,
}

impl ResponseHead {
    /// Parses `raw`, reporting diagnostics through `tracing`.
    ///
    /// # Errors
    /// Fails only when the head section is not valid UTF-8. Malformed status
    /// or header lines never fail the parse.
    pub fn parse(raw: &[u8]) -> HeadResult<Self> {
        Self::parse_with(raw, &mut TracingObserver)
    }

    /// Parses `raw`, delivering one [`ParseEvent`] per stage to `observer`.
    ///
    /// # Errors
    /// Fails only when the head section is not valid UTF-8.
    pub fn parse_with<O: ParseObserver + ?Sized>(
        raw: &[u8],
        observer: &mut O,
    ) -> HeadResult<Self> {
        let frame = split_head(raw);
        observer.observe(&ParseEvent::HeadSplit {
            head_len: frame.head.len(),
            body_len: frame.body.len(),
            terminated: frame.terminated,
        });

        let lines = match decode_lines(frame.head) {
            Ok(lines) => lines,
            Err(err) => {
                observer.observe(&ParseEvent::DecodeFailed(err.clone()));
                return Err(err);
            }
        };
        observer.observe(&ParseEvent::LinesDecoded(lines.len()));

        let mut line_iter = lines.iter();

        let status = match line_iter.next() {
            Some(status_line) => {
                let outcome = parse_status_line(status_line);
                observer.observe(&ParseEvent::Status(outcome.clone()));
                outcome.into_status()
            }
            None => None,
        };

        let mut good_headers = Vec::new();
        let mut bad_headers = Vec::new();

        for line in line_iter {
            let classified = classify_header_line(line);
            observer.observe(&ParseEvent::Header(classified.clone()));

            match classified {
                HeaderLine::WellFormed { name, value } => good_headers.push((name, value)),
                HeaderLine::Malformed { line, .. } => bad_headers.push(line),
            }
        }

        observer.observe(&ParseEvent::Finished {
            valid_status: status.is_some(),
            good_headers: good_headers.len(),
            bad_headers: bad_headers.len(),
        });

        Ok(Self {
            status,
            good_headers,
            bad_headers,
        })
    }

    #[must_use]
    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.version.as_str())
    }

    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.status.as_ref().map(|status| status.code)
    }

    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    #[must_use]
    pub fn good_headers(&self) -> &[HeaderPair] {
        &self.good_headers
    }

    #[must_use]
    pub fn bad_headers(&self) -> &[String] {
        &self.bad_headers
    }

    /// Returns the values of every well-formed header whose name matches
    /// `name` ignoring ASCII case, in order of appearance.
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.good_headers
            .iter()
            .filter(move |(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Summarises the status line validity and header counts.
    #[must_use]
    pub fn summary(&self) -> StatusSummary {
        match &self.status {
            Some(status) if is_three_digit_code(u64::from(status.code)) => StatusSummary::Valid {
                version: status.version.clone(),
                status_code: status.code,
                good_headers: self.good_headers.len(),
                bad_headers: self.bad_headers.len(),
            },
            _ => StatusSummary::Invalid,
        }
    }
}

/// Parses `raw` with the default `tracing` observer.
///
/// # Errors
/// See [`ResponseHead::parse`].
pub fn parse(raw: &[u8]) -> HeadResult<ResponseHead> {
    ResponseHead::parse(raw)
}

/// Parses `raw` with a caller supplied observer.
///
/// # Errors
/// See [`ResponseHead::parse_with`].
pub fn parse_with<O: ParseObserver + ?Sized>(
    raw: &[u8],
    observer: &mut O,
) -> HeadResult<ResponseHead> {
    ResponseHead::parse_with(raw, observer)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSummary {
    Invalid,
    Valid {
        version: String,
        status_code: u16,
        good_headers: usize,
        bad_headers: usize,
    },
}

impl core::fmt::Display for StatusSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid => writeln!(f, "Invalid status line"),
            Self::Valid {
                version,
                status_code,
                good_headers,
                bad_headers,
            } => {
                writeln!(f, "HTTP version: {version}")?;
                writeln!(f, "Status: {status_code}")?;
                writeln!(f, "Number of valid headers: {good_headers}")?;
                writeln!(f, "Number of invalid headers: {bad_headers}")?;
                writeln!(f, "{REPORT_RULE}")
            }
        }
    }
}
