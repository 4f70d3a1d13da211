use lazy_static::lazy_static;
use regex::Regex;

// `<name> *: *<rest of line>`; the value keeps any further colons.
const HEADER_LINE_PATTERN: &str = r"(?s)^([A-Za-z0-9_\-]+) *: *(.*)$";

lazy_static! {
    static ref HEADER_LINE_REGEX: Regex =
        Regex::new(HEADER_LINE_PATTERN).expect("header line pattern should compile");
}

pub type HeaderPair = (String, String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MalformedReason {
    /// no `name:` prefix made of letters, digits, `-` or `_`.
    NotAHeader,
    EmptyValue,
    NonAsciiValue,
}

/// Classification of one header line. Every line yields exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HeaderLine {
    WellFormed { name: String, value: String },
    Malformed { line: String, reason: MalformedReason },
}

impl HeaderLine {
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        matches!(self, Self::WellFormed { .. })
    }
}

/// Classifies a single header line.
///
/// A line is well-formed when it has the `Name: Value` shape and the value is
/// non-empty 7-bit ASCII. Anything else is returned as malformed with the raw
/// line kept verbatim.
#[must_use]
pub fn classify_header_line(line: &str) -> HeaderLine {
    let Some(captures) = HEADER_LINE_REGEX.captures(line) else {
        return HeaderLine::Malformed {
            line: line.to_string(),
            reason: MalformedReason::NotAHeader,
        };
    };

    let name = &captures[1];
    let value = &captures[2];

    if value.is_empty() {
        return HeaderLine::Malformed {
            line: line.to_string(),
            reason: MalformedReason::EmptyValue,
        };
    }

    if !value.is_ascii() {
        return HeaderLine::Malformed {
            line: line.to_string(),
            reason: MalformedReason::NonAsciiValue,
        };
    }

    HeaderLine::WellFormed {
        name: name.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod test_header_line {
    use super::*;

    fn good(name: &str, value: &str) -> HeaderLine {
        HeaderLine::WellFormed {
            name: name.into(),
            value: value.into(),
        }
    }

    fn bad(line: &str, reason: MalformedReason) -> HeaderLine {
        HeaderLine::Malformed {
            line: line.into(),
            reason,
        }
    }

    #[test]
    fn extracts_name_and_value() {
        assert_eq!(classify_header_line("Key: Value"), good("Key", "Value"));
        assert_eq!(classify_header_line("Key2: Value 2"), good("Key2", "Value 2"));
        assert_eq!(classify_header_line("X_Trace-Id:abc"), good("X_Trace-Id", "abc"));
        assert_eq!(classify_header_line("Key   :   spaced"), good("Key", "spaced"));
    }

    #[test]
    fn value_keeps_further_colons() {
        assert_eq!(
            classify_header_line("Location: http://example.com:8080/a"),
            good("Location", "http://example.com:8080/a")
        );
    }

    #[test]
    fn lines_without_header_shape_are_malformed() {
        assert_eq!(
            classify_header_line("helloworld"),
            bad("helloworld", MalformedReason::NotAHeader)
        );
        assert_eq!(
            classify_header_line(": no name"),
            bad(": no name", MalformedReason::NotAHeader)
        );
        assert_eq!(
            classify_header_line("Bad Name: value"),
            bad("Bad Name: value", MalformedReason::NotAHeader)
        );
        assert_eq!(
            classify_header_line(" Folded: value"),
            bad(" Folded: value", MalformedReason::NotAHeader)
        );
        assert_eq!(classify_header_line(""), bad("", MalformedReason::NotAHeader));
    }

    #[test]
    fn empty_values_are_malformed() {
        assert_eq!(
            classify_header_line("Key:"),
            bad("Key:", MalformedReason::EmptyValue)
        );
        assert_eq!(
            classify_header_line("Key:   "),
            bad("Key:   ", MalformedReason::EmptyValue)
        );
    }

    #[test]
    fn non_ascii_values_are_malformed() {
        assert_eq!(
            classify_header_line("Key2: Value 🚀"),
            bad("Key2: Value 🚀", MalformedReason::NonAsciiValue)
        );
        assert_eq!(
            classify_header_line("Server: café"),
            bad("Server: café", MalformedReason::NonAsciiValue)
        );
    }

    #[test]
    fn control_bytes_within_seven_bits_are_accepted() {
        assert!(classify_header_line("Key: a\tb").is_well_formed());
        assert!(classify_header_line("Key: a\nb").is_well_formed());
    }
}
