use crate::head::errors::HeadResult;

pub type Line = String;

pub const LINE_SEPARATOR: &str = "\r\n";

/// Decodes the head section as UTF-8 and splits it on CRLF.
///
/// The first line is the status line candidate, the rest are header line
/// candidates. An empty head yields a single empty line.
///
/// # Errors
/// Returns [`HeadDecodeError`](crate::head::HeadDecodeError) when the head
/// section is not valid UTF-8.
pub fn decode_lines(head: &[u8]) -> HeadResult<Vec<Line>> {
    let text = std::str::from_utf8(head)?;
    Ok(text.split(LINE_SEPARATOR).map(String::from).collect())
}
