use memchr::memmem;

/// Marker separating the head section from the body.
pub const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// `HeadFrame` is a borrowed view over a raw response split at the first
/// blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadFrame<'a> {
    pub head: &'a [u8],
    pub body: &'a [u8],

    /// false when no CRLFCRLF was found and the whole buffer became the head.
    pub terminated: bool,
}

/// Splits `raw` at the first occurrence of [`HEAD_TERMINATOR`].
///
/// A buffer without the marker is treated as an unterminated head: the whole
/// buffer is returned as `head` and `body` is empty.
#[must_use]
pub fn split_head(raw: &[u8]) -> HeadFrame<'_> {
    match memmem::find(raw, HEAD_TERMINATOR) {
        Some(index) => HeadFrame {
            head: &raw[..index],
            body: &raw[index + HEAD_TERMINATOR.len()..],
            terminated: true,
        },
        None => HeadFrame {
            head: raw,
            body: &[],
            terminated: false,
        },
    }
}
