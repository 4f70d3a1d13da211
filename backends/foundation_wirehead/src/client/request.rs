use crate::client::target::Target;

pub const DEFAULT_USER_AGENT: &str = concat!("wirehead/", env!("CARGO_PKG_VERSION"));

const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";

/// Builds the canned HTTP/1.1 `GET` request used to probe a target.
///
/// The request always asks the server to close the connection so the whole
/// response can be read until end of stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBuilder {
    path: String,
    headers: Vec<(String, String)>,
}

impl RequestBuilder {
    #[must_use]
    pub fn get(target: &Target) -> Self {
        Self::get_with_agent(target, DEFAULT_USER_AGENT)
    }

    #[must_use]
    pub fn get_with_agent(target: &Target, user_agent: &str) -> Self {
        let headers = vec![
            ("Host".to_string(), target.authority()),
            ("User-Agent".to_string(), user_agent.to_string()),
            ("Accept".to_string(), DEFAULT_ACCEPT.to_string()),
            ("Accept-Language".to_string(), "en-US,en;q=0.5".to_string()),
            ("Accept-Encoding".to_string(), "gzip, deflate, br".to_string()),
            ("DNT".to_string(), "1".to_string()),
            ("Upgrade-Insecure-Requests".to_string(), "1".to_string()),
            ("Connection".to_string(), "close".to_string()),
        ];

        Self {
            path: target.path.clone(),
            headers,
        }
    }

    /// Appends an extra header after the canned ones.
    #[must_use]
    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Renders the request head: CRLF separated lines closed by a blank line.
    #[must_use]
    pub fn render(&self) -> Vec<u8> {
        let mut lines = Vec::with_capacity(self.headers.len() + 1);
        lines.push(format!("GET {} HTTP/1.1", self.path));
        lines.extend(
            self.headers
                .iter()
                .map(|(key, value)| format!("{key}: {value}")),
        );

        let mut rendered = lines.join("\r\n");
        rendered.push_str("\r\n\r\n");
        rendered.into_bytes()
    }
}
