use crate::client::errors::{TargetError, TargetResult};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    #[must_use]
    pub fn default_port(&self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl core::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Scheme {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            _ => Err(TargetError::UnsupportedScheme(s.to_string())),
        }
    }
}

/// `Target` is a URL resolved into the pieces needed to open a connection
/// and write a request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,

    /// path plus query, always starting with `/`.
    pub path: String,
}

impl Target {
    /// Parses `request_url`, filling in the scheme's default port when none
    /// is given.
    ///
    /// # Errors
    /// Returns [`TargetError`] for unparsable URLs, schemes other than
    /// `http`/`https` and URLs without a host.
    pub fn parse(request_url: &str) -> TargetResult<Self> {
        let parsed = Url::parse(request_url)?;
        let scheme: Scheme = parsed.scheme().parse()?;

        let host = match parsed.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(TargetError::MissingHost),
        };

        let port = parsed.port().unwrap_or_else(|| scheme.default_port());

        let mut path = parsed.path().to_string();
        if path.is_empty() {
            path.push('/');
        }
        if let Some(query) = parsed.query() {
            path.push('?');
            path.push_str(query);
        }

        Ok(Self {
            scheme,
            host,
            port,
            path,
        })
    }

    /// Value for the `Host` header: the port is only included when it is
    /// not the scheme's default.
    #[must_use]
    pub fn authority(&self) -> String {
        if self.port == self.scheme.default_port() {
            self.host.clone()
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

#[cfg(test)]
mod test_target {
    use super::*;

    #[test]
    fn fills_default_ports() {
        let target = Target::parse("http://Example.com").unwrap();
        assert_eq!(target.scheme, Scheme::Http);
        assert_eq!(target.host, "example.com");
        assert_eq!(target.port, 80);
        assert_eq!(target.path, "/");

        let target = Target::parse("https://example.com/").unwrap();
        assert_eq!(target.scheme, Scheme::Https);
        assert_eq!(target.port, 443);
    }

    #[test]
    fn keeps_explicit_port_path_and_query() {
        let target = Target::parse("http://localhost:8080/status?verbose=1").unwrap();
        assert_eq!(target.host, "localhost");
        assert_eq!(target.port, 8080);
        assert_eq!(target.path, "/status?verbose=1");
        assert_eq!(target.authority(), "localhost:8080");
    }

    #[test]
    fn authority_omits_default_port() {
        let target = Target::parse("http://example.com:80/a").unwrap();
        assert_eq!(target.authority(), "example.com");
    }

    #[test]
    fn rejects_unknown_schemes() {
        assert_eq!(
            Target::parse("ftp://example.com/"),
            Err(TargetError::UnsupportedScheme("ftp".into()))
        );
    }

    #[test]
    fn rejects_unparsable_urls() {
        assert!(matches!(
            Target::parse("example.com"),
            Err(TargetError::InvalidUrl(_))
        ));
    }
}
