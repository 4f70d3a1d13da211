use crate::client::errors::{FetchError, FetchResult};
use crate::client::request::{RequestBuilder, DEFAULT_USER_AGENT};
use crate::client::target::{Scheme, Target};
use crate::config::FetchConfig;
use crate::head::{ResponseHead, HEAD_TERMINATOR};
use memchr::memmem;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

const READ_CHUNK_SIZE: usize = 1024;

/// Transport moves one request to a target and returns every byte the peer
/// sent back until it closed the stream.
pub trait Transport {
    /// # Errors
    /// Returns [`FetchError`] when the exchange could not be completed.
    fn exchange(&self, target: &Target, request: &[u8]) -> FetchResult<Vec<u8>>;
}

impl<F> Transport for F
where
    F: Fn(&Target, &[u8]) -> FetchResult<Vec<u8>>,
{
    fn exchange(&self, target: &Target, request: &[u8]) -> FetchResult<Vec<u8>> {
        self(target, request)
    }
}

/// Blocking plain-TCP transport. Connections are never reused.
#[derive(Debug, Clone)]
pub struct TcpTransport {
    connect_timeout: Duration,
    read_timeout: Duration,
    max_response_bytes: usize,
}

impl Default for TcpTransport {
    fn default() -> Self {
        Self::new(&FetchConfig::default())
    }
}

impl TcpTransport {
    #[must_use]
    pub fn new(config: &FetchConfig) -> Self {
        Self {
            connect_timeout: config.connect_timeout(),
            read_timeout: config.read_timeout(),
            max_response_bytes: config.max_response_bytes,
        }
    }

    fn resolve(target: &Target) -> FetchResult<Vec<SocketAddr>> {
        let addrs: Vec<SocketAddr> = (target.host.as_str(), target.port)
            .to_socket_addrs()
            .map_err(|err| FetchError::Resolve(format!("{}: {err}", target.host)))?
            .collect();

        if addrs.is_empty() {
            return Err(FetchError::Resolve(target.host.clone()));
        }

        Ok(addrs)
    }

    fn connect(&self, addrs: &[SocketAddr]) -> FetchResult<TcpStream> {
        let mut last_error = None;
        for addr in addrs {
            match TcpStream::connect_timeout(addr, self.connect_timeout) {
                Ok(stream) => return Ok(stream),
                Err(err) => {
                    tracing::debug!("Connect to {} failed: {:?}", addr, err);
                    last_error = Some(err);
                }
            }
        }

        Err(FetchError::Connect(last_error.unwrap_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "no address to connect to")
        })))
    }

    fn read_to_close(&self, stream: &mut TcpStream) -> FetchResult<Vec<u8>> {
        let mut data = Vec::new();
        let mut chunk = [0u8; READ_CHUNK_SIZE];

        loop {
            let read = match stream.read(&mut chunk) {
                Ok(0) => break,
                Ok(read) => read,
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(FetchError::Read(err)),
            };

            data.extend_from_slice(&chunk[..read]);
            if data.len() > self.max_response_bytes {
                data.truncate(self.max_response_bytes);

                // the body is never inspected, a complete head is enough
                if memmem::find(&data, HEAD_TERMINATOR).is_none() {
                    return Err(FetchError::ResponseTooLarge(self.max_response_bytes));
                }

                tracing::debug!(
                    "Response exceeded {} bytes after a complete head, stopped reading",
                    self.max_response_bytes
                );
                break;
            }
        }

        Ok(data)
    }
}

impl Transport for TcpTransport {
    fn exchange(&self, target: &Target, request: &[u8]) -> FetchResult<Vec<u8>> {
        if target.scheme == Scheme::Https {
            return Err(FetchError::TlsUnsupported);
        }

        let addrs = Self::resolve(target)?;
        let mut stream = self.connect(&addrs)?;

        stream
            .set_read_timeout(Some(self.read_timeout))
            .map_err(FetchError::Connect)?;
        stream
            .set_write_timeout(Some(self.read_timeout))
            .map_err(FetchError::Connect)?;

        stream.write_all(request).map_err(FetchError::Write)?;
        stream.flush().map_err(FetchError::Write)?;

        self.read_to_close(&mut stream)
    }
}

/// `HeadFetcher` resolves a URL, sends the canned `GET` request over its
/// transport and parses the head of whatever comes back.
#[derive(Debug, Clone)]
pub struct HeadFetcher<T: Transport = TcpTransport> {
    transport: T,
    user_agent: String,
}

impl HeadFetcher<TcpTransport> {
    #[must_use]
    pub fn from_config(config: &FetchConfig) -> Self {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Self {
            transport: TcpTransport::new(config),
            user_agent,
        }
    }
}

impl<T: Transport> HeadFetcher<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    #[must_use]
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Fetches `request_url` and parses the response head.
    ///
    /// # Errors
    /// Returns [`FetchError`] when the URL is not a valid target, the
    /// exchange fails or the response head is not valid UTF-8.
    pub fn fetch(&self, request_url: &str) -> FetchResult<ResponseHead> {
        let target = Target::parse(request_url)?;
        tracing::info!(
            "Fetching {} via {}:{}",
            request_url,
            target.host,
            target.port
        );

        let request = RequestBuilder::get_with_agent(&target, &self.user_agent).render();
        let raw = self.transport.exchange(&target, &request)?;
        tracing::debug!("Received {} bytes from {}", raw.len(), request_url);

        Ok(ResponseHead::parse(&raw)?)
    }
}
