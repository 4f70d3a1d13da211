//! Tolerant HTTP/1.x response head parsing.
//!
//! [`head`] turns the raw bytes of a response into a [`head::ResponseHead`]
//! without failing on malformed status or header lines. [`client`] holds the
//! blocking collaborators used to obtain those bytes from a live host.

pub mod client;
pub mod config;
pub mod head;

pub use head::{parse, parse_with, ResponseHead, StatusSummary};
