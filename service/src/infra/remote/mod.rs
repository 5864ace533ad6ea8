//! [`Remote`] listing endpoint implementations.

pub mod dto;
#[cfg(feature = "http")]
pub mod http;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "http")]
pub use self::http::Http;

/// Remote source operation.
pub use common::Handler as Remote;

/// [`Remote`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Request could not be performed.
    #[cfg(feature = "http")]
    #[display("HTTP request failed: {_0}")]
    Transport(reqwest::Error),

    /// Endpoint responded with a non-success status.
    #[display("Endpoint responded with `{_0}` status")]
    #[from(ignore)]
    Status(#[error(not(source))] u16),

    /// Response body is not a list of users.
    #[display("Failed to decode response body: {_0}")]
    Decode(serde_json::Error),
}
