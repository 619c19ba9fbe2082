//! Error types shared across the crate.

use thiserror::Error;

pub type Result<T, E = FreshError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum FreshError {
    /// Rejected input, caught before any network activity.
    #[error("{0}")]
    Validation(String),

    /// Transport failure or non-success status on a listing call.
    #[error("failed to get {what} ({source})")]
    Fetch {
        what: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// A listing response body did not decode into the expected shape.
    #[error("failed to parse {what} ({source})")]
    Decode {
        what: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// A DELETE request failed at the transport level or returned a
    /// non-success status.
    #[error("delete request failed ({source})")]
    DeleteRequest {
        #[source]
        source: reqwest::Error,
    },

    /// A branch deletion failed. `deleted` counts the branches removed
    /// before the failure; those are not rolled back.
    #[error("failed to delete branch {branch} ({source})")]
    Delete {
        branch: String,
        deleted: usize,
        #[source]
        source: Box<FreshError>,
    },

    /// The HTTP client itself could not be constructed.
    #[error("failed to build http client ({0})")]
    Client(#[source] reqwest::Error),
}
