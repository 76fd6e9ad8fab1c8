//! Error types for the API client.

use crate::response::Wrapper;

/// Errors that can occur when making API requests.
///
/// An error reported by the API itself (`error_id`, `error_name`,
/// `error_message`) is not one of these: it arrives in a successfully decoded
/// [`Wrapper`] and is inspected through [`Wrapper::api_error`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP request failed (network, DNS, TLS, or reading the body).
    #[error("Request failed")]
    Transport(#[from] reqwest::Error),
    /// The response body was not valid JSON, or the items did not match the
    /// requested type.
    #[error("Failed to decode response")]
    Decode {
        #[source]
        source: serde_json::Error,
        /// Metadata decoded before the failure. Default-valued when the
        /// envelope itself could not be read.
        wrapper: Box<Wrapper>,
    },
}

impl Error {
    pub(crate) fn decode(source: serde_json::Error, wrapper: Wrapper) -> Self {
        Error::Decode {
            source,
            wrapper: Box::new(wrapper),
        }
    }

    /// Returns the envelope metadata attached to a decode error.
    pub fn wrapper(&self) -> Option<&Wrapper> {
        match self {
            Error::Decode { wrapper, .. } => Some(wrapper),
            Error::Transport(_) => None,
        }
    }
}
