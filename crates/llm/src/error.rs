/// Errors from a completion call.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Provider API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider answered 2xx but the body had no completion text.
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    /// The gateway could not be assembled from configuration.
    #[error("Invalid completion configuration: {0}")]
    Config(String),
}
