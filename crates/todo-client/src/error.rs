//! Client-side errors

/// Errors produced by the HTTP client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (connection, timeout, body decode)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Server returned {status}: {}", message.as_deref().unwrap_or("<no message>"))]
    Api {
        status: u16,
        /// The `error` field of the server's JSON body, when present
        message: Option<String>,
    },

    /// The token provider could not produce a credential
    #[error("Failed to acquire access token: {0}")]
    Token(String),
}

impl ClientError {
    /// The server-provided error message, if the server sent one
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
