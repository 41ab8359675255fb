//! Board client error types.
//!
//! `NotFound` is the one variant callers are expected to recover from. The
//! label attach protocol creates a label only for a `NotFound` on a label.

use miette::Diagnostic;
use thiserror::Error;

/// Errors returned by a [`BoardClient`](crate::board::BoardClient).
#[derive(Error, Diagnostic, Debug)]
pub enum BoardError {
    #[error("{entity} '{name}' not found")]
    #[diagnostic(code(plankacli::board::not_found))]
    NotFound { entity: String, name: String },

    #[error("Planka API error ({status}): {message}")]
    #[diagnostic(code(plankacli::board::api_error))]
    Api { status: u16, message: String },

    #[error("Failed to connect to Planka")]
    #[diagnostic(
        code(plankacli::board::connection_failed),
        help("Check the Planka URL (--url or PLANKA_URL) and that the server is reachable.")
    )]
    ConnectionFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from Planka: {message}")]
    #[diagnostic(
        code(plankacli::board::invalid_response),
        help("The server returned data in an unexpected format. Is this a Planka 1.x instance?")
    )]
    InvalidResponse { message: String },

    #[error("Invalid access token: {message}")]
    #[diagnostic(
        code(plankacli::board::invalid_token),
        help("Tokens have the form accessToken or accessToken:httpOnlyToken")
    )]
    InvalidToken { message: String },

    #[error("No label colours available to choose from")]
    #[diagnostic(code(plankacli::board::empty_palette))]
    EmptyPalette,
}

impl BoardError {
    pub fn not_found(entity: &str, name: impl Into<String>) -> Self {
        BoardError::NotFound {
            entity: entity.to_string(),
            name: name.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BoardError::NotFound { .. })
    }

    /// True only when a label lookup by name came up empty.
    pub fn is_label_missing(&self) -> bool {
        matches!(self, BoardError::NotFound { entity, .. } if entity == "label")
    }
}

impl From<reqwest::Error> for BoardError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            BoardError::ConnectionFailed { source: e }
        } else {
            BoardError::InvalidResponse {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(e: serde_json::Error) -> Self {
        BoardError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
