//! Error types shared by the fetcher, the parser and the CLI.
//!
//! Every variant carries the structured data a caller needs to tell failures
//! apart programmatically. `exit_code()` maps them onto the process exit codes
//! used by the `qocat` binary.

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OcatError>;

#[derive(thiserror::Error, Debug)]
pub enum OcatError {
    /// The request went through but the service sent back no content.
    #[error("Problem accessing resource {endpoint}: empty response")]
    EmptyResponse { endpoint: String },

    /// The service answered with something other than `200 OK`.
    ///
    /// OCat reports the reason as plain text in the body, so it is kept verbatim.
    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// The body had no usable header line once comments were stripped.
    #[error("Malformed catalog response: {reason}")]
    MalformedResponse { reason: String },

    /// The HTTP transport itself failed (DNS, connect, body read, ...).
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Invalid configuration (bad endpoint URL, bad timeout, ...).
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl OcatError {
    pub fn empty_response(endpoint: impl Into<String>) -> Self {
        Self::EmptyResponse {
            endpoint: endpoint.into(),
        }
    }

    pub fn request_failed(status: u16, body: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            body: body.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Process exit code for this failure.
    ///
    /// - `2`: usage, configuration or local I/O problems
    /// - `3`: the service answered but the body could not be parsed
    /// - `4`: the request itself failed
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config { .. } | Self::Io { .. } | Self::Json { .. } => 2,
            Self::MalformedResponse { .. } => 3,
            Self::EmptyResponse { .. } | Self::RequestFailed { .. } | Self::Transport { .. } => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_message_includes_body() {
        let err = OcatError::request_failed(404, "obsid not found");
        assert_eq!(err.to_string(), "Request failed with status 404: obsid not found");
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_codes_group_by_failure_kind() {
        assert_eq!(OcatError::config("bad url").exit_code(), 2);
        assert_eq!(OcatError::malformed("no header").exit_code(), 3);
        assert_eq!(OcatError::empty_response("https://example.org").exit_code(), 4);
    }

    #[test]
    fn empty_response_names_endpoint() {
        let err = OcatError::empty_response("https://cda.harvard.edu/srservices/ocatDetails.do");
        assert!(err.to_string().contains("cda.harvard.edu"));
    }
}
