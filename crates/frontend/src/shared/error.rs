use thiserror::Error;

/// Failure of a single request/response cycle with the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// Non-success status with a body that is not a known JSON envelope.
    #[error("HTTP {0}")]
    Http(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// Application error reported by the server in the response body.
    #[error("{0}")]
    Server(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl ApiError {
    /// Transport-level failures get a generic message in the UI; only
    /// server-reported errors are shown verbatim.
    pub fn is_transport(&self) -> bool {
        !matches!(self, ApiError::Server(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ApiError::Http(502).to_string(), "HTTP 502");
        assert_eq!(ApiError::Server("index empty".into()).to_string(), "index empty");
    }

    #[test]
    fn test_transport_classification() {
        assert!(ApiError::Network("offline".into()).is_transport());
        assert!(ApiError::Decode("eof".into()).is_transport());
        assert!(!ApiError::Server("nope".into()).is_transport());
    }
}
