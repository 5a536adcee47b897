use std::fmt;

/// Result type for posts API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure taxonomy for a single HTTP exchange with the posts API.
///
/// Exactly two things can go wrong on the wire: the exchange never
/// completes (`Transport`), or it completes with a non-success status
/// (`Status`). `Decode` covers a success response whose body does not
/// parse as the expected shape.
#[derive(Debug)]
pub enum ApiError {
    /// The request never reached the server or the response never
    /// arrived: DNS failure, refused connection, closed socket.
    Transport { message: String },

    /// The server answered with a non-2xx status.
    Status { status: u16 },

    /// The response body could not be decoded.
    Decode { message: String },
}

impl ApiError {
    pub fn transport(err: impl fmt::Display) -> Self {
        ApiError::Transport {
            message: err.to_string(),
        }
    }

    pub fn decode(err: impl fmt::Display) -> Self {
        ApiError::Decode {
            message: err.to_string(),
        }
    }

    /// The HTTP status, when the exchange completed at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }

    pub fn is_server(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport { message } => write!(f, "transport failure: {}", message),
            ApiError::Status { status } => write!(f, "server failure: HTTP {}", status),
            ApiError::Decode { message } => write!(f, "decode failure: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_accessor_only_for_server_failures() {
        let err = ApiError::Status { status: 404 };
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
        assert!(err.is_server());
        assert!(!err.is_transport());

        let err = ApiError::transport("connection refused");
        assert_eq!(err.status(), None);
        assert!(err.is_transport());
    }

    #[test]
    fn display_names_the_failure_kind() {
        assert_eq!(
            ApiError::Status { status: 500 }.to_string(),
            "server failure: HTTP 500"
        );
        assert_eq!(
            ApiError::transport("dns error").to_string(),
            "transport failure: dns error"
        );
    }
}
