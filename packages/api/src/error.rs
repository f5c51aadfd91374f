use serde::Deserialize;
use thiserror::Error;

/// The five calls the client can make, used to pick a fallback error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Message shown when the server gives no reason of its own.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch users",
            Operation::Get => "Failed to fetch user",
            Operation::Create => "Failed to add user",
            Operation::Update => "Failed to update user",
            Operation::Delete => "Failed to delete user",
        }
    }
}

/// Errors from user service calls.
///
/// Every variant's `Display` is the message intended for the user, so views can
/// render `error.to_string()` directly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{message}")]
    Transport { message: String },

    /// The server answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// A success response whose body could not be parsed.
    #[error("{message}")]
    Decode { message: String },
}

impl ApiError {
    pub fn transport(op: Operation) -> Self {
        ApiError::Transport {
            message: op.fallback_message().to_string(),
        }
    }

    pub fn decode(op: Operation) -> Self {
        ApiError::Decode {
            message: op.fallback_message().to_string(),
        }
    }

    /// Build a server error from a status code and raw response body.
    ///
    /// Uses the body's `message` field when present and non-empty, otherwise the
    /// operation's fallback.
    pub fn from_response(op: Operation, status: u16, body: &str) -> Self {
        let message = server_message(body).unwrap_or_else(|| op.fallback_message().to_string());
        ApiError::Server { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.message.filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_used() {
        let body = r#"{"message":"Email already exists"}"#;
        let err = ApiError::from_response(Operation::Create, 409, body);
        assert_eq!(err.to_string(), "Email already exists");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_fallback_when_body_has_no_message() {
        let err = ApiError::from_response(Operation::Update, 500, "<html>oops</html>");
        assert_eq!(err.to_string(), "Failed to update user");

        let err = ApiError::from_response(Operation::Delete, 404, r#"{"message":""}"#);
        assert_eq!(err.to_string(), "Failed to delete user");
    }

    #[test]
    fn test_transport_uses_fallback() {
        assert_eq!(ApiError::transport(Operation::List).to_string(), "Failed to fetch users");
        assert_eq!(ApiError::transport(Operation::List).status(), None);
    }
}
