use thiserror::Error;

/// Failures talking to the remote donor service.
///
/// The UI renders every variant as the same generic failure toast; the
/// variants exist for logging.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Service answered {operation} with HTTP {status}: {body}")]
    Http {
        operation: String,
        status: u16,
        body: String,
    },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("{operation} rejected: {message}")]
    Rejected { operation: String, message: String },

    #[error("Donor {id} not found")]
    NotFound { id: u64 },

    #[error("Not signed in")]
    Unauthenticated,

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl ClientError {
    pub fn rejected(operation: &str, message: impl Into<String>) -> Self {
        ClientError::Rejected {
            operation: operation.to_string(),
            message: message.into(),
        }
    }

    /// Text shown under the failure toast title
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Rejected { message, .. } => message.clone(),
            ClientError::Unauthenticated => "Please sign in again".to_string(),
            other => other.to_string(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_service_text() {
        let err = ClientError::rejected("updateDonorStatus", "Invalid transition");
        assert_eq!(err.user_message(), "Invalid transition");
        assert_eq!(err.to_string(), "updateDonorStatus rejected: Invalid transition");

        let err = ClientError::Http {
            operation: "getAllDonors".to_string(),
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Service answered getAllDonors with HTTP 502: bad gateway"
        );
    }
}
