use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ServiceError {
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn profile_not_found(id: &str) -> Self {
        Self::NotFound(format!("profile with id = {} not found", id))
    }

    pub fn email_taken(email: &str) -> Self {
        Self::Conflict(format!("a profile with email {} already exists", email))
    }

    /// Lock poisoning on the store surfaces as an internal error.
    pub fn store_unavailable(err: impl std::fmt::Display) -> Self {
        Self::Internal(format!("profile store unavailable: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::ServiceError;

    #[test]
    fn test_validation_message_lists_every_violation() {
        let err = ServiceError::Validation(vec![
            "first name must be at least 2 characters".to_string(),
            "email must be valid".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: first name must be at least 2 characters, email must be valid"
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = ServiceError::profile_not_found("abc");
        assert_eq!(err.to_string(), "profile with id = abc not found");
    }
}
