//! Question-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ChoiceId, DomainError, ErrorCode, ValidationError};

/// Errors raised by question aggregate operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    /// A field or selection failed validation. Nothing was mutated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No current choice carries the given id.
    #[error("Choice not found: {0}")]
    ChoiceNotFound(ChoiceId),
}

impl QuestionError {
    pub fn choice_not_found(id: ChoiceId) -> Self {
        QuestionError::ChoiceNotFound(id)
    }

    /// Returns true for validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, QuestionError::Validation(_))
    }

    /// Returns true when a referenced choice does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, QuestionError::ChoiceNotFound(_))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            QuestionError::Validation(err) => err.code(),
            QuestionError::ChoiceNotFound(_) => ErrorCode::ChoiceNotFound,
        }
    }
}

impl From<QuestionError> for DomainError {
    fn from(err: QuestionError) -> Self {
        let message = err.to_string();
        match err {
            QuestionError::Validation(inner) => inner.into(),
            QuestionError::ChoiceNotFound(id) => DomainError::new(ErrorCode::ChoiceNotFound, message)
                .with_detail("choice_id", id.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_choice_id() {
        let err = QuestionError::choice_not_found(ChoiceId::new(99));
        assert_eq!(err.to_string(), "Choice not found: 99");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn validation_error_is_transparent() {
        let err: QuestionError = ValidationError::empty_field("title").into();
        assert_eq!(err.to_string(), "Field 'title' cannot be empty");
        assert!(err.is_validation());
        assert_eq!(err.code(), ErrorCode::EmptyField);
    }

    #[test]
    fn converts_to_domain_error_with_details() {
        let err: DomainError = QuestionError::choice_not_found(ChoiceId::new(3)).into();
        assert_eq!(err.code, ErrorCode::ChoiceNotFound);
        assert_eq!(err.details.get("choice_id"), Some(&"3".to_string()));

        let err: DomainError =
            QuestionError::from(ValidationError::too_long("text", 100, 101)).into();
        assert_eq!(err.code, ErrorCode::TooLong);
        assert_eq!(err.details.get("field"), Some(&"text".to_string()));
    }
}
