//! Choice entity owned by a question.

use crate::domain::foundation::{ChoiceId, ValidationError};

/// Maximum length for choice text, in characters.
pub const MAX_CHOICE_TEXT_LENGTH: usize = 100;

/// A single answer option.
///
/// Choices are only created and changed by their owning [`super::Question`];
/// values handed out to callers are snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    id: ChoiceId,
    text: String,
    is_correct: bool,
}

impl Choice {
    pub(super) fn new(id: ChoiceId, text: String, is_correct: bool) -> Self {
        Self {
            id,
            text,
            is_correct,
        }
    }

    pub fn id(&self) -> ChoiceId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub(super) fn set_correct(&mut self, is_correct: bool) {
        self.is_correct = is_correct;
    }

    pub(super) fn replace_text(&mut self, text: String) -> String {
        std::mem::replace(&mut self.text, text)
    }

    /// Checks choice text is 1-100 characters.
    pub(super) fn validate_text(text: &str) -> Result<(), ValidationError> {
        if text.is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        let len = text.chars().count();
        if len > MAX_CHOICE_TEXT_LENGTH {
            return Err(ValidationError::too_long("text", MAX_CHOICE_TEXT_LENGTH, len));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_text_accepts_bounds() {
        assert!(Choice::validate_text("a").is_ok());
        assert!(Choice::validate_text(&"a".repeat(100)).is_ok());
    }

    #[test]
    fn validate_text_rejects_empty() {
        assert_eq!(
            Choice::validate_text(""),
            Err(ValidationError::empty_field("text"))
        );
    }

    #[test]
    fn validate_text_rejects_over_100() {
        assert_eq!(
            Choice::validate_text(&"a".repeat(101)),
            Err(ValidationError::too_long("text", 100, 101))
        );
    }

    #[test]
    fn validate_text_counts_characters_not_bytes() {
        // 100 two-byte characters
        assert!(Choice::validate_text(&"é".repeat(100)).is_ok());
    }

    #[test]
    fn set_correct_toggles_flag() {
        let mut choice = Choice::new(ChoiceId::new(1), "C1".to_string(), false);
        choice.set_correct(true);
        assert!(choice.is_correct());
        choice.set_correct(false);
        assert!(!choice.is_correct());
    }
}
