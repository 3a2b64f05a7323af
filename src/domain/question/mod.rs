//! Question domain module.
//!
//! A question is the aggregate root; it owns its choices, assigns their ids,
//! and scores a learner's selection against the choices marked correct.
//!
//! # Operations
//!
//! - `Question::new` / `Question::with_settings` - validated construction
//! - `add_choice`, `edit_choice_text`, `remove_choice_by_id`, `remove_all_choices`
//! - `set_correct_choices` - replace the answer key
//! - `correct_selected_choices`, `is_fully_correct`, `score` - grade a selection

mod aggregate;
mod choice;
mod errors;

pub use aggregate::{Question, DEFAULT_MAX_SELECTIONS, MAX_TITLE_LENGTH};
pub use choice::{Choice, MAX_CHOICE_TEXT_LENGTH};
pub use errors::QuestionError;
