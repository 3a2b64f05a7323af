//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the quiz domain.

mod errors;
mod ids;
mod points;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ChoiceId, QuestionId};
pub use points::Points;
pub use timestamp::Timestamp;
