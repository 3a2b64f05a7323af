//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `question` - Question aggregate, its choices, and selection scoring

pub mod foundation;
pub mod question;
