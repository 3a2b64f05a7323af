//! Quiz Question - question aggregate with validated, sequentially numbered choices.
//!
//! The crate models a single quiz question that owns an ordered set of
//! choices and scores a learner's selection against the choices marked correct.

pub mod config;
pub mod domain;
pub mod telemetry;
