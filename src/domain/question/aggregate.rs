//! Question aggregate entity.
//!
//! A question owns its choices outright. Choice ids come from a per-question
//! counter that only ever grows, so an id is never handed out twice even
//! after choices are removed or cleared.
//!
//! # Concurrency
//!
//! `Question` is plain owned data and is `Send + Sync`, but none of its
//! operations synchronize internally. Share it across threads behind a lock
//! such as `Arc<Mutex<Question>>`.

use std::collections::HashSet;

use crate::domain::foundation::{ChoiceId, Points, QuestionId, Timestamp, ValidationError};

use super::{Choice, QuestionError};

/// Maximum length for question title, in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Default cap on how many choices one answer may select.
pub const DEFAULT_MAX_SELECTIONS: u32 = 1;

/// Question aggregate - a prompt with ordered answer choices.
///
/// # Invariants
///
/// - `id` is unique within the process
/// - `title` is 1-200 characters
/// - `points` is 1-100
/// - `max_selections` is at least 1
/// - choice ids are unique among all choices ever added
/// - the next choice id is the number of choices ever added plus one
#[derive(Debug, Clone)]
pub struct Question {
    /// Unique identifier for this question.
    id: QuestionId,

    /// Prompt shown to the learner.
    title: String,

    /// Points awarded for a fully correct answer.
    points: Points,

    /// Largest selection accepted for scoring.
    max_selections: u32,

    /// Choices in insertion order.
    choices: Vec<Choice>,

    /// How many choices have ever been added.
    choices_created: u32,

    /// When the question was created.
    created_at: Timestamp,

    /// When the question was last updated.
    updated_at: Timestamp,
}

impl Question {
    /// Create a question worth one point that accepts a single selection.
    ///
    /// # Errors
    ///
    /// - `Validation` if title is empty or longer than 200 characters
    pub fn new(title: impl Into<String>) -> Result<Self, QuestionError> {
        Self::with_settings(title, Points::default().value(), DEFAULT_MAX_SELECTIONS)
    }

    /// Create a question with explicit points and selection cap.
    ///
    /// # Errors
    ///
    /// - `Validation` if title is empty or longer than 200 characters
    /// - `Validation` if points is outside 1-100
    /// - `Validation` if max_selections is zero
    pub fn with_settings(
        title: impl Into<String>,
        points: u8,
        max_selections: u32,
    ) -> Result<Self, QuestionError> {
        Self::with_id(QuestionId::new(), title, points, max_selections)
    }

    /// Create a question under an id allocated by the caller.
    pub fn with_id(
        id: QuestionId,
        title: impl Into<String>,
        points: u8,
        max_selections: u32,
    ) -> Result<Self, QuestionError> {
        let title = title.into();
        Self::validate_title(&title)?;
        let points = Points::try_new(points)?;
        Self::validate_max_selections(max_selections)?;

        let now = Timestamp::now();
        tracing::debug!(question_id = %id, points = points.value(), max_selections, "Question created");
        Ok(Self {
            id,
            title,
            points,
            max_selections,
            choices: Vec::new(),
            choices_created: 0,
            created_at: now,
            updated_at: now,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the question ID.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Returns the question title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the points awarded for a fully correct answer.
    pub fn points(&self) -> Points {
        self.points
    }

    /// Returns the selection cap.
    pub fn max_selections(&self) -> u32 {
        self.max_selections
    }

    /// Returns the choices in insertion order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Returns the number of current choices.
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    /// Finds a current choice by id.
    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id() == id)
    }

    /// Returns the id the next added choice will receive.
    pub fn next_choice_id(&self) -> ChoiceId {
        ChoiceId::new(self.choices_created + 1)
    }

    /// Returns ids of choices marked correct, in insertion order.
    pub fn correct_choice_ids(&self) -> Vec<ChoiceId> {
        self.choices
            .iter()
            .filter(|c| c.is_correct())
            .map(Choice::id)
            .collect()
    }

    /// Returns when the question was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the question was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Rename the question, returning the previous title.
    ///
    /// # Errors
    ///
    /// - `Validation` if title is empty or longer than 200 characters
    pub fn rename(&mut self, new_title: impl Into<String>) -> Result<String, QuestionError> {
        let new_title = new_title.into();
        Self::validate_title(&new_title)?;

        let old_title = std::mem::replace(&mut self.title, new_title);
        self.touch();
        tracing::debug!(question_id = %self.id, "Question renamed");
        Ok(old_title)
    }

    /// Change the points awarded.
    ///
    /// # Errors
    ///
    /// - `Validation` if points is outside 1-100
    pub fn set_points(&mut self, points: u8) -> Result<(), QuestionError> {
        self.points = Points::try_new(points)?;
        self.touch();
        Ok(())
    }

    /// Change the selection cap.
    ///
    /// # Errors
    ///
    /// - `Validation` if max_selections is zero
    pub fn set_max_selections(&mut self, max_selections: u32) -> Result<(), QuestionError> {
        Self::validate_max_selections(max_selections)?;
        self.max_selections = max_selections;
        self.touch();
        Ok(())
    }

    /// Append a choice and return a snapshot of it.
    ///
    /// # Errors
    ///
    /// - `Validation` if text is empty or longer than 100 characters
    pub fn add_choice(
        &mut self,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<Choice, QuestionError> {
        let text = text.into();
        Choice::validate_text(&text)?;

        self.choices_created += 1;
        let choice = Choice::new(ChoiceId::new(self.choices_created), text, is_correct);
        self.choices.push(choice.clone());
        self.touch();

        tracing::debug!(
            question_id = %self.id,
            choice_id = %choice.id(),
            is_correct,
            "Choice added"
        );
        Ok(choice)
    }

    /// Replace the text of an existing choice, returning the previous text.
    ///
    /// # Errors
    ///
    /// - `Validation` if text is empty or longer than 100 characters
    /// - `ChoiceNotFound` if no current choice has the id
    pub fn edit_choice_text(
        &mut self,
        choice_id: ChoiceId,
        text: impl Into<String>,
    ) -> Result<String, QuestionError> {
        let text = text.into();
        Choice::validate_text(&text)?;

        let choice = self
            .choices
            .iter_mut()
            .find(|c| c.id() == choice_id)
            .ok_or_else(|| QuestionError::choice_not_found(choice_id))?;
        let old_text = choice.replace_text(text);
        self.touch();
        Ok(old_text)
    }

    /// Remove one choice, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// - `ChoiceNotFound` if no current choice has the id
    pub fn remove_choice_by_id(&mut self, choice_id: ChoiceId) -> Result<Choice, QuestionError> {
        let index = self
            .choices
            .iter()
            .position(|c| c.id() == choice_id)
            .ok_or_else(|| QuestionError::choice_not_found(choice_id))?;

        let removed = self.choices.remove(index);
        self.touch();
        tracing::debug!(question_id = %self.id, choice_id = %choice_id, "Choice removed");
        Ok(removed)
    }

    /// Remove every choice. The id counter keeps counting.
    pub fn remove_all_choices(&mut self) {
        let removed = self.choices.len();
        self.choices.clear();
        self.touch();
        tracing::debug!(question_id = %self.id, removed, "All choices removed");
    }

    /// Mark exactly the given choices correct and every other choice incorrect.
    ///
    /// Ids that match no current choice are ignored. The selection cap does
    /// not apply here.
    pub fn set_correct_choices(&mut self, choice_ids: &[ChoiceId]) {
        let correct: HashSet<ChoiceId> = choice_ids.iter().copied().collect();
        for choice in &mut self.choices {
            choice.set_correct(correct.contains(&choice.id()));
        }
        self.touch();
        tracing::debug!(
            question_id = %self.id,
            requested = choice_ids.len(),
            "Correct choices set"
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scoring
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the selected ids that name a correct choice, in selection order.
    ///
    /// Unknown ids and incorrect choices contribute nothing.
    ///
    /// # Errors
    ///
    /// - `Validation` if more ids are selected than `max_selections` allows
    pub fn correct_selected_choices(
        &self,
        selected_ids: &[ChoiceId],
    ) -> Result<Vec<ChoiceId>, QuestionError> {
        self.ensure_selection_within_cap(selected_ids)?;

        Ok(selected_ids
            .iter()
            .copied()
            .filter(|id| self.choice(*id).is_some_and(Choice::is_correct))
            .collect())
    }

    /// Returns true if the selection names every correct choice and nothing else.
    ///
    /// Order and repeated ids do not matter.
    ///
    /// # Errors
    ///
    /// - `Validation` if more ids are selected than `max_selections` allows
    pub fn is_fully_correct(&self, selected_ids: &[ChoiceId]) -> Result<bool, QuestionError> {
        self.ensure_selection_within_cap(selected_ids)?;

        let selected: HashSet<ChoiceId> = selected_ids.iter().copied().collect();
        let correct: HashSet<ChoiceId> = self.correct_choice_ids().into_iter().collect();
        Ok(selected == correct)
    }

    /// Points earned by a selection: all of them when fully correct, else zero.
    ///
    /// # Errors
    ///
    /// - `Validation` if more ids are selected than `max_selections` allows
    pub fn score(&self, selected_ids: &[ChoiceId]) -> Result<u8, QuestionError> {
        if self.is_fully_correct(selected_ids)? {
            Ok(self.points.value())
        } else {
            Ok(0)
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_title(title: &str) -> Result<(), ValidationError> {
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        let len = title.chars().count();
        if len > MAX_TITLE_LENGTH {
            return Err(ValidationError::too_long("title", MAX_TITLE_LENGTH, len));
        }
        Ok(())
    }

    fn validate_max_selections(max_selections: u32) -> Result<(), ValidationError> {
        if max_selections < 1 {
            return Err(ValidationError::out_of_range(
                "max_selections",
                1,
                i64::from(u32::MAX),
                i64::from(max_selections),
            ));
        }
        Ok(())
    }

    fn ensure_selection_within_cap(&self, selected_ids: &[ChoiceId]) -> Result<(), ValidationError> {
        let selected = selected_ids.len();
        if selected > self.max_selections as usize {
            tracing::warn!(
                question_id = %self.id,
                selected,
                max_selections = self.max_selections,
                "Selection exceeds max_selections"
            );
            return Err(ValidationError::out_of_range(
                "selected_ids",
                0,
                i64::from(self.max_selections),
                selected as i64,
            ));
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
