//! Editable state of the review submission form.
//!
//! The form holds raw user input. Validation happens only when a submission
//! is built, so the user can type freely (including leading spaces) and the
//! trimmed values are what reach the service.

use crate::analysis::{AnalysisError, ReviewSubmission};

/// One of the two text inputs on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Single-line product name input.
    ProductName,
    /// Multi-line review text input.
    ReviewText,
}

impl FormField {
    /// Returns the label rendered above the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProductName => "Product Name",
            Self::ReviewText => "Review Text",
        }
    }

    /// Returns the hint rendered while the input is empty.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::ProductName => "e.g., iPhone 15 Pro",
            Self::ReviewText => {
                "Write your product review here... (Alt+Enter or Ctrl+S to submit)"
            }
        }
    }

    /// Returns whether the input accepts line breaks.
    #[must_use]
    pub const fn is_multiline(self) -> bool {
        matches!(self, Self::ReviewText)
    }
}

/// Raw contents of the two form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    product_name: String,
    review_text: String,
}

impl ReviewForm {
    /// Creates a form pre-filled with the given values.
    #[must_use]
    pub fn new(product_name: impl Into<String>, review_text: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            review_text: review_text.into(),
        }
    }

    /// Returns the current value of `field`.
    #[must_use]
    pub const fn value(&self, field: FormField) -> &str {
        match field {
            FormField::ProductName => self.product_name.as_str(),
            FormField::ReviewText => self.review_text.as_str(),
        }
    }

    /// Returns `true` when both inputs are empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.product_name.is_empty() && self.review_text.is_empty()
    }

    /// Appends a character to `field`.
    ///
    /// Control characters are ignored, as are line breaks in single-line
    /// inputs. Returns whether the value changed.
    pub fn insert_char(&mut self, field: FormField, character: char) -> bool {
        let accepted = if character == '\n' {
            field.is_multiline()
        } else {
            !character.is_control()
        };
        if accepted {
            self.value_mut(field).push(character);
        }
        accepted
    }

    /// Removes the last character of `field`, if any.
    pub fn backspace(&mut self, field: FormField) {
        let _removed = self.value_mut(field).pop();
    }

    /// Empties `field`.
    pub fn clear_field(&mut self, field: FormField) {
        self.value_mut(field).clear();
    }

    /// Empties both inputs.
    pub fn clear(&mut self) {
        self.product_name.clear();
        self.review_text.clear();
    }

    /// Builds a validated submission from the current input.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Validation`] when either input is blank.
    pub fn submission(&self) -> Result<ReviewSubmission, AnalysisError> {
        ReviewSubmission::new(&self.product_name, &self.review_text)
    }

    const fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::ProductName => &mut self.product_name,
            FormField::ReviewText => &mut self.review_text,
        }
    }
}
