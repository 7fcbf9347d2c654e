//! Keyboard focus across the form's interactive elements.

use super::form::FormField;

/// The element that receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The product name input.
    #[default]
    ProductName,
    /// The review text input.
    ReviewText,
    /// The "Analyze Review" button.
    AnalyzeButton,
    /// The "View/Hide All Reviews" button.
    ReviewsButton,
    /// The review list. Only reachable while the list is visible.
    ReviewList,
}

impl Focus {
    /// Returns the element after this one in tab order.
    #[must_use]
    pub const fn next(self, list_visible: bool) -> Self {
        match self {
            Self::ProductName => Self::ReviewText,
            Self::ReviewText => Self::AnalyzeButton,
            Self::AnalyzeButton => Self::ReviewsButton,
            Self::ReviewsButton if list_visible => Self::ReviewList,
            Self::ReviewsButton | Self::ReviewList => Self::ProductName,
        }
    }

    /// Returns the element before this one in tab order.
    #[must_use]
    pub const fn previous(self, list_visible: bool) -> Self {
        match self {
            Self::ProductName if list_visible => Self::ReviewList,
            Self::ProductName => Self::ReviewsButton,
            Self::ReviewText => Self::ProductName,
            Self::AnalyzeButton => Self::ReviewText,
            Self::ReviewsButton => Self::AnalyzeButton,
            Self::ReviewList => Self::ReviewsButton,
        }
    }

    /// Returns the text input this focus edits, if any.
    #[must_use]
    pub const fn field(self) -> Option<FormField> {
        match self {
            Self::ProductName => Some(FormField::ProductName),
            Self::ReviewText => Some(FormField::ReviewText),
            Self::AnalyzeButton | Self::ReviewsButton | Self::ReviewList => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Focus;

    #[rstest]
    #[case::list_hidden(false, 4)]
    #[case::list_visible(true, 5)]
    fn tab_order_cycles_through_every_element(#[case] list_visible: bool, #[case] stops: usize) {
        let mut focus = Focus::ProductName;
        let mut visited = vec![focus];
        loop {
            focus = focus.next(list_visible);
            if focus == Focus::ProductName {
                break;
            }
            visited.push(focus);
        }

        assert_eq!(visited.len(), stops);
        assert_eq!(visited.contains(&Focus::ReviewList), list_visible);
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn previous_reverses_next(#[case] list_visible: bool) {
        let mut focus = Focus::AnalyzeButton;
        for _ in 0..7 {
            let advanced = focus.next(list_visible);
            assert_eq!(advanced.previous(list_visible), focus);
            focus = advanced;
        }
    }
}
