//! UI components for the review analyzer TUI.
//!
//! Each component is a pure function from a view context to rendered rows.
//! The application stacks the rows into one scrollable page and normalises
//! the final frame to the terminal size.

mod card;
mod form_card;
mod result_panel;
mod review_cards;
mod sentiment_badge;
mod text_wrap;
mod viewport;

pub use card::card_title;
pub use form_card::{FormViewContext, render_form};
pub use result_panel::{EMPTY_RESULT_TEXT, render_empty_result, render_result_panel};
pub use review_cards::{MAX_CARD_KEY_POINTS, ReviewListViewContext, render_review_list};
pub use sentiment_badge::sentiment_badge;
pub use text_wrap::wrap_words;
pub use viewport::{fit_line, normalise_frame};
