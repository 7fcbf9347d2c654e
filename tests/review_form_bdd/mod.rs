//! Support modules for the review form BDD tests.

pub(crate) mod state;
pub(crate) mod steps;

pub(crate) use state::{FormState, StepResult};
