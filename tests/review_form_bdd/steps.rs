//! Steps shared by the review form feature files.

use rstest_bdd_macros::{given, then, when};

use super::state::{FormState, StepResult};

#[given("a review form backed by a scripted service")]
fn given_review_form(form_state: &FormState) {
    form_state.start();
}

#[when("the pending request completes")]
fn when_pending_request_completes(form_state: &FormState) -> StepResult {
    form_state.complete_pending()
}

#[then("no request is pending")]
fn then_no_request_pending(form_state: &FormState) -> StepResult {
    let pending = form_state
        .pending_cmd
        .with_ref(Option::is_some)
        .ok_or("pending command slot should be initialised")?;
    if pending {
        return Err("expected no pending command".into());
    }
    Ok(())
}

#[then("the form error is {text}")]
fn then_form_error_is(form_state: &FormState, text: String) -> StepResult {
    let expected = text.trim_matches('"');
    let actual = form_state
        .app
        .with_ref(|app| app.error().map(ToOwned::to_owned))
        .ok_or("app should be initialised before checking errors")?
        .ok_or("expected an error to be shown")?;
    if actual != expected {
        return Err(format!("expected error '{expected}', got '{actual}'").into());
    }
    Ok(())
}

/// Asserts whether the rendered view contains the provided text fragment.
fn assert_view_content(form_state: &FormState, text: &str, should_contain: bool) -> StepResult {
    let expected = text.trim_matches('"');
    let view = form_state.view()?;
    if view.contains(expected) != should_contain {
        let verb = if should_contain {
            "contain"
        } else {
            "not contain"
        };
        return Err(format!("expected view to {verb} '{expected}', got:\n{view}").into());
    }
    Ok(())
}

#[then("the view contains {text}")]
fn then_view_contains(form_state: &FormState, text: String) -> StepResult {
    assert_view_content(form_state, &text, true)
}

#[then("the view does not contain {text}")]
fn then_view_does_not_contain(form_state: &FormState, text: String) -> StepResult {
    assert_view_content(form_state, &text, false)
}
