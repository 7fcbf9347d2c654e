//! Behavioural tests for submitting a review from the interactive form.

#[path = "review_form_bdd/mod.rs"]
mod review_form_support;

use review_form_support::state::form_state;
use review_form_support::{FormState, StepResult};
use rstest_bdd_macros::{given, scenario, then, when};
use sentia::tui::messages::AppMsg;
use sentia::{AnalysisError, AnalysisResult};

#[given("the service will rate the review {sentiment}")]
fn given_service_rates_review(form_state: &FormState, sentiment: String) -> StepResult {
    let label = sentiment.trim_matches('"').to_owned();
    form_state.with_gateway(|gateway| {
        gateway.push_analysis(Ok(AnalysisResult {
            product_name: "iPhone 15 Pro".to_owned(),
            review_text: "Great battery life".to_owned(),
            sentiment: label,
            confidence: Some(0.92),
            key_points: vec!["Battery".to_owned()],
            timestamp: Some("2024-05-01T10:00:00Z".to_owned()),
        }));
    })
}

#[given("the service will reject the review with {message}")]
fn given_service_rejects_review(form_state: &FormState, message: String) -> StepResult {
    let reason = message.trim_matches('"').to_owned();
    form_state.with_gateway(|gateway| {
        gateway.push_analysis(Err(AnalysisError::Service {
            status: 400,
            message: Some(reason),
        }));
    })
}

#[given("the service is unreachable")]
fn given_service_unreachable(form_state: &FormState) -> StepResult {
    form_state.with_gateway(|gateway| {
        gateway.push_analysis(Err(AnalysisError::Transport {
            message: "connection refused".to_owned(),
        }));
    })
}

#[when("the user enters product {product} and review {review}")]
fn when_user_enters_review(form_state: &FormState, product: String, review: String) -> StepResult {
    for character in product.trim_matches('"').chars() {
        form_state.send(&AppMsg::InsertChar(character))?;
    }
    form_state.send(&AppMsg::FocusNext)?;
    for character in review.trim_matches('"').chars() {
        form_state.send(&AppMsg::InsertChar(character))?;
    }
    Ok(())
}

#[when("the user submits the form")]
fn when_user_submits(form_state: &FormState) -> StepResult {
    form_state.send(&AppMsg::SubmitRequested)
}

#[then("the form is empty")]
fn then_form_is_empty(form_state: &FormState) -> StepResult {
    let empty = form_state
        .app
        .with_ref(|app| app.form().is_empty())
        .ok_or("app should be initialised")?;
    if !empty {
        return Err("expected both fields to be cleared".into());
    }
    Ok(())
}

#[then("the product field reads {expected}")]
fn then_product_field_reads(form_state: &FormState, expected: String) -> StepResult {
    let wanted = expected.trim_matches('"');
    let actual = form_state
        .app
        .with_ref(|app| {
            app.form()
                .value(sentia::tui::state::FormField::ProductName)
                .to_owned()
        })
        .ok_or("app should be initialised")?;
    if actual != wanted {
        return Err(format!("expected product '{wanted}', got '{actual}'").into());
    }
    Ok(())
}

#[then("the service received {count:usize} analyze requests")]
fn then_service_received_analyze_requests(form_state: &FormState, count: usize) -> StepResult {
    let actual = form_state.with_gateway(|gateway| gateway.analysis_calls())?;
    if actual != count {
        return Err(format!("expected {count} analyze requests, got {actual}").into());
    }
    Ok(())
}

#[scenario(path = "tests/features/review_submission.feature", index = 0)]
fn blank_fields_are_rejected(form_state: FormState) {
    let _ = form_state;
}

#[scenario(path = "tests/features/review_submission.feature", index = 1)]
fn successful_analysis_is_shown(form_state: FormState) {
    let _ = form_state;
}

#[scenario(path = "tests/features/review_submission.feature", index = 2)]
fn service_error_keeps_inputs(form_state: FormState) {
    let _ = form_state;
}

#[scenario(path = "tests/features/review_submission.feature", index = 3)]
fn unreachable_service_shows_generic_message(form_state: FormState) {
    let _ = form_state;
}
