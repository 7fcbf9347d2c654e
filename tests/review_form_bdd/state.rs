//! Scenario state for driving the review form against a scripted service.

use std::sync::Arc;

use bubbletea_rs::{Cmd, Model};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use sentia::analysis::gateway::test_support::StubReviewGateway;
use sentia::tui::ReviewApp;
use sentia::tui::messages::AppMsg;
use tokio::runtime::Runtime;

pub(crate) type StepResult = Result<(), Box<dyn std::error::Error>>;

#[derive(ScenarioState, Default)]
pub(crate) struct FormState {
    pub(crate) app: Slot<ReviewApp>,
    pub(crate) gateway: Slot<Arc<StubReviewGateway>>,
    pub(crate) pending_cmd: Slot<Option<Cmd>>,
}

#[fixture]
pub(crate) fn form_state() -> FormState {
    FormState::default()
}

impl FormState {
    /// Builds a form wired to a fresh scripted gateway.
    pub(crate) fn start(&self) {
        let gateway = Arc::new(StubReviewGateway::default());
        let app = ReviewApp::new()
            .with_size(100, 60)
            .with_gateway(gateway.clone());
        self.gateway.set(gateway);
        self.app.set(app);
        self.pending_cmd.set(None);
    }

    /// Runs `action` against the scripted gateway.
    pub(crate) fn with_gateway<T>(
        &self,
        action: impl FnOnce(&StubReviewGateway) -> T,
    ) -> Result<T, Box<dyn std::error::Error>> {
        self.gateway
            .with_ref(|gateway| action(gateway))
            .ok_or_else(|| "gateway should be initialised first".into())
    }

    /// Sends `msg` to the app and keeps any command it returns.
    pub(crate) fn send(&self, msg: &AppMsg) -> StepResult {
        let maybe_cmd = self
            .app
            .with_mut(|app| app.handle_message(msg))
            .ok_or("app should be initialised before sending messages")?;
        if maybe_cmd.is_some() {
            self.pending_cmd.set(maybe_cmd);
        }
        Ok(())
    }

    /// Awaits the pending command and feeds its message back to the app.
    pub(crate) fn complete_pending(&self) -> StepResult {
        let cmd = self
            .pending_cmd
            .with_mut(Option::take)
            .ok_or("pending command slot should be initialised")?
            .ok_or("expected a pending command")?;
        let runtime = Runtime::new()?;
        let message = runtime
            .block_on(cmd)
            .ok_or("command should return a message")?;
        let app_msg = message
            .downcast::<AppMsg>()
            .map_err(|_| "command returned a non-AppMsg value")?;
        self.send(&app_msg)
    }

    /// Renders the current frame.
    pub(crate) fn view(&self) -> Result<String, Box<dyn std::error::Error>> {
        self.app
            .with_ref(ReviewApp::view)
            .ok_or_else(|| "app should be initialised before rendering".into())
    }
}
