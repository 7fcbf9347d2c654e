//! `Model` trait implementation for the review analyzer application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `ReviewApp`, handling initialisation, update dispatch, and view rendering.

use std::any::Any;

use bubbletea_rs::event::{KeyMsg, WindowSizeMsg};
use bubbletea_rs::{Cmd, Model};

use super::ReviewApp;
use crate::tui::components::normalise_frame;
use crate::tui::input::{InputContext, map_key_to_message};
use crate::tui::messages::AppMsg;

impl Model for ReviewApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve startup context from module-level storage
        let (width, height) = crate::tui::get_initial_terminal_size();
        let mut model = Self::new()
            .with_size(width, height)
            .with_show_reviews(crate::tui::get_initial_show_reviews())
            .with_telemetry_sink(crate::tui::get_telemetry_sink());

        if let Some(gateway) = crate::tui::get_gateway() {
            model = model.with_gateway(gateway);
        }

        // The initial list fetch starts when `AppMsg::Initialized` is handled.
        (model, Some(Self::immediate_init_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            // Any key closes the help overlay.
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let mapped = map_key_to_message(key_msg, self.input_context())?;
            return self.handle_message(&mapped);
        }

        if let Some(size_msg) = msg.downcast_ref::<WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        let frame = if self.show_help {
            self.render_help_overlay()
        } else {
            self.render_page()
        };
        normalise_frame(&frame, self.width, self.height)
    }
}

impl ReviewApp {
    /// Returns the current input context for focus-aware key mapping.
    pub(super) const fn input_context(&self) -> InputContext {
        InputContext::from_focus(self.focus)
    }
}
