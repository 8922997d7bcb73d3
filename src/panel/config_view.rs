//! Gateway configuration editor view

use super::dispatch::Dispatcher;
use super::editor::TextArea;
use super::state::{Generation, StatusLine};
use crate::errors::Result;
use crate::models::{AppEvent, CommandKind, ConfigDocument};

#[derive(Debug, Default)]
pub struct ConfigView {
    pub editor: TextArea,
    generation: Generation,
}

impl ConfigView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, dispatcher: &Dispatcher) {
        let generation = self.generation.next();
        dispatcher.spawn(move |api| async move {
            AppEvent::ConfigLoaded(generation, api.config_get().await)
        });
    }

    pub fn apply_load(
        &mut self,
        generation: u64,
        result: Result<ConfigDocument>,
        status: &mut StatusLine,
    ) -> bool {
        if !self.generation.is_current(generation) {
            log::debug!("Dropping config load #{}", generation);
            return false;
        }
        match result {
            Ok(document) => self.editor.set_text(&document.to_pretty()),
            Err(e) => status.error(format!("Failed to load configuration: {}", e)),
        }
        true
    }

    /// Parse the editor locally and submit it; nothing is sent if parsing fails.
    pub fn save(&mut self, dispatcher: &Dispatcher, status: &mut StatusLine) {
        let document = match ConfigDocument::parse(&self.editor.text()) {
            Ok(document) => document,
            Err(e) => {
                status.error(e.to_string());
                return;
            }
        };

        dispatcher.spawn(move |api| async move {
            AppEvent::CommandFinished(CommandKind::SaveConfig, api.config_update(&document).await)
        });
    }
}
