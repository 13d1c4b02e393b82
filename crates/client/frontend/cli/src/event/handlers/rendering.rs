//! Rendering handlers.

use anyhow::Result;

use crate::{
    event::EventLoop,
    presentation::{terminal::Tui, ui},
};

impl EventLoop {
    /// Render the current snapshot with the narrator's log and banner.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            view: &self.view,
            banner: self.narrator.banner(),
            message_panel_height: self.cli_config.ui.message_panel_height,
        };

        ui::render(terminal, &ctx)
    }
}
