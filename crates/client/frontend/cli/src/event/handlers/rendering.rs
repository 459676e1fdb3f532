//! Rendering logic.

use anyhow::Result;
use client_frontend_core::SidePanelView;

use super::super::EventLoop;
use crate::presentation::{
    terminal::Tui,
    ui::{self, RenderContext},
};

impl EventLoop {
    /// Redraw the active scene and the side panel.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let width = terminal.size()?.width;
        let side_panel_width = self.cli_config.ui.side_panel_width;
        self.screen
            .set_cols(ui::scene_columns(width, side_panel_width) as usize);
        self.scenes.draw(&self.session, &mut self.screen);
        self.typewriter.set_total(self.screen.typewriter_len());

        let side_panel = SidePanelView::from_session(
            &self.session,
            self.scenes.current(),
            &self.messages,
            self.message_capacity,
        );

        let ctx = RenderContext {
            screen: &self.screen,
            reveal_budget: self.typewriter.budget(),
            side_panel: &side_panel,
            side_panel_width,
        };
        ui::render(terminal, &ctx)
    }
}
