//! Main render entry point composing the scene view and the side panel.
use anyhow::Result;
use client_frontend_core::SidePanelView;
use game_core::Screen;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::presentation::{terminal::Tui, theme::RatatuiTheme, widgets};

/// Rendering context containing all state needed for one frame.
pub struct RenderContext<'a> {
    pub screen: &'a Screen,
    /// Typewriter characters revealed so far.
    pub reveal_budget: usize,
    pub side_panel: &'a SidePanelView,
    pub side_panel_width: u16,
}

/// Columns left for the scene view inside its border.
pub fn scene_columns(terminal_width: u16, side_panel_width: u16) -> u16 {
    terminal_width
        .saturating_sub(side_panel_width)
        .saturating_sub(2)
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme::new();

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(ctx.side_panel_width),
            ])
            .split(frame.area());

        widgets::terminal_view::render(
            frame,
            chunks[0],
            ctx.screen,
            ctx.reveal_budget,
            &theme,
            theme.chrome(),
        );
        widgets::side_panel::render(frame, chunks[1], ctx.side_panel, &theme);
    })?;

    Ok(())
}
