//! Ratatui widgets composing the CLI screen.
pub mod side_panel;
pub mod terminal_view;
