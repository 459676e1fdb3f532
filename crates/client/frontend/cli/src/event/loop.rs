//! Event loop orchestrating log entries, user input, and rendering.
//!
//! This module coordinates three concerns:
//! - Log entries from the session, mirrored into the side panel
//! - Keyboard input forwarded to the scene manager
//! - Rendering, including the typewriter reveal of narrative text

use anyhow::Result;
use client_frontend_core::{FrontendConfig, MessageEntry, MessageLog};
use game_core::Screen;
use runtime::{GameSession, SceneManager};
use tokio::time::{self, Duration};

use super::Typewriter;
use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui};

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop owning the session for the lifetime of the UI.
pub struct EventLoop {
    pub(crate) session: GameSession,
    pub(crate) scenes: SceneManager,
    pub(crate) messages: MessageLog,
    pub(crate) message_capacity: usize,
    pub(crate) input: InputHandler,
    pub(crate) screen: Screen,
    pub(crate) typewriter: Typewriter,
    pub(crate) cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(
        session: GameSession,
        scenes: SceneManager,
        frontend_config: &FrontendConfig,
        cli_config: CliConfig,
    ) -> Self {
        Self {
            session,
            scenes,
            messages: MessageLog::new(frontend_config.messages.capacity),
            message_capacity: frontend_config.messages.capacity,
            input: InputHandler::new(),
            screen: Screen::new(0),
            typewriter: Typewriter::new(frontend_config.typewriter.clone()),
            cli_config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        let mut log_rx = self.session.log().subscribe();
        for entry in self.session.log().recent(self.message_capacity) {
            self.messages.push(MessageEntry::from(&entry));
        }

        // Initial render
        self.typewriter.restart();
        self.render(terminal)?;

        loop {
            tokio::select! {
                entry = log_rx.recv() => {
                    let Some(entry) = entry else {
                        tracing::warn!("Log stream closed");
                        break;
                    };
                    self.messages.push(MessageEntry::from(&entry));
                    self.render(terminal)?;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }
}
