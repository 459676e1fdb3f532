//! Input handling and scene transitions.

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use runtime::Key;
use tokio::time::{self, Duration};

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

/// How long the goodbye screen stays up before the terminal is restored.
const GOODBYE_DELAY_MS: u64 = 1_000;

impl EventLoop {
    /// Advance the typewriter and poll for keyboard input.
    ///
    /// Returns `true` when the loop should stop.
    pub(in crate::event) async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if self.typewriter.advance() {
            self.render(terminal)?;
        }

        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    pub(in crate::event) async fn handle_key_press(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match self.input.handle_key(key) {
            KeyAction::Quit => {
                self.session.log().log_system_event("Quitting...");
                Ok(true)
            }
            KeyAction::Scene(key) => {
                // A key during the reveal only completes it.
                if self.typewriter.is_revealing() {
                    self.typewriter.finish();
                    self.render(terminal)?;
                    return Ok(false);
                }
                self.dispatch_scene_key(key, terminal).await
            }
            KeyAction::None => Ok(false),
        }
    }

    async fn dispatch_scene_key(&mut self, key: Key, terminal: &mut Tui) -> Result<bool> {
        let before = self.scenes.current().cloned();

        let quit = match self.scenes.handle_input(key, &mut self.session) {
            Ok(quit) => quit,
            Err(err) => {
                tracing::warn!("Scene input failed: {}", err);
                self.session.log().log_system_event(format!("Error: {err}"));
                false
            }
        };

        if self.scenes.current() != before.as_ref() {
            self.typewriter.restart();
        }
        self.render(terminal)?;

        if quit {
            time::sleep(Duration::from_millis(GOODBYE_DELAY_MS)).await;
        }
        Ok(quit)
    }
}
