use game_content::{GAME_TITLE, GAME_VERSION, TAGLINE};
use game_core::{SceneId, Screen, TextColor, TextStyle};

use super::{Key, Scene, Transition};
use crate::error::Result;
use crate::session::GameSession;

const BACK_HINT: &str = "Press ESC to return to menu";

/// Static screens reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoKind {
    About,
    Settings,
}

pub struct InfoScene {
    id: SceneId,
    kind: InfoKind,
    active: bool,
}

impl InfoScene {
    pub fn new(kind: InfoKind) -> Self {
        let id = match kind {
            InfoKind::About => SceneId::ABOUT,
            InfoKind::Settings => SceneId::SETTINGS,
        };
        Self {
            id,
            kind,
            active: false,
        }
    }

    fn draw_about(screen: &mut Screen) {
        let body = TextStyle::fg(TextColor::White);
        screen.write_centered(
            format!("About {}", GAME_TITLE),
            TextStyle::fg(TextColor::Magenta).bold(),
        );
        screen.blank();
        screen.write_centered(TAGLINE, body);
        screen.write_centered(format!("Version {}", GAME_VERSION), body);
    }

    fn draw_settings(session: &GameSession, screen: &mut Screen) {
        let body = TextStyle::fg(TextColor::White);
        let options = session.log().options();
        let on_off = |flag: bool| if flag { "on" } else { "off" };

        screen.write_centered("Settings", TextStyle::fg(TextColor::Yellow).bold());
        screen.blank();
        screen.write_centered(format!("Log capacity: {}", options.max_logs), body);
        screen.write_centered(format!("Persist logs: {}", on_off(options.persist_logs)), body);
        let saved = session.has_saved_game().unwrap_or(false);
        screen.write_centered(format!("Saved game: {}", on_off(saved)), body);
    }
}

impl Scene for InfoScene {
    fn id(&self) -> &SceneId {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self, _session: &mut GameSession) -> Result<()> {
        self.active = true;
        Ok(())
    }

    fn deactivate(&mut self, _session: &mut GameSession) -> Result<()> {
        self.active = false;
        Ok(())
    }

    fn draw(&self, session: &GameSession, screen: &mut Screen) {
        screen.clear();
        match self.kind {
            InfoKind::About => Self::draw_about(screen),
            InfoKind::Settings => Self::draw_settings(session, screen),
        }
        screen.blank();
        screen.write_centered(BACK_HINT, TextStyle::fg(TextColor::White));
    }

    fn handle_input(&mut self, key: Key, _session: &mut GameSession) -> Result<Transition> {
        if self.active && key == Key::Esc {
            return Ok(Transition::Switch(SceneId::MENU));
        }
        Ok(Transition::Stay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_shows_title_and_version() {
        let session = GameSession::ephemeral();
        let mut screen = Screen::new(60);
        InfoScene::new(InfoKind::About).draw(&session, &mut screen);
        assert!(screen.contains("About Astral Nexus"));
        assert!(screen.contains("Version 1.0.0"));
        assert!(screen.contains(BACK_HINT));
    }

    #[test]
    fn settings_reflect_log_options() {
        let session = GameSession::ephemeral();
        let mut screen = Screen::new(60);
        InfoScene::new(InfoKind::Settings).draw(&session, &mut screen);
        assert!(screen.contains("Log capacity: 500"));
        assert!(screen.contains("Persist logs: off"));
    }

    #[test]
    fn escape_returns_to_menu_only_when_active() {
        let mut session = GameSession::ephemeral();
        let mut about = InfoScene::new(InfoKind::About);
        assert_eq!(
            about.handle_input(Key::Esc, &mut session).unwrap(),
            Transition::Stay
        );
        about.activate(&mut session).unwrap();
        assert_eq!(
            about.handle_input(Key::Esc, &mut session).unwrap(),
            Transition::Switch(SceneId::MENU)
        );
        assert_eq!(
            about.handle_input(Key::Enter, &mut session).unwrap(),
            Transition::Stay
        );
    }
}
