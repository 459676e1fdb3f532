use game_content::{GAME_LOGO, GOODBYE, MENU_HINT, MenuOption};
use game_core::{SceneId, Screen, TextColor, TextStyle};
use serde_json::json;

use super::{Key, Scene, Transition};
use crate::error::Result;
use crate::session::GameSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Name recorded in navigation log entries.
    fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
        }
    }
}

/// Title screen with a vertical option list.
pub struct MenuScene {
    id: SceneId,
    selected: usize,
    notice: Option<String>,
    exiting: bool,
    active: bool,
}

impl MenuScene {
    pub fn new() -> Self {
        Self {
            id: SceneId::MENU,
            selected: 0,
            notice: None,
            exiting: false,
            active: false,
        }
    }

    pub fn selected(&self) -> MenuOption {
        MenuOption::ALL[self.selected]
    }

    fn navigate(&mut self, direction: Direction, session: &GameSession) {
        let len = MenuOption::ALL.len();
        self.selected = match direction {
            Direction::Up => (self.selected + len - 1) % len,
            Direction::Down => (self.selected + 1) % len,
        };
        self.notice = None;
        session.log().log_interaction(
            "Menu Navigation",
            json!({ "direction": direction.as_str(), "selectedOption": self.selected().to_string() }),
        );
    }

    fn select(&mut self, session: &mut GameSession) -> Result<Transition> {
        let option = self.selected();
        session.log().log_interaction(
            "Menu Selection",
            json!({ "selectedOption": option.to_string() }),
        );

        let transition = match option {
            MenuOption::Play => Transition::Switch(SceneId::GAME),
            MenuOption::Continue => {
                if session.load_game()? {
                    Transition::Switch(SceneId::GAME)
                } else {
                    self.notice = Some("No saved game found".to_string());
                    Transition::Redraw
                }
            }
            MenuOption::Settings => Transition::Switch(SceneId::SETTINGS),
            MenuOption::About => Transition::Switch(SceneId::ABOUT),
            MenuOption::Exit => {
                self.exiting = true;
                Transition::Quit
            }
        };
        Ok(transition)
    }
}

impl Default for MenuScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for MenuScene {
    fn id(&self) -> &SceneId {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self, _session: &mut GameSession) -> Result<()> {
        self.active = true;
        self.notice = None;
        self.exiting = false;
        Ok(())
    }

    fn deactivate(&mut self, _session: &mut GameSession) -> Result<()> {
        self.active = false;
        Ok(())
    }

    fn draw(&self, _session: &GameSession, screen: &mut Screen) {
        screen.clear();

        if self.exiting {
            screen.write_centered(GOODBYE, TextStyle::fg(TextColor::White).bold());
            return;
        }

        for line in GAME_LOGO.lines() {
            screen.write_centered(line, TextStyle::fg(TextColor::Cyan));
        }
        screen.blank();
        screen.blank();

        for (index, option) in MenuOption::ALL.iter().enumerate() {
            if index == self.selected {
                screen.write_centered(
                    format!("> {}", option),
                    TextStyle::fg(TextColor::White).bold(),
                );
                screen.write_centered(option.description(), TextStyle::fg(TextColor::Yellow));
            } else {
                screen.write_centered(format!("  {}", option), TextStyle::fg(TextColor::White));
            }
        }

        screen.blank();
        screen.write_centered(MENU_HINT, TextStyle::fg(TextColor::HINT));

        if let Some(notice) = &self.notice {
            screen.blank();
            screen.write_centered(notice.as_str(), TextStyle::fg(TextColor::Magenta).bold());
        }
    }

    fn handle_input(&mut self, key: Key, session: &mut GameSession) -> Result<Transition> {
        if !self.active {
            return Ok(Transition::Stay);
        }

        match key {
            Key::Up => {
                self.navigate(Direction::Up, session);
                Ok(Transition::Redraw)
            }
            Key::Down => {
                self.navigate(Direction::Down, session);
                Ok(Transition::Redraw)
            }
            Key::Enter => self.select(session),
            _ => Ok(Transition::Stay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::LogKind;
    use game_core::Effect;

    fn active_menu(session: &mut GameSession) -> MenuScene {
        let mut menu = MenuScene::new();
        menu.activate(session).unwrap();
        menu
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut session = GameSession::ephemeral();
        let mut menu = active_menu(&mut session);

        menu.handle_input(Key::Up, &mut session).unwrap();
        assert_eq!(menu.selected(), MenuOption::Exit);
        menu.handle_input(Key::Down, &mut session).unwrap();
        assert_eq!(menu.selected(), MenuOption::Play);

        let logs = session.log().by_kind(LogKind::Interaction, None);
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].message, "Menu Navigation");
        assert_eq!(logs[0].data["direction"], "UP");
        assert_eq!(logs[0].data["selectedOption"], "Exit");
        assert_eq!(logs[1].data["direction"], "DOWN");
        assert_eq!(logs[1].data["selectedOption"], "Play");
    }

    #[test]
    fn selections_map_to_scenes() {
        let mut session = GameSession::ephemeral();
        let mut menu = active_menu(&mut session);

        assert_eq!(
            menu.handle_input(Key::Enter, &mut session).unwrap(),
            Transition::Switch(SceneId::GAME)
        );
        menu.handle_input(Key::Down, &mut session).unwrap();
        menu.handle_input(Key::Down, &mut session).unwrap();
        assert_eq!(
            menu.handle_input(Key::Enter, &mut session).unwrap(),
            Transition::Switch(SceneId::SETTINGS)
        );
        menu.handle_input(Key::Down, &mut session).unwrap();
        assert_eq!(
            menu.handle_input(Key::Enter, &mut session).unwrap(),
            Transition::Switch(SceneId::ABOUT)
        );
        assert_eq!(session.log().search("Menu Selection").len(), 3);
    }

    #[test]
    fn continue_without_save_shows_notice() {
        let mut session = GameSession::ephemeral();
        let mut menu = active_menu(&mut session);
        menu.handle_input(Key::Down, &mut session).unwrap();

        assert_eq!(
            menu.handle_input(Key::Enter, &mut session).unwrap(),
            Transition::Redraw
        );
        let mut screen = Screen::new(80);
        menu.draw(&session, &mut screen);
        assert!(screen.contains("No saved game found"));
    }

    #[test]
    fn continue_loads_saved_game() {
        let mut session = GameSession::ephemeral();
        session.apply_effect(&Effect::AddItem("keycard".into())).unwrap();
        session.save_game().unwrap();
        session.apply_effect(&Effect::RemoveItem("keycard".into())).unwrap();

        let mut menu = active_menu(&mut session);
        menu.handle_input(Key::Down, &mut session).unwrap();
        assert_eq!(
            menu.handle_input(Key::Enter, &mut session).unwrap(),
            Transition::Switch(SceneId::GAME)
        );
        assert!(session.state().has_item("keycard"));
    }

    #[test]
    fn exit_quits_with_goodbye() {
        let mut session = GameSession::ephemeral();
        let mut menu = active_menu(&mut session);
        menu.handle_input(Key::Up, &mut session).unwrap();
        assert_eq!(
            menu.handle_input(Key::Enter, &mut session).unwrap(),
            Transition::Quit
        );

        let mut screen = Screen::new(80);
        menu.draw(&session, &mut screen);
        assert_eq!(screen.lines().len(), 1);
        assert!(screen.contains(GOODBYE));
    }

    #[test]
    fn draw_marks_selection_and_description() {
        let mut session = GameSession::ephemeral();
        let menu = active_menu(&mut session);
        let mut screen = Screen::new(80);
        menu.draw(&session, &mut screen);

        assert!(screen.contains("> Play"));
        assert!(screen.contains(MenuOption::Play.description()));
        assert!(screen.contains("  Settings"));
        assert!(!screen.contains(MenuOption::Settings.description()));
        assert!(screen.contains(MENU_HINT));
    }
}
