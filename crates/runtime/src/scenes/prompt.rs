use game_core::{ProfileUpdate, PromptDef, Reveal, SceneId, Screen, TextColor, TextStyle};

use super::{Key, Scene, Transition};
use crate::error::Result;
use crate::session::GameSession;

/// Free-text question whose answer is stored in the player profile.
pub struct PromptScene {
    def: PromptDef,
    input: String,
    active: bool,
}

impl PromptScene {
    pub fn new(def: PromptDef) -> Self {
        Self {
            def,
            input: String::new(),
            active: false,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Scene for PromptScene {
    fn id(&self) -> &SceneId {
        &self.def.id
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self, _session: &mut GameSession) -> Result<()> {
        self.active = true;
        self.input.clear();
        Ok(())
    }

    fn deactivate(&mut self, _session: &mut GameSession) -> Result<()> {
        self.active = false;
        Ok(())
    }

    fn draw(&self, _session: &GameSession, screen: &mut Screen) {
        screen.clear();
        screen.write_markup(None, &self.def.narrative, TextStyle::plain(), Reveal::Instant);
        screen.blank();
        screen.write_line(
            format!("> {}_", self.input),
            TextStyle::fg(TextColor::White),
        );
    }

    fn handle_input(&mut self, key: Key, session: &mut GameSession) -> Result<Transition> {
        if !self.active {
            return Ok(Transition::Stay);
        }

        match key {
            Key::Enter => {
                let answer = self.input.trim();
                if answer.is_empty() {
                    return Ok(Transition::Stay);
                }
                session.save_profile(ProfileUpdate::single(self.def.field, answer))?;
                Ok(Transition::Switch(self.def.next_scene.clone()))
            }
            Key::Backspace => {
                self.input.pop();
                Ok(Transition::Redraw)
            }
            Key::Char(c) if !c.is_control() => {
                self.input.push(c);
                Ok(Transition::Redraw)
            }
            _ => Ok(Transition::Stay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::ProfileField;

    fn active_prompt(session: &mut GameSession) -> PromptScene {
        let mut scene = PromptScene::new(PromptDef {
            id: SceneId::from("origin-past"),
            narrative: "[yellow]What event from your past drives you forward?/]".into(),
            field: ProfileField::PastEvent,
            next_scene: SceneId::from("origin-fear"),
        });
        scene.activate(session).unwrap();
        scene
    }

    fn type_text(scene: &mut PromptScene, session: &mut GameSession, text: &str) {
        for c in text.chars() {
            scene.handle_input(Key::Char(c), session).unwrap();
        }
    }

    #[test]
    fn enter_saves_trimmed_answer() {
        let mut session = GameSession::ephemeral();
        let mut scene = active_prompt(&mut session);
        type_text(&mut scene, &mut session, "  lost my ship  ");

        let transition = scene.handle_input(Key::Enter, &mut session).unwrap();
        assert_eq!(transition, Transition::Switch(SceneId::from("origin-fear")));
        assert_eq!(
            session.profile().and_then(|p| p.answer(ProfileField::PastEvent)),
            Some("lost my ship")
        );
    }

    #[test]
    fn blank_answer_is_ignored() {
        let mut session = GameSession::ephemeral();
        let mut scene = active_prompt(&mut session);
        type_text(&mut scene, &mut session, "   ");
        assert_eq!(
            scene.handle_input(Key::Enter, &mut session).unwrap(),
            Transition::Stay
        );
        assert!(!session.has_profile());
    }

    #[test]
    fn backspace_edits_and_draw_shows_cursor() {
        let mut session = GameSession::ephemeral();
        let mut scene = active_prompt(&mut session);
        type_text(&mut scene, &mut session, "voidx");
        scene.handle_input(Key::Backspace, &mut session).unwrap();
        assert_eq!(scene.input(), "void");

        let mut screen = Screen::new(80);
        scene.draw(&session, &mut screen);
        assert!(screen.contains("What event from your past drives you forward?"));
        assert_eq!(screen.render_plain().last().map(String::as_str), Some("> void_"));
    }

    #[test]
    fn input_resets_on_activation() {
        let mut session = GameSession::ephemeral();
        let mut scene = active_prompt(&mut session);
        type_text(&mut scene, &mut session, "draft");
        scene.deactivate(&mut session).unwrap();
        scene.activate(&mut session).unwrap();
        assert_eq!(scene.input(), "");
    }
}
