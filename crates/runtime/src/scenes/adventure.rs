use game_content::BoxChars;
use game_core::{
    AdventureDef, Reveal, SceneId, Screen, Span, TextColor, TextStyle, available_choices,
};

use super::{Key, Scene, Transition};
use crate::error::Result;
use crate::session::GameSession;

const HINT: &str = "Enter a number to choose, or ESC for menu";

/// Framed narrative with numbered choices.
pub struct AdventureScene {
    def: AdventureDef,
    active: bool,
}

impl AdventureScene {
    pub fn new(def: AdventureDef) -> Self {
        Self { def, active: false }
    }

    fn side(&self) -> Span {
        Span::new(
            format!("{} ", BoxChars::SINGLE.vertical),
            TextStyle::fg(TextColor::BORDER),
        )
    }
}

impl Scene for AdventureScene {
    fn id(&self) -> &SceneId {
        &self.def.id
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self, session: &mut GameSession) -> Result<()> {
        self.active = true;
        session.apply_effects(&self.def.on_enter)
    }

    fn deactivate(&mut self, session: &mut GameSession) -> Result<()> {
        self.active = false;
        session.apply_effects(&self.def.on_exit)
    }

    fn draw(&self, session: &GameSession, screen: &mut Screen) {
        let border = TextStyle::fg(TextColor::BORDER);
        let inner = screen.cols().saturating_sub(2);
        let side = self.side();

        screen.clear();
        screen.write_line(BoxChars::SINGLE.top(inner), border);
        screen.write_spans(vec![side.clone()]);
        screen.write_markup(
            Some(&side),
            &self.def.narrative,
            TextStyle::fg(TextColor::NARRATIVE),
            Reveal::Typewriter,
        );
        screen.write_spans(vec![side.clone()]);

        for (index, choice) in available_choices(&self.def.choices, session.state())
            .into_iter()
            .enumerate()
        {
            screen.write_spans(vec![
                side.clone(),
                Span::new(
                    format!("{}. {}", index + 1, choice.text),
                    TextStyle::fg(TextColor::CHOICE),
                ),
            ]);
        }

        screen.write_spans(vec![side]);
        screen.write_line(BoxChars::SINGLE.bottom(inner), border);
        screen.blank();
        screen.write_line(HINT, TextStyle::fg(TextColor::HINT));
    }

    fn handle_input(&mut self, key: Key, session: &mut GameSession) -> Result<Transition> {
        if !self.active {
            return Ok(Transition::Stay);
        }

        let number = match key {
            Key::Esc => return Ok(Transition::Switch(SceneId::MENU)),
            Key::Char(c) => match c.to_digit(10) {
                Some(number) => number as usize,
                None => return Ok(Transition::Stay),
            },
            _ => return Ok(Transition::Stay),
        };

        let choice = {
            let offered = available_choices(&self.def.choices, session.state());
            match number.checked_sub(1).and_then(|index| offered.get(index)) {
                Some(choice) => (*choice).clone(),
                None => return Ok(Transition::Stay),
            }
        };

        session.log().log_interaction(
            "Choice Selected",
            serde_json::json!({ "scene": self.def.id.as_str(), "choice": choice.text }),
        );
        session.apply_effects(&choice.effects)?;

        Ok(match choice.next_scene {
            Some(next) => Transition::Switch(next),
            None => Transition::Redraw,
        })
    }
}
