//! Side panel snapshot derived from a [`GameSession`].
use game_core::{ProfileField, QuestStatus, SceneId, TextStyle};
use runtime::{GameSession, LogKind};

use crate::message::{MessageEntry, MessageLog};

/// Framework-agnostic styling hooks.
///
/// Each frontend maps game styles onto its own style type, so widgets never
/// hard-code colors.
pub trait PresentationMapper {
    type Style;

    /// Style of narrative and scene text.
    fn style_text(&self, style: TextStyle) -> Self::Style;

    fn style_log(&self, kind: LogKind) -> Self::Style;

    /// Style of a stat value, e.g. health turning red when low.
    fn style_stat(&self, name: &str, value: i64) -> Self::Style;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatLine {
    pub name: String,
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoLine {
    pub label: String,
    pub value: String,
}

/// Everything the side panel shows, section by section.
#[derive(Clone, Debug, Default)]
pub struct SidePanelView {
    /// Oldest first.
    pub logs: Vec<MessageEntry>,
    pub quests: Vec<String>,
    pub inventory: Vec<String>,
    pub stats: Vec<StatLine>,
    pub info: Vec<InfoLine>,
}

impl SidePanelView {
    pub const SECTION_TITLES: [&'static str; 5] = [
        "Logs",
        "Active Quests",
        "Inventory",
        "Player Stats",
        "Information",
    ];

    pub fn from_session(
        session: &GameSession,
        scene: Option<&SceneId>,
        messages: &MessageLog,
        message_limit: usize,
    ) -> Self {
        let state = session.state();
        Self {
            logs: collect_messages(messages, message_limit),
            quests: state
                .quests()
                .filter(|(_, status)| *status == QuestStatus::Active)
                .map(|(quest, _)| quest.to_string())
                .collect(),
            inventory: state.inventory().map(str::to_string).collect(),
            stats: state
                .stats()
                .map(|(name, value)| StatLine {
                    name: name.to_string(),
                    value,
                })
                .collect(),
            info: info_lines(session, scene),
        }
    }
}

fn collect_messages(messages: &MessageLog, limit: usize) -> Vec<MessageEntry> {
    let mut recent: Vec<MessageEntry> = messages.recent(limit).cloned().collect();
    recent.reverse();
    recent
}

fn info_lines(session: &GameSession, scene: Option<&SceneId>) -> Vec<InfoLine> {
    let mut lines = Vec::new();
    if let Some(scene) = scene {
        lines.push(InfoLine {
            label: "Scene".into(),
            value: scene.to_string(),
        });
    }
    if let Some(id) = session.player_id() {
        lines.push(InfoLine {
            label: "Player".into(),
            value: id.to_string(),
        });
    }
    if let Some(profile) = session.profile() {
        for field in [ProfileField::Path, ProfileField::Motivation] {
            if let Some(answer) = profile.answer(field) {
                lines.push(InfoLine {
                    label: field.to_string(),
                    value: answer.to_string(),
                });
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use game_core::{Effect, ProfileUpdate};

    #[test]
    fn mirrors_session_state() {
        let mut session = GameSession::ephemeral();
        session
            .apply_effects(&[
                Effect::AddItem("medkit".into()),
                Effect::StartQuest("Restore reactor containment".into()),
                Effect::StartQuest("Find the captain".into()),
                Effect::CompleteQuest("Find the captain".into()),
            ])
            .unwrap();
        session
            .save_profile(ProfileUpdate::single(ProfileField::Path, "mystic"))
            .unwrap();

        let mut messages = MessageLog::new(10);
        for entry in session.log().recent(3) {
            messages.push(MessageEntry::from(&entry));
        }

        let view = SidePanelView::from_session(&session, Some(&SceneId::GAME), &messages, 2);
        assert_eq!(view.quests, ["Restore reactor containment"]);
        assert_eq!(view.inventory, ["medkit"]);
        assert!(view.stats.iter().any(|s| s.name == "health" && s.value == 100));
        assert_eq!(view.logs.len(), 2);
        assert!(view.info.iter().any(|l| l.label == "path" && l.value == "mystic"));
        assert_eq!(view.info[0].value, "game");
    }

    #[test]
    fn logs_are_oldest_first() {
        let session = GameSession::ephemeral();
        let mut messages = MessageLog::new(10);
        for text in ["a", "b", "c"] {
            messages.push(MessageEntry::new(text, Utc::now(), LogKind::System));
        }
        let view = SidePanelView::from_session(&session, None, &messages, 2);
        let texts: Vec<&str> = view.logs.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["b", "c"]);
        assert!(view.info.is_empty());
    }
}
