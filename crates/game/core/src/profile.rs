//! Player profile filled in by the origin-story interview.

/// Answer slots of the origin-story interview.
///
/// The string form is the field name used in persisted profiles and log
/// entries.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "camelCase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ProfileField {
    Path,
    Motivation,
    PastEvent,
    GreatestFear,
}

/// Persisted player profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayerProfile {
    pub path: Option<String>,
    pub motivation: Option<String>,
    pub past_event: Option<String>,
    pub greatest_fear: Option<String>,
    pub player_id: String,
    /// RFC 3339 time of the last update.
    pub timestamp: String,
}

/// A partial set of answers to merge into a profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    answers: Vec<(ProfileField, String)>,
}

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for the common single-answer update.
    pub fn single(field: ProfileField, value: impl Into<String>) -> Self {
        Self::new().with(field, value)
    }

    #[must_use]
    pub fn with(mut self, field: ProfileField, value: impl Into<String>) -> Self {
        self.answers.push((field, value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// One field whose value differs after a merge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileChange {
    /// Persisted field name (`path`, `playerId`, `timestamp`, ...).
    pub field: String,
    pub value: String,
}

impl PlayerProfile {
    pub fn answer(&self, field: ProfileField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// True once every interview question has been answered.
    pub fn is_complete(&self) -> bool {
        use strum::IntoEnumIterator;
        ProfileField::iter().all(|field| self.answer(field).is_some())
    }

    /// Merges `update` into the profile and stamps identity and time.
    ///
    /// Returns every field whose value changed, in a stable order: answers
    /// first, then `playerId`, then `timestamp`.
    pub fn merge(
        &mut self,
        update: ProfileUpdate,
        player_id: &str,
        timestamp: &str,
    ) -> Vec<ProfileChange> {
        let mut changes = Vec::new();

        for (field, value) in update.answers {
            let slot = self.slot_mut(field);
            if slot.as_deref() != Some(value.as_str()) {
                changes.push(ProfileChange {
                    field: field.to_string(),
                    value: value.clone(),
                });
                *slot = Some(value);
            }
        }

        if self.player_id != player_id {
            self.player_id = player_id.to_string();
            changes.push(ProfileChange {
                field: "playerId".to_string(),
                value: player_id.to_string(),
            });
        }

        if self.timestamp != timestamp {
            self.timestamp = timestamp.to_string();
            changes.push(ProfileChange {
                field: "timestamp".to_string(),
                value: timestamp.to_string(),
            });
        }

        changes
    }

    fn slot(&self, field: ProfileField) -> &Option<String> {
        match field {
            ProfileField::Path => &self.path,
            ProfileField::Motivation => &self.motivation,
            ProfileField::PastEvent => &self.past_event,
            ProfileField::GreatestFear => &self.greatest_fear,
        }
    }

    fn slot_mut(&mut self, field: ProfileField) -> &mut Option<String> {
        match field {
            ProfileField::Path => &mut self.path,
            ProfileField::Motivation => &mut self.motivation,
            ProfileField::PastEvent => &mut self.past_event,
            ProfileField::GreatestFear => &mut self.greatest_fear,
        }
    }
}
