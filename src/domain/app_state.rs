use serde::{Deserialize, Serialize};

/// Upper bound on pinned preview labels kept in history.
pub const RECENT_LABEL_LIMIT: usize = 8;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    /// Labels pinned from the preview page, most recent first.
    pub recent_labels: Vec<String>,
    /// Show the composed class string under gallery badges.
    pub show_classes: bool,
}

impl AppState {
    /// Moves `label` to the front of the history, dropping duplicates and
    /// anything past [`RECENT_LABEL_LIMIT`]. Labels are kept verbatim,
    /// including the empty string.
    pub fn pin_label(&mut self, label: &str) {
        self.recent_labels.retain(|existing| existing != label);
        self.recent_labels.insert(0, label.to_string());
        self.recent_labels.truncate(RECENT_LABEL_LIMIT);
    }

    pub fn clear_recent(&mut self) {
        self.recent_labels.clear();
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.recent_labels = persisted.recent_labels;
        self.recent_labels.truncate(RECENT_LABEL_LIMIT);
        self.show_classes = persisted.show_classes;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            recent_labels: self.recent_labels.clone(),
            show_classes: self.show_classes,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub recent_labels: Vec<String>,
    #[serde(default)]
    pub show_classes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_moves_existing_label_to_front() {
        let mut state = AppState::default();
        state.pin_label("S");
        state.pin_label("A+");
        state.pin_label("S");
        assert_eq!(state.recent_labels, vec!["S", "A+"]);
    }

    #[test]
    fn pin_caps_history() {
        let mut state = AppState::default();
        for i in 0..(RECENT_LABEL_LIMIT + 3) {
            state.pin_label(&format!("R{i}"));
        }
        assert_eq!(state.recent_labels.len(), RECENT_LABEL_LIMIT);
        assert_eq!(state.recent_labels[0], format!("R{}", RECENT_LABEL_LIMIT + 2));
    }

    #[test]
    fn pin_keeps_labels_verbatim() {
        let mut state = AppState::default();
        state.pin_label("");
        state.pin_label(" s ");
        assert_eq!(state.recent_labels, vec![" s ", ""]);
    }

    #[test]
    fn persisted_round_trip_and_defaults() {
        let mut state = AppState::default();
        state.pin_label("Q");
        state.show_classes = true;

        let mut restored = AppState::default();
        restored.apply_persisted(state.to_persisted());
        assert_eq!(restored, state);

        let partial: PersistedState = serde_json::from_str(r#"{"show_classes":true}"#).unwrap();
        assert!(partial.recent_labels.is_empty());
        assert!(partial.show_classes);
    }
}
