//! Which record the edit drawer shows and where its save stands.

use super::record::Record;
use crate::shared::api_error::ApiError;

/// What the list has to do once a save finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Saved: the drawer is closed and the list re-fetches once.
    CloseAndReload,
    /// Rejected: the drawer stays open with the edits and this message.
    StayOpen(String),
    /// No save was in flight.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub selected: Option<Record>,
    pub saving: bool,
    pub error: Option<String>,
}

impl SelectionState {
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Opens the drawer on a row. Ignored while a save is in flight.
    pub fn select(&mut self, record: Record) -> bool {
        if self.saving {
            return false;
        }
        self.selected = Some(record);
        self.error = None;
        true
    }

    /// Closes without saving. Refused while a save is in flight, so a late
    /// failure can still be shown in the drawer.
    pub fn close(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.selected = None;
        self.error = None;
        true
    }

    /// Local validation failure; nothing is sent.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Marks a save as started. `false` when there is nothing to save or a
    /// save is already running.
    pub fn begin_save(&mut self) -> bool {
        if self.saving || self.selected.is_none() {
            return false;
        }
        self.saving = true;
        self.error = None;
        true
    }

    pub fn finish_save(&mut self, result: Result<(), ApiError>) -> SaveOutcome {
        if !self.saving {
            return SaveOutcome::Ignored;
        }
        self.saving = false;
        match result {
            Ok(()) => {
                self.selected = None;
                self.error = None;
                SaveOutcome::CloseAndReload
            }
            Err(e) => {
                let message = e.to_string();
                self.error = Some(message.clone());
                SaveOutcome::StayOpen(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn opened() -> SelectionState {
        let mut state = SelectionState::default();
        let record: Record = serde_json::from_value(json!({"id": 41, "vendor_name": "ACME"})).unwrap();
        assert!(state.select(record));
        state
    }

    #[test]
    fn successful_save_closes_and_reloads_once() {
        let mut state = opened();
        assert!(state.begin_save());
        assert!(!state.begin_save());

        assert_eq!(state.finish_save(Ok(())), SaveOutcome::CloseAndReload);
        assert!(!state.is_open());
        assert!(!state.saving);

        assert_eq!(state.finish_save(Ok(())), SaveOutcome::Ignored);
    }

    #[test]
    fn failed_save_stays_open_with_error() {
        let mut state = opened();
        assert!(state.begin_save());

        let outcome = state.finish_save(Err(ApiError::Http {
            status: 400,
            message: "Invalid status".to_string(),
        }));
        assert!(matches!(outcome, SaveOutcome::StayOpen(_)));
        assert!(state.is_open());
        assert!(!state.saving);
        assert!(state.error.is_some());

        // retry is possible
        assert!(state.begin_save());
        assert_eq!(state.error, None);
    }

    #[test]
    fn close_is_refused_while_saving() {
        let mut state = opened();
        assert!(state.begin_save());
        assert!(!state.close());
        assert!(state.is_open());

        state.finish_save(Err(ApiError::Network("offline".into())));
        assert!(state.close());
        assert!(!state.is_open());
        assert_eq!(state.error, None);
    }

    #[test]
    fn nothing_to_save_without_selection() {
        let mut state = SelectionState::default();
        assert!(!state.begin_save());
        assert_eq!(state.finish_save(Ok(())), SaveOutcome::Ignored);
    }
}
