//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::ui_events::{Panel, Screen};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::FetchKind;

impl AppState {
    // ========================
    // Panel navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.active_panel = self.active_panel.next();
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = self.active_panel.prev();
    }

    // ========================
    // Cursor movement
    // ========================

    pub fn cursor_up(&mut self) {
        match self.active_panel {
            Panel::States => {
                if !self.ufs.is_empty() {
                    self.cursor_uf = self.cursor_uf.checked_sub(1).unwrap_or(self.ufs.len() - 1);
                }
            }
            Panel::Cities => {
                if self.city_selector_open() && !self.cities.is_empty() {
                    self.cursor_city = self
                        .cursor_city
                        .checked_sub(1)
                        .unwrap_or(self.cities.len() - 1);
                }
            }
        }
    }

    pub fn cursor_down(&mut self) {
        match self.active_panel {
            Panel::States => {
                if !self.ufs.is_empty() {
                    self.cursor_uf = (self.cursor_uf + 1) % self.ufs.len();
                }
            }
            Panel::Cities => {
                if self.city_selector_open() && !self.cities.is_empty() {
                    self.cursor_city = (self.cursor_city + 1) % self.cities.len();
                }
            }
        }
    }

    // ========================
    // Fetch issuance
    // ========================

    /// Issue the startup fetch for the state list
    pub fn initial_fetch(&mut self) -> NetworkCommand {
        let id = self.next_id();
        self.pending_states_request = Some(id);
        NetworkCommand::FetchStates { id }
    }

    /// Confirm the highlighted entry in the focused selector.
    ///
    /// Confirming a state clears the previous city list and selection, then
    /// returns exactly one `FetchCities` command tagged with a fresh id, so
    /// a late response for a previously confirmed state is recognizable as
    /// stale. With nothing to confirm this is a no-op returning no command.
    pub fn confirm_selection(&mut self) -> Option<NetworkCommand> {
        match self.active_panel {
            Panel::States => {
                if self.ufs.is_empty() {
                    return None;
                }
                let index = self.cursor_uf.min(self.ufs.len() - 1);
                self.selected_uf = Some(index);

                // The previous city choice belongs to the old state
                self.selected_city = None;
                self.cities.clear();
                self.cursor_city = 0;

                let id = self.next_id();
                self.pending_cities_request = Some(id);
                let uf = self.ufs[index].abbreviation.clone();
                tracing::info!(%uf, id, "State confirmed, fetching cities");
                Some(NetworkCommand::FetchCities { id, uf })
            }
            Panel::Cities => {
                if !self.city_selector_open() || self.cities.is_empty() {
                    return None;
                }
                self.selected_city = Some(self.cursor_city.min(self.cities.len() - 1));
                None
            }
        }
    }

    /// Re-issue the most recently failed fetch, leaving selections untouched
    pub fn retry(&mut self) -> Option<NetworkCommand> {
        let failed = self.failed_fetch.take()?;
        self.error = None;
        match failed {
            FetchKind::States => Some(self.initial_fetch()),
            FetchKind::Cities => {
                let uf = self.current_uf()?.abbreviation.clone();
                let id = self.next_id();
                self.pending_cities_request = Some(id);
                Some(NetworkCommand::FetchCities { id, uf })
            }
        }
    }

    // ========================
    // Response handling
    // ========================

    /// Apply a network response, discarding stale ones by id.
    ///
    /// Rapidly confirming state A then state B leaves only B's id pending;
    /// whichever order the two responses arrive in, A's is dropped here.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::States { id, ufs, time_ms } => {
                if self.pending_states_request != Some(id) {
                    tracing::debug!(id, "Discarding stale states response");
                    return;
                }
                self.pending_states_request = None;
                tracing::info!(id, count = ufs.len(), time_ms, "States loaded");
                self.ufs = ufs;
                self.cursor_uf = 0;
                if self.failed_fetch == Some(FetchKind::States) {
                    self.failed_fetch = None;
                    self.error = None;
                }
            }
            NetworkResponse::Cities {
                id,
                cities,
                time_ms,
            } => {
                if self.pending_cities_request != Some(id) {
                    tracing::debug!(id, "Discarding stale cities response");
                    return;
                }
                self.pending_cities_request = None;
                tracing::info!(id, count = cities.len(), time_ms, "Cities loaded");
                self.cities = cities;
                self.cursor_city = 0;
                if self.failed_fetch == Some(FetchKind::Cities) {
                    self.failed_fetch = None;
                    self.error = None;
                }
            }
            NetworkResponse::Error {
                id,
                kind,
                message,
                time_ms,
            } => {
                let pending = match kind {
                    FetchKind::States => &mut self.pending_states_request,
                    FetchKind::Cities => &mut self.pending_cities_request,
                };
                if *pending != Some(id) {
                    tracing::debug!(id, kind = kind.as_str(), "Discarding stale error response");
                    return;
                }
                *pending = None;
                tracing::warn!(id, kind = kind.as_str(), time_ms, %message, "Fetch failed");
                self.failed_fetch = Some(kind);
                self.error = Some(format!(
                    "Failed to load {}: {} - press r to retry",
                    kind.as_str(),
                    message
                ));
            }
        }
    }

    // ========================
    // Screen transitions
    // ========================

    /// Proceed to the Points screen. With either selection missing, raises
    /// a blocking alert instead; no navigation happens.
    pub fn submit(&mut self) {
        match (self.current_uf(), self.current_city()) {
            (Some(uf), Some(city)) => {
                let uf = uf.abbreviation.clone();
                let city = city.name.clone();
                tracing::info!(%uf, %city, "Navigating to points");
                self.screen = Screen::Points { uf, city };
            }
            _ => {
                self.alert = Some(String::from(
                    "You need to select a state and a city first!",
                ));
            }
        }
    }

    /// Return to the home screen, keeping the selections for adjustment
    pub fn back(&mut self) {
        self.screen = Screen::Home;
    }

    // ========================
    // Popups
    // ========================

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, Uf};

    fn uf(name: &str, abbreviation: &str) -> Uf {
        Uf {
            name: name.into(),
            abbreviation: abbreviation.into(),
        }
    }

    fn city(name: &str) -> City {
        City { name: name.into() }
    }

    /// State machine with the states fetch already resolved
    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        let NetworkCommand::FetchStates { id } = state.initial_fetch() else {
            panic!("expected a states fetch");
        };
        state.handle_response(NetworkResponse::States {
            id,
            ufs: vec![uf("São Paulo", "SP"), uf("Rio de Janeiro", "RJ")],
            time_ms: 12,
        });
        state
    }

    fn confirm_cities_fetch(state: &mut AppState) -> (u64, String) {
        match state.confirm_selection() {
            Some(NetworkCommand::FetchCities { id, uf }) => (id, uf),
            other => panic!("expected a cities fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_no_entries_before_states_load() {
        let mut state = AppState::new();
        state.initial_fetch();
        assert!(state.ufs.is_empty());
        assert!(state.to_render_state().loading_states);
    }

    #[test]
    fn test_states_fetch_populates_selector() {
        let state = loaded_state();
        assert_eq!(state.ufs.len(), 2);
        assert_eq!(state.ufs[0].label(), "São Paulo (SP)");
        assert!(!state.to_render_state().loading_states);
    }

    #[test]
    fn test_confirm_without_states_issues_no_fetch() {
        let mut state = AppState::new();
        assert!(state.confirm_selection().is_none());
        assert!(state.pending_cities_request.is_none());
    }

    #[test]
    fn test_confirm_state_issues_single_cities_fetch() {
        let mut state = loaded_state();
        let (_, fetched_uf) = confirm_cities_fetch(&mut state);
        assert_eq!(fetched_uf, "SP");
        assert!(state.to_render_state().loading_cities);

        // Until the fetch resolves there is nothing to confirm in the city panel
        state.active_panel = Panel::Cities;
        assert!(state.confirm_selection().is_none());
        assert!(state.selected_city.is_none());
    }

    #[test]
    fn test_submit_incomplete_raises_alert() {
        let mut state = loaded_state();
        state.submit();
        assert!(state.alert.is_some());
        assert_eq!(state.screen, Screen::Home);

        // A state alone is still not enough
        state.dismiss_alert();
        confirm_cities_fetch(&mut state);
        state.submit();
        assert!(state.alert.is_some());
        assert_eq!(state.screen, Screen::Home);
    }

    #[test]
    fn test_submit_complete_navigates_with_params() {
        let mut state = loaded_state();
        let (id, _) = confirm_cities_fetch(&mut state);
        state.handle_response(NetworkResponse::Cities {
            id,
            cities: vec![city("São Paulo"), city("Campinas")],
            time_ms: 8,
        });
        state.active_panel = Panel::Cities;
        state.confirm_selection();
        state.submit();
        assert!(state.alert.is_none());
        assert_eq!(
            state.screen,
            Screen::Points {
                uf: String::from("SP"),
                city: String::from("São Paulo"),
            }
        );
    }

    #[test]
    fn test_reconfirming_state_invalidates_city() {
        let mut state = loaded_state();
        let (id, _) = confirm_cities_fetch(&mut state);
        state.handle_response(NetworkResponse::Cities {
            id,
            cities: vec![city("Campinas")],
            time_ms: 8,
        });
        state.active_panel = Panel::Cities;
        state.confirm_selection();
        assert!(state.selected_city.is_some());

        state.active_panel = Panel::States;
        state.cursor_uf = 1;
        confirm_cities_fetch(&mut state);
        assert!(state.selected_city.is_none());
        assert!(state.cities.is_empty());
    }

    #[test]
    fn test_stale_cities_response_discarded() {
        // Confirm state A, then state B before A's response arrives
        let mut state = loaded_state();
        let (first, _) = confirm_cities_fetch(&mut state);
        state.cursor_uf = 1;
        let (second, second_uf) = confirm_cities_fetch(&mut state);
        assert_eq!(second_uf, "RJ");

        // B's response first, then A's late one
        state.handle_response(NetworkResponse::Cities {
            id: second,
            cities: vec![city("Niterói")],
            time_ms: 5,
        });
        state.handle_response(NetworkResponse::Cities {
            id: first,
            cities: vec![city("Campinas")],
            time_ms: 90,
        });
        assert_eq!(state.cities, vec![city("Niterói")]);
    }

    #[test]
    fn test_stale_cities_response_discarded_other_order() {
        let mut state = loaded_state();
        let (first, _) = confirm_cities_fetch(&mut state);
        state.cursor_uf = 1;
        let (second, _) = confirm_cities_fetch(&mut state);

        // A's response first this time; it must not clobber B's
        state.handle_response(NetworkResponse::Cities {
            id: first,
            cities: vec![city("Campinas")],
            time_ms: 5,
        });
        assert!(state.cities.is_empty());
        state.handle_response(NetworkResponse::Cities {
            id: second,
            cities: vec![city("Niterói")],
            time_ms: 9,
        });
        assert_eq!(state.cities, vec![city("Niterói")]);
    }

    #[test]
    fn test_fetch_error_is_retryable() {
        let mut state = loaded_state();
        let (id, _) = confirm_cities_fetch(&mut state);
        state.handle_response(NetworkResponse::Error {
            id,
            kind: FetchKind::Cities,
            message: String::from("Connection failed"),
            time_ms: 3,
        });
        assert!(state.error.is_some());
        // Prior selection is untouched
        assert_eq!(state.current_uf().map(|u| u.abbreviation.as_str()), Some("SP"));

        match state.retry() {
            Some(NetworkCommand::FetchCities { uf, .. }) => assert_eq!(uf, "SP"),
            other => panic!("expected a cities retry, got {:?}", other),
        }
        assert!(state.error.is_none());
    }

    #[test]
    fn test_stale_error_response_discarded() {
        let mut state = loaded_state();
        let (first, _) = confirm_cities_fetch(&mut state);
        state.cursor_uf = 1;
        let (second, _) = confirm_cities_fetch(&mut state);

        // A's fetch failing late must not surface an error for B
        state.handle_response(NetworkResponse::Error {
            id: first,
            kind: FetchKind::Cities,
            message: String::from("Request timed out"),
            time_ms: 30_000,
        });
        assert!(state.error.is_none());
        assert_eq!(state.pending_cities_request, Some(second));
    }

    #[test]
    fn test_back_keeps_selections() {
        let mut state = loaded_state();
        let (id, _) = confirm_cities_fetch(&mut state);
        state.handle_response(NetworkResponse::Cities {
            id,
            cities: vec![city("Santos")],
            time_ms: 4,
        });
        state.active_panel = Panel::Cities;
        state.confirm_selection();
        state.submit();
        state.back();
        assert_eq!(state.screen, Screen::Home);
        assert!(state.selected_uf.is_some());
        assert!(state.selected_city.is_some());
    }
}
