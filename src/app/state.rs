//! App state - pure data structure with no I/O logic

use crate::messages::ui_events::{Panel, Screen};
use crate::messages::RenderState;
use crate::models::{City, FetchKind, Uf};

/// Main application state - pure data, no I/O.
///
/// Selections are `Option` indices into the loaded lists; there is no
/// "unset" sentinel value. A confirmed city only stands while its state
/// selection does - confirming a different state clears it.
pub struct AppState {
    pub screen: Screen,

    // Remote lists
    pub ufs: Vec<Uf>,
    pub cities: Vec<City>,

    // Selector cursors (highlighted row, not yet confirmed)
    pub cursor_uf: usize,
    pub cursor_city: usize,

    // Confirmed selections, indices into the lists above
    pub selected_uf: Option<usize>,
    pub selected_city: Option<usize>,

    pub active_panel: Panel,

    // In-flight fetch bookkeeping. Only a response carrying the pending id
    // is applied; anything else is a late answer for a superseded request.
    pub next_request_id: u64,
    pub pending_states_request: Option<u64>,
    pub pending_cities_request: Option<u64>,

    // Last failed fetch, so `r` knows what to re-issue
    pub failed_fetch: Option<FetchKind>,

    // Popups / status line
    pub alert: Option<String>,
    pub error: Option<String>,
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            screen: Screen::Home,
            ufs: Vec::new(),
            cities: Vec::new(),
            cursor_uf: 0,
            cursor_city: 0,
            selected_uf: None,
            selected_city: None,
            active_panel: Panel::States,
            next_request_id: 1,
            pending_states_request: None,
            pending_cities_request: None,
            failed_fetch: None,
            alert: None,
            error: None,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Confirmed state record, if any
    pub fn current_uf(&self) -> Option<&Uf> {
        self.selected_uf.and_then(|i| self.ufs.get(i))
    }

    /// Confirmed city record, if any
    pub fn current_city(&self) -> Option<&City> {
        self.selected_city.and_then(|i| self.cities.get(i))
    }

    /// The city selector only opens once a state is confirmed; until then
    /// it renders as an informational prompt.
    pub fn city_selector_open(&self) -> bool {
        self.selected_uf.is_some()
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            screen: self.screen.clone(),
            ufs: self.ufs.clone(),
            cities: self.cities.clone(),
            cursor_uf: self.cursor_uf,
            cursor_city: self.cursor_city,
            selected_uf: self.selected_uf,
            selected_city: self.selected_city,
            active_panel: self.active_panel,
            loading_states: self.pending_states_request.is_some(),
            loading_cities: self.pending_cities_request.is_some(),
            alert: self.alert.clone(),
            error: self.error.clone(),
            show_help: self.show_help,
        }
    }
}
