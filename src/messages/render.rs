//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{Panel, Screen};
use crate::models::{City, Uf};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub screen: Screen,

    // Remote lists
    pub ufs: Vec<Uf>,
    pub cities: Vec<City>,

    // Selector cursors (highlighted row)
    pub cursor_uf: usize,
    pub cursor_city: usize,

    // Confirmed selections, indices into the lists above
    pub selected_uf: Option<usize>,
    pub selected_city: Option<usize>,

    pub active_panel: Panel,

    // Outstanding fetches
    pub loading_states: bool,
    pub loading_cities: bool,

    // Popups / status line
    pub alert: Option<String>,
    pub error: Option<String>,
    pub show_help: bool,
}
