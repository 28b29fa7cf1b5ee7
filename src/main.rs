//! Coleta TUI - terminal client for picking a collection-point location
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async IBGE locality fetches

mod app;
mod config;
mod constants;
mod messages;
mod models;
mod network;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::AppActor;
use config::Config;
use constants::{APP_NAME, APP_VERSION, LOG_FILE};
use messages::ui_events::{key_to_ui_event, Panel, Screen};
use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use models::Uf;
use network::NetworkActor;
use ui::{render_prompt, render_selector};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config = Config::load();
    tracing::info!(base_url = %config.api_base_url, version = APP_VERSION, "Starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(&config, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    &current_state.screen,
                    current_state.alert.is_some(),
                    current_state.show_help,
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    match &state.screen {
        Screen::Home => draw_home(f, state, area),
        Screen::Points { uf, city } => draw_points(f, uf, city, area),
    }

    // Popups
    if let Some(message) = &state.alert {
        draw_alert_popup(f, message, area);
    }

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_home(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Header
            Constraint::Min(8),    // Selectors
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, chunks[0]);
    draw_selectors(f, state, chunks[1]);
    draw_status_bar(f, state, chunks[2]);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", APP_NAME),
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from(Span::raw("  Seu marketplace de coleta de resíduos")),
        Line::from(Span::styled(
            "  Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_selectors(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_state_selector(f, state, chunks[0]);
    draw_city_selector(f, state, chunks[1]);
}

fn draw_state_selector(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::States;

    if state.ufs.is_empty() {
        let text = if state.loading_states {
            "Loading states..."
        } else {
            "No states available."
        };
        f.render_widget(render_prompt(text, " State ", is_focused), area);
        return;
    }

    let labels: Vec<String> = state.ufs.iter().map(Uf::label).collect();
    let list = render_selector(labels, " State ", state.selected_uf, is_focused);

    let mut list_state = ListState::default();
    list_state.select(Some(state.cursor_uf));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_city_selector(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Cities;

    // Until a state is confirmed this panel is an informational prompt
    if state.selected_uf.is_none() {
        f.render_widget(render_prompt("Select a state first.", " City ", is_focused), area);
        return;
    }

    if state.loading_cities {
        f.render_widget(render_prompt("Loading cities...", " City ", is_focused), area);
        return;
    }

    if state.cities.is_empty() {
        f.render_widget(render_prompt("No cities available.", " City ", is_focused), area);
        return;
    }

    let labels: Vec<String> = state.cities.iter().map(|c| c.name.clone()).collect();
    let list = render_selector(labels, " City ", state.selected_city, is_focused);

    let mut list_state = ListState::default();
    list_state.select(Some(state.cursor_city));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let bar = if let Some(error) = &state.error {
        Paragraph::new(format!(" {} ", error)).style(Style::default().fg(Color::Red))
    } else if state.loading_states || state.loading_cities {
        Paragraph::new(" Loading... ").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(" Tab:panel | ↑/↓:move | Enter:select | s:proceed | ?:help | q:quit ")
            .style(Style::default().fg(Color::DarkGray))
    };
    f.render_widget(bar, area);
}

fn draw_points(f: &mut Frame, uf: &str, city: &str, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Collection Points ");

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {} - {}", city, uf),
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from(""),
        Line::from("  Collection points for the selected location will be listed here."),
    ];
    f.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    let bar = Paragraph::new(" Esc:back | ?:help | q:quit ")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, chunks[1]);
}

fn draw_alert_popup(f: &mut Frame, message: &str, area: Rect) {
    let popup_area = centered_rect(50, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Ooops... ")
        .style(Style::default().bg(Color::Black));

    let text = vec![
        Line::from(""),
        Line::from(format!("  {}", message)),
        Line::from(""),
        Line::from(Span::styled(
            "  Press any key to close...",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(Clear, popup_area);
    f.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        popup_area,
    );
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = format!(
        r#"
 {} v{} - Keyboard Shortcuts

 HOME
   Tab / Shift+Tab    Switch between state and city
   ↑ / ↓              Move the highlight
   Enter              Select the highlighted entry
   s                  Proceed to collection points
   r                  Retry a failed fetch

 POINTS
   Esc / b            Back to the location selection

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#,
        APP_NAME, APP_VERSION
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
