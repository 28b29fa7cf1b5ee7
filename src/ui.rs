use ratatui::{prelude::*, widgets::*};

/// Renders a selector list. The confirmed entry keeps a filled marker so it
/// stays visible while the cursor moves elsewhere.
pub fn render_selector<'a>(
    labels: Vec<String>,
    title: &'a str,
    selected: Option<usize>,
    is_focused: bool,
) -> List<'a> {
    let items: Vec<ListItem> = labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let marker = if Some(i) == selected { "(x)" } else { "( )" };
            let style = if Some(i) == selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(format!("{} {}", marker, label)).style(style)
        })
        .collect();

    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .highlight_symbol("> ")
}

/// Renders an informational prompt in place of a selector
pub fn render_prompt<'a>(text: &'a str, title: &'a str, is_focused: bool) -> Paragraph<'a> {
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .wrap(Wrap { trim: false })
}
