// Menu and result screen rendering with Ratatui

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::config::DisplayConfig;

use super::state::{MenuState, ResultState};

fn rgb(color: [u8; 3]) -> Color {
    Color::Rgb(color[0], color[1], color[2])
}

/// Build the option list, highlighting the selected row and spacing the
/// rows by the configured gap.
fn option_lines<'a>(
    labels: &'a [&'a str],
    selected_index: usize,
    display: &DisplayConfig,
) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            for _ in 0..display.menu_options_gap {
                lines.push(Line::from(""));
            }
        }

        if i == selected_index {
            lines.push(Line::from(Span::styled(
                format!("> {} <", label),
                Style::default()
                    .fg(rgb(display.selected_color))
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                label.to_string(),
                Style::default().fg(rgb(display.content_color)),
            )));
        }
    }
    lines
}

/// Render the main menu
pub fn render_menu(frame: &mut Frame, menu_state: &MenuState, display: &DisplayConfig) {
    let area = frame.area();

    // Draw background (true black, not terminal default)
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Title area
            Constraint::Min(8),    // Menu items
            Constraint::Length(3), // Controls hint
        ])
        .split(area);

    // Draw ASCII art title
    let title_style = Style::default()
        .fg(rgb(display.content_color))
        .add_modifier(Modifier::BOLD);
    let title_text = vec![
        Line::from(""),
        Line::from(Span::styled("██████╗  ██████╗ ███╗   ██╗ ██████╗ ", title_style)),
        Line::from(Span::styled("██╔══██╗██╔═══██╗████╗  ██║██╔════╝ ", title_style)),
        Line::from(Span::styled("██████╔╝██║   ██║██╔██╗ ██║██║  ███╗", title_style)),
        Line::from(Span::styled("██╔═══╝ ██║   ██║██║╚██╗██║██║   ██║", title_style)),
        Line::from(Span::styled("██║     ╚██████╔╝██║ ╚████║╚██████╔╝", title_style)),
        Line::from(Span::styled("╚═╝      ╚═════╝ ╚═╝  ╚═══╝ ╚═════╝ ", title_style)),
    ];

    let title = Paragraph::new(title_text).alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    // Draw menu items
    let labels: Vec<&str> = menu_state.items.iter().map(|i| i.display_text()).collect();
    let menu = Paragraph::new(option_lines(&labels, menu_state.selected_index, display))
        .alignment(Alignment::Center);
    frame.render_widget(menu, chunks[1]);

    // Draw controls hint
    let controls = vec![Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Gray)),
        Span::styled(": Navigate  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter/Space", Style::default().fg(Color::Gray)),
        Span::styled(": Select", Style::default().fg(Color::DarkGray)),
    ])];

    let controls_widget = Paragraph::new(controls).alignment(Alignment::Center);
    frame.render_widget(controls_widget, chunks[2]);
}

/// Render the result screen with the winner banner
pub fn render_result(
    frame: &mut Frame,
    result_state: &ResultState,
    winner_message: &str,
    display: &DisplayConfig,
) {
    let area = frame.area();

    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Winner banner
            Constraint::Min(6),    // Options
            Constraint::Length(3), // Controls hint
        ])
        .split(area);

    let banner = Paragraph::new(vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            winner_message.to_string(),
            Style::default()
                .fg(rgb(display.content_color))
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(banner, chunks[0]);

    let labels: Vec<&str> = result_state.items.iter().map(|i| i.display_text()).collect();
    let options = Paragraph::new(option_lines(&labels, result_state.selected_index, display))
        .alignment(Alignment::Center);
    frame.render_widget(options, chunks[1]);

    let controls = vec![Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Gray)),
        Span::styled(": Navigate  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter/Space", Style::default().fg(Color::Gray)),
        Span::styled(": Select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Gray)),
        Span::styled(": Main Menu", Style::default().fg(Color::DarkGray)),
    ])];

    let controls_widget = Paragraph::new(controls).alignment(Alignment::Center);
    frame.render_widget(controls_widget, chunks[2]);
}
