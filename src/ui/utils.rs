use ratatui::style::Color;
use ratatui::{
    layout::{Alignment, Rect, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use crate::app::App;

pub fn hex_to_rgb(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
        Color::Rgb(r, g, b)
    } else {
        Color::White
    }
}

/// Centered column taking `percent` of the width.
pub fn centered_column(area: Rect, percent: u16) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Percentage(percent),
            Constraint::Fill(1),
        ])
        .split(area)[1]
}

pub fn render_header(f: &mut Frame, app: &App) {
    let header_spans = vec![
        Span::styled(
            "Studio Pulse",
            Style::default()
                .fg(hex_to_rgb(&app.theme.main))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " • Experiments for curiosity-driven teams",
            Style::default().fg(hex_to_rgb(&app.theme.sub)),
        ),
    ];

    let header_row_area = centered_column(Rect::new(0, 1, f.area().width, 1), 82);
    f.render_widget(Paragraph::new(Line::from(header_spans)), header_row_area);
}

pub fn render_footer(f: &mut Frame, app: &App) {
    let footer = Paragraph::new("space: shuffle | c: copy | esc: quit")
        .style(Style::default().fg(hex_to_rgb(&app.theme.sub_alt)))
        .alignment(Alignment::Center);
    f.render_widget(footer, Rect::new(0, f.area().height.saturating_sub(1), f.area().width, 1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses() {
        assert_eq!(hex_to_rgb("#0ea5e9"), Color::Rgb(0x0e, 0xa5, 0xe9));
        assert_eq!(hex_to_rgb("facc15"), Color::Rgb(0xfa, 0xcc, 0x15));
    }

    #[test]
    fn bad_hex_falls_back() {
        assert_eq!(hex_to_rgb("#fff"), Color::White);
        assert_eq!(hex_to_rgb("#zz0000"), Color::Rgb(255, 0, 0));
    }

    #[test]
    fn column_is_centered() {
        let col = centered_column(Rect::new(0, 0, 100, 10), 80);
        assert_eq!(col.width, 80);
        assert_eq!(col.x, 10);
    }
}
