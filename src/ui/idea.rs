use crate::app::App;
use crate::models::ClipboardStatus;
use crate::ui::utils::{centered_column, hex_to_rgb, render_footer, render_header};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SWATCH: &str = "         ";

pub fn draw(f: &mut Frame, app: &App) {
    render_header(f, app);

    let history_height = if app.history().is_empty() {
        0
    } else {
        app.history().len() as u16 + 2
    };

    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(20),
            Constraint::Length(2),
        ])
        .split(f.area());

    let area = centered_column(vertical_layout[1], 80);

    let block = Block::default()
        .title(" Idea Generator ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(hex_to_rgb(&app.theme.sub_alt)));
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // label
            Constraint::Length(2), // title
            Constraint::Length(3), // description
            Constraint::Length(3), // mood / focus / stack
            Constraint::Length(1),
            Constraint::Length(2), // palette
            Constraint::Length(1),
            Constraint::Length(1), // copy
            Constraint::Length(1),
            Constraint::Length(history_height),
            Constraint::Fill(1),
        ])
        .split(area);

    draw_prompt(f, app, chunks[0], chunks[1], chunks[2]);
    draw_details(f, app, chunks[3]);
    draw_palette(f, app, chunks[5]);
    draw_copy_status(f, app, chunks[7]);
    if !app.history().is_empty() {
        draw_history(f, app, chunks[9]);
    }

    render_footer(f, app);
}

fn draw_prompt(f: &mut Frame, app: &App, label_area: Rect, title_area: Rect, desc_area: Rect) {
    let idea = app.current();
    let sub = hex_to_rgb(&app.theme.sub);

    f.render_widget(
        Paragraph::new("PROMPT").style(Style::default().fg(sub)),
        label_area,
    );

    f.render_widget(
        Paragraph::new(idea.title.as_str())
            .style(
                Style::default()
                    .fg(hex_to_rgb(&app.theme.main))
                    .add_modifier(Modifier::BOLD),
            )
            .wrap(Wrap { trim: true }),
        title_area,
    );

    f.render_widget(
        Paragraph::new(idea.description.as_str())
            .style(Style::default().fg(hex_to_rgb(&app.theme.text)))
            .wrap(Wrap { trim: true }),
        desc_area,
    );
}

fn draw_details(f: &mut Frame, app: &App, area: Rect) {
    let idea = app.current();
    let label = Style::default().fg(hex_to_rgb(&app.theme.sub));
    let value = Style::default().fg(hex_to_rgb(&app.theme.text));

    let lines = vec![
        Line::from(vec![
            Span::styled("Mood             ", label),
            Span::styled(idea.mood.as_str(), value.add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("Focus            ", label),
            Span::styled(idea.focus.as_str(), value),
        ]),
        Line::from(vec![
            Span::styled("Suggested Stack  ", label),
            Span::styled(idea.tools.join(" • "), value),
        ]),
    ];

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_palette(f: &mut Frame, app: &App, area: Rect) {
    let palette = &app.current().palette;
    let sub = Style::default().fg(hex_to_rgb(&app.theme.sub));

    let mut swatches = Vec::new();
    let mut labels = Vec::new();
    for color in palette.iter() {
        swatches.push(Span::styled(SWATCH, Style::default().bg(hex_to_rgb(color))));
        swatches.push(Span::raw("  "));
        labels.push(Span::styled(format!("{:<11}", color), sub));
    }

    f.render_widget(
        Paragraph::new(vec![Line::from(swatches), Line::from(labels)]),
        area,
    );
}

fn draw_copy_status(f: &mut Frame, app: &App, area: Rect) {
    let status = app.clipboard_status();
    let color = match status {
        ClipboardStatus::Idle => hex_to_rgb(&app.theme.text),
        ClipboardStatus::Copied => hex_to_rgb(&app.theme.success),
        ClipboardStatus::Error => hex_to_rgb(&app.theme.error),
    };

    f.render_widget(
        Paragraph::new(format!("[ {} ]", status.label()))
            .alignment(Alignment::Left)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        area,
    );
}

fn draw_history(f: &mut Frame, app: &App, area: Rect) {
    let sub = hex_to_rgb(&app.theme.sub);
    let bullet = Style::default().fg(hex_to_rgb(&app.theme.main));

    let mut lines = vec![Line::from(Span::styled(
        "RECENT PROMPTS",
        Style::default().fg(sub),
    ))];
    for item in app.history().iter() {
        lines.push(Line::from(vec![
            Span::styled("• ", bullet),
            Span::styled(item.title.as_str(), Style::default().fg(sub)),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
