pub mod components;
pub mod theme;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::state::AppState;
use self::components::{
    genre_bar::render_genre_panel,
    help::render_help,
    player_bar::render_player_bar,
    recommendations::render_recommendations,
    weather_panel::render_weather_panel,
};
use self::theme::*;

/// Root render function — called every frame
pub fn render(f: &mut Frame, state: &AppState) {
    let size = f.area();

    // ── Outer layout: weather + genres, track list, player bar ──────────
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // top: weather + genre panels
            Constraint::Min(0),    // middle: recommendations
            Constraint::Length(5), // bottom: player bar
        ])
        .split(size);

    let top_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // weather
            Constraint::Percentage(45), // genre filter
        ])
        .split(main_chunks[0]);

    render_weather_panel(f, top_chunks[0], state);
    render_genre_panel(f, top_chunks[1], state);
    render_recommendations(f, main_chunks[1], state);
    render_player_bar(f, main_chunks[2], state);

    // ── Loading overlay while a refresh is in flight ─────────────────────
    if state.is_loading {
        render_loading_overlay(f, size);
    }

    // ── Help overlay ─────────────────────────────────────────────────────
    if state.show_help {
        render_help(f, size, state);
    }

    // ── Notification toast ────────────────────────────────────────────────
    if let Some(ref notif) = state.notification {
        render_notification(f, size, notif.is_error, &notif.message);
    }
}

fn render_loading_overlay(f: &mut Frame, area: Rect) {
    let popup = centered_rect(40, 20, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(Span::styled(" 🌦 petrichor ", title_style()))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(border_style(true))
        .style(normal_style().bg(SURFACE));

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let lines = vec![
        Line::from(Span::raw("")),
        Line::from(Span::styled("  날씨 정보를 가져오는 중...", accent_style())),
        Line::from(Span::raw("")),
        Line::from(Span::styled("  위치 확인 → 날씨 조회 → 음악 추천", dim_style())),
    ];

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

fn render_notification(f: &mut Frame, area: Rect, is_error: bool, message: &str) {
    let toast_width = message.len().min(60) as u16 + 4;
    let toast_area = Rect {
        x: area.width.saturating_sub(toast_width + 2),
        y: area.height.saturating_sub(8),
        width: toast_width,
        height: 3,
    };

    f.render_widget(Clear, toast_area);

    let style = if is_error { error_style() } else { playing_style() };
    let icon = if is_error { "✖ " } else { "✔ " };

    let para = Paragraph::new(Line::from(vec![
        Span::styled(icon, style),
        Span::styled(message.to_string(), style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style),
    )
    .alignment(Alignment::Left);

    f.render_widget(para, toast_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
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
        .split(vert[1])[1]
}
