use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};

use crate::app::state::AppState;
use super::super::theme::*;

/// Block characters for vertical bar heights (8 levels)
const BAR_BLOCKS: &[&str] = &[" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

pub fn render_player_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(true))
        .style(normal_style());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30), // track info
            Constraint::Percentage(45), // EQ + progress
            Constraint::Percentage(25), // controls
        ])
        .split(inner);

    // ── Track info ──────────────────────────────────────────────────
    render_track_info(f, chunks[0], state);

    // ── Center: EQ + progress ──────────────────────────────────────
    let center_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // EQ bars (single row)
            Constraint::Length(1), // progress gauge
            Constraint::Min(0),    // time label
        ])
        .split(chunks[1]);

    // Single-row EQ
    let eq_spans: Vec<Span> = state.eq_bars.iter().map(|&h| {
        let ch = BAR_BLOCKS[(h as usize).clamp(0, 8)];
        let color = if h >= 9 { SUN } else if h >= 6 { RAIN } else if h >= 3 { PRIMARY } else { ACCENT };
        Span::styled(ch, ratatui::style::Style::default().fg(color))
    }).collect();
    f.render_widget(
        Paragraph::new(Line::from(eq_spans)).alignment(Alignment::Center),
        center_chunks[0],
    );

    // Progress gauge (simulated playback)
    let progress_pct = (state.player.progress_percent() * 100.0) as u16;
    let gauge = Gauge::default()
        .gauge_style(ratatui::style::Style::default().fg(PRIMARY).bg(SURFACE))
        .percent(progress_pct)
        .label("");
    f.render_widget(gauge, center_chunks[1]);

    // Time label
    let time_label = Paragraph::new(Line::from(Span::styled(
        state.player.progress_formatted(),
        dim_style(),
    )))
    .alignment(Alignment::Center);
    f.render_widget(time_label, center_chunks[2]);

    // ── Controls ───────────────────────────────────────────────────
    let controls = Paragraph::new(vec![
        Line::from(Span::styled("⏮ p  ⏸ spc  ⏭ n", dim_style())),
        Line::from(Span::styled("r 새로고침   ? help", muted_style())),
    ])
    .alignment(Alignment::Right);
    f.render_widget(controls, chunks[2]);
}

fn render_track_info(f: &mut Frame, area: Rect, state: &AppState) {
    let play_icon = if state.player.is_playing { "▶" } else { "⏸" };

    let (title, artist, album) = match state.current_track() {
        Some(t) => (t.title.clone(), t.artist.clone(), t.album.clone()),
        None => ("—".to_string(), String::new(), String::new()),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{play_icon} "), playing_style()),
            Span::styled(
                title,
                normal_style().add_modifier(ratatui::style::Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            if artist.is_empty() { "—".to_string() } else { artist },
            dim_style(),
        )),
    ];

    if area.height >= 3 && !album.is_empty() {
        lines.push(Line::from(Span::styled(format!("💿 {album}"), muted_style())));
    }

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Left), area);
}
