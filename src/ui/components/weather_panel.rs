use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::state::AppState;
use crate::music::mood::Mood;
use super::super::theme::*;

pub fn render_weather_panel(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(Span::styled(" 🌦 현재 날씨 ", title_style()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(true))
        .style(normal_style());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let snapshot = match &state.weather {
        Some(s) => s,
        None => {
            let msg = if state.weather_failed {
                Span::styled("  날씨 정보를 가져올 수 없습니다", error_style())
            } else {
                Span::styled("  날씨 정보를 기다리는 중...", dim_style())
            };
            let lines = vec![
                Line::from(Span::raw("")),
                Line::from(msg),
                Line::from(Span::raw("")),
                Line::from(Span::styled("  r 키로 다시 시도", muted_style())),
            ];
            f.render_widget(Paragraph::new(lines), inner);
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // temp + condition
            Constraint::Percentage(45), // details
        ])
        .split(inner);

    let mood = Mood::from_condition(&snapshot.condition_text);
    let temp = snapshot.temperature_c.round() as i64;

    let left = vec![
        Line::from(Span::styled(
            format!("  {}", snapshot.location_label()),
            dim_style(),
        )),
        Line::from(vec![
            Span::styled(format!("  {temp}°C "), sun_style()),
            Span::styled(snapshot.condition_text.clone(), normal_style()),
        ]),
        Line::from(Span::styled(format!("  {mood}"), accent_style())),
    ];
    f.render_widget(Paragraph::new(left).alignment(Alignment::Left), chunks[0]);

    let feels = snapshot.feels_like_c.round() as i64;
    let right = vec![
        Line::from(vec![
            Span::styled("체감 ", muted_style()),
            Span::styled(format!("{feels}°C"), dim_style()),
        ]),
        Line::from(vec![
            Span::styled("습도 ", muted_style()),
            Span::styled(format!("{}%", snapshot.humidity_pct), rain_style()),
        ]),
        Line::from(vec![
            Span::styled("바람 ", muted_style()),
            Span::styled(format!("{} km/h", snapshot.wind_kph), dim_style()),
        ]),
    ];
    f.render_widget(Paragraph::new(right).alignment(Alignment::Left), chunks[1]);
}
