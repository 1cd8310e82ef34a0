use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};
use strum::IntoEnumIterator;

use crate::app::state::{AppState, Genre};
use super::super::theme::*;

const EQ_CHARS: &[&str] = &["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

fn bar_char(height: u8) -> &'static str {
    let idx = ((height as usize).saturating_sub(1)).min(EQ_CHARS.len() - 1);
    EQ_CHARS[idx]
}

pub fn render_genre_panel(f: &mut Frame, area: Rect, state: &AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_genre_list(f, cols[0], state);
    render_equalizer(f, cols[1], state);
}

fn render_genre_list(f: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = Genre::iter()
        .enumerate()
        .map(|(i, genre)| {
            let is_active = genre == state.selected_genre;
            let prefix = if is_active { " ▶ " } else { "   " };
            let style = if is_active {
                Style::default().fg(BG).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                normal_style()
            };
            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(format!("[{}] ", i + 1), muted_style()),
                Span::styled(genre.to_string(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(Span::styled(" 🎚 장르 필터 ", title_style()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style(false))
            .style(normal_style()),
    );
    f.render_widget(list, area);
}

fn render_equalizer(f: &mut Frame, area: Rect, state: &AppState) {
    let colors = [ACCENT, PRIMARY, SUN, RAIN];
    let eq_spans: Vec<Span> = state
        .eq_bars
        .iter()
        .enumerate()
        .map(|(i, &h)| {
            Span::styled(
                format!("{} ", bar_char(h)),
                Style::default().fg(colors[i % colors.len()]),
            )
        })
        .collect();

    let eq_lines = vec![
        Line::from(Span::raw("")),
        Line::from(eq_spans),
        Line::from(Span::styled("  ▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔", muted_style())),
    ];

    let eq_block = Paragraph::new(eq_lines)
        .block(
            Block::default()
                .title(Span::styled(" ≋ Equalizer ", title_style()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style(false))
                .style(normal_style()),
        )
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(eq_block, area);
}
