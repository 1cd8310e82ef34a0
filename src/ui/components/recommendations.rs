use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::state::AppState;
use super::super::theme::*;

pub fn render_recommendations(f: &mut Frame, area: Rect, state: &AppState) {
    if state.playlist.is_empty() {
        let para = Paragraph::new(vec![
            Line::from(Span::styled("  추천 목록을 준비하는 중...", muted_style())),
            Line::from(Span::styled("  r 키로 날씨를 새로고침할 수 있습니다", dim_style())),
        ])
        .block(make_block(" 🎵 추천 음악 ", false));
        f.render_widget(para, area);
        return;
    }

    let playing_idx = state.player.current_index;
    let items: Vec<ListItem> = state
        .playlist
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let is_sel = i == state.selected_track;
            let is_playing = i == playing_idx && state.player.is_playing;
            let prefix = if is_playing {
                "♪ ".to_string()
            } else if is_sel {
                "▶ ".to_string()
            } else {
                format!("{:>2}. ", i + 1)
            };
            let line = Line::from(vec![
                Span::styled(prefix, if is_playing { playing_style() } else { muted_style() }),
                Span::styled(
                    track.title.clone(),
                    if is_sel { selected_style() } else { normal_style() },
                ),
                Span::styled(" — ", muted_style()),
                Span::styled(track.artist.clone(), dim_style()),
                Span::styled(format!("  {}", track.album), muted_style()),
            ]);
            if is_sel {
                ListItem::new(line).style(selected_style())
            } else {
                ListItem::new(line)
            }
        })
        .collect();

    // Recommendation reason doubles as the panel header line
    let mut lines = vec![Line::from(Span::styled(
        format!("  {}", state.reason),
        accent_style(),
    ))];
    lines.push(Line::from(Span::styled(
        "  Enter 재생 · o YouTube 검색",
        muted_style(),
    )));

    let block = make_block(
        &format!(" 🎵 추천 음악 ({}) ", state.playlist.len()),
        true,
    );
    let inner = block.inner(area);
    f.render_widget(block, area);

    let header_height = 2.min(inner.height);
    let header_area = Rect { height: header_height, ..inner };
    f.render_widget(Paragraph::new(lines), header_area);

    let list_area = Rect {
        y: inner.y + header_height,
        height: inner.height.saturating_sub(header_height),
        ..inner
    };
    f.render_widget(List::new(items), list_area);
}

fn make_block(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .title(Span::styled(title.to_string(), title_style()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(focused))
        .style(normal_style().bg(BG))
}
