use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    Quit,
    ToggleHelp,
    NavigateUp,
    NavigateDown,
    Select,
    Back,
    TogglePlay,
    NextTrack,
    PrevTrack,
    RefreshWeather,
    SelectGenre(u8),
    OpenExternal,
}

pub fn map_key_to_action(key: KeyEvent) -> Option<UserAction> {
    match key.code {
        KeyCode::Char('q') => Some(UserAction::Quit),
        KeyCode::Char('?') => Some(UserAction::ToggleHelp),
        KeyCode::Up | KeyCode::Char('k') => Some(UserAction::NavigateUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UserAction::NavigateDown),
        KeyCode::Enter => Some(UserAction::Select),
        KeyCode::Esc | KeyCode::Char('b') => Some(UserAction::Back),
        KeyCode::Char(' ') => Some(UserAction::TogglePlay),
        KeyCode::Char('n') => Some(UserAction::NextTrack),
        KeyCode::Char('p') => Some(UserAction::PrevTrack),
        KeyCode::Char('r') => Some(UserAction::RefreshWeather),
        KeyCode::Char('o') => Some(UserAction::OpenExternal),
        KeyCode::Char('1') => Some(UserAction::SelectGenre(1)),
        KeyCode::Char('2') => Some(UserAction::SelectGenre(2)),
        KeyCode::Char('3') => Some(UserAction::SelectGenre(3)),
        KeyCode::Char('4') => Some(UserAction::SelectGenre(4)),
        KeyCode::Char('5') => Some(UserAction::SelectGenre(5)),
        KeyCode::Char('6') => Some(UserAction::SelectGenre(6)),
        KeyCode::Char('7') => Some(UserAction::SelectGenre(7)),
        _ => None,
    }
}
