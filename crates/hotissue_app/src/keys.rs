use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hotissue_core::{InputMode, Msg, SelectionMove};

/// Maps a key press to a message under the current input mode. Returns
/// `None` for keys that mean nothing in that mode.
pub fn msg_for_key(key: KeyEvent, mode: InputMode) -> Option<Msg> {
    // Ctrl-C quits from anywhere, including mid-search.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Msg::QuitRequested);
    }
    match mode {
        InputMode::Normal => normal_mode(key),
        InputMode::Search => search_mode(key),
    }
}

fn normal_mode(key: KeyEvent) -> Option<Msg> {
    match key.code {
        KeyCode::Char('q') => Some(Msg::QuitRequested),
        KeyCode::Esc => Some(Msg::EscapePressed),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::SelectionMoved(SelectionMove::Down)),
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::SelectionMoved(SelectionMove::Up)),
        KeyCode::Char('g') => Some(Msg::SelectionMoved(SelectionMove::Top)),
        KeyCode::Char('G') => Some(Msg::SelectionMoved(SelectionMove::Bottom)),
        KeyCode::Enter => Some(Msg::OpenSelected),
        KeyCode::Char('/') => Some(Msg::SearchStarted),
        KeyCode::Char('s') => Some(Msg::SiteFilterCycled),
        KeyCode::Char('c') => Some(Msg::CategoryFilterCycled),
        KeyCode::Char('o') => Some(Msg::SortCycled),
        KeyCode::Char('m') | KeyCode::PageDown => Some(Msg::LoadMoreRequested),
        KeyCode::Char('r') => Some(Msg::RefreshRequested),
        KeyCode::Char('e') => Some(Msg::ExportRequested),
        _ => None,
    }
}

fn search_mode(key: KeyEvent) -> Option<Msg> {
    match key.code {
        KeyCode::Esc => Some(Msg::SearchCancelled),
        KeyCode::Enter => Some(Msg::SearchSubmitted),
        KeyCode::Backspace => Some(Msg::SearchBackspaced),
        KeyCode::Char(ch) => Some(Msg::SearchCharTyped(ch)),
        _ => None,
    }
}
