use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::scheduler::{Action, Screen};

pub(crate) fn map_key_to_action(screen: Screen, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return Some(Action::Quit);
    }

    if screen == Screen::Input {
        match key.code {
            KeyCode::Char(ch) if ch.is_ascii_digit() => return Some(Action::Digit(ch)),
            KeyCode::Backspace => return Some(Action::Backspace),
            KeyCode::Enter => return Some(Action::Submit),
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Char(' ') => Some(Action::TogglePause),
        KeyCode::Left | KeyCode::Char('a') => Some(Action::PrevFrame),
        KeyCode::Right | KeyCode::Char('d') => Some(Action::NextFrame),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::SpeedUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(Action::SlowDown),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Refresh),
        KeyCode::Char('?') | KeyCode::Char('h') => Some(Action::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_only_feed_the_zip_field_on_the_input_screen() {
        assert_eq!(
            map_key_to_action(Screen::Input, press(KeyCode::Char('7'))),
            Some(Action::Digit('7'))
        );
        assert_eq!(map_key_to_action(Screen::Displaying, press(KeyCode::Char('7'))), None);
        assert_eq!(
            map_key_to_action(Screen::Input, press(KeyCode::Enter)),
            Some(Action::Submit)
        );
        assert_eq!(map_key_to_action(Screen::Displaying, press(KeyCode::Enter)), None);
    }

    #[test]
    fn playback_keys() {
        let s = Screen::Displaying;
        assert_eq!(map_key_to_action(s, press(KeyCode::Char(' '))), Some(Action::TogglePause));
        assert_eq!(map_key_to_action(s, press(KeyCode::Left)), Some(Action::PrevFrame));
        assert_eq!(map_key_to_action(s, press(KeyCode::Char('a'))), Some(Action::PrevFrame));
        assert_eq!(map_key_to_action(s, press(KeyCode::Right)), Some(Action::NextFrame));
        assert_eq!(map_key_to_action(s, press(KeyCode::Char('d'))), Some(Action::NextFrame));
        assert_eq!(map_key_to_action(s, press(KeyCode::Char('='))), Some(Action::SpeedUp));
        assert_eq!(map_key_to_action(s, press(KeyCode::Char('_'))), Some(Action::SlowDown));
        assert_eq!(map_key_to_action(s, press(KeyCode::Char('r'))), Some(Action::Refresh));
        assert_eq!(map_key_to_action(s, press(KeyCode::Char('?'))), Some(Action::ToggleHelp));
        assert_eq!(map_key_to_action(s, press(KeyCode::Esc)), Some(Action::Cancel));
    }

    #[test]
    fn quit_from_anywhere() {
        for screen in [Screen::Input, Screen::Loading, Screen::Displaying, Screen::Error] {
            assert_eq!(map_key_to_action(screen, press(KeyCode::Char('q'))), Some(Action::Quit));
            let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(map_key_to_action(screen, ctrl_c), Some(Action::Quit));
        }
    }

    #[test]
    fn key_releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key_to_action(Screen::Displaying, release), None);
    }
}
