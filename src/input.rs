use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::snake::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
    Ignore,
}

pub fn command_for(key: &KeyEvent) -> Command {
    // Only presses steer; repeats and releases show up on some platforms
    if key.kind != KeyEventKind::Press {
        return Command::Ignore;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C')) {
        return Command::Quit;
    }

    match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Command::Turn(Direction::Up),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Command::Turn(Direction::Left),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Command::Turn(Direction::Down),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Command::Turn(Direction::Right),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        _ => Command::Ignore,
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
    fn test_arrow_keys() {
        assert_eq!(command_for(&press(KeyCode::Up)), Command::Turn(Direction::Up));
        assert_eq!(command_for(&press(KeyCode::Down)), Command::Turn(Direction::Down));
        assert_eq!(command_for(&press(KeyCode::Left)), Command::Turn(Direction::Left));
        assert_eq!(command_for(&press(KeyCode::Right)), Command::Turn(Direction::Right));
    }

    #[test]
    fn test_wasd_either_case() {
        assert_eq!(command_for(&press(KeyCode::Char('w'))), Command::Turn(Direction::Up));
        assert_eq!(command_for(&press(KeyCode::Char('A'))), Command::Turn(Direction::Left));
        assert_eq!(command_for(&press(KeyCode::Char('s'))), Command::Turn(Direction::Down));
        assert_eq!(command_for(&press(KeyCode::Char('D'))), Command::Turn(Direction::Right));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(command_for(&press(KeyCode::Esc)), Command::Quit);
        assert_eq!(command_for(&press(KeyCode::Char('q'))), Command::Quit);
        assert_eq!(command_for(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)), Command::Quit);
    }

    #[test]
    fn test_plain_c_is_ignored() {
        assert_eq!(command_for(&press(KeyCode::Char('c'))), Command::Ignore);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        assert_eq!(command_for(&press(KeyCode::Char('x'))), Command::Ignore);
        assert_eq!(command_for(&press(KeyCode::Enter)), Command::Ignore);
        assert_eq!(command_for(&press(KeyCode::F(1))), Command::Ignore);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(command_for(&release), Command::Ignore);
    }
}
