//! Key mapping from terminal events to frontend commands.

use crate::types::Move;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the frontend to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Feed this move to the next engine tick
    Play(Move),
    Pause,
    /// Hide the board behind an innocent-looking screen
    Boss,
    Quit,
}

/// Map a key press to a command.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }

    let mv = match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Move::Left
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Move::Right
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Move::RotateClockwise,
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('z')
        | KeyCode::Char('Z') => Move::RotateCounterclockwise,

        // Actions
        KeyCode::Char(' ') => Move::Drop,
        KeyCode::Char('c') | KeyCode::Char('C') => Move::Hold,
        KeyCode::Char('p') | KeyCode::Char('P') => return Some(Command::Pause),
        KeyCode::Char('b') | KeyCode::Char('B') => return Some(Command::Boss),

        _ => return None,
    };
    Some(Command::Play(mv))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
