//! Rendering a live game through the facade, without a terminal

use crossterm::style::Color;
use tick_tetris::core::{GameState, SequenceSource};
use tick_tetris::term::{encode_full, Canvas, GameView, Screen, Viewport};
use tick_tetris::types::{Move, PieceKind};

#[test]
fn test_locked_piece_drawn_at_bottom() {
    let mut game = GameState::init(22, 10, SequenceSource::repeat(PieceKind::I)).unwrap();
    game.tick(Move::Drop);

    let mut canvas = Canvas::new(0, 0);
    let view = GameView::new();
    view.render(&game, Screen::Play, GameView::size(22, 10), &mut canvas);

    // Flat I at row 21, columns 3-6; board row r is canvas row r + 1
    for x in 7..15 {
        assert_eq!(canvas.get(x, 22).unwrap().style.bg, Color::Cyan, "x = {}", x);
    }
    assert_eq!(canvas.get(5, 22).unwrap().style.bg, Color::Reset);
}

#[test]
fn test_view_centres_in_larger_terminal() {
    let game = GameState::init(22, 10, SequenceSource::repeat(PieceKind::O)).unwrap();
    let mut canvas = Canvas::new(0, 0);
    GameView::new().render(&game, Screen::Play, Viewport::new(80, 30), &mut canvas);

    assert_eq!(canvas.width(), 80);
    assert_eq!(canvas.get(22, 3).unwrap().ch, '┌');
}

#[test]
fn test_frame_encodes_to_terminal_bytes() {
    let game = GameState::init(22, 10, SequenceSource::repeat(PieceKind::O)).unwrap();
    let mut canvas = Canvas::new(0, 0);
    GameView::new().render(&game, Screen::Paused, GameView::size(22, 10), &mut canvas);

    let mut out = Vec::new();
    encode_full(&canvas, &mut out).unwrap();
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("PAUSED"));
    assert!(text.contains("Score"));
}
