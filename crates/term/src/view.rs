//! GameView: draws a game into a [`Canvas`].
//!
//! Pure, no I/O. The board sits on the left, two terminal columns per cell,
//! with the next piece, held piece and score boxes stacked on its right.

use crossterm::style::Color;

use crate::canvas::{Canvas, Style};
use crate::core::{get_shape, GameState, Piece, PieceSource};
use crate::types::{Cell, PieceKind};

/// Terminal columns per board cell
pub const CELL_WIDTH: u16 = 2;

const PREVIEW_W: u16 = 4 * CELL_WIDTH + 2;
const PREVIEW_H: u16 = 6;
const SCORE_W: u16 = 12;
const SCORE_H: u16 = 8;
const PANEL_GAP: u16 = 2;

const BOSS_SCREEN: &str = "\
dev@build-07:~/reports/q3 $ ls -l
total 1184
drwxr-xr-x 2 dev staff    4096 Sep 30 16:41 .
drwxr-xr-x 5 dev staff    4096 Oct  1 08:12 ..
-rw-r--r-- 1 dev staff  212993 Sep 30 11:02 chart-revenue.svg
-rw-r--r-- 1 dev staff  187210 Sep 30 11:05 chart-costs.svg
-rw-r--r-- 1 dev staff   10342 Sep 30 15:57 summary.md
-rw-r--r-- 1 dev staff  733512 Sep 30 16:40 summary.pdf
-rw-r--r-- 1 dev staff   15021 Sep 30 16:39 tables.csv
dev@build-07:~/reports/q3 $ ";

/// What the frontend is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Play,
    Paused,
    /// Stand-in terminal listing, no trace of the game
    Boss,
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Colour of a locked or falling cell of `kind`
pub fn kind_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::J => Color::Blue,
        PieceKind::L => Color::White,
        PieceKind::O => Color::Yellow,
        PieceKind::S => Color::Green,
        PieceKind::T => Color::Magenta,
        PieceKind::Z => Color::Red,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Draw a landing hint under the falling piece
    pub ghost: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new()
    }
}

impl GameView {
    pub fn new() -> Self {
        Self { ghost: true }
    }

    /// Space a `rows x cols` game needs on screen, capped at `u16::MAX`
    pub fn size(rows: usize, cols: usize) -> Viewport {
        let (frame_w, frame_h) = frame_size(rows, cols);
        Viewport::new(
            frame_w.saturating_add(PANEL_GAP + SCORE_W),
            frame_h.max(2 * PREVIEW_H + SCORE_H),
        )
    }

    /// Redraw `canvas` from scratch for `game` on `screen`
    pub fn render<S: PieceSource>(
        &self,
        game: &GameState<S>,
        screen: Screen,
        viewport: Viewport,
        canvas: &mut Canvas,
    ) {
        canvas.resize(viewport.width, viewport.height);
        canvas.clear();

        if screen == Screen::Boss {
            for (y, line) in BOSS_SCREEN.lines().enumerate() {
                canvas.text(0, y as u16, line, Style::default());
            }
            return;
        }

        let needed = Self::size(game.rows(), game.cols());
        let ox = viewport.width.saturating_sub(needed.width) / 2;
        let oy = viewport.height.saturating_sub(needed.height) / 2;
        let (frame_w, frame_h) = frame_size(game.rows(), game.cols());

        let border = Style::default();
        canvas.frame(ox, oy, frame_w, frame_h, border);

        if screen == Screen::Paused {
            centered(canvas, ox, oy, frame_w, frame_h, "PAUSED", Style::default().bold());
        } else {
            self.draw_board(canvas, game, ox + 1, oy + 1);
        }

        let px = ox.saturating_add(frame_w).saturating_add(PANEL_GAP);
        if px < canvas.width() && px.checked_add(PREVIEW_W.max(SCORE_W)).is_some() {
            draw_preview(canvas, px, oy, "Next", Some(game.next_piece()));
            draw_preview(canvas, px, oy + PREVIEW_H, "Hold", game.held_piece());
            draw_score(canvas, px, oy + 2 * PREVIEW_H, game);
        }

        if !game.status().is_running() {
            let style = Style::new(Color::Red, Color::Reset).bold();
            centered(canvas, ox, oy, frame_w, frame_h, "GAME OVER", style);
        }
    }

    fn draw_board<S: PieceSource>(
        &self,
        canvas: &mut Canvas,
        game: &GameState<S>,
        x: u16,
        y: u16,
    ) {
        // Nothing past the canvas edge can show
        let rows = game.rows().min(usize::from(canvas.height()));
        let cols = game.cols().min(usize::from(canvas.width() / CELL_WIDTH));
        for row in 0..rows as i32 {
            for col in 0..cols as i32 {
                if let Ok(cell) = game.cell_at(row, col) {
                    if let Some(kind) = cell.kind() {
                        block(canvas, cell_x(x, col), y.saturating_add(row as u16), kind);
                    }
                }
            }
        }

        if !self.ghost || !game.status().is_running() {
            return;
        }
        let falling = game.falling_piece();
        let drop = game.ghost_row() - falling.origin.row;
        if drop <= 0 {
            return;
        }
        let style = Style::new(kind_color(falling.kind), Color::Reset).dim();
        for loc in falling.cells() {
            let (row, col) = (loc.row + drop, loc.col);
            if game.cell_at(row, col) == Ok(Cell::Empty) {
                let gy = y.saturating_add(u16::try_from(row).unwrap_or(u16::MAX));
                canvas.text(cell_x(x, col), gy, "░░", style);
            }
        }
    }
}

/// Outer frame of the board, two wider than the cells on each axis
fn frame_size(rows: usize, cols: usize) -> (u16, u16) {
    let rows = u16::try_from(rows).unwrap_or(u16::MAX);
    let cols = u16::try_from(cols).unwrap_or(u16::MAX);
    (
        cols.saturating_mul(CELL_WIDTH).saturating_add(2),
        rows.saturating_add(2),
    )
}

fn cell_x(x: u16, col: i32) -> u16 {
    let col = u16::try_from(col).unwrap_or(u16::MAX);
    x.saturating_add(col.saturating_mul(CELL_WIDTH))
}

fn block(canvas: &mut Canvas, x: u16, y: u16, kind: PieceKind) {
    let color = kind_color(kind);
    canvas.fill(x, y, CELL_WIDTH, 1, ' ', Style::new(color, color));
}

fn centered(canvas: &mut Canvas, x: u16, y: u16, w: u16, h: u16, text: &str, style: Style) {
    let len = text.chars().count() as u16;
    let tx = x.saturating_add(w.saturating_sub(len) / 2);
    canvas.text(tx, y.saturating_add(h / 2), text, style);
}

fn draw_preview(canvas: &mut Canvas, x: u16, y: u16, title: &str, piece: Option<&Piece>) {
    canvas.frame(x, y, PREVIEW_W, PREVIEW_H, Style::default());
    canvas.text(x + 1, y, title, Style::default().bold());
    let Some(piece) = piece else {
        return;
    };
    for loc in get_shape(piece.kind, piece.rotation) {
        let bx = x + 1 + loc.col as u16 * CELL_WIDTH;
        let by = y + 1 + loc.row as u16;
        block(canvas, bx, by, piece.kind);
    }
}

fn draw_score<S: PieceSource>(canvas: &mut Canvas, x: u16, y: u16, game: &GameState<S>) {
    canvas.frame(x, y, SCORE_W, SCORE_H, Style::default());
    let label = Style::default().bold();
    let rows = [
        ("Score", game.points()),
        ("Level", game.level()),
        ("Lines", game.lines_remaining()),
    ];
    for (i, (name, value)) in rows.into_iter().enumerate() {
        let ly = y + 1 + 2 * i as u16;
        canvas.text(x + 1, ly, name, label);
        canvas.text(x + 1, ly + 1, &value.to_string(), Style::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequenceSource;
    use crate::types::{Move, Status};

    fn game(kinds: &[PieceKind]) -> GameState<SequenceSource> {
        GameState::init(22, 10, SequenceSource::new(kinds.iter().copied())).unwrap()
    }

    fn render(game: &GameState<SequenceSource>, screen: Screen) -> Canvas {
        let mut canvas = Canvas::new(0, 0);
        GameView::new().render(game, screen, GameView::size(22, 10), &mut canvas);
        canvas
    }

    #[test]
    fn test_size_for_classic_board() {
        assert_eq!(GameView::size(22, 10), Viewport::new(36, 24));
    }

    #[test]
    fn test_size_saturates_for_huge_boards() {
        assert_eq!(
            GameView::size(usize::MAX, usize::MAX),
            Viewport::new(u16::MAX, u16::MAX)
        );
        assert_eq!(GameView::size(22, 40_000).width, u16::MAX);
    }

    #[test]
    fn test_wide_board_renders_clipped() {
        let state = GameState::init(22, 40_000, SequenceSource::repeat(PieceKind::O)).unwrap();
        let mut canvas = Canvas::new(0, 0);
        GameView::new().render(&state, Screen::Play, Viewport::new(80, 24), &mut canvas);

        assert_eq!(canvas.width(), 80);
        assert!(canvas.row_text(0).starts_with("┌──"));
    }

    #[test]
    fn test_board_cells_are_two_columns_wide() {
        let canvas = render(&game(&[PieceKind::O, PieceKind::T]), Screen::Play);

        // O spawns at row 0, columns 4 and 5
        for x in [9, 10, 11, 12] {
            let glyph = canvas.get(x, 1).unwrap();
            assert_eq!(glyph.style.bg, Color::Yellow, "x = {}", x);
        }
        assert_eq!(canvas.get(8, 1).unwrap().style.bg, Color::Reset);
        assert!(canvas.row_text(0).starts_with("┌────"));
    }

    #[test]
    fn test_ghost_marks_landing_row() {
        let canvas = render(&game(&[PieceKind::O]), Screen::Play);
        assert!(canvas.row_text(22).contains("░░░░"));
        assert!(canvas.row_text(21).contains("░░░░"));
        assert!(!canvas.row_text(20).contains('░'));
    }

    #[test]
    fn test_panels() {
        let mut state = game(&[PieceKind::T, PieceKind::I, PieceKind::S]);
        state.tick(Move::Hold);
        let canvas = render(&state, Screen::Play);

        assert!(canvas.row_text(0).contains("Next"));
        assert!(canvas.row_text(6).contains("Hold"));
        assert!(canvas.row_text(13).contains("Score"));
        assert!(canvas.row_text(15).contains("Level"));
        assert!(canvas.row_text(17).contains("Lines"));
        assert!(canvas.row_text(18).contains("10"));

        // Held T shows in the hold box: row 0 of its shape is columns 1-2
        let held = canvas.get(24 + 1 + 2, 7).unwrap();
        assert_eq!(held.style.bg, Color::Magenta);
    }

    #[test]
    fn test_pause_hides_board() {
        let canvas = render(&game(&[PieceKind::O]), Screen::Paused);
        assert!(canvas.row_text(12).contains("PAUSED"));
        assert_eq!(canvas.get(9, 1).unwrap().style.bg, Color::Reset);
    }

    #[test]
    fn test_boss_screen_shows_no_game() {
        let canvas = render(&game(&[PieceKind::O]), Screen::Boss);
        assert!(canvas.row_text(0).starts_with("dev@build-07"));
        for y in 0..canvas.height() {
            assert!(!canvas.row_text(y).contains('┌'));
        }
    }

    #[test]
    fn test_game_over_overlay() {
        let mut state = game(&[PieceKind::O]);
        while state.tick(Move::Drop) == Status::Running {}
        let canvas = render(&state, Screen::Play);
        assert!(canvas.row_text(12).contains("GAME OVER"));
    }
}
