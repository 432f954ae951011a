use tui_blockfall::core::{GameState, Tetromino};
use tui_blockfall::term::{color_rgb, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::{GameAction, PieceColor, PieceKind, Rotation};

fn bar_at(x: i8, y: i8) -> Tetromino {
    Tetromino {
        kind: PieceKind::I,
        color: PieceColor::Blue,
        rotation: Rotation::North,
        x,
        y,
    }
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // cell_w=2, cell_h=1: 10*2 by 20*1 board plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[19][0] = Some(PieceColor::Red);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let left = fb.get(1, 20).unwrap();
    let right = fb.get(2, 20).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, color_rgb(PieceColor::Red));
    assert_eq!(fb.get(3, 20).unwrap().ch, ' ');
}

#[test]
fn term_view_centers_board_in_large_viewport() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(80, 30));

    // (80 - 22) / 2 = 29, (30 - 22) / 2 = 4
    assert_eq!(fb.get(29, 4).unwrap().ch, '┌');
    assert_eq!(fb.get(50, 25).unwrap().ch, '┘');
}

#[test]
fn term_view_side_panel_shows_score() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 4200;
    snap.level = 3;
    let fb = GameView::default().render(&snap, Viewport::new(80, 30));

    let text = fb.to_text();
    assert!(text.contains("SCORE"));
    assert!(text.contains("4200"));
    assert!(text.contains("LEVEL"));
    assert!(text.contains("LINES"));
}

#[test]
fn term_view_overlays_pause_and_game_over() {
    let mut state = GameState::new(1);
    state.set_active(bar_at(4, 10));
    state.apply_action(GameAction::Pause);
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(80, 30));
    assert!(fb.to_text().contains("PAUSED"));

    let mut snap = state.snapshot();
    snap.game_over = true;
    let fb = GameView::default().render(&snap, Viewport::new(80, 30));
    let text = fb.to_text();
    assert!(text.contains("GAME OVER"));
    assert!(!text.contains("PAUSED"));
}

#[test]
fn term_view_render_into_matches_render() {
    let mut state = GameState::new(9);
    state.set_active(bar_at(2, 7));
    let snap = state.snapshot();
    let view = GameView::default();

    let mut fb = FrameBuffer::new(3, 3);
    view.render_into(&snap, Viewport::new(40, 24), &mut fb);
    assert_eq!(fb, view.render(&snap, Viewport::new(40, 24)));
}

#[test]
fn renderer_redraws_fully_after_invalidate() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();
    let mut renderer = TerminalRenderer::with_writer(Vec::new());

    let mut fb = view.render(&snap, Viewport::new(30, 24));
    renderer.draw_swap(&mut fb).unwrap();
    let first = renderer.writer().len();

    view.render_into(&snap, Viewport::new(30, 24), &mut fb);
    renderer.draw_swap(&mut fb).unwrap();
    let second = renderer.writer().len() - first;

    renderer.invalidate();
    view.render_into(&snap, Viewport::new(30, 24), &mut fb);
    renderer.draw_swap(&mut fb).unwrap();
    let third = renderer.writer().len() - first - second;

    assert!(second < first);
    assert_eq!(third, first);
}
