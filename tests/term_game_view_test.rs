use tui_2048::core::{Board, GameState};
use tui_2048::term::{GameView, Palette, SpawnEffect, TileLayout, Viewport};

fn all_text(fb: &tui_2048::term::FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n")
}

#[test]
fn term_view_renders_header_and_score() {
    let mut state = GameState::from_board(Board::from_rows(&[[2u64, 2], [0, 0]]).unwrap(), 1);
    state.slide(tui_2048::types::Direction::Left);
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(80, 24));

    let text = all_text(&fb);
    assert!(text.contains("2048"));
    assert!(text.contains("SCORE 4"));
    assert!(text.contains("HOW TO PLAY"));
}

#[test]
fn term_view_draws_tile_values_with_palette_colour() {
    let board =
        Board::from_rows(&[[0u64, 0, 0, 0], [0, 128, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap();
    let snap = GameState::from_board(board, 1).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap, vp);

    // 4x4 large layout: grid 33x17, header 4 rows, block 24 rows => top 0.
    let layout = TileLayout::LARGE;
    let left = (80 - layout.grid_w(4)) / 2;
    let (ox, oy) = layout.tile_origin(1, 1);
    let (x, y) = (left + ox, 4 + oy);

    let corner = fb.get(x, y).unwrap();
    assert_eq!(corner.style.bg, Palette::default().tile(128));
    assert!(fb.row_text(y + 1).contains("128"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let board = Board::from_rows(&[[2u64, 4], [4, 2]]).unwrap();
    let snap = GameState::from_board(board, 1).snapshot();
    assert!(snap.game_over());
    let text = all_text(&GameView::default().render(&snap, Viewport::new(80, 24)));
    assert!(text.contains("Game Over!"));
    assert!(text.contains("Final Score: 0"));
}

#[test]
fn term_view_shrinks_tile_during_spawn_effect() {
    let board = Board::from_rows(&[[2u64, 0], [0, 0]]).unwrap();
    let snap = GameState::from_board(board, 1).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    let full = view.render(&snap, vp);
    let effect = SpawnEffect { pos: (0, 0), progress: 0.0 };
    let grown = view.render_with_effect(&snap, Some(&effect), vp);
    assert_ne!(full, grown);

    let palette = Palette::default();
    let count = |fb: &tui_2048::term::FrameBuffer| {
        (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get(x, y).unwrap().style.bg == palette.tile(2))
            .count()
    };
    assert!(count(&grown) < count(&full));

    // A finished effect renders like no effect at all.
    let done = SpawnEffect { pos: (0, 0), progress: 1.0 };
    assert_eq!(view.render_with_effect(&snap, Some(&done), vp), full);
}

#[test]
fn term_view_compacts_large_grids() {
    let state = GameState::with_seed(8, 3).unwrap();
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(80, 24));
    assert_eq!(fb.width(), 80);
    assert_eq!(fb.height(), 24);
    assert!(all_text(&fb).contains("SCORE 0"));
}
