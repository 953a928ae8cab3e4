use folio_core::board::{all_tiles, Board, PuzzleImage, Quadrant, Side, Tile, TileSlot};
use folio_core::{PuzzleAction, PuzzleState};

fn tile(image: PuzzleImage, quadrant: Quadrant) -> Tile {
    Tile::new(image, quadrant)
}

fn canonical() -> Board {
    use PuzzleImage::*;
    use Quadrant::*;
    Board::new(
        vec![
            tile(Nebula, TopLeft),
            tile(Nebula, TopRight),
            tile(Galaxy, TopLeft),
            tile(Galaxy, TopRight),
            tile(Nebula, BottomLeft),
            tile(Nebula, BottomRight),
            tile(Galaxy, BottomLeft),
            tile(Galaxy, BottomRight),
        ],
        vec![
            tile(Aurora, TopLeft),
            tile(Aurora, TopRight),
            tile(Comet, TopLeft),
            tile(Comet, TopRight),
            tile(Aurora, BottomLeft),
            tile(Aurora, BottomRight),
            tile(Comet, BottomLeft),
            tile(Comet, BottomRight),
        ],
    )
}

#[test]
fn canonical_layout_is_complete() {
    let board = canonical();
    assert!(board.is_complete());
    assert_eq!(board, Board::solved());
}

#[test]
fn any_cross_block_swap_breaks_completion() {
    let base = canonical();
    for a in 0..16 {
        for b in 0..16 {
            let mut board = base.clone();
            let slot = |index: usize| {
                if index < 8 {
                    TileSlot::new(Side::Left, index)
                } else {
                    TileSlot::new(Side::Right, index - 8)
                }
            };
            let tile_a = board.tile_at(slot(a)).expect("tile a");
            let tile_b = board.tile_at(slot(b)).expect("tile b");
            if tile_a.image == tile_b.image {
                continue;
            }
            assert!(board.swap(slot(a), slot(b)));
            assert!(
                !board.is_complete(),
                "swapping {tile_a} with {tile_b} still reported complete"
            );
        }
    }
}

#[test]
fn quadrants_out_of_place_inside_a_block_still_count() {
    let mut board = canonical();
    let nebula_tl = tile(PuzzleImage::Nebula, Quadrant::TopLeft);
    let nebula_br = tile(PuzzleImage::Nebula, Quadrant::BottomRight);
    assert!(board.swap_tiles(nebula_tl, nebula_br));
    assert!(board.is_complete());
}

#[test]
fn solve_completes_any_arrangement() {
    for seed in 0..64u32 {
        let mut board = Board::scrambled(seed);
        assert!(board.solve(), "seed {seed} did not solve");
        assert!(board.is_complete());
        assert_eq!(board.left().len(), 8);
        assert_eq!(board.right().len(), 8);
    }
}

#[test]
fn solve_from_lopsided_containers() {
    let tiles = all_tiles();
    let mut board = Board::new(tiles[..3].to_vec(), tiles[3..].to_vec());
    assert!(board.solve());
    assert_eq!(board, Board::solved());
}

#[test]
fn swap_twice_restores_positions() {
    let original = Board::scrambled(42);
    let mut board = original.clone();
    let a = TileSlot::new(Side::Left, 1);
    let b = TileSlot::new(Side::Right, 6);
    assert!(board.swap(a, b));
    assert_ne!(board, original);
    assert!(board.swap(a, b));
    assert_eq!(board, original);
}

#[test]
fn swap_with_self_is_noop() {
    let mut board = Board::scrambled(3);
    let before = board.clone();
    let slot = TileSlot::new(Side::Right, 2);
    assert!(!board.swap(slot, slot));
    let tile = board.tile_at(slot).expect("tile");
    assert!(!board.swap_tiles(tile, tile));
    assert_eq!(board, before);
}

#[test]
fn swap_crosses_containers() {
    let mut board = canonical();
    let nebula = tile(PuzzleImage::Nebula, Quadrant::TopLeft);
    let comet = tile(PuzzleImage::Comet, Quadrant::BottomRight);
    assert!(board.swap_tiles(nebula, comet));
    assert_eq!(board.left()[0], comet);
    assert_eq!(board.right()[7], nebula);
}

#[test]
fn missing_tiles_never_complete() {
    let mut tiles = all_tiles();
    tiles.pop();
    let mut board = Board::from_sequence(tiles);
    board.solve();
    assert!(!board.is_complete());
    assert_eq!(board.solved_images().len(), 3);
}

#[test]
fn duplicate_tiles_never_complete() {
    let mut tiles = all_tiles();
    tiles[1] = tiles[0];
    let mut board = Board::from_sequence(tiles);
    board.solve();
    assert!(!board.is_complete());
    assert!(!board.solved_images().contains(&PuzzleImage::Nebula));
}

#[test]
fn drop_without_drag_is_ignored() {
    let mut state = PuzzleState::new(Board::scrambled(9));
    let before = state.board.clone();
    let target = before.tile_at(TileSlot::new(Side::Left, 0)).expect("tile");
    let outcome = state.apply(PuzzleAction::DropOn { tile: target });
    assert!(!outcome.moved);
    assert_eq!(state.board, before);
}

#[test]
fn drop_resolves_positions_at_drop_time() {
    let mut state = PuzzleState::new(canonical());
    let dragged = tile(PuzzleImage::Nebula, Quadrant::TopLeft);
    let target = tile(PuzzleImage::Comet, Quadrant::TopLeft);
    state.apply(PuzzleAction::BeginDrag { tile: dragged });
    // the board changes under the drag
    let other = tile(PuzzleImage::Galaxy, Quadrant::TopLeft);
    state.board.swap_tiles(dragged, other);
    let outcome = state.apply(PuzzleAction::DropOn { tile: target });
    assert!(outcome.moved);
    assert_eq!(state.board.slot_of(dragged), Some(TileSlot::new(Side::Right, 2)));
    assert_eq!(state.board.slot_of(target), Some(TileSlot::new(Side::Left, 2)));
    assert_eq!(state.dragging, None);
}

#[test]
fn completion_is_announced_once() {
    let mut state = PuzzleState::new(canonical());
    let a = tile(PuzzleImage::Nebula, Quadrant::TopLeft);
    let b = tile(PuzzleImage::Galaxy, Quadrant::TopLeft);

    state.apply(PuzzleAction::BeginDrag { tile: a });
    let broken = state.apply(PuzzleAction::DropOn { tile: b });
    assert!(broken.moved);
    assert!(!broken.complete);

    state.apply(PuzzleAction::BeginDrag { tile: b });
    let fixed = state.apply(PuzzleAction::DropOn { tile: a });
    assert!(fixed.complete);
    assert!(fixed.just_completed);

    let again = state.apply(PuzzleAction::Solve);
    assert!(again.complete);
    assert!(!again.just_completed);
}

#[test]
fn solve_action_clears_drag() {
    let mut state = PuzzleState::new(Board::scrambled(11));
    let tile = state.board.tile_at(TileSlot::new(Side::Left, 0)).expect("tile");
    state.apply(PuzzleAction::BeginDrag { tile });
    let outcome = state.apply(PuzzleAction::Solve);
    assert!(outcome.complete);
    assert_eq!(state.dragging, None);
}
