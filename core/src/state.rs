use crate::action::PuzzleAction;
use crate::board::{Board, Tile, DEFAULT_SCRAMBLE_SEED};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionOutcome {
    pub moved: bool,
    pub complete: bool,
    /// Set only on the action that turned an unsolved board into a solved one.
    pub just_completed: bool,
}

/// Puzzle state between events. A drag remembers which tile was picked up;
/// where it sits is looked up again when it is dropped, so at most one drag
/// is ever in flight and a reorder in between cannot corrupt the swap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleState {
    pub board: Board,
    pub dragging: Option<Tile>,
    pub solved: bool,
}

impl PuzzleState {
    pub fn new(board: Board) -> Self {
        let solved = board.is_complete();
        Self {
            board,
            dragging: None,
            solved,
        }
    }

    pub fn apply(&mut self, action: PuzzleAction) -> ActionOutcome {
        let moved = match action {
            PuzzleAction::BeginDrag { tile } => {
                self.dragging = Some(tile);
                false
            }
            PuzzleAction::CancelDrag => {
                self.dragging = None;
                false
            }
            PuzzleAction::DropOn { tile } => match self.dragging.take() {
                Some(source) => self.board.swap_tiles(source, tile),
                None => false,
            },
            PuzzleAction::Solve => {
                self.dragging = None;
                let before = self.board.clone();
                self.board.solve();
                self.board != before
            }
        };
        let was_solved = self.solved;
        if moved || matches!(action, PuzzleAction::Solve) {
            self.solved = self.board.is_complete();
        }
        ActionOutcome {
            moved,
            complete: self.solved,
            just_completed: self.solved && !was_solved,
        }
    }
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self::new(Board::scrambled(DEFAULT_SCRAMBLE_SEED))
    }
}
