use crate::board::Tile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleAction {
    BeginDrag { tile: Tile },
    DropOn { tile: Tile },
    CancelDrag,
    Solve,
}
