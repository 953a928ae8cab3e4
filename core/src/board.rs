use std::collections::BTreeSet;
use std::fmt;

pub const GRID_COLS: usize = 4;
pub const TILE_COUNT: usize = PuzzleImage::ALL.len() * Quadrant::ALL.len();
pub const DEFAULT_SCRAMBLE_SEED: u32 = 0x5EED_0F16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Quadrant::TopLeft => "top-left",
            Quadrant::TopRight => "top-right",
            Quadrant::BottomLeft => "bottom-left",
            Quadrant::BottomRight => "bottom-right",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|quadrant| quadrant.as_str().eq_ignore_ascii_case(trimmed))
    }

    /// (row, col) inside the image's 2x2 block.
    pub fn offset(self) -> (usize, usize) {
        match self {
            Quadrant::TopLeft => (0, 0),
            Quadrant::TopRight => (0, 1),
            Quadrant::BottomLeft => (1, 0),
            Quadrant::BottomRight => (1, 1),
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PuzzleImage {
    Nebula,
    Galaxy,
    Aurora,
    Comet,
}

impl PuzzleImage {
    pub const ALL: [PuzzleImage; 4] = [
        PuzzleImage::Nebula,
        PuzzleImage::Galaxy,
        PuzzleImage::Aurora,
        PuzzleImage::Comet,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            PuzzleImage::Nebula => "nebula",
            PuzzleImage::Galaxy => "galaxy",
            PuzzleImage::Aurora => "aurora",
            PuzzleImage::Comet => "comet",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PuzzleImage::Nebula => "Nebula",
            PuzzleImage::Galaxy => "Galaxy",
            PuzzleImage::Aurora => "Aurora",
            PuzzleImage::Comet => "Comet",
        }
    }

    pub fn src(self) -> &'static str {
        match self {
            PuzzleImage::Nebula => "pictures/puzzle/nebula.jpg",
            PuzzleImage::Galaxy => "pictures/puzzle/galaxy.jpg",
            PuzzleImage::Aurora => "pictures/puzzle/aurora.jpg",
            PuzzleImage::Comet => "pictures/puzzle/comet.jpg",
        }
    }

    pub fn by_slug(slug: &str) -> Option<Self> {
        let trimmed = slug.trim();
        Self::ALL
            .into_iter()
            .find(|image| image.slug().eq_ignore_ascii_case(trimmed))
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile {
    pub image: PuzzleImage,
    pub quadrant: Quadrant,
}

impl Tile {
    pub fn new(image: PuzzleImage, quadrant: Quadrant) -> Self {
        Self { image, quadrant }
    }

    /// Reads a tile back from its `data-image` / `data-position` attributes.
    pub fn from_attrs(image: &str, position: &str) -> Option<Self> {
        Some(Self::new(PuzzleImage::by_slug(image)?, Quadrant::parse(position)?))
    }

    /// Row-major index this tile occupies once the board is solved. Images
    /// fill 2x2 blocks left to right, top to bottom.
    pub fn solved_index(self) -> usize {
        let blocks_per_row = GRID_COLS / 2;
        let block = self.image.index();
        let (dr, dc) = self.quadrant.offset();
        let row = (block / blocks_per_row) * 2 + dr;
        let col = (block % blocks_per_row) * 2 + dc;
        row * GRID_COLS + col
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.image.slug(), self.quadrant)
    }
}

pub fn all_tiles() -> Vec<Tile> {
    PuzzleImage::ALL
        .iter()
        .flat_map(|image| Quadrant::ALL.iter().map(move |quadrant| Tile::new(*image, *quadrant)))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn container_class(self) -> &'static str {
        match self {
            Side::Left => "puzzle-left",
            Side::Right => "puzzle-right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileSlot {
    pub side: Side,
    pub index: usize,
}

impl TileSlot {
    pub fn new(side: Side, index: usize) -> Self {
        Self { side, index }
    }
}

/// Two ordered tile containers read as one row-major grid `GRID_COLS` wide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    left: Vec<Tile>,
    right: Vec<Tile>,
}

impl Board {
    pub fn new(left: Vec<Tile>, right: Vec<Tile>) -> Self {
        Self { left, right }
    }

    /// Splits `tiles` in order, the first half going to the left container.
    pub fn from_sequence(mut tiles: Vec<Tile>) -> Self {
        let right = tiles.split_off(tiles.len().div_ceil(2));
        Self { left: tiles, right }
    }

    pub fn solved() -> Self {
        let mut board = Self::from_sequence(all_tiles());
        board.solve();
        board
    }

    /// Deterministic Fisher-Yates shuffle of the full tile set.
    pub fn scrambled(seed: u32) -> Self {
        let mut tiles = all_tiles();
        for i in (1..tiles.len()).rev() {
            let j = (splitmix32(seed ^ (i as u32).wrapping_mul(0x9E37_79B9)) as usize) % (i + 1);
            tiles.swap(i, j);
        }
        Self::from_sequence(tiles)
    }

    pub fn left(&self) -> &[Tile] {
        &self.left
    }

    pub fn right(&self) -> &[Tile] {
        &self.right
    }

    pub fn side(&self, side: Side) -> &[Tile] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rows(&self) -> usize {
        self.len().div_ceil(GRID_COLS)
    }

    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.left.iter().chain(self.right.iter()).copied()
    }

    pub fn tile_at(&self, slot: TileSlot) -> Option<Tile> {
        self.side(slot.side).get(slot.index).copied()
    }

    /// Row-major cell, reading the left container first.
    pub fn cell(&self, row: usize, col: usize) -> Option<Tile> {
        if col >= GRID_COLS {
            return None;
        }
        let index = row * GRID_COLS + col;
        if index < self.left.len() {
            self.left.get(index).copied()
        } else {
            self.right.get(index - self.left.len()).copied()
        }
    }

    pub fn slot_of(&self, tile: Tile) -> Option<TileSlot> {
        if let Some(index) = self.left.iter().position(|t| *t == tile) {
            return Some(TileSlot::new(Side::Left, index));
        }
        self.right
            .iter()
            .position(|t| *t == tile)
            .map(|index| TileSlot::new(Side::Right, index))
    }

    fn slot_mut(&mut self, slot: TileSlot) -> Option<&mut Tile> {
        match slot.side {
            Side::Left => self.left.get_mut(slot.index),
            Side::Right => self.right.get_mut(slot.index),
        }
    }

    /// Exchanges the tiles in two slots. Returns false when the slots are the
    /// same or either is out of range.
    pub fn swap(&mut self, a: TileSlot, b: TileSlot) -> bool {
        if a == b {
            return false;
        }
        let (Some(tile_a), Some(tile_b)) = (self.tile_at(a), self.tile_at(b)) else {
            return false;
        };
        if let Some(cell) = self.slot_mut(a) {
            *cell = tile_b;
        }
        if let Some(cell) = self.slot_mut(b) {
            *cell = tile_a;
        }
        true
    }

    /// Swaps two tiles wherever they currently sit.
    pub fn swap_tiles(&mut self, a: Tile, b: Tile) -> bool {
        if a == b {
            return false;
        }
        match (self.slot_of(a), self.slot_of(b)) {
            (Some(slot_a), Some(slot_b)) => self.swap(slot_a, slot_b),
            _ => false,
        }
    }

    /// Images whose four quadrants share an aligned 2x2 block. Every block
    /// anchor is scanned independently.
    pub fn solved_images(&self) -> BTreeSet<PuzzleImage> {
        let mut solved = BTreeSet::new();
        let rows = self.rows();
        for row in 0..rows.saturating_sub(1) {
            for col in 0..GRID_COLS - 1 {
                if let Some(image) = self.block_image(row, col) {
                    solved.insert(image);
                }
            }
        }
        solved
    }

    fn block_image(&self, row: usize, col: usize) -> Option<PuzzleImage> {
        let first = self.cell(row, col)?;
        let mut seen = 0u8;
        for (dr, dc) in Quadrant::ALL.map(Quadrant::offset) {
            let tile = self.cell(row + dr, col + dc)?;
            if tile.image != first.image {
                return None;
            }
            seen |= tile.quadrant.bit();
        }
        (seen.count_ones() as usize == Quadrant::ALL.len()).then_some(first.image)
    }

    pub fn is_complete(&self) -> bool {
        self.solved_images().len() == PuzzleImage::ALL.len()
    }

    /// Sorts every tile into its solved position and splits the sequence
    /// evenly across both containers.
    pub fn solve(&mut self) -> bool {
        let mut tiles: Vec<Tile> = self.tiles().collect();
        tiles.sort_by_key(|tile| tile.solved_index());
        *self = Self::from_sequence(tiles);
        self.is_complete()
    }
}

pub fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_index_covers_grid_once() {
        let mut seen = vec![false; TILE_COUNT];
        for tile in all_tiles() {
            let index = tile.solved_index();
            assert!(!seen[index], "{tile} collides at {index}");
            seen[index] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn quadrant_round_trips_through_attrs() {
        let tile = Tile::from_attrs("Galaxy", "bottom-left").expect("tile");
        assert_eq!(tile, Tile::new(PuzzleImage::Galaxy, Quadrant::BottomLeft));
        assert!(Tile::from_attrs("galaxy", "middle").is_none());
        assert!(Tile::from_attrs("moon", "top-left").is_none());
    }

    #[test]
    fn cell_reads_across_containers() {
        let board = Board::solved();
        assert_eq!(board.left().len(), 8);
        assert_eq!(board.right().len(), 8);
        assert_eq!(
            board.cell(2, 0),
            Some(Tile::new(PuzzleImage::Aurora, Quadrant::TopLeft))
        );
        assert_eq!(board.cell(0, GRID_COLS), None);
        assert_eq!(board.cell(4, 0), None);
    }

    #[test]
    fn scramble_is_deterministic_permutation() {
        let a = Board::scrambled(7);
        let b = Board::scrambled(7);
        assert_eq!(a, b);
        let mut tiles: Vec<Tile> = a.tiles().collect();
        tiles.sort();
        let mut expected = all_tiles();
        expected.sort();
        assert_eq!(tiles, expected);
    }

    #[test]
    fn swap_rejects_out_of_range() {
        let mut board = Board::solved();
        let before = board.clone();
        assert!(!board.swap(TileSlot::new(Side::Left, 0), TileSlot::new(Side::Right, 99)));
        assert_eq!(board, before);
    }
}
