//! Board module - the mine grid
//!
//! The board is a `rows x cols` grid of tiles stored row-major in a flat
//! vector. Coordinates are `(row, col)` with `row` growing downwards and `col`
//! growing to the right, both starting at 0.
//!
//! Structure is fixed once generated: mine placement and hint counts never
//! change, only the per-tile revealed/flagged state does.

use std::ops::Index;

use arrayvec::ArrayVec;
use rand::Rng;

use crate::tile::Tile;
use crate::types::{ConfigError, TileKind};

/// Neighbour offsets `{-1,0,1} x {-1,0,1}` without the centre
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: usize,
    cols: usize,
    mines: usize,
    /// Row-major (row * cols + col)
    tiles: Vec<Tile>,
}

impl Board {
    fn blank(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            mines: 0,
            tiles: vec![Tile::default(); rows * cols],
        }
    }

    /// Place `mines` mines uniformly at random, then derive the hints.
    ///
    /// Placement is rejection sampling: pick a random cell and retry when it
    /// already holds a mine.
    pub fn generate<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        mines: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        check_geometry(rows, cols, mines)?;

        let mut board = Self::blank(rows, cols);
        while board.mines < mines {
            let row = rng.gen_range(0..rows);
            let col = rng.gen_range(0..cols);
            board.place_mine(row, col);
        }
        board.compute_hints();
        Ok(board)
    }

    /// Build a board with mines at exactly the given coordinates.
    ///
    /// Duplicate coordinates count once.
    pub fn from_mines(
        rows: usize,
        cols: usize,
        mines: &[(usize, usize)],
    ) -> Result<Self, ConfigError> {
        check_geometry(rows, cols, mines.len())?;

        let mut board = Self::blank(rows, cols);
        for &(row, col) in mines {
            assert!(
                board.is_in_bounds(row, col),
                "mine ({row}, {col}) outside {rows}x{cols} board"
            );
            board.place_mine(row, col);
        }
        board.compute_hints();
        Ok(board)
    }

    fn place_mine(&mut self, row: usize, col: usize) -> bool {
        let idx = self.index_of(row, col);
        if self.tiles[idx].is_mine() {
            return false;
        }
        self.tiles[idx].set_kind(TileKind::Mine);
        self.mines += 1;
        true
    }

    fn compute_hints(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = self.index_of(row, col);
                if self.tiles[idx].is_mine() {
                    continue;
                }
                let count = self.neighbor_mine_count(row, col);
                self.tiles[idx].set_kind(TileKind::from_count(count));
            }
        }
    }

    #[inline(always)]
    fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn mine_count(&self) -> usize {
        self.mines
    }

    pub fn is_in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        if self.is_in_bounds(row, col) {
            Some(&self.tiles[self.index_of(row, col)])
        } else {
            None
        }
    }

    fn tile_mut(&mut self, row: usize, col: usize) -> &mut Tile {
        let idx = self.index_of(row, col);
        &mut self.tiles[idx]
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// In-bounds neighbours of `(row, col)`; fewer than 8 on edges and corners
    pub fn neighbors(&self, row: usize, col: usize) -> ArrayVec<(usize, usize), 8> {
        let mut out = ArrayVec::new();
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if self.is_in_bounds(r, c) {
                out.push((r, c));
            }
        }
        out
    }

    pub fn neighbor_mine_count(&self, row: usize, col: usize) -> u8 {
        self.neighbors(row, col)
            .iter()
            .filter(|&&(r, c)| self[(r, c)].is_mine())
            .count() as u8
    }

    /// Flood-fill reveal starting at `(row, col)`.
    ///
    /// Mines, flagged tiles and already revealed tiles are skipped without
    /// counting. Hint tiles are revealed but stop the cascade; empty tiles
    /// push all their neighbours. Returns the number of tiles this call
    /// newly revealed.
    pub fn reveal(&mut self, row: usize, col: usize) -> usize {
        let mut stack = vec![(row, col)];
        let mut revealed = 0;

        while let Some((r, c)) = stack.pop() {
            let tile = self.tile_mut(r, c);
            if tile.is_mine() || tile.is_flagged() || tile.is_revealed() {
                continue;
            }

            tile.set_revealed();
            revealed += 1;

            if tile.kind() != TileKind::Empty {
                continue;
            }

            stack.extend(self.neighbors(r, c));
        }

        revealed
    }

    /// Toggle the flag on a covered tile.
    ///
    /// Returns false (and does nothing) when the tile is already revealed.
    pub fn toggle_flag(&mut self, row: usize, col: usize) -> bool {
        let tile = self.tile_mut(row, col);
        if tile.is_revealed() {
            return false;
        }
        let flagged = tile.is_flagged();
        tile.set_flagged(!flagged);
        true
    }

    /// Blow up the mine at `(row, col)`.
    ///
    /// Uncovers every unflagged mine and every flag placed on a safe tile;
    /// correctly flagged mines stay covered.
    pub fn explode(&mut self, row: usize, col: usize) {
        let tile = self.tile_mut(row, col);
        tile.set_detonated();
        tile.set_revealed();

        for tile in &mut self.tiles {
            if tile.is_mine() != tile.is_flagged() {
                tile.set_revealed();
            }
        }
    }

    /// True once every non-mine tile is revealed
    pub fn all_safe_revealed(&self) -> bool {
        self.tiles
            .iter()
            .all(|tile| tile.is_mine() || tile.is_revealed())
    }

    /// Flag every tile that is still covered
    pub fn flag_remaining(&mut self) {
        for tile in self.tiles.iter_mut().filter(|t| !t.is_revealed()) {
            tile.set_flagged(true);
        }
    }

    pub fn revealed_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_revealed()).count()
    }

    /// The detonated mine, if any
    pub fn detonated(&self) -> Option<(usize, usize)> {
        self.tiles
            .iter()
            .position(|t| t.is_detonated())
            .map(|idx| (idx / self.cols, idx % self.cols))
    }
}

impl Index<(usize, usize)> for Board {
    type Output = Tile;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        self.get(row, col).unwrap_or_else(|| {
            panic!(
                "tile ({row}, {col}) is outside the {}x{} board",
                self.rows, self.cols
            )
        })
    }
}

fn check_geometry(rows: usize, cols: usize, mines: usize) -> Result<(), ConfigError> {
    if rows == 0 || cols == 0 {
        return Err(ConfigError::ZeroDimension);
    }
    let cells = rows * cols;
    if mines >= cells {
        return Err(ConfigError::TooManyMines { mines, cells });
    }
    Ok(())
}
