//! Shape matrices and the active piece.
//!
//! A shape is a small 2D matrix of cell ids (0 = empty, nonzero = filled
//! with that kind's id). Rotation is the matrix transform itself: transpose
//! plus row reversal gives a 90-degree clockwise turn, so four rotations
//! always return the starting shape.

use blockfall_types::{PieceKind, BOARD_WIDTH};

/// Shape matrices never exceed 4x4.
pub const MAX_SHAPE_DIM: usize = 4;

/// A piece shape: an `rows x cols` id matrix stored in a fixed 4x4 backing
/// array. Only indices below `rows`/`cols` are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Cell id at (row, col); 0 when empty or out of the logical matrix.
    pub fn at(&self, row: usize, col: usize) -> u8 {
        if row >= self.rows as usize || col >= self.cols as usize {
            return 0;
        }
        self.cells[row][col]
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.at(row, col) != 0
    }

    /// The 90-degree clockwise rotation: transpose, then reverse each row.
    /// Dimensions swap, so a 1x4 bar becomes a 4x1 column.
    pub fn rotated_cw(&self) -> Shape {
        let rows = self.cols;
        let cols = self.rows;
        let mut cells = [[0u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for r in 0..rows as usize {
            for c in 0..cols as usize {
                cells[r][c] = self.cells[self.rows as usize - 1 - c][r];
            }
        }
        Shape { rows, cols, cells }
    }

    /// Iterate the filled cells as `(dx, dy)` offsets from the shape origin.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.cells[r][c] != 0)
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// Number of filled cells (4 for every tetromino).
    pub fn filled_count(&self) -> usize {
        self.filled_cells().count()
    }
}

const I_SPAWN: Shape = Shape {
    rows: 1,
    cols: 4,
    cells: [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]],
};

const J_SPAWN: Shape = Shape {
    rows: 2,
    cols: 3,
    cells: [[2, 0, 0, 0], [2, 2, 2, 0], [0; 4], [0; 4]],
};

const L_SPAWN: Shape = Shape {
    rows: 2,
    cols: 3,
    cells: [[0, 0, 3, 0], [3, 3, 3, 0], [0; 4], [0; 4]],
};

const O_SPAWN: Shape = Shape {
    rows: 2,
    cols: 2,
    cells: [[4, 4, 0, 0], [4, 4, 0, 0], [0; 4], [0; 4]],
};

const S_SPAWN: Shape = Shape {
    rows: 2,
    cols: 3,
    cells: [[0, 5, 5, 0], [5, 5, 0, 0], [0; 4], [0; 4]],
};

const T_SPAWN: Shape = Shape {
    rows: 2,
    cols: 3,
    cells: [[0, 6, 0, 0], [6, 6, 6, 0], [0; 4], [0; 4]],
};

const Z_SPAWN: Shape = Shape {
    rows: 2,
    cols: 3,
    cells: [[7, 7, 0, 0], [0, 7, 7, 0], [0; 4], [0; 4]],
};

/// Spawn-orientation shape for a piece kind.
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SPAWN,
        PieceKind::J => J_SPAWN,
        PieceKind::L => L_SPAWN,
        PieceKind::O => O_SPAWN,
        PieceKind::S => S_SPAWN,
        PieceKind::T => T_SPAWN,
        PieceKind::Z => Z_SPAWN,
    }
}

/// The active falling piece: a shape at a top-left grid position.
///
/// `(x, y)` may place part of the shape above the grid; rows with negative
/// board coordinates are treated as empty space by collision checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A fresh piece at the spawn position: row 0, horizontally centered
    /// for its shape width.
    pub fn at_spawn(kind: PieceKind) -> Self {
        let shape = spawn_shape(kind);
        let x = (BOARD_WIDTH / 2) as i8 - (shape.cols() / 2) as i8;
        Self {
            kind,
            shape,
            x,
            y: 0,
        }
    }

    /// Iterate the filled cells in board coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}
