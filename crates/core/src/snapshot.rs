//! Read-only state export for render sinks.
//!
//! Collaborators consume one [`Snapshot`] per tick and never touch the
//! engine directly. The snapshot is a plain value: the engine refreshes a
//! caller-owned instance in place so the per-frame path stays
//! allocation-free.

use blockfall_types::{GamePhase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::piece::{spawn_shape, Piece, Shape};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The active piece as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActivePiece {
    fn from(piece: Piece) -> Self {
        Self {
            kind: piece.kind,
            shape: piece.shape,
            x: piece.x,
            y: piece.y,
        }
    }
}

/// One frame of engine state: board grid as cell ids (0 = empty), the
/// active and queued pieces, phase, and session counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub board: [[u8; WIDTH]; HEIGHT],
    pub active: Option<ActivePiece>,
    pub queued: PieceKind,
    pub phase: GamePhase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
}

impl Snapshot {
    /// Spawn-orientation shape of the queued piece, for preview boxes.
    pub fn queued_shape(&self) -> Shape {
        spawn_shape(self.queued)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; WIDTH]; HEIGHT],
            active: None,
            queued: PieceKind::I,
            phase: GamePhase::Idle,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: 0,
        }
    }
}
