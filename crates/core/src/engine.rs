//! The board/piece engine: one explicit instance, no globals.
//!
//! The engine owns the board, the active and queued pieces, and the session
//! counters, and advances under an externally driven tick. All operations
//! are synchronous and run to completion; invalid moves and rotations
//! degrade to no-ops rather than erroring, and game-over is a reported
//! phase transition, not an error.

use blockfall_types::{Command, GamePhase, PieceKind};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::{PieceSource, UniformPieces};
use crate::scoring;
use crate::snapshot::Snapshot;

/// Wall-kick column offsets tried when a rotation collides in place.
/// Offset 0 is the in-place attempt; the first non-colliding offset wins.
const ROTATION_KICKS: [i8; 5] = [0, -1, 1, -2, 2];

/// Complete engine state.
pub struct Engine {
    board: Board,
    active: Option<Piece>,
    queued: PieceKind,
    pieces: Box<dyn PieceSource>,
    phase: GamePhase,
    score: u32,
    level: u32,
    lines: u32,
    fall_timer_ms: u32,
}

impl Engine {
    /// Engine with the default uniform piece source for `seed`.
    pub fn new(seed: u32) -> Self {
        Self::with_source(Box::new(UniformPieces::new(seed)))
    }

    /// Engine with an injected piece source (scripted sequences in tests).
    pub fn with_source(mut pieces: Box<dyn PieceSource>) -> Self {
        let queued = pieces.next_piece();
        Self {
            board: Board::new(),
            active: None,
            queued,
            pieces,
            phase: GamePhase::Idle,
            score: 0,
            level: 1,
            lines: 0,
            fall_timer_ms: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for integration tests and scenario tooling.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn queued(&self) -> PieceKind {
        self.queued
    }

    /// Current gravity interval, derived from the level.
    pub fn fall_interval_ms(&self) -> u32 {
        scoring::fall_interval_ms(self.level)
    }

    /// `Idle -> Running`: spawn the first piece and arm the fall timer.
    pub fn start(&mut self) {
        if self.phase != GamePhase::Idle {
            return;
        }
        self.phase = GamePhase::Running;
        self.fall_timer_ms = 0;
        self.spawn();
    }

    /// Any phase -> `Idle`: empty board, counters reset, fresh queue.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = None;
        self.queued = self.pieces.next_piece();
        self.phase = GamePhase::Idle;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.fall_timer_ms = 0;
    }

    /// `Running <-> Paused`; no-op in other phases.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            other => other,
        };
    }

    /// Promote the queued piece to active at the spawn position and draw a
    /// replacement. A spawn that immediately overlaps filled cells is the
    /// terminal game-over: the board is left untouched and no active piece
    /// remains.
    pub fn spawn(&mut self) -> bool {
        let kind = self.queued;
        self.queued = self.pieces.next_piece();

        let piece = Piece::at_spawn(kind);
        if self.board.collides(&piece.shape, piece.x, piece.y) {
            self.active = None;
            self.phase = GamePhase::GameOver;
            return false;
        }
        self.active = Some(piece);
        true
    }

    /// Would the active piece collide after shifting by `(dx, dy)`?
    pub fn collides(&self, piece: &Piece, dx: i8, dy: i8) -> bool {
        self.board.collides(&piece.shape, piece.x + dx, piece.y + dy)
    }

    /// Shift the active piece horizontally; rejected shifts leave the
    /// position unchanged.
    pub fn move_horizontal(&mut self, dx: i8) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        if self.collides(&piece, dx, 0) {
            return false;
        }
        self.active = Some(Piece {
            x: piece.x + dx,
            ..piece
        });
        true
    }

    /// Rotate the active piece 90 degrees clockwise, kicking off walls.
    ///
    /// The rotated shape is tried in place, then at the kick offsets in
    /// order; when every placement collides the rotation is rejected and
    /// the piece is retained unchanged.
    pub fn rotate(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        let rotated = piece.shape.rotated_cw();
        for kick in ROTATION_KICKS {
            if !self.board.collides(&rotated, piece.x + kick, piece.y) {
                self.active = Some(Piece {
                    shape: rotated,
                    x: piece.x + kick,
                    ..piece
                });
                return true;
            }
        }
        false
    }

    /// One gravity step: shift the active piece down a row, or lock it when
    /// the row below is blocked. Returns true while the piece is still
    /// falling.
    pub fn soft_drop(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        if self.collides(&piece, 0, 1) {
            self.lock_active();
            return false;
        }
        self.active = Some(Piece {
            y: piece.y + 1,
            ..piece
        });
        true
    }

    /// Drop the active piece to its resting row and lock it immediately.
    /// Returns the number of rows descended; each row earns a small bonus.
    pub fn hard_drop(&mut self) -> u32 {
        if self.phase != GamePhase::Running {
            return 0;
        }
        let Some(mut piece) = self.active else {
            return 0;
        };
        let mut rows = 0u32;
        while !self.board.collides(&piece.shape, piece.x, piece.y + 1) {
            piece.y += 1;
            rows += 1;
        }
        self.active = Some(piece);
        self.score += scoring::hard_drop_score(rows);
        self.lock_active();
        rows
    }

    /// Commit the active piece to the board, clear full rows, update the
    /// counters, and spawn the next piece.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.board.lock(&piece.shape, piece.x, piece.y, piece.kind);

        let cleared = self.board.clear_lines().len() as u32;
        if cleared > 0 {
            // Score at the level in effect when the clear happens, then
            // advance the counters.
            self.score += scoring::line_clear_score(cleared, self.level);
            self.lines += cleared;
            self.level = scoring::level_for_lines(self.lines);
        }

        self.fall_timer_ms = 0;
        self.spawn();
    }

    /// Advance the fall timer by `elapsed_ms`; performs one gravity step
    /// when the interval elapses. Ticks are ignored outside `Running`, so
    /// pausing simply stops time.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.fall_timer_ms += elapsed_ms;
        if self.fall_timer_ms < self.fall_interval_ms() {
            return false;
        }
        self.fall_timer_ms = 0;
        self.soft_drop();
        true
    }

    /// Apply a discrete input command. Returns whether it had an effect.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_horizontal(-1),
            Command::MoveRight => self.move_horizontal(1),
            Command::Rotate => self.rotate(),
            Command::SoftDrop => self.soft_drop(),
            Command::HardDrop => {
                if self.phase != GamePhase::Running {
                    return false;
                }
                self.hard_drop();
                true
            }
            Command::Pause => {
                let before = self.phase;
                self.toggle_pause();
                self.phase != before
            }
            Command::Start => {
                if self.phase != GamePhase::Idle {
                    return false;
                }
                self.start();
                true
            }
            Command::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Refresh a caller-owned snapshot in place (allocation-free per frame).
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        self.board.write_id_grid(&mut out.board);
        out.active = self.active.map(Into::into);
        out.queued = self.queued;
        out.phase = self.phase;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.fall_interval_ms = self.fall_interval_ms();
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}
