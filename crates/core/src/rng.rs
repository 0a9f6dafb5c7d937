//! Piece randomization.
//!
//! Piece selection is uniform over the seven kinds and flows through the
//! [`PieceSource`] seam so tests (and replays) can substitute a scripted
//! sequence. The default source is a seeded LCG: the same seed reproduces
//! the same game.

use blockfall_types::PieceKind;

/// Simple LCG using the Numerical Recipes constants.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed 0 would lock the low bits; substitute 1.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform-ish value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Where the engine gets its next queued piece from.
pub trait PieceSource {
    fn next_piece(&mut self) -> PieceKind;
}

/// Uniformly random pieces from a seeded [`SimpleRng`].
#[derive(Debug, Clone)]
pub struct UniformPieces {
    rng: SimpleRng,
}

impl UniformPieces {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl PieceSource for UniformPieces {
    fn next_piece(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

/// Replays a fixed sequence of kinds, cycling when exhausted.
///
/// Intended for tests and deterministic replays.
#[derive(Debug, Clone)]
pub struct ScriptedPieces {
    sequence: Vec<PieceKind>,
    next: usize,
}

impl ScriptedPieces {
    /// Panics when `sequence` is empty.
    pub fn new(sequence: Vec<PieceKind>) -> Self {
        assert!(!sequence.is_empty(), "scripted sequence must be non-empty");
        Self { sequence, next: 0 }
    }
}

impl PieceSource for ScriptedPieces {
    fn next_piece(&mut self) -> PieceKind {
        let kind = self.sequence[self.next];
        self.next = (self.next + 1) % self.sequence.len();
        kind
    }
}
