//! Core falling-block engine - pure, deterministic, and testable.
//!
//! This crate holds all game rules and state. It has zero dependencies on
//! UI, timers, or I/O:
//!
//! - **Deterministic**: the same seed (or scripted piece sequence) replays
//!   the same game.
//! - **Synchronous**: every operation runs to completion; an external loop
//!   drives gravity by calling [`Engine::tick`].
//! - **Self-contained**: collaborators see the engine only through
//!   [`Snapshot`] and [`Command`](blockfall_types::Command).
//!
//! # Module structure
//!
//! - [`board`]: 10x20 grid with collision, locking, and line clearing
//! - [`piece`]: shape matrices, clockwise rotation, spawn placement
//! - [`engine`]: the state machine tying board, pieces, and scoring together
//! - [`rng`]: seeded LCG and the injectable piece source
//! - [`scoring`]: score table, level curve, gravity interval
//! - [`snapshot`]: read-only per-frame state export
//!
//! # Example
//!
//! ```
//! use blockfall_core::Engine;
//! use blockfall_types::Command;
//!
//! let mut engine = Engine::new(12345);
//! engine.apply(Command::Start);
//! engine.apply(Command::MoveLeft);
//! engine.apply(Command::Rotate);
//! engine.apply(Command::HardDrop);
//! assert!(engine.score() > 0); // hard drop awards points per row
//! ```

pub mod board;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use engine::Engine;
pub use piece::{spawn_shape, Piece, Shape};
pub use rng::{PieceSource, ScriptedPieces, SimpleRng, UniformPieces};
pub use snapshot::{ActivePiece, Snapshot};
