//! Keyboard adapter (engine-facing).
//!
//! Maps `crossterm` key events into engine [`Command`](blockfall_types::Command)s.
//! The engine never sees a key event; the binary's event loop is the thin
//! adapter that forwards commands.

pub mod map;

pub use blockfall_types as types;

pub use map::{map_key_event, should_quit};
