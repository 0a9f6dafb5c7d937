//! Terminal render sink.
//!
//! A small game-oriented rendering layer: the pure [`GameView`] paints an
//! engine snapshot into a styled-character [`FrameBuffer`], and the
//! [`TerminalRenderer`] flushes frames to the terminal with changed-run
//! diffing. Only the renderer performs I/O, so the view is unit-testable.

pub mod fb;
pub mod renderer;
pub mod view;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb};
pub use renderer::TerminalRenderer;
pub use view::{GameView, Viewport};
