//! Flushes framebuffers to a real terminal.
//!
//! Raw mode plus the alternate screen on enter; on draw, rows are diffed
//! against the previously flushed frame and only changed runs are written.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint everything (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Flush a frame, diffing against the previous one when shapes match.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let full = match &self.prev {
            Some(prev) => prev.width() != fb.width() || prev.height() != fb.height(),
            None => true,
        };

        if full {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let mut style: Option<Glyph> = None;
        for y in 0..fb.height() {
            let mut x = 0;
            while x < fb.width() {
                let next = fb.get(x, y).unwrap_or_default();
                let unchanged = !full
                    && self
                        .prev
                        .as_ref()
                        .and_then(|p| p.get(x, y))
                        .is_some_and(|prev| prev == next);
                if unchanged {
                    x += 1;
                    continue;
                }

                // Start of a changed run: move once, then stream glyphs.
                self.stdout.queue(cursor::MoveTo(x, y))?;
                while x < fb.width() {
                    let glyph = fb.get(x, y).unwrap_or_default();
                    let same = !full
                        && self
                            .prev
                            .as_ref()
                            .and_then(|p| p.get(x, y))
                            .is_some_and(|prev| prev == glyph);
                    if same {
                        break;
                    }
                    if style.map_or(true, |s| !same_style(&s, &glyph)) {
                        self.apply_style(&glyph)?;
                        style = Some(glyph);
                    }
                    self.stdout.queue(Print(glyph.ch))?;
                    x += 1;
                }
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        // Keep the flushed frame for diffing, reusing its allocation.
        match &mut self.prev {
            Some(prev) => prev.clone_from(fb),
            None => self.prev = Some(fb.clone()),
        }
        Ok(())
    }

    fn apply_style(&mut self, glyph: &Glyph) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout
            .queue(SetForegroundColor(to_color(glyph.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(to_color(glyph.bg)))?;
        if glyph.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if glyph.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn same_style(a: &Glyph, b: &Glyph) -> bool {
    a.fg == b.fg && a.bg == b.bg && a.bold == b.bold && a.dim == b.dim
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_comparison_ignores_the_character() {
        let a = Glyph::new('a', Rgb::new(1, 1, 1), Rgb::new(2, 2, 2));
        let b = a.with_char('b');
        assert!(same_style(&a, &b));
        assert!(!same_style(&a, &a.bold()));
    }

    #[test]
    fn rgb_maps_onto_crossterm_color() {
        let rgb = Rgb::new(10, 20, 30);
        assert_eq!(
            to_color(rgb),
            Color::Rgb {
                r: 10,
                g: 20,
                b: 30
            }
        );
    }
}
