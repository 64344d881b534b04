//! TerminalRenderer: terminal session lifecycle and framebuffer flushing.
//!
//! `enter`/`exit` bracket the whole session: raw mode, alternate screen,
//! hidden cursor, and mouse capture (painting is mouse-driven). Drawing diffs
//! against the previously flushed frame and only rewrites changed runs.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(EnableMouseCapture)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(DisableMouseCapture)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush a frame, diffing against the previously drawn one.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let full = match &self.last {
            Some(prev) => prev.width() != fb.width() || prev.height() != fb.height(),
            None => true,
        };

        if full {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
            let mut style: Option<Style> = None;
            for y in 0..fb.height() {
                self.stdout.queue(cursor::MoveTo(0, y))?;
                for x in 0..fb.width() {
                    let glyph = fb.get(x, y).unwrap_or_default();
                    self.put_glyph(glyph.ch, glyph.style, &mut style)?;
                }
            }
        } else {
            let prev = self.last.as_ref().unwrap();
            let mut style: Option<Style> = None;
            let mut queued: Vec<(u16, u16)> = Vec::new();

            // Collect changed cells first; prev stays borrowed only here.
            for y in 0..fb.height() {
                for x in 0..fb.width() {
                    if prev.get(x, y) != fb.get(x, y) {
                        queued.push((x, y));
                    }
                }
            }

            // Move the cursor once per run of horizontally adjacent changes.
            let mut i = 0;
            while i < queued.len() {
                let (x, y) = queued[i];
                self.stdout.queue(cursor::MoveTo(x, y))?;
                let mut cx = x;
                while i < queued.len() && queued[i] == (cx, y) {
                    let glyph = fb.get(cx, y).unwrap_or_default();
                    self.put_glyph(glyph.ch, glyph.style, &mut style)?;
                    cx += 1;
                    i += 1;
                }
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        self.last = Some(fb.clone());
        Ok(())
    }

    fn put_glyph(&mut self, ch: char, style: Style, current: &mut Option<Style>) -> Result<()> {
        if *current != Some(style) {
            let (fr, fg, fb_) = style.fg;
            let (br, bg, bb) = style.bg;
            self.stdout
                .queue(SetForegroundColor(Color::Rgb { r: fr, g: fg, b: fb_ }))?;
            self.stdout
                .queue(SetBackgroundColor(Color::Rgb { r: br, g: bg, b: bb }))?;
            *current = Some(style);
        }
        self.stdout.queue(Print(ch))?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
