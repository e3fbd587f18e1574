use std::io::Write;

use super::{RenderError, Renderer};
use crate::playback::FrameState;

/// Writes each frame as a one-line status to a text sink.
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, frame: &FrameState<'_>) -> Result<(), RenderError> {
        writeln!(
            self.out,
            "[{:>5}] x={:.1} y={:.1} | {} | segments={}",
            frame.index,
            frame.position.x,
            frame.position.y,
            frame.label().replace('\n', " | "),
            frame.segments.len()
        )?;
        self.out.flush()?;
        Ok(())
    }
}
