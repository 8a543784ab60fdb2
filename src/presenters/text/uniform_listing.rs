use std::io::{self, Write};

use crate::controllers::interactive::UniformSink;
use crate::core::uniforms::FrameUniforms;

/// Writes one line per frame: `frame N: name=value ...`.
pub struct TextUniformPresenter<W: Write> {
    writer: W,
}

impl<W: Write> TextUniformPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> UniformSink for TextUniformPresenter<W> {
    type Error = io::Error;

    fn submit(&mut self, frame_index: u64, uniforms: &FrameUniforms) -> io::Result<()> {
        write!(self.writer, "frame {frame_index}:")?;
        for uniform in uniforms.named() {
            write!(self.writer, " {uniform}")?;
        }
        writeln!(self.writer)?;

        Ok(())
    }
}
