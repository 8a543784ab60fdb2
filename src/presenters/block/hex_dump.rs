use std::io::{self, Write};

use crate::controllers::interactive::UniformSink;
use crate::core::uniforms::{FrameUniforms, UniformBlock};

/// Writes each frame's packed [`UniformBlock`] as a line of hex bytes,
/// exactly as it would be uploaded to a uniform buffer.
pub struct BlockHexPresenter<W: Write> {
    writer: W,
}

impl<W: Write> BlockHexPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> UniformSink for BlockHexPresenter<W> {
    type Error = io::Error;

    fn submit(&mut self, frame_index: u64, uniforms: &FrameUniforms) -> io::Result<()> {
        let block = UniformBlock::from(uniforms);

        write!(self.writer, "{frame_index:>6} ")?;
        for byte in block.as_bytes() {
            write!(self.writer, "{byte:02x}")?;
        }
        writeln!(self.writer)?;

        Ok(())
    }
}
