use std::convert::Infallible;

use crate::core::uniforms::FrameUniforms;

/// Receives the uniforms of every completed frame, in frame order.
pub trait UniformSink {
    type Error;

    fn submit(&mut self, frame_index: u64, uniforms: &FrameUniforms) -> Result<(), Self::Error>;
}

/// Collects frames in memory.
impl UniformSink for Vec<FrameUniforms> {
    type Error = Infallible;

    fn submit(&mut self, _frame_index: u64, uniforms: &FrameUniforms) -> Result<(), Self::Error> {
        self.push(*uniforms);
        Ok(())
    }
}

impl<S: UniformSink + ?Sized> UniformSink for &mut S {
    type Error = S::Error;

    fn submit(&mut self, frame_index: u64, uniforms: &FrameUniforms) -> Result<(), Self::Error> {
        (**self).submit(frame_index, uniforms)
    }
}
