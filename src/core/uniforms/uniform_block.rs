use crate::core::uniforms::frame_uniforms::{FrameUniforms, max_iterations_as_int};

/// GPU memory layout of [`FrameUniforms`], padded to a 16-byte multiple for
/// uniform buffer binding.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UniformBlock {
    pub center_x: [f32; 2],
    pub center_y: [f32; 2],
    pub zoom_step: [f32; 2],
    pub left_edge: [f32; 2],
    pub top_edge: [f32; 2],
    pub julia_constant: [f32; 2],
    pub fractal_kind: i32,
    pub max_iterations: i32,
    pub colour_mode: i32,
    pub _padding: i32,
}

impl UniformBlock {
    pub const SIZE: usize = std::mem::size_of::<Self>();

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<&FrameUniforms> for UniformBlock {
    fn from(uniforms: &FrameUniforms) -> Self {
        Self {
            center_x: uniforms.center_x.as_pair(),
            center_y: uniforms.center_y.as_pair(),
            zoom_step: uniforms.zoom_step.as_pair(),
            left_edge: uniforms.left_edge.as_pair(),
            top_edge: uniforms.top_edge.as_pair(),
            julia_constant: uniforms.julia_constant,
            fractal_kind: uniforms.fractal_kind.shader_index(),
            max_iterations: max_iterations_as_int(uniforms.max_iterations),
            colour_mode: uniforms.colour_mode.shader_index(),
            _padding: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::ScreenSize;
    use crate::core::view::ViewState;

    #[test]
    fn block_is_sixty_four_bytes() {
        assert_eq!(UniformBlock::SIZE, 64);
        assert_eq!(UniformBlock::SIZE % 16, 0);
    }

    #[test]
    fn block_copies_split_pairs_head_first() {
        let mut view = ViewState::default();
        view.pan(3, -7);
        let uniforms = FrameUniforms::export(&view, ScreenSize::default());

        let block = UniformBlock::from(&uniforms);

        assert_eq!(block.center_x, uniforms.center_x.as_pair());
        assert_eq!(block.center_y, uniforms.center_y.as_pair());
        assert_eq!(block.zoom_step, [1.0 / 256.0, 0.0]);
        assert_eq!(block.max_iterations, 100);
        assert_eq!(block.colour_mode, 1);
        assert_eq!(block._padding, 0);
    }

    #[test]
    fn bytes_follow_field_declaration_order() {
        let block = UniformBlock {
            center_x: [1.5, 0.0],
            fractal_kind: 5,
            ..UniformBlock::default()
        };

        let bytes = block.as_bytes();

        assert_eq!(bytes.len(), 64);
        assert_eq!(&bytes[0..4], &1.5_f32.to_ne_bytes());
        assert_eq!(&bytes[48..52], &5_i32.to_ne_bytes());
    }
}
