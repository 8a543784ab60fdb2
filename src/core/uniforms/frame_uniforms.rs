use crate::core::data::ScreenSize;
use crate::core::fractals::{ColourModes, FractalKinds};
use crate::core::precision::SplitValue;
use crate::core::uniforms::uniform_value::{NamedUniform, UniformValue};
use crate::core::view::ViewState;

pub const UNIFORM_COUNT: usize = 14;

/// Everything the renderer needs for one frame.
///
/// `left_edge` and `top_edge` are the plane offsets from the center to the
/// first pixel column and row. The renderer adds `pixel * zoom_step` to
/// them, so plane y grows down the screen in the same direction as pixel
/// rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub center_x: SplitValue,
    pub center_y: SplitValue,
    pub zoom_step: SplitValue,
    pub left_edge: SplitValue,
    pub top_edge: SplitValue,
    pub julia_constant: [f32; 2],
    pub fractal_kind: FractalKinds,
    pub max_iterations: u32,
    pub colour_mode: ColourModes,
}

impl FrameUniforms {
    /// Derives this frame's uniforms from the settled view.
    #[must_use]
    pub fn export(view: &ViewState, screen: ScreenSize) -> Self {
        let zoom_step = view.zoom_step();
        let left_edge = -(f64::from(screen.width) / 2.0) * zoom_step;
        let top_edge = -(f64::from(screen.height) / 2.0) * zoom_step;

        Self {
            center_x: SplitValue::split(view.center_x()),
            center_y: SplitValue::split(view.center_y()),
            zoom_step: SplitValue::split(zoom_step),
            left_edge: SplitValue::split(left_edge),
            top_edge: SplitValue::split(top_edge),
            julia_constant: view.julia_constant(),
            fractal_kind: view.fractal_kind(),
            max_iterations: view.max_iterations(),
            colour_mode: view.colour_mode(),
        }
    }

    /// Uniforms in upload order, named as the shader declares them.
    #[must_use]
    pub fn named(&self) -> [NamedUniform; UNIFORM_COUNT] {
        use UniformValue::{Float, Int, Vec2};

        [
            NamedUniform::new("centerX0", Float(self.center_x.head)),
            NamedUniform::new("centerX1", Float(self.center_x.residual)),
            NamedUniform::new("centerY0", Float(self.center_y.head)),
            NamedUniform::new("centerY1", Float(self.center_y.residual)),
            NamedUniform::new("zoomStep0", Float(self.zoom_step.head)),
            NamedUniform::new("zoomStep1", Float(self.zoom_step.residual)),
            NamedUniform::new("leftEdge0", Float(self.left_edge.head)),
            NamedUniform::new("leftEdge1", Float(self.left_edge.residual)),
            NamedUniform::new("topEdge0", Float(self.top_edge.head)),
            NamedUniform::new("topEdge1", Float(self.top_edge.residual)),
            NamedUniform::new("juliaConstant", Vec2(self.julia_constant)),
            NamedUniform::new("fractalKind", Int(self.fractal_kind.shader_index())),
            NamedUniform::new("maxIterations", Int(max_iterations_as_int(self.max_iterations))),
            NamedUniform::new("colorMode", Int(self.colour_mode.shader_index())),
        ]
    }
}

pub(crate) fn max_iterations_as_int(max_iterations: u32) -> i32 {
    i32::try_from(max_iterations).unwrap_or(i32::MAX)
}
