use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Int(i32),
    Vec2([f32; 2]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedUniform {
    pub name: &'static str,
    pub value: UniformValue,
}

impl NamedUniform {
    #[must_use]
    pub const fn new(name: &'static str, value: UniformValue) -> Self {
        Self { name, value }
    }
}

impl fmt::Display for UniformValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `{:e}` keeps residuals readable
            Self::Float(value) => write!(f, "{value:e}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Vec2([x, y]) => write!(f, "({x:e}, {y:e})"),
        }
    }
}

impl fmt::Display for NamedUniform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
