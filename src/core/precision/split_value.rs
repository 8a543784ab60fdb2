/// A 64-bit value carried as two 32-bit floats.
///
/// `head` is the nearest `f32` to the original value and `residual` is the
/// rounding error left behind, itself rounded to `f32`. The receiving side
/// recovers close to 48 mantissa bits by summing the two in its own
/// compensated arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SplitValue {
    pub head: f32,
    pub residual: f32,
}

/// Largest magnitude a head can carry.
pub const SPLIT_LIMIT: f64 = f32::MAX as f64;

impl SplitValue {
    /// Splits `value` into head and residual.
    ///
    /// Values beyond `f32` range saturate to `±f32::MAX` with a zero
    /// residual, so the pair always sums to a finite number.
    #[must_use]
    pub fn split(value: f64) -> Self {
        if value.abs() > SPLIT_LIMIT {
            return Self {
                head: f32::MAX.copysign(value as f32),
                residual: 0.0,
            };
        }

        let head = value as f32;
        let residual = (value - f64::from(head)) as f32;

        Self { head, residual }
    }

    #[must_use]
    pub fn reconstruct(self) -> f64 {
        f64::from(self.head) + f64::from(self.residual)
    }

    /// Head and residual in uniform order (`<name>0`, `<name>1`).
    #[must_use]
    pub const fn as_pair(self) -> [f32; 2] {
        [self.head, self.residual]
    }
}

impl From<f64> for SplitValue {
    fn from(value: f64) -> Self {
        Self::split(value)
    }
}

#[must_use]
pub fn split(value: f64) -> SplitValue {
    SplitValue::split(value)
}
