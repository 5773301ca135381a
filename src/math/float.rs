pub trait FloatAsExt {
    /// Returns `Some(f)` if f is far enough from zero (far is given by eps) else returns None
    ///
    /// Returns None for NaN and Some(f) for +/- infty
    fn into_non_zero(self, eps: Self) -> Option<f32>;
}

impl FloatAsExt for f32 {
    fn into_non_zero(self, eps: Self) -> Option<f32> {
        (self.abs() > eps).then_some(self)
    }
}
