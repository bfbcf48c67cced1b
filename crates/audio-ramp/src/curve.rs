//! Taper/skew shaping for ramp segments.

/// Shapes closer than this to the identity values count as linear.
///
/// Deliberately tight: a skew of 1e-6 or a taper of 1.00001 still
/// subdivides, only shapes that are linear for all practical purposes pass
/// through unchanged.
pub const LINEAR_EPSILON: f32 = 1e-7;

/// Whether a taper/skew pair describes a straight line.
#[inline]
pub fn is_linear_shape(taper: f32, skew: f32) -> bool {
    (taper - 1.0).abs() < LINEAR_EPSILON && skew.abs() < LINEAR_EPSILON
}

/// Shaped curve position for normalized progress `t` in `[0, 1]`.
///
/// `t` is first warped by `skew` (a rational warp, exact identity at skew 0
/// and monotonic for skew > -1), then raised to `taper` (identity at
/// taper 1). The result stays in `[0, 1]` with `shape(0) == 0` and
/// `shape(1) == 1`.
#[inline]
pub fn shape(t: f64, taper: f32, skew: f32) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let skew = f64::from(skew);
    let skewed = ((1.0 + skew) * t) / (1.0 + skew * t);
    skewed.powf(f64::from(taper))
}

/// Value of a ramp from `from` toward `to` at normalized progress `t`.
#[inline]
pub fn ramp_value(from: f32, to: f32, t: f64, taper: f32, skew: f32) -> f32 {
    from + (to - from) * shape(t, taper, skew) as f32
}
