//! Cubic Hermite interpolation between two keyframes.

use crate::keyframe::Keyframe;

/// Hermite basis weights `(a, b, c, d)` for normalized parameter `u`:
/// `a` and `d` weigh the endpoint values, `b` and `c` the scaled tangents.
#[inline]
pub fn hermite_basis(u: f32) -> (f32, f32, f32, f32) {
    let u2 = u * u;
    let u3 = u2 * u;
    let a = 2.0 * u3 - 3.0 * u2 + 1.0;
    let b = u3 - 2.0 * u2 + u;
    let c = u3 - u2;
    let d = -2.0 * u3 + 3.0 * u2;
    (a, b, c, d)
}

/// Interpolate between `k0` and `k1` at time `t` with `k0.time <= t <= k1.time`.
///
/// - Zero-length (stacked) segments return `k0.value`.
/// - `t == k0.time` and `t == k1.time` return the keyframe values exactly.
/// - An infinite `k0.out_tangent` or `k1.in_tangent` holds `k0.value` across the segment.
///   So does a segment whose scaled tangents are not finite because `k1.time - k0.time`
///   overflows `f32`.
#[inline]
pub fn evaluate_segment(k0: &Keyframe, k1: &Keyframe, t: f32) -> f32 {
    let dt = k1.time - k0.time;
    if dt == 0.0 {
        return k0.value;
    }
    if t == k0.time {
        return k0.value;
    }
    if t == k1.time {
        return k1.value;
    }

    let m0 = k0.out_tangent * dt;
    let m1 = k1.in_tangent * dt;
    if !(m0.is_finite() && m1.is_finite()) {
        return k0.value;
    }

    let u = (t - k0.time) / dt;
    let (a, b, c, d) = hermite_basis(u);
    a * k0.value + b * m0 + c * m1 + d * k1.value
}
