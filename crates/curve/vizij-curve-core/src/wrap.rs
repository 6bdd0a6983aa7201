//! Out-of-domain time remapping.
//!
//! A curve is defined on `[start, end]`. Query times before `start` are remapped with the
//! curve's pre-wrap mode and times after `end` with its post-wrap mode.

use serde::{Deserialize, Serialize};

/// How a curve continues outside its keyframed domain.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum WrapMode {
    /// Hold the boundary keyframe's value.
    #[default]
    Clamp,
    /// Repeat the domain as a sawtooth.
    Loop,
    /// Repeat the domain, reversing direction at each boundary.
    PingPong,
}

/// Floating-point modulo whose result has the sign of `b`.
#[inline]
fn fmod(a: f32, b: f32) -> f32 {
    let m = a % b;
    if (m < 0.0 && b > 0.0) || (m > 0.0 && b < 0.0) {
        m + b
    } else {
        m
    }
}

/// Wrap `x` into `[0, length)` as a sawtooth (`repeat(-0.3, 1.0) == 0.7`).
///
/// A tiny negative `x` can round up to exactly `length`; that is the start of the next
/// period and maps to 0, the same as exact multiples of `length`. A non-positive length
/// yields 0.
#[inline]
pub fn repeat(x: f32, length: f32) -> f32 {
    if length <= 0.0 {
        return 0.0;
    }
    let m = fmod(x, length);
    if m < length {
        m.max(0.0)
    } else {
        0.0
    }
}

/// Reflect `x` into `[0, length]` as a triangle wave with period `2 * length`.
#[inline]
pub fn ping_pong(x: f32, length: f32) -> f32 {
    if length <= 0.0 {
        return 0.0;
    }
    let period = 2.0 * length;
    let m = repeat(x, period);
    if m <= length {
        m
    } else {
        period - m
    }
}

/// Map `t` into `[start, end]` according to `mode`.
///
/// Callers use this only for times outside the domain; in-domain times pass through
/// `Clamp` unchanged but `Loop` would fold `end` back onto `start`.
#[inline]
pub fn resolve(t: f32, start: f32, end: f32, mode: WrapMode) -> f32 {
    let length = end - start;
    let wrapped = match mode {
        WrapMode::Clamp => return t.clamp(start, end),
        WrapMode::Loop => start + repeat(t - start, length),
        WrapMode::PingPong => start + ping_pong(t - start, length),
    };
    // start + offset can round past end for large magnitudes.
    wrapped.min(end)
}
