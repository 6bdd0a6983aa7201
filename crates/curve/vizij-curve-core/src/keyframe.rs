//! Keyframe record.

use serde::{Deserialize, Serialize};

/// A control point of a curve: the value at `time` plus the slopes arriving at and
/// leaving it.
///
/// Tangents are in value units per time unit. An infinite tangent marks a held
/// (stepped) segment on that side of the keyframe.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
    #[serde(default)]
    pub in_tangent: f32,
    #[serde(default)]
    pub out_tangent: f32,
}

impl Keyframe {
    #[inline]
    pub const fn new(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }

    /// Keyframe with flat (zero) tangents on both sides.
    #[inline]
    pub const fn flat(time: f32, value: f32) -> Self {
        Self::new(time, value, 0.0, 0.0)
    }

    /// Keyframe that holds its value until the next keyframe.
    #[inline]
    pub const fn stepped(time: f32, value: f32) -> Self {
        Self::new(time, value, 0.0, f32::INFINITY)
    }
}

impl From<(f32, f32, f32, f32)> for Keyframe {
    fn from((time, value, in_tangent, out_tangent): (f32, f32, f32, f32)) -> Self {
        Self::new(time, value, in_tangent, out_tangent)
    }
}
