//! Error types for curve construction and access.

use thiserror::Error;

/// Which tangent of a keyframe a validation error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TangentSide {
    In,
    Out,
}

impl std::fmt::Display for TangentSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TangentSide::In => f.write_str("in"),
            TangentSide::Out => f.write_str("out"),
        }
    }
}

/// Reasons a keyframe set is rejected when a curve is built.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("curve must contain at least one keyframe")]
    Empty,

    #[error("keyframe {index} has non-finite time {time}")]
    NonFiniteTime { index: usize, time: f32 },

    #[error("keyframe {index} has non-finite value {value}")]
    NonFiniteValue { index: usize, value: f32 },

    #[error("keyframe {index} has a NaN {side} tangent")]
    NanTangent { index: usize, side: TangentSide },

    /// The first two keyframes share a time, leaving a zero-length leading segment.
    #[error("first two keyframes share time {time}")]
    DegenerateStart { time: f32 },

    /// The last two keyframes share a time, leaving a zero-length trailing segment.
    #[error("last two keyframes share time {time}")]
    DegenerateEnd { time: f32 },

    #[error("keyframe {index} at time {time} precedes the previous keyframe at {previous}")]
    Unsorted {
        index: usize,
        previous: f32,
        time: f32,
    },
}

/// Errors surfaced by [`Curve`](crate::Curve) construction and access.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CurveError {
    #[error("invalid keyframes: {0}")]
    Validation(#[from] ValidationError),

    #[error("keyframe index {index} out of bounds for curve with {count} keyframes")]
    OutOfBounds { index: usize, count: usize },

    /// `release` was called on a curve whose storage is already gone.
    #[error("curve storage was already released")]
    AlreadyReleased,

    /// The curve was evaluated or indexed after its storage was released.
    #[error("curve used after its storage was released")]
    Released,

    #[error("stored curve parse error: {0}")]
    Parse(String),

    /// A bake window and frame rate that would need more than `max` samples.
    #[error("bake window needs {frames} frames, limit is {max}")]
    BakeTooLarge { frames: f64, max: usize },
}

impl CurveError {
    /// True for errors raised while validating keyframes during construction.
    #[inline]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
