//! One-shot keyframe validation run when a curve is built.
//!
//! Checks run in a fixed order and stop at the first violation:
//! 1. at least one keyframe;
//! 2. finite time and value, no NaN tangent (infinite tangents are allowed);
//! 3. with two or more keyframes, distinct times for the first and last pairs;
//! 4. non-decreasing times.
//!
//! Interior keyframes may share a time ("stacked" keyframes form a vertical jump).

use crate::error::{TangentSide, ValidationError};
use crate::keyframe::Keyframe;

pub fn validate_keyframes(keys: &[Keyframe]) -> Result<(), ValidationError> {
    let n = keys.len();
    if n == 0 {
        return Err(ValidationError::Empty);
    }

    for (index, k) in keys.iter().enumerate() {
        if !k.time.is_finite() {
            return Err(ValidationError::NonFiniteTime {
                index,
                time: k.time,
            });
        }
        if !k.value.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                index,
                value: k.value,
            });
        }
        if k.in_tangent.is_nan() {
            return Err(ValidationError::NanTangent {
                index,
                side: TangentSide::In,
            });
        }
        if k.out_tangent.is_nan() {
            return Err(ValidationError::NanTangent {
                index,
                side: TangentSide::Out,
            });
        }
    }

    if n >= 2 {
        if keys[0].time == keys[1].time {
            return Err(ValidationError::DegenerateStart { time: keys[0].time });
        }
        if keys[n - 2].time == keys[n - 1].time {
            return Err(ValidationError::DegenerateEnd {
                time: keys[n - 1].time,
            });
        }
    }

    for (i, pair) in keys.windows(2).enumerate() {
        if pair[1].time < pair[0].time {
            return Err(ValidationError::Unsorted {
                index: i + 1,
                previous: pair[0].time,
                time: pair[1].time,
            });
        }
    }

    Ok(())
}
