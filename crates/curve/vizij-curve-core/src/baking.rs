//! Baking API: sample a curve at a fixed frame rate over a time window.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::error::CurveError;

const DEFAULT_FRAME_RATE: f32 = 60.0;

/// Upper bound on samples per bake (about 64 MiB of `f32`), well inside the range where
/// `f32` frame indices are exact.
pub const MAX_BAKE_FRAMES: usize = 1 << 24;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BakingConfig {
    /// Target frame rate (Hz) for baked samples.
    pub frame_rate: f32,
    /// Start time in curve time; if None, uses the curve's start time.
    #[serde(default)]
    pub start_time: Option<f32>,
    /// End time in curve time; if None, uses the curve's end time.
    #[serde(default)]
    pub end_time: Option<f32>,
}

impl Default for BakingConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            start_time: None,
            end_time: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BakedCurve {
    pub frame_rate: f32,
    pub start_time: f32,
    pub end_time: f32,
    /// One sample per frame, inclusive of both window ends.
    pub values: Vec<f32>,
}

/// Bake `curve` using the provided config.
///
/// The window may extend past the curve's domain; those samples follow the curve's wrap
/// modes. A reversed window collapses to a single sample at `start`.
pub fn bake_curve(curve: &Curve, cfg: &BakingConfig) -> Result<BakedCurve, CurveError> {
    let sr = if cfg.frame_rate.is_finite() && cfg.frame_rate > 0.0 {
        cfg.frame_rate
    } else {
        DEFAULT_FRAME_RATE
    };
    let start = cfg
        .start_time
        .filter(|t| t.is_finite())
        .unwrap_or(curve.start_time());
    let end = cfg
        .end_time
        .filter(|t| t.is_finite())
        .unwrap_or(curve.end_time())
        .max(start);
    let span = end - start;
    // inclusive of end; inf for spans that overflow f32
    let frames = f64::from((span * sr).ceil()) + 1.0;
    if frames > MAX_BAKE_FRAMES as f64 {
        warn!("refusing to bake {frames} frames over a {span} s window at {sr} Hz");
        return Err(CurveError::BakeTooLarge {
            frames,
            max: MAX_BAKE_FRAMES,
        });
    }
    let frame_count = frames as usize;

    let mut values = Vec::with_capacity(frame_count);
    for f in 0..frame_count {
        let t = (start + f as f32 / sr).min(end);
        values.push(curve.try_evaluate(t)?);
    }
    debug!("baked {frame_count} frames at {sr} Hz over [{start}, {end}]");

    Ok(BakedCurve {
        frame_rate: sr,
        start_time: start,
        end_time: end,
        values,
    })
}

/// Export baked data as serde_json::Value (stable schema for FFI/serialization).
pub fn export_baked_json(baked: &BakedCurve) -> serde_json::Value {
    serde_json::to_value(baked).unwrap_or(serde_json::Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyframe::Keyframe;
    use crate::wrap::WrapMode;

    fn ramp() -> Curve {
        Curve::new(
            [Keyframe::new(0.0, 0.0, 1.0, 1.0), Keyframe::new(1.0, 1.0, 1.0, 1.0)],
            WrapMode::Clamp,
            WrapMode::Clamp,
        )
        .unwrap()
    }

    #[test]
    fn bakes_inclusive_frames() {
        let cfg = BakingConfig {
            frame_rate: 4.0,
            ..BakingConfig::default()
        };
        let baked = bake_curve(&ramp(), &cfg).unwrap();
        assert_eq!(baked.values.len(), 5);
        assert_eq!(baked.values[0], 0.0);
        assert_eq!(baked.values[4], 1.0);
        assert!((baked.values[2] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn sanitizes_bad_frame_rate_and_reversed_window() {
        let cfg = BakingConfig {
            frame_rate: f32::NAN,
            start_time: Some(0.5),
            end_time: Some(0.25),
        };
        let baked = bake_curve(&ramp(), &cfg).unwrap();
        assert_eq!(baked.frame_rate, DEFAULT_FRAME_RATE);
        assert_eq!(baked.values.len(), 1);
        assert_eq!(baked.end_time, 0.5);
    }

    #[test]
    fn huge_windows_are_rejected() {
        for end in [1e30, 1e9, f32::MAX] {
            let cfg = BakingConfig {
                frame_rate: 60.0,
                start_time: Some(0.0),
                end_time: Some(end),
            };
            let err = bake_curve(&ramp(), &cfg).unwrap_err();
            assert!(
                matches!(err, CurveError::BakeTooLarge { max: MAX_BAKE_FRAMES, .. }),
                "end={end} -> {err:?}"
            );
        }
        let widest = BakingConfig {
            frame_rate: 60.0,
            start_time: Some(-f32::MAX),
            end_time: Some(f32::MAX),
        };
        assert!(bake_curve(&ramp(), &widest).is_err());
    }

    #[test]
    fn window_at_the_frame_limit_still_bakes() {
        // (2^24 - 1) / 1 Hz + 1 frames, exactly at the limit.
        let cfg = BakingConfig {
            frame_rate: 1.0,
            start_time: Some(0.0),
            end_time: Some((MAX_BAKE_FRAMES - 1) as f32),
        };
        let baked = bake_curve(&ramp(), &cfg).unwrap();
        assert_eq!(baked.values.len(), MAX_BAKE_FRAMES);
        assert_eq!(baked.values[MAX_BAKE_FRAMES - 1], 1.0);
    }

    #[test]
    fn released_curve_cannot_be_baked() {
        let mut c = ramp();
        c.release().unwrap();
        assert_eq!(
            bake_curve(&c, &BakingConfig::default()),
            Err(CurveError::Released)
        );
    }

    #[test]
    fn export_has_stable_keys() {
        let baked = bake_curve(&ramp(), &BakingConfig::default()).unwrap();
        let json = export_baked_json(&baked);
        assert_eq!(json["frame_rate"], 60.0);
        assert_eq!(json["values"].as_array().map(Vec::len), Some(61));
    }
}
