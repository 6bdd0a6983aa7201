//! Curve: owns validated keyframes and evaluates them at arbitrary times.
//!
//! Evaluation pipeline per query:
//! 1. single keyframe → its value;
//! 2. times before the first keyframe use `pre_wrap`, times after the last use `post_wrap`;
//! 3. binary search for the bracketing segment;
//! 4. Hermite interpolation across that segment.
//!
//! The domain is the closed interval `[start_time, end_time]`, so every keyframe's own time
//! evaluates to exactly that keyframe's value regardless of wrap modes.

use log::{debug, warn};

use crate::config::Config;
use crate::error::CurveError;
use crate::hermite::evaluate_segment;
use crate::keyframe::Keyframe;
use crate::locate::locate_segment;
use crate::store::KeyframeStore;
use crate::validate::validate_keyframes;
use crate::wrap::{resolve, WrapMode};

/// Immutable keyframe curve.
///
/// `Curve` is `Send + Sync`; share it by reference between threads. Cloning copies the
/// keyframes without re-validating them.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    store: KeyframeStore,
    start_time: f32,
    end_time: f32,
    pre_wrap: WrapMode,
    post_wrap: WrapMode,
}

impl Curve {
    /// Build a curve from time-ordered keyframes. The keyframes are validated once here.
    pub fn new<I>(keys: I, pre_wrap: WrapMode, post_wrap: WrapMode) -> Result<Self, CurveError>
    where
        I: IntoIterator,
        I::Item: Into<Keyframe>,
    {
        let keys: Vec<Keyframe> = keys.into_iter().map(Into::into).collect();
        if let Err(e) = validate_keyframes(&keys) {
            warn!("rejected curve with {} keyframes: {e}", keys.len());
            return Err(e.into());
        }

        let start_time = keys[0].time;
        let end_time = keys[keys.len() - 1].time;
        debug!(
            "built curve: {} keyframes over [{start_time}, {end_time}] pre={pre_wrap:?} post={post_wrap:?}",
            keys.len()
        );
        Ok(Self {
            store: KeyframeStore::new(keys),
            start_time,
            end_time,
            pre_wrap,
            post_wrap,
        })
    }

    /// Build a curve using the wrap modes from `cfg`.
    pub fn with_config<I>(keys: I, cfg: &Config) -> Result<Self, CurveError>
    where
        I: IntoIterator,
        I::Item: Into<Keyframe>,
    {
        Self::new(keys, cfg.pre_wrap, cfg.post_wrap)
    }

    /// Sample the curve at `t`.
    ///
    /// # Panics
    /// Panics if the curve has been [released](Self::release). Use
    /// [`try_evaluate`](Self::try_evaluate) to get an error instead.
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        let Ok(keys) = self.store.as_slice() else {
            panic!("Curve::evaluate called after the curve was released");
        };
        self.sample_keys(keys, t)
    }

    /// Sample the curve at `t`, reporting use after release as an error.
    #[inline]
    pub fn try_evaluate(&self, t: f32) -> Result<f32, CurveError> {
        let keys = self.store.as_slice()?;
        Ok(self.sample_keys(keys, t))
    }

    /// Evaluate every time in `times` into the matching slot of `out` without allocating.
    /// Only the common prefix of the two slices is written; returns the number of samples.
    pub fn sample_into(&self, times: &[f32], out: &mut [f32]) -> Result<usize, CurveError> {
        let keys = self.store.as_slice()?;
        let n = times.len().min(out.len());
        for (slot, &t) in out[..n].iter_mut().zip(&times[..n]) {
            *slot = self.sample_keys(keys, t);
        }
        Ok(n)
    }

    fn sample_keys(&self, keys: &[Keyframe], t: f32) -> f32 {
        if keys.len() == 1 || self.end_time <= self.start_time {
            return keys[0].value;
        }

        let t = if t < self.start_time {
            resolve(t, self.start_time, self.end_time, self.pre_wrap)
        } else if t > self.end_time {
            resolve(t, self.start_time, self.end_time, self.post_wrap)
        } else {
            t
        };

        let (lo, hi) = locate_segment(keys, t);
        evaluate_segment(&keys[lo], &keys[hi], t)
    }

    /// Number of keyframes (0 once released).
    #[inline]
    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Bounds-checked keyframe access.
    #[inline]
    pub fn get(&self, index: usize) -> Result<Keyframe, CurveError> {
        self.store.get(index)
    }

    /// Read-only view of all keyframes.
    #[inline]
    pub fn keyframes(&self) -> Result<&[Keyframe], CurveError> {
        self.store.as_slice()
    }

    #[inline]
    pub fn start_time(&self) -> f32 {
        self.start_time
    }

    #[inline]
    pub fn end_time(&self) -> f32 {
        self.end_time
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.end_time - self.start_time
    }

    #[inline]
    pub fn pre_wrap(&self) -> WrapMode {
        self.pre_wrap
    }

    #[inline]
    pub fn post_wrap(&self) -> WrapMode {
        self.post_wrap
    }

    /// Wrap modes as a [`Config`].
    pub fn config(&self) -> Config {
        Config::new(self.pre_wrap, self.post_wrap)
    }

    /// Whether the keyframe storage is still alive.
    #[inline]
    pub fn is_created(&self) -> bool {
        self.store.is_created()
    }

    /// Free the keyframe storage ahead of drop.
    ///
    /// Returns [`CurveError::AlreadyReleased`] on a second call. Dropping a curve that was
    /// never released frees the storage as usual.
    pub fn release(&mut self) -> Result<(), CurveError> {
        let count = self.store.len();
        match self.store.release() {
            Ok(()) => {
                debug!("released curve storage ({count} keyframes)");
                Ok(())
            }
            Err(e) => {
                warn!("double release of curve storage");
                Err(e)
            }
        }
    }
}
