//! Vizij Curve Core (engine-agnostic)
//!
//! Immutable piecewise-cubic keyframe curves. A [`Curve`] is validated once when it is
//! built and can then be sampled from any number of threads at once:
//!
//! - [`validate`] rejects malformed keyframe sets at construction time.
//! - [`wrap`] maps query times outside the domain back into it (clamp, loop, ping-pong).
//! - [`locate`] finds the bracketing segment with a binary search.
//! - [`hermite`] blends the two bracketing keyframes with their tangents.
//!
//! Stored JSON curves and external curve objects enter through [`stored_curve`].

pub mod baking;
pub mod config;
pub mod curve;
pub mod error;
pub mod hermite;
pub mod keyframe;
pub mod locate;
pub mod store;
pub mod stored_curve;
pub mod validate;
pub mod wrap;

// Re-exports for consumers (adapters)
pub use baking::{bake_curve, export_baked_json, BakedCurve, BakingConfig, MAX_BAKE_FRAMES};
pub use config::Config;
pub use curve::Curve;
pub use error::{CurveError, TangentSide, ValidationError};
pub use keyframe::Keyframe;
pub use store::KeyframeStore;
pub use stored_curve::{
    curve_from_source, parse_stored_curve_json, to_stored_curve_json, CurveSource,
    StoredCurve,
};
pub use wrap::WrapMode;
