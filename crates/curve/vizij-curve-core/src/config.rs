//! Curve construction settings.

use serde::{Deserialize, Serialize};

use crate::wrap::WrapMode;

/// Wrap policies applied before the first and after the last keyframe.
/// Accepts both `pre_wrap` and `preWrap` spellings so JS callers can pass their own objects.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, alias = "preWrap")]
    pub pre_wrap: WrapMode,
    #[serde(default, alias = "postWrap")]
    pub post_wrap: WrapMode,
}

impl Config {
    pub fn new(pre_wrap: WrapMode, post_wrap: WrapMode) -> Self {
        Self {
            pre_wrap,
            post_wrap,
        }
    }

    /// Same mode on both sides.
    pub fn uniform(mode: WrapMode) -> Self {
        Self::new(mode, mode)
    }
}
