//! Segment lookup by binary search over keyframe times.

use crate::keyframe::Keyframe;

/// Find the segment `(low, low + 1)` whose left keyframe is the last one at or before `t`.
///
/// Requires at least two keyframes sorted by time and `keys[0].time <= t <= keys[last].time`.
/// `t == keys[last].time` resolves to the final segment.
///
/// When several keyframes share the time `t`, the highest-indexed one becomes `low`, so
/// sampling exactly at a stacked time returns the value after the jump.
#[inline]
pub fn locate_segment(keys: &[Keyframe], t: f32) -> (usize, usize) {
    debug_assert!(keys.len() >= 2, "segment lookup needs at least two keyframes");
    let mut low = 0usize;
    let mut high = keys.len() - 1;
    while high - low > 1 {
        let mid = low + (high - low) / 2;
        if keys[mid].time > t {
            high = mid;
        } else {
            low = mid;
        }
    }
    (low, high)
}
