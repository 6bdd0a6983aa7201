//! Owned, fixed-length keyframe storage.
//!
//! The buffer is filled once when the store is created and is never resized. It is
//! freed either by an explicit [`KeyframeStore::release`] or when the store is dropped,
//! whichever comes first. Access after release is reported as [`CurveError::Released`].

use crate::error::CurveError;
use crate::keyframe::Keyframe;

#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeStore {
    keys: Option<Box<[Keyframe]>>,
}

impl KeyframeStore {
    /// Take ownership of `keys` as the store's backing buffer.
    pub fn new(keys: Vec<Keyframe>) -> Self {
        Self {
            keys: Some(keys.into_boxed_slice()),
        }
    }

    /// Whether the backing buffer is still alive.
    #[inline]
    pub fn is_created(&self) -> bool {
        self.keys.is_some()
    }

    /// Number of keyframes; 0 once released.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.as_deref().map_or(0, <[Keyframe]>::len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read-only view of every keyframe.
    #[inline]
    pub fn as_slice(&self) -> Result<&[Keyframe], CurveError> {
        self.keys.as_deref().ok_or(CurveError::Released)
    }

    /// Bounds-checked keyframe access.
    pub fn get(&self, index: usize) -> Result<Keyframe, CurveError> {
        let keys = self.as_slice()?;
        keys.get(index).copied().ok_or(CurveError::OutOfBounds {
            index,
            count: keys.len(),
        })
    }

    /// Free the backing buffer. A second call reports [`CurveError::AlreadyReleased`].
    pub fn release(&mut self) -> Result<(), CurveError> {
        match self.keys.take() {
            Some(_) => Ok(()),
            None => Err(CurveError::AlreadyReleased),
        }
    }
}
