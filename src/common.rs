// src/common.rs

/// Number of implicit right shifts applied by an inverse transform.
/// Multiply the returned samples by `2^ScaleShift` to restore true amplitude.
pub type ScaleShift = u32;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    SizeExceeded,
    InvalidOrder,
    SizeMismatch,
    NotPowerOfTwo,
    BufferTooSmall,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::SizeExceeded => write!(f, "Transform size exceeds the sine table period"),
            FftError::InvalidOrder => write!(f, "Transform order is too small"),
            FftError::SizeMismatch => write!(f, "Data buffer size does not match FFT size"),
            FftError::NotPowerOfTwo => write!(f, "Size must be a power of 2"),
            FftError::BufferTooSmall => write!(f, "Output buffer is too small"),
        }
    }
}

pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T], inverse: bool) -> Result<ScaleShift, FftError>;
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}
