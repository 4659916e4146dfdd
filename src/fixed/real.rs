use super::complex::fix_fft;
use super::table::{LOG2_N_WAVE, N_WAVE};
use super::types::Q7;
use crate::common::{FftError, FftProcess, ScaleShift};

/// Validates a real transform order and returns the number of real samples.
/// The inner complex transform runs at `order - 1`; the real length itself
/// is bounded by the table period so the result can be unpacked.
fn check_real_order(order: u32) -> Result<usize, FftError> {
    if order < 2 {
        tracing::warn!(order, "real transform order must be at least 2");
        return Err(FftError::InvalidOrder);
    }
    if order > LOG2_N_WAVE {
        tracing::warn!(order, max = LOG2_N_WAVE, "transform size exceeds the sine table");
        return Err(FftError::SizeExceeded);
    }
    Ok(1 << order)
}

/// Moves even samples to the first half and odd samples to the second.
///
/// Goes through owned scratch buffers: swapping in place would read
/// samples the other half has already overwritten.
fn deinterleave(samples: &mut [Q7]) {
    let half = samples.len() / 2;
    let mut even = [Q7::ZERO; N_WAVE / 2];
    let mut odd = [Q7::ZERO; N_WAVE / 2];

    for (i, pair) in samples.chunks_exact(2).enumerate() {
        even[i] = pair[0];
        odd[i] = pair[1];
    }

    samples[..half].copy_from_slice(&even[..half]);
    samples[half..].copy_from_slice(&odd[..half]);
}

/// Inverse of [`deinterleave`]: first half to even slots, second half to odd.
fn interleave(samples: &mut [Q7]) {
    let half = samples.len() / 2;
    let mut even = [Q7::ZERO; N_WAVE / 2];
    let mut odd = [Q7::ZERO; N_WAVE / 2];

    even[..half].copy_from_slice(&samples[..half]);
    odd[..half].copy_from_slice(&samples[half..]);

    for (i, pair) in samples.chunks_exact_mut(2).enumerate() {
        pair[0] = even[i];
        pair[1] = odd[i];
    }
}

/// Real-input FFT through a half-size complex FFT.
///
/// `samples` holds `2^order` values.
///
/// Forward: the samples are deinterleaved (even samples become the real
/// part, odd samples the imaginary part) and then transformed. The result
/// is the packed half-size spectrum: real parts in the first half,
/// imaginary parts in the second. Feed it to [`split`](super::split::split)
/// to recover the spectrum of the real signal.
///
/// Inverse: the packed spectrum is transformed first, then the time
/// samples are interleaved back into their natural order.
pub fn fix_fftr(samples: &mut [Q7], order: u32, inverse: bool) -> Result<ScaleShift, FftError> {
    let n = check_real_order(order)?;
    if samples.len() != n {
        tracing::warn!(n, len = samples.len(), "buffer length mismatch");
        return Err(FftError::SizeMismatch);
    }
    let half = n / 2;

    if inverse {
        let (re, im) = samples.split_at_mut(half);
        let scale = fix_fft(re, im, order - 1, true)?;
        interleave(samples);
        Ok(scale)
    } else {
        deinterleave(samples);
        let (re, im) = samples.split_at_mut(half);
        fix_fft(re, im, order - 1, false)
    }
}

/// A real FFT of a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RealFft {
    order: u32,
    n: usize,
}

impl RealFft {
    /// Note that `order` here counts REAL samples: `2^order` of them.
    pub fn new(order: u32) -> Result<Self, FftError> {
        let n = check_real_order(order)?;
        Ok(Self { order, n })
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    /// Number of real samples per transform.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn process(&self, samples: &mut [Q7], inverse: bool) -> Result<ScaleShift, FftError> {
        fix_fftr(samples, self.order, inverse)
    }
}

impl FftProcess<Q7> for RealFft {
    fn process(&self, buffer: &mut [Q7], inverse: bool) -> Result<ScaleShift, FftError> {
        self.process(buffer, inverse)
    }
}

#[cfg(test)]
#[path = "real_tests.rs"]
mod tests;
