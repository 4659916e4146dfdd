use crate::common::{FftError, FftProcess, ScaleShift};
use super::core::{check_order, radix_2_dit_fft_core};
use super::table::N_WAVE;
use super::types::Q7;
use num_complex::Complex;

/// In-place complex FFT over split real/imaginary buffers.
///
/// Both buffers must hold `2^order` samples. Returns the number of
/// halvings applied (always 0 for a forward transform). Nothing is
/// modified when an error is returned.
pub fn fix_fft(
    re: &mut [Q7],
    im: &mut [Q7],
    order: u32,
    inverse: bool,
) -> Result<ScaleShift, FftError> {
    let n = check_order(order)?;
    if re.len() != n || im.len() != n {
        tracing::warn!(n, re = re.len(), im = im.len(), "buffer length mismatch");
        return Err(FftError::SizeMismatch);
    }

    let scale = if inverse {
        radix_2_dit_fft_core::<true>(re, im)
    } else {
        radix_2_dit_fft_core::<false>(re, im)
    };

    Ok(scale)
}

/// A complex FFT of a fixed order.
///
/// All twiddles come from the shared sine table, so the struct only
/// carries the validated geometry and can be copied freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CplxFft {
    order: u32,
    n: usize,
}

impl CplxFft {
    pub fn new(order: u32) -> Result<Self, FftError> {
        let n = check_order(order)?;
        Ok(Self { order, n })
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    /// Number of complex samples per transform.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Executes the FFT in-place on split real/imaginary buffers.
    pub fn process(
        &self,
        re: &mut [Q7],
        im: &mut [Q7],
        inverse: bool,
    ) -> Result<ScaleShift, FftError> {
        fix_fft(re, im, self.order, inverse)
    }
}

// Interleaved complex buffers are split into two stack buffers bounded by
// the table period, transformed, and written back.
impl FftProcess<Complex<Q7>> for CplxFft {
    fn process(&self, buffer: &mut [Complex<Q7>], inverse: bool) -> Result<ScaleShift, FftError> {
        if buffer.len() != self.n {
            tracing::warn!(n = self.n, len = buffer.len(), "buffer length mismatch");
            return Err(FftError::SizeMismatch);
        }

        let mut re = [Q7::ZERO; N_WAVE];
        let mut im = [Q7::ZERO; N_WAVE];
        for (k, c) in buffer.iter().enumerate() {
            re[k] = c.re;
            im[k] = c.im;
        }

        let scale = self.process(&mut re[..self.n], &mut im[..self.n], inverse)?;

        for (k, c) in buffer.iter_mut().enumerate() {
            *c = Complex::new(re[k], im[k]);
        }
        Ok(scale)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
