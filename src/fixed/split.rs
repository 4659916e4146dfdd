// src/fixed/split.rs

use super::table::{cosine, sine, N_WAVE};
use super::types::{fix_mul, Q7};
use crate::common::FftError;
use num_complex::Complex;

fn check_half_len(n: usize) -> Result<(), FftError> {
    if !n.is_power_of_two() {
        tracing::warn!(n, "packed spectrum length is not a power of two");
        return Err(FftError::NotPowerOfTwo);
    }
    if n < 4 {
        tracing::warn!(n, "packed spectrum is too short to unpack");
        return Err(FftError::InvalidOrder);
    }
    if n > N_WAVE {
        tracing::warn!(n, max = N_WAVE, "packed spectrum exceeds the sine table");
        return Err(FftError::SizeExceeded);
    }
    Ok(())
}

/// Correction coefficients for bin phase `phase` (in table steps).
///
/// `A = (1 - i·W)/2` weighs the direct bin, `B = (1 + i·W)/2` the
/// conjugated mirror bin, where `W = cos - i·sin`.
fn coefficients(phase: usize) -> (Complex<Q7>, Complex<Q7>) {
    let s = sine(phase).to_bits() as i16;
    let c = cosine(phase).to_bits() as i16;
    let one = i8::MAX as i16;

    let q = |v: i16| Q7::from_bits(v as i8);
    let a = Complex::new(q((one - s) >> 1), q(-c >> 1));
    let b = Complex::new(q((one + s) >> 1), q(c >> 1));
    (a, b)
}

/// `G = X·A + conj(Y)·B`, each product rounded by `fix_mul` and the sum
/// wrapped once at the end.
fn unpack_bin(x: Complex<Q7>, y: Complex<Q7>, a: Complex<Q7>, b: Complex<Q7>) -> Complex<Q7> {
    let term = |p: Q7, q: Q7| fix_mul(p.to_bits(), q.to_bits()) as i16;

    let gr = term(x.re, a.re) - term(x.im, a.im) + term(y.re, b.re) + term(y.im, b.im);
    let gi = term(x.im, a.re) + term(x.re, a.im) + term(y.re, b.im) - term(y.im, b.re);

    Complex::new(Q7::from_bits(gr as i8), Q7::from_bits(gi as i8))
}

/// Unpacks a forward [`fix_fftr`](super::real::fix_fftr) result into the
/// full complex spectrum of the real signal.
///
/// `half` holds `N` values: the real parts of the half-size spectrum in
/// `half[..N/2]`, the imaginary parts in `half[N/2..]`. `spectrum` receives
/// `N` bins scaled by `2/N`. Bins `1..N/2` are computed and bins
/// `N/2+1..N` are filled as their complex conjugates. The pure-real
/// Nyquist bin `spectrum[N/2]` is left untouched; see [`nyquist_bin`].
///
/// `N` must be a power of two between 4 and `N_WAVE`.
pub fn split(half: &[Q7], spectrum: &mut [Complex<Q7>]) -> Result<(), FftError> {
    let n = half.len();
    check_half_len(n)?;
    if spectrum.len() < n {
        tracing::warn!(n, len = spectrum.len(), "spectrum buffer too small");
        return Err(FftError::BufferTooSmall);
    }

    let h = n / 2;
    let (re, im) = half.split_at(h);
    let phase_step = N_WAVE / n;

    for i in 0..h {
        let k = (h - i) % h;
        let (a, b) = coefficients(i * phase_step);

        let x = Complex::new(re[i], im[i]);
        let y = Complex::new(re[k], im[k]);
        let g = unpack_bin(x, y, a, b);

        spectrum[i] = g;
        if i > 0 {
            // Hermitian mirror: real part repeats, imaginary part negates
            spectrum[n - i] = Complex::new(g.re, -g.im);
        }
    }

    Ok(())
}

/// The Nyquist bin of a packed half-size spectrum, on the same scale as
/// the bins written by [`split`].
pub fn nyquist_bin(half: &[Q7]) -> Result<Q7, FftError> {
    let n = half.len();
    check_half_len(n)?;
    Ok(half[0] - half[n / 2])
}

#[cfg(test)]
#[path = "split_tests.rs"]
mod tests;
