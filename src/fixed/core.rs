// src/fixed/core.rs

use super::table::{cosine, sine, LOG2_N_WAVE, N_WAVE};
use super::types::Q7;
use crate::common::{FftError, ScaleShift};

/// Inverse passes halve their operands when any component magnitude
/// exceeds this (just under a quarter of full range).
pub const SCALE_THRESHOLD: u8 = 63;

/// Validates a complex transform order and returns the transform length.
pub(crate) fn check_order(order: u32) -> Result<usize, FftError> {
    if order == 0 {
        tracing::warn!(order, "transform order must be at least 1");
        return Err(FftError::InvalidOrder);
    }
    if order > LOG2_N_WAVE {
        tracing::warn!(order, max = LOG2_N_WAVE, "transform size exceeds the sine table");
        return Err(FftError::SizeExceeded);
    }
    Ok(1 << order)
}

/// Reorders both halves into bit-reversed index order, in place.
///
/// `mr` is a running reversed counter; each pair is swapped exactly once
/// (only when the partner lies ahead of the current index).
pub(crate) fn bit_reverse(re: &mut [Q7], im: &mut [Q7]) {
    let n = re.len();
    let nn = n - 1;
    let mut mr = 0;

    for m in 1..n {
        let mut l = n >> 1;
        while mr + l > nn {
            l >>= 1;
        }
        mr = (mr & (l - 1)) + l;

        if mr > m {
            re.swap(m, mr);
            im.swap(m, mr);
        }
    }
}

/// True when any sample could overflow during an unscaled pass.
fn needs_scaling(re: &[Q7], im: &[Q7]) -> bool {
    re.iter()
        .zip(im)
        .any(|(r, i)| r.unsigned_abs() > SCALE_THRESHOLD || i.unsigned_abs() > SCALE_THRESHOLD)
}

/// Radix-2 Decimation-in-Time FFT core over split real/imaginary buffers.
///
/// Forward passes always halve, which spreads a `1/n` normalization over
/// the `log2(n)` passes. Inverse passes halve only when the data is
/// large enough to overflow; the number of halved passes is returned.
///
/// Both slices must have the same power-of-two length, at most `N_WAVE`.
pub(crate) fn radix_2_dit_fft_core<const INVERSE: bool>(
    re: &mut [Q7],
    im: &mut [Q7],
) -> ScaleShift {
    let n = re.len();
    debug_assert_eq!(n, im.len());
    debug_assert!(n.is_power_of_two() && n <= N_WAVE);

    // 1. Bit-reverse permutation
    bit_reverse(re, im);

    // 2. Butterfly stages
    let mut scale = 0;
    let mut stride = 1;

    while stride < n {
        let shift = if INVERSE {
            let shift = needs_scaling(re, im);
            if shift {
                scale += 1;
                tracing::trace!(stride, scale, "inverse pass scaled");
            }
            shift
        } else {
            true
        };

        // Phase step into the table for this pass, 0 <= phase < N_WAVE/2
        let tw_step = N_WAVE / (stride << 1);

        for group in 0..stride {
            let phase = group * tw_step;
            let mut wr = cosine(phase);
            let mut wi = -sine(phase);

            if INVERSE {
                wi = -wi;
            }
            if shift {
                wr = wr.scale_half();
                wi = wi.scale_half();
            }

            for i in (group..n).step_by(stride << 1) {
                let j = i + stride;

                // t = w * x[j]
                let tr = wr * re[j] - wi * im[j];
                let ti = wr * im[j] + wi * re[j];

                let mut qr = re[i];
                let mut qi = im[i];
                if shift {
                    qr = qr.scale_half();
                    qi = qi.scale_half();
                }

                re[j] = qr - tr;
                im[j] = qi - ti;
                re[i] = qr + tr;
                im[i] = qi + ti;
            }
        }
        stride <<= 1;
    }

    scale
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
