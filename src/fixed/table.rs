// src/fixed/table.rs

use super::types::Q7;

/// Full period of the sine table, in samples.
pub const N_WAVE: usize = 256;

/// log2(N_WAVE): the largest supported transform order.
pub const LOG2_N_WAVE: u32 = 8;

/// Sine wave sampled at `N_WAVE` points with amplitude 127.
///
/// Only 3/4 of the period is stored; the last quarter is the first
/// quarter negated and shifted by half a period.
pub static SINEWAVE: [i8; N_WAVE - N_WAVE / 4] = [
    0, 3, 6, 9, 12, 15, 18, 21, 24, 28, 31, 34,
    37, 40, 43, 46, 48, 51, 54, 57, 60, 63, 65, 68,
    71, 73, 76, 78, 81, 83, 85, 88, 90, 92, 94, 96,
    98, 100, 102, 104, 106, 108, 109, 111, 112, 114, 115, 117,
    118, 119, 120, 121, 122, 123, 124, 124, 125, 126, 126, 127,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 126, 126,
    125, 124, 124, 123, 122, 121, 120, 119, 118, 117, 115, 114,
    112, 111, 109, 108, 106, 104, 102, 100, 98, 96, 94, 92,
    90, 88, 85, 83, 81, 78, 76, 73, 71, 68, 65, 63,
    60, 57, 54, 51, 48, 46, 43, 40, 37, 34, 31, 28,
    24, 21, 18, 15, 12, 9, 6, 3, 0, -3, -6, -9,
    -12, -15, -18, -21, -24, -28, -31, -34, -37, -40, -43, -46,
    -48, -51, -54, -57, -60, -63, -65, -68, -71, -73, -76, -78,
    -81, -83, -85, -88, -90, -92, -94, -96, -98, -100, -102, -104,
    -106, -108, -109, -111, -112, -114, -115, -117, -118, -119, -120, -121,
    -122, -123, -124, -124, -125, -126, -126, -127, -127, -127, -127, -127,
];

/// Raw table read at any phase index.
#[inline]
pub fn wave(phase: usize) -> Q7 {
    let k = phase % N_WAVE;
    match SINEWAVE.get(k) {
        Some(&v) => Q7::from_bits(v),
        None => -Q7::from_bits(SINEWAVE[k - N_WAVE / 2]),
    }
}

/// Cosine at `2π·phase/N_WAVE`.
#[inline]
pub fn cosine(phase: usize) -> Q7 {
    wave(phase + N_WAVE / 4)
}

/// Sine at `2π·phase/N_WAVE`, taken as `-cos(x + π/2)`.
#[inline]
pub fn sine(phase: usize) -> Q7 {
    -cosine(phase + N_WAVE / 4)
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
