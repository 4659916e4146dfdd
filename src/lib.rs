#![no_std]

//! Integer-only fixed-point FFT for targets without an FPU.
//!
//! Samples are 8-bit `Q7` fractions. Forward transforms scale by `1/n`
//! spread across the passes; inverse transforms scale adaptively and
//! report how many halvings were applied.

// Enables the standard library for tests and the `std` feature,
// so you can run 'cargo test' on your PC normally.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod fixed;

pub use common::{FftError, FftProcess, ScaleShift};
pub use fixed::{fix_fft, fix_fftr, nyquist_bin, split, CplxFft, Q7, RealFft};
