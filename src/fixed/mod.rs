pub mod types;
pub mod table;
mod core;
pub mod complex;
pub mod real;
pub mod split;

pub use complex::{fix_fft, CplxFft};
pub use real::{fix_fftr, RealFft};
pub use split::{nyquist_bin, split};
pub use types::Q7;
pub use self::core::SCALE_THRESHOLD;
