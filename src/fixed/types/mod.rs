mod fixed;

pub use fixed::{fix_mul, Q7, MUL_SHIFT, WORD_BITS};
