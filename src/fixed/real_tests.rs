use super::super::split::{nyquist_bin, split};
use super::super::table::LOG2_N_WAVE;
use num_complex::Complex;
use super::*;
use proptest::collection::vec as pvec;
use proptest::prelude::*;
use std::vec;
use std::vec::Vec;
use test_strategy::proptest;

fn q7s(raw: &[i8]) -> Vec<Q7> {
    raw.iter().map(|&v| Q7::from_bits(v)).collect()
}

fn bits(buf: &[Q7]) -> Vec<i8> {
    buf.iter().map(|v| v.to_bits()).collect()
}

#[test]
fn test_deinterleave_and_back() {
    let mut buffer = q7s(&[0, 1, 2, 3, 4, 5, 6, 7]);

    deinterleave(&mut buffer);
    assert_eq!(bits(&buffer), [0, 2, 4, 6, 1, 3, 5, 7]);

    interleave(&mut buffer);
    assert_eq!(bits(&buffer), [0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_deinterleave_largest_buffer() {
    let n = N_WAVE;
    let mut buffer: Vec<Q7> = (0..n).map(|k| Q7::from_bits((k % 128) as i8)).collect();
    let original = buffer.clone();

    deinterleave(&mut buffer);
    for i in 0..n / 2 {
        assert_eq!(buffer[i], original[2 * i]);
        assert_eq!(buffer[n / 2 + i], original[2 * i + 1]);
    }
    interleave(&mut buffer);
    assert_eq!(buffer, original);
}

#[test]
fn test_rfft_forward_impulse() {
    // [1, 0, 0, 0] -> even = [1, 0], odd = [0, 0] -> half-size spectrum [1/2, 1/2]
    let mut buffer = q7s(&[127, 0, 0, 0]);

    let scale = fix_fftr(&mut buffer, 2, false).unwrap();

    assert_eq!(scale, 0);
    // first half: real parts, second half: imaginary parts
    assert_eq!(bits(&buffer), [63, 63, 0, 0]);

    let mut buffer = q7s(&[127, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(fix_fftr(&mut buffer, 3, false), Ok(0));
    assert_eq!(bits(&buffer), [31, 31, 31, 31, 0, 0, 0, 0]);
}

#[test]
fn test_rfft_forward_packs_even_as_real() {
    let mut buffer = q7s(&[10, -10, 20, -20, 30, -30, 40, -40]);

    assert_eq!(fix_fftr(&mut buffer, 3, false), Ok(0));
    assert_eq!(bits(&buffer), [25, 0, -5, -10, -25, 10, 5, 0]);

    // and back again
    assert_eq!(fix_fftr(&mut buffer, 3, true), Ok(0));
    assert_eq!(bits(&buffer), [10, -10, 20, -20, 30, -30, 40, -40]);
}

#[test]
fn test_rfft_inverse_transforms_before_repacking() {
    // A packed real DC bin synthesizes a constant on the even samples
    let mut buffer = q7s(&[100, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(fix_fftr(&mut buffer, 3, true), Ok(1));
    assert_eq!(bits(&buffer), [50, 0, 50, 0, 50, 0, 50, 0]);

    // The imaginary DC bin lands on the odd samples
    let mut buffer = q7s(&[0, 0, 0, 0, 100, 0, 0, 0]);
    assert_eq!(fix_fftr(&mut buffer, 3, true), Ok(1));
    assert_eq!(bits(&buffer), [0, 50, 0, 50, 0, 50, 0, 50]);

    let mut buffer = q7s(&[0, 100, 0, 0, 0, 0, 0, 0]);
    assert_eq!(fix_fftr(&mut buffer, 3, true), Ok(1));
    assert_eq!(bits(&buffer), [50, 0, 0, 50, -50, 0, 0, -50]);
}

#[test]
fn test_rfft_struct_and_trait() {
    let fft = RealFft::new(3).unwrap();
    assert_eq!(fft.order(), 3);
    assert_eq!(fft.size(), 8);

    let mut buffer = q7s(&[0, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(FftProcess::process(&fft, &mut buffer, false), Ok(0));
    assert_eq!(bits(&buffer), [3, -2, -1, 0, 3, 0, -1, -2]);
}

#[test]
fn test_rfft_size_boundary() {
    // 2^LOG2_N_WAVE real samples is the largest accepted length
    let order = LOG2_N_WAVE;
    let mut buffer = vec![Q7::ZERO; 1 << order];
    buffer[0] = Q7::MAX;
    assert_eq!(fix_fftr(&mut buffer, order, false), Ok(0));
    assert!(fix_fftr(&mut buffer, order, true).is_ok());
    assert_eq!(RealFft::new(order).map(|fft| fft.size()), Ok(N_WAVE));

    let mut buffer: Vec<Q7> = (0..(1usize << (order + 1)))
        .map(|k| Q7::from_bits(k as i8))
        .collect();
    let before = buffer.clone();
    for inverse in [false, true] {
        assert_eq!(
            fix_fftr(&mut buffer, order + 1, inverse),
            Err(FftError::SizeExceeded)
        );
        assert_eq!(buffer, before);
    }
    assert_eq!(RealFft::new(order + 1), Err(FftError::SizeExceeded));
}

#[test]
fn test_rfft_largest_order_unpacks() {
    // Every length the real transform accepts can be unpacked
    let mut buffer = vec![Q7::from_bits(40); N_WAVE];
    assert_eq!(fix_fftr(&mut buffer, LOG2_N_WAVE, false), Ok(0));
    assert_eq!(buffer[0], Q7::from_bits(40));
    assert_eq!(buffer[N_WAVE / 2], Q7::from_bits(40));

    let mut spectrum = vec![Complex::new(Q7::ZERO, Q7::ZERO); N_WAVE];
    assert_eq!(split(&buffer, &mut spectrum), Ok(()));
    assert_eq!(spectrum[0], Complex::new(Q7::from_bits(80), Q7::ZERO));
    assert!(spectrum[1..].iter().all(|c| c.re == Q7::ZERO && c.im == Q7::ZERO));
    assert_eq!(nyquist_bin(&buffer), Ok(Q7::ZERO));
}

#[test]
fn test_rfft_round_trip_golden() {
    let mut buffer = q7s(&[60, -20, 35, -45]);

    assert_eq!(fix_fftr(&mut buffer, 2, false), Ok(0));
    assert_eq!(bits(&buffer), [47, 13, -32, 12]);

    assert_eq!(fix_fftr(&mut buffer, 2, true), Ok(0));
    assert_eq!(bits(&buffer), [60, -20, 34, -44]);
}

#[test]
fn test_rfft_rejects_invalid_geometry() {
    let mut buffer = q7s(&[1, 2, 3, 4]);

    assert_eq!(fix_fftr(&mut buffer, 0, false), Err(FftError::InvalidOrder));
    assert_eq!(fix_fftr(&mut buffer, 1, true), Err(FftError::InvalidOrder));
    assert_eq!(fix_fftr(&mut buffer, 3, false), Err(FftError::SizeMismatch));
    assert_eq!(fix_fftr(&mut buffer[..3], 2, true), Err(FftError::SizeMismatch));
    assert_eq!(bits(&buffer), [1, 2, 3, 4]);

    assert_eq!(RealFft::new(1), Err(FftError::InvalidOrder));
}

#[proptest]
fn real_round_trip_restores_signal(
    #[strategy(2u32..=4)] order: u32,
    #[strategy(pvec(-63i8..=63, 1usize << #order))] x: Vec<i8>,
) {
    let mut buffer = q7s(&x);

    prop_assert_eq!(fix_fftr(&mut buffer, order, false), Ok(0));
    let scale = fix_fftr(&mut buffer, order, true).unwrap();
    prop_assert!(scale < order);

    let tolerance = 1i32 << order;
    for (got, want) in buffer.iter().zip(&x) {
        let restored = (got.to_bits() as i32) << scale;
        prop_assert!((restored - *want as i32).abs() <= tolerance);
    }
}
