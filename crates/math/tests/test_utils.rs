//! Test utilities for vela-math
//!
//! ULP distance helpers, interval sweeps against libm, and proptest
//! strategies shared by the integration tests.

#![allow(dead_code)]

use proptest::prelude::*;
use vela_math::{F32x4, F64x2, SimdVector};

// ============================================================================
// ULP Distance
// ============================================================================

/// Map f64 bits onto a monotonic integer line (-0 and +0 coincide)
fn ordered_f64(x: f64) -> i64 {
    let i = x.to_bits() as i64;
    if i < 0 {
        i64::MIN - i
    } else {
        i
    }
}

/// Map f32 bits onto a monotonic integer line (-0 and +0 coincide)
fn ordered_f32(x: f32) -> i32 {
    let i = x.to_bits() as i32;
    if i < 0 {
        i32::MIN - i
    } else {
        i
    }
}

/// Number of representable f64 values between `a` and `b`
///
/// Two NaNs are 0 apart; NaN against a number is `u64::MAX`.
pub fn ulp_distance_f64(a: f64, b: f64) -> u64 {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => 0,
        (false, false) => (ordered_f64(a) as i128 - ordered_f64(b) as i128).unsigned_abs() as u64,
        _ => u64::MAX,
    }
}

/// Number of representable f32 values between `a` and `b`
pub fn ulp_distance_f32(a: f32, b: f32) -> u64 {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => 0,
        (false, false) => (ordered_f32(a) as i64 - ordered_f32(b) as i64).unsigned_abs(),
        _ => u64::MAX,
    }
}

/// Same value, same sign of zero, or both NaN
pub fn same_f64(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

/// Same value, same sign of zero, or both NaN
pub fn same_f32(a: f32, b: f32) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

// ============================================================================
// Interval Sweeps
// ============================================================================

/// Worst case found by a sweep
#[derive(Debug, Clone, Copy)]
pub struct SweepResult<T> {
    pub max_ulps: u64,
    pub worst_input: T,
    pub worst_output: T,
    pub worst_reference: T,
}

/// `n` points spread evenly over `[lo, hi]`, packed into vectors of two lanes
pub fn sweep_f64<K, R>(lo: f64, hi: f64, n: usize, kernel: K, reference: R) -> SweepResult<f64>
where
    K: Fn(F64x2) -> F64x2,
    R: Fn(f64) -> f64,
{
    let mut result = SweepResult {
        max_ulps: 0,
        worst_input: lo,
        worst_output: 0.0,
        worst_reference: 0.0,
    };
    let step = (hi - lo) / (n - 1) as f64;
    for i in (0..n).step_by(2) {
        let x0 = lo + step * i as f64;
        let x1 = (lo + step * (i + 1) as f64).min(hi);
        let y = kernel(F64x2::from_slice(&[x0, x1]));
        for (lane, x) in [x0, x1].into_iter().enumerate() {
            let got = y.extract(lane);
            let want = reference(x);
            let d = ulp_distance_f64(got, want);
            if d > result.max_ulps {
                result = SweepResult {
                    max_ulps: d,
                    worst_input: x,
                    worst_output: got,
                    worst_reference: want,
                };
            }
        }
    }
    result
}

/// `n` points spread evenly over `[lo, hi]`, packed into vectors of four lanes
pub fn sweep_f32<K, R>(lo: f32, hi: f32, n: usize, kernel: K, reference: R) -> SweepResult<f32>
where
    K: Fn(F32x4) -> F32x4,
    R: Fn(f32) -> f32,
{
    let mut result = SweepResult {
        max_ulps: 0,
        worst_input: lo,
        worst_output: 0.0,
        worst_reference: 0.0,
    };
    let step = (hi as f64 - lo as f64) / (n - 1) as f64;
    for i in (0..n).step_by(4) {
        let xs: [f32; 4] = core::array::from_fn(|k| ((lo as f64 + step * (i + k) as f64) as f32).min(hi));
        let y = kernel(F32x4::from_slice(&xs));
        for (lane, &x) in xs.iter().enumerate() {
            let got = y.extract(lane);
            let want = reference(x);
            let d = ulp_distance_f32(got, want);
            if d > result.max_ulps {
                result = SweepResult {
                    max_ulps: d,
                    worst_input: x,
                    worst_output: got,
                    worst_reference: want,
                };
            }
        }
    }
    result
}

/// Fail with the worst case if a sweep exceeds `max_ulps`
pub fn assert_sweep<T: core::fmt::Debug>(name: &str, result: SweepResult<T>, max_ulps: u64) {
    assert!(
        result.max_ulps <= max_ulps,
        "{}: {} ULP at x={:?} (got {:?}, libm {:?}), allowed {}",
        name,
        result.max_ulps,
        result.worst_input,
        result.worst_output,
        result.worst_reference,
        max_ulps
    );
}

// ============================================================================
// Special Inputs
// ============================================================================

/// Inputs every classifier must route somewhere sensible
pub const SPECIAL_F64: [f64; 12] = [
    0.0,
    -0.0,
    f64::INFINITY,
    f64::NEG_INFINITY,
    f64::NAN,
    f64::MIN_POSITIVE,
    -f64::MIN_POSITIVE,
    5e-324,
    -5e-324,
    f64::MAX,
    f64::MIN,
    1e-300,
];

/// Single-precision counterpart of [`SPECIAL_F64`]
pub const SPECIAL_F32: [f32; 12] = [
    0.0,
    -0.0,
    f32::INFINITY,
    f32::NEG_INFINITY,
    f32::NAN,
    f32::MIN_POSITIVE,
    -f32::MIN_POSITIVE,
    1e-45,
    -1e-45,
    f32::MAX,
    f32::MIN,
    1e-30,
];

// ============================================================================
// Proptest Strategies
// ============================================================================

/// Finite f64 values of moderate magnitude
pub fn moderate_f64() -> impl Strategy<Value = f64> {
    -700.0f64..700.0f64
}

/// Finite f64 values in `[-1, 1]`
pub fn unit_f64() -> impl Strategy<Value = f64> {
    -1.0f64..=1.0f64
}

/// Positive normal f64 values from the smallest normal up to 2^1023
pub fn positive_normal_f64() -> impl Strategy<Value = f64> {
    (0x0010_0000_0000_0000u64..0x7fe0_0000_0000_0000u64).prop_map(f64::from_bits)
}

/// Any f64 bit pattern: NaNs, infinities, subnormals included
pub fn any_bits_f64() -> impl Strategy<Value = f64> {
    any::<u64>().prop_map(f64::from_bits)
}

/// Any f32 bit pattern: NaNs, infinities, subnormals included
pub fn any_bits_f32() -> impl Strategy<Value = f32> {
    any::<u32>().prop_map(f32::from_bits)
}

/// Finite f32 values of moderate magnitude
pub fn moderate_f32() -> impl Strategy<Value = f32> {
    -80.0f32..80.0f32
}

/// Eight-lane batches mixing ordinary and special values
pub fn mixed_batch_f64() -> impl Strategy<Value = [f64; 8]> {
    prop::array::uniform8(prop_oneof![
        4 => -50.0f64..50.0f64,
        1 => prop::sample::select(SPECIAL_F64.to_vec()),
        1 => any_bits_f64(),
    ])
}
