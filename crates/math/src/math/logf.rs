//! Single-precision logarithms in base e, 2 and 10
//!
//! `x = 2^n * (1 + r)` with `1 + r` in `[2/3, 4/3)`, found by subtracting
//! the bits of 2/3 so the exponent and mantissa split lands on the right
//! side of 1. No table is needed at this precision; each base has its own
//! polynomial in `r`.
//!
//! Zero, negative, subnormal, infinite and NaN inputs are recomputed with
//! the scalar routine.
//!
//! # Error Bounds
//!
//! - `logf`: 3.34 ULP
//! - `log2f`: 2.48 ULP
//! - `log10f`: 3.31 ULP

#![allow(clippy::excessive_precision)]

use super::bits;
use crate::fallback::special_case;
use crate::poly::{estrin, pairwise_horner, EstrinPowers};
use crate::traits::{SimdBits, SimdMask, SimdVector};

const LN2: f32 = 0.6931472;
const INV_LN10: f32 = 0.4342945;

/// `log(1 + r) - r ~= r^2 * (P1 + P2 r + ... + P7 r^6)`, stored P1 first
const POLY_E: [f32; 7] = [
    -0.49999917,
    0.33336443,
    -0.2500934,
    0.19827896,
    -0.16386643,
    0.16924025,
    -0.1554937,
];

/// `log2(1 + r) ~= r * P(r)`
const POLY_2: [f32; 9] = [
    1.442695,
    -0.7213466,
    0.4808964,
    -0.36078507,
    0.28869903,
    -0.23685502,
    0.2019325,
    -0.22190416,
    0.20228827,
];

/// `log10(1 + r) - r/ln10 ~= r^2 * P(r)`
const POLY_10: [f32; 8] = [
    -0.21714708,
    0.14476353,
    -0.10860104,
    0.086922616,
    -0.0713954,
    0.060656108,
    -0.06635396,
    0.061275203,
];

const MIN_NORM: u64 = 0x0080_0000;
const INF: u64 = 0x7f80_0000;
const MANTISSA_MASK: u64 = 0x007f_ffff;

/// Bits of 2/3, rounded up
const OFF: u64 = 0x3f2a_aaab;

/// `(special, n, r)` for `x = 2^n * (1 + r)`
#[inline(always)]
fn reduce<V: SimdVector<Scalar = f32>>(x: V) -> (V::Mask, V, V) {
    let u = x.to_bits();
    // subnormal, zero, negative, Inf or NaN
    let special = u
        .sub(bits::<V>(MIN_NORM))
        .ge(bits::<V>(INF - MIN_NORM));

    let u = u.sub(bits::<V>(OFF));
    let n = V::from_int(u.sar(23));
    let u = u.and(bits::<V>(MANTISSA_MASK)).add(bits::<V>(OFF));
    let r = V::from_bits(u).sub(V::splat(1.0));
    (special, n, r)
}

/// Vectorized natural logarithm for f32
///
/// # Example
///
/// ```rust
/// use vela_math::{F32x4, SimdVector};
/// use vela_math::math::logf;
///
/// assert_eq!(logf(F32x4::splat(0.0)).extract(0), f32::NEG_INFINITY);
/// ```
#[inline]
pub fn logf<V: SimdVector<Scalar = f32>>(x: V) -> V {
    let (special, n, r) = reduce(x);

    let r2 = r.mul(r);
    let p = r.fma(V::splat(POLY_E[5]), V::splat(POLY_E[4]));
    let q = r.fma(V::splat(POLY_E[3]), V::splat(POLY_E[2]));
    let y = r.fma(V::splat(POLY_E[1]), V::splat(POLY_E[0]));
    let p = r2.fma(V::splat(POLY_E[6]), p);
    let q = p.fma(r2, q);
    let y = q.fma(r2, y);
    let p = n.fma(V::splat(LN2), r);
    let y = y.fma(r2, p);

    if special.any() {
        return special_case(x, y, special, libm::logf);
    }
    y
}

/// Vectorized base-2 logarithm for f32
///
/// Exact for powers of two.
#[inline]
pub fn log2f<V: SimdVector<Scalar = f32>>(x: V) -> V {
    let (special, n, r) = reduce(x);

    let p = pairwise_horner(r, r.mul(r), &POLY_2);
    let y = p.fma(r, n);

    if special.any() {
        return special_case(x, y, special, libm::log2f);
    }
    y
}

/// Vectorized base-10 logarithm for f32
#[inline]
pub fn log10f<V: SimdVector<Scalar = f32>>(x: V) -> V {
    let (special, n, r) = reduce(x);

    let r2 = r.mul(r);
    let p = estrin(&EstrinPowers::from_x2(r, r2), &POLY_10);

    // log10(x) = (n*ln2 + r)/ln10 + r^2 * P(r)
    let hi = n.fma(V::splat(LN2), r).mul(V::splat(INV_LN10));
    let y = p.fma(r2, hi);

    if special.any() {
        return special_case(x, y, special, libm::log10f);
    }
    y
}
