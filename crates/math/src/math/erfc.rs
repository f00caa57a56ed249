//! Double-precision complementary error function
//!
//! `erfc(a) = P_i(a - x_i) * exp(-a^2)` for `a = |x|`, where interval `i`
//! covers `[2^(i/4) - 1, 2^((i+1)/4) - 1)` and is found from the exponent of
//! `(a + 1)^4`. `P_i` approximates `erfc(t) * exp(t^2)` around the interval
//! start. `a^2` is split exactly into a rounded square and its error term,
//! which is fed to the exponential as a tail so `exp(-a^2)` loses nothing to
//! the rounding of the square. Negative inputs use `erfc(-a) = 2 - erfc(a)`.
//!
//! Maximum observed error is about 4 ULP.

#![allow(clippy::excessive_precision)]

use super::bits;
use super::exp::exp_tail;
use crate::fallback::special_case;
use crate::tables::{ERFC_COEFFS, ERFC_NUM_INTERVALS, ERFC_POLY_LEN, ERFC_XINT};
use crate::traits::{SimdBits, SimdMask, SimdVector};

/// 2^27 + 1, Veltkamp splitting constant
const SCALE: f64 = 134217729.0;

/// top12(0x1p-50)
const TINY_TOP: u64 = 0x3cd;

/// top12(32.0): beyond this erfc(|x|) is 0 in double precision
const BIG_TOP: u64 = 0x404;

const SIGN_MASK: u64 = 0x8000_0000_0000_0000;

/// Vectorized complementary error function
///
/// Lanes with `|x| < 2^-50`, Inf or NaN are recomputed with `libm::erfc`.
///
/// # Example
///
/// ```rust
/// use vela_math::{F64x2, SimdVector};
/// use vela_math::math::erfc;
///
/// let y = erfc(F64x2::splat(-40.0));
/// assert_eq!(y.extract(0), 2.0);
/// ```
#[inline]
pub fn erfc<V: SimdVector<Scalar = f64>>(x: V) -> V {
    let ix = x.to_bits();
    let sign = ix.and(bits::<V>(SIGN_MASK));

    // 2 for negative x, 0 otherwise
    let fac = V::from_bits(ix.shr(63).shl(62));

    let atop = ix.shr(52).and(bits::<V>(0x7ff));
    let special = atop
        .sub(bits::<V>(TINY_TOP))
        .ge(bits::<V>(0x7ff - TINY_TOP));
    let big = atop.ge(bits::<V>(BIG_TOP));

    let a = x.abs();

    // interval index from the exponent of (a + 1)^4
    let a1 = a.add(V::splat(1.0));
    let a1 = a1.mul(a1);
    let xp1 = a1.mul(a1);
    let i = xp1.to_bits().shr(52).sub(bits::<V>(1023));
    let last = bits::<V>(ERFC_NUM_INTERVALS as u64);
    let i = V::Bits::select(i.gt(last), last, i);

    let z = a.sub(V::gather(&ERFC_XINT, i));

    let coeffs = ERFC_COEFFS.as_flattened();
    let row = mul_const(i, ERFC_POLY_LEN as u64);
    let coeff = |j: usize| V::gather(coeffs, row.add(bits::<V>(j as u64)));
    let mut p = coeff(ERFC_POLY_LEN - 1);
    for j in (0..ERFC_POLY_LEN - 1).rev() {
        p = p.fma(z, coeff(j));
    }

    // a^2 = a2 - e2 exactly
    let a2 = a.mul(a);
    let a_hi = V::splat(SCALE).fma(a, a.neg()).neg();
    let a_hi = V::splat(SCALE).fma(a, a_hi);
    let a_lo = a.sub(a_hi);
    let e2 = a_hi.neg().fma(a_hi, a2);
    let e2 = a_hi.neg().fma(a_lo, e2);
    let e2 = a_lo.neg().fma(a_hi, e2);
    let e2 = a_lo.neg().fma(a_lo, e2);

    let e = exp_tail(a2.neg(), e2);

    let p = V::from_bits(p.to_bits().xor(sign));
    let y = p.fma(e, fac);
    let y = V::select(big, fac, y);

    if special.any() {
        return special_case(x, y, special, libm::erfc);
    }
    y
}

/// `i * n` as a sum of shifts, one per set bit of `n`
#[inline]
fn mul_const<B: SimdBits>(i: B, n: u64) -> B {
    let mut acc = B::splat(0);
    let mut k = 0u32;
    while n >> k != 0 {
        if (n >> k) & 1 == 1 {
            acc = acc.add(i.shl(k));
        }
        k += 1;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::portable::{F64x2, PortableBits, PortableVector};

    fn ulps(got: f64, want: f64) -> u64 {
        (got.to_bits() as i64 - want.to_bits() as i64).unsigned_abs()
    }

    #[test]
    fn test_erfc_matches_libm() {
        for &x in &[0.01, 0.2, 0.5, 1.0, 1.7, 2.5, 4.0, 6.0, 10.0, 20.0, 26.0] {
            let got = erfc(F64x2::splat(x)).extract(0);
            let want = libm::erfc(x);
            assert!(ulps(got, want) <= 6, "erfc({}) = {} vs {}", x, got, want);
        }
    }

    #[test]
    fn test_erfc_negative_inputs() {
        for &x in &[-0.01, -0.5, -1.0, -3.0] {
            let got = erfc(F64x2::splat(x)).extract(0);
            let want = libm::erfc(x);
            assert!((got - want).abs() <= 4.0 * f64::EPSILON, "erfc({})", x);
        }
    }

    #[test]
    fn test_row_offset_follows_poly_len() {
        let i = PortableBits([0u64, 7]);
        let row = mul_const(i, ERFC_POLY_LEN as u64);
        assert_eq!(row.0, [0, 7 * ERFC_POLY_LEN as u64]);
        let row = mul_const(PortableBits([3u64, ERFC_NUM_INTERVALS as u64]), 10);
        assert_eq!(row.0, [30, 10 * ERFC_NUM_INTERVALS as u64]);
    }

    #[test]
    fn test_erfc_special_lanes() {
        let y = erfc(PortableVector([0.0f64, f64::INFINITY]));
        assert_eq!(y.0, [1.0, 0.0]);
        let y = erfc(PortableVector([f64::NEG_INFINITY, f64::NAN]));
        assert_eq!(y.extract(0), 2.0);
        assert!(y.extract(1).is_nan());
        let y = erfc(PortableVector([40.0f64, 1e300]));
        assert_eq!(y.0, [0.0, 0.0]);
    }
}
