//! Double-precision base-2 exponential
//!
//! `x = k/N + r` with `|r| <= 1/(2N)`, rounded with a shift of `1.5*2^52/N`.
//! The scale `2^(k/N)` comes from the same table as [`exp`](super::exp).
//!
//! Maximum measured error is 1.65 ULP with the 128-entry table.

#![allow(clippy::excessive_precision)]

use super::bits;
use super::exp::{scale_special, EXP_PARAMS};
use crate::fallback::special_case;
use crate::poly::{estrin, EstrinPowers};
use crate::traits::{SimdBits, SimdMask, SimdVector};

/// `2^r - 1 ~= r * P(r)`, absolute error minimised on `[-1/256, 1/256]`
const POLY: [f64; 4] = [
    0.6931471805598484,
    0.24022650695907724,
    0.055504134091239624,
    0.009618132996263837,
];

/// Above this |x| the table scale leaves the exponent range
const BIG_BOUND: f64 = 1022.0;

/// Beyond this |x| the result is certainly 0 or Inf
const UOFLOW_BOUND: f64 = 1280.0;

/// Vectorized 2^x
///
/// Lanes with `|x| > 1022` finish through two-step scaling so overflow and
/// underflow give the correctly signed infinity or zero. NaN lanes are
/// recomputed with `libm::exp2`.
///
/// # Example
///
/// ```rust
/// use vela_math::{F64x2, SimdVector};
/// use vela_math::math::exp2;
///
/// assert_eq!(exp2(F64x2::splat(10.0)).extract(0), 1024.0);
/// ```
#[inline]
pub fn exp2<V: SimdVector<Scalar = f64>>(x: V) -> V {
    let n = 1u64 << EXP_PARAMS.bits;
    let special = x.abs().le(V::splat(BIG_BOUND)).not();

    // x = k/N + r
    let shift = V::splat(super::SHIFT_F64 / n as f64);
    let kd = x.add(shift);
    let ki = kd.to_bits();
    let kd = kd.sub(shift);
    let r = x.sub(kd);

    // scale = 2^(k/N), valid while -1023*N < k < 1024*N
    let idx = ki.and(bits::<V>(n - 1));
    let top = ki.shl(52 - EXP_PARAMS.bits);
    let scale = V::from_bits(V::Bits::gather(EXP_PARAMS.table, idx).add(top));

    let r2 = r.mul(r);
    let p = estrin(&EstrinPowers::from_x2(r, r2), &POLY);
    let y = r.mul(p);

    if special.any() {
        let out = scale_special(scale, y, kd, UOFLOW_BOUND);
        let nan = x.eq(x).not();
        if nan.any() {
            return special_case(x, out, nan, libm::exp2);
        }
        return out;
    }
    y.fma(scale, scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::portable::{F64x2, PortableVector};

    #[test]
    fn test_exp2_integers_are_exact() {
        for k in -20..=20 {
            let got = exp2(F64x2::splat(k as f64)).extract(0);
            assert_eq!(got, libm::exp2(k as f64), "2^{}", k);
        }
    }

    #[test]
    fn test_exp2_limits() {
        let y = exp2(PortableVector([1024.5f64, -1100.0]));
        assert_eq!(y.0, [f64::INFINITY, 0.0]);

        let y = exp2(PortableVector([f64::NAN, f64::NEG_INFINITY]));
        assert!(y.extract(0).is_nan());
        assert_eq!(y.extract(1), 0.0);
    }

    #[test]
    fn test_exp2_subnormal() {
        let got = exp2(F64x2::splat(-1074.0)).extract(0);
        assert_eq!(got, f64::from_bits(1));
    }
}
