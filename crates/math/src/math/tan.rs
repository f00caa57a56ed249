//! Double-precision tangent
//!
//! `x = q*pi/2 + r` with `|r| <= pi/4`. The polynomial approximates `tan`
//! on the half angle `r/2`, and the double-angle formula
//! `tan(r) = 2p / (1 - p^2)` finishes. When `q` is odd the result is
//! `-1/tan(r)`, which the same two terms give by swapping numerator and
//! denominator, so only one division is needed.
//!
//! Maximum observed error is 3.48 ULP.

#![allow(clippy::excessive_precision)]

use super::{bits, SHIFT_F64};
use crate::config::{DefaultMode, FpMode};
use crate::fallback::special_case;
use crate::poly::{estrin, EstrinPowers};
use crate::traits::{SimdBits, SimdMask, SimdVector};

const TWO_OVER_PI: f64 = 0.6366197723675814;
const NEG_HALF_PI_HI: f64 = -1.5707963267948966;
const NEG_HALF_PI_LO: f64 = -6.123233995736766e-17;

/// `tan(r) ~= r + r^3 * P(r^2)` on `[-pi/8, pi/8]`
const POLY: [f64; 9] = [
    0.33333333333333337,
    0.13333333333328587,
    0.05396825397674135,
    0.021869487964824925,
    0.008863254622710154,
    0.003591771906725358,
    0.0014597082639986737,
    0.0005657608442435412,
    0.0003188245646742212,
];

/// asuint64(0x1p23)
const RANGE_VAL: u64 = 0x4160_0000_0000_0000;

/// asuint64(0x1p-26)
const TINY_BOUND: u64 = 0x3e50_0000_0000_0000;

const ABS_MASK: u64 = 0x7fff_ffff_ffff_ffff;

/// Vectorized tangent in the default [`FpMode`]
#[inline]
pub fn tan<V: SimdVector<Scalar = f64>>(x: V) -> V {
    tan_with::<DefaultMode, V>(x)
}

/// Vectorized tangent
///
/// Lanes with `|x| > 2^23`, Inf or NaN are recomputed with `libm::tan`. In
/// `RespectExceptions` mode `|x| < 2^-26` is flagged too and flagged lanes
/// run the fast path on 0.
///
/// # Example
///
/// ```rust
/// use vela_math::{F64x2, SimdVector};
/// use vela_math::math::tan;
///
/// let y = tan(F64x2::splat(core::f64::consts::FRAC_PI_4));
/// assert!((y.extract(0) - 1.0).abs() < 1e-15);
/// ```
#[inline]
pub fn tan_with<M: FpMode, V: SimdVector<Scalar = f64>>(x: V) -> V {
    let iax = x.to_bits().and(bits::<V>(ABS_MASK));
    let (special, xm) = if M::RESPECT_EXCEPTIONS {
        let special = iax
            .sub(bits::<V>(TINY_BOUND))
            .gt(bits::<V>(RANGE_VAL - TINY_BOUND));
        (special, V::select(special, V::splat(0.0), x))
    } else {
        (iax.gt(bits::<V>(RANGE_VAL)), x)
    };

    // q = round(x / (pi/2))
    let q = xm
        .fma(V::splat(TWO_OVER_PI), V::splat(SHIFT_F64))
        .sub(V::splat(SHIFT_F64));
    let qi = q.to_int();

    // r = (x - q*pi/2) / 2
    let r = q.fma(V::splat(NEG_HALF_PI_HI), xm);
    let r = q.fma(V::splat(NEG_HALF_PI_LO), r);
    let r = r.mul(V::splat(0.5));

    let r2 = r.mul(r);
    let r4 = r2.mul(r2);
    let p = estrin(&EstrinPowers::from_x2(r2, r4), &POLY[1..]);
    let p = p.fma(r2, V::splat(POLY[0]));
    let p = r2.fma(p.mul(r), r);

    // tan(2p) = 2p / (1 - p^2), cotangent when q is odd
    let n = p.fma(p, V::splat(-1.0));
    let d = p.add(p);
    let even = qi.and(bits::<V>(1)).eq(bits::<V>(0));
    let num = V::select(even, d.neg(), n);
    let den = V::select(even, n, d);
    let y = num.div(den);

    if special.any() {
        return special_case(x, y, special, libm::tan);
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::portable::{F64x2, PortableVector};
    use crate::config::{Fast, RespectExceptions};

    #[test]
    fn test_tan_signed_zero() {
        let y = tan_with::<Fast, _>(PortableVector([0.0f64, -0.0]));
        assert_eq!(y.extract(0).to_bits(), 0);
        assert_eq!(y.extract(1).to_bits(), (-0.0f64).to_bits());
    }

    #[test]
    fn test_tan_moderate() {
        for &x in &[0.1, 0.7, 1.0, 1.5, -2.0, 3.0, 20.0, 1000.5] {
            let got = tan(F64x2::splat(x)).extract(0);
            let want = libm::tan(x);
            assert!((got - want).abs() <= 4.0 * f64::EPSILON * want.abs(), "tan({})", x);
        }
    }

    fn ulps(got: f64, want: f64) -> u64 {
        (got.to_bits() as i64 - want.to_bits() as i64).unsigned_abs()
    }

    /// Every input within `steps` ULP of `centre`, two lanes at a time
    fn check_around(centre: f64, steps: i64) {
        for d in (-steps..=steps).step_by(2) {
            let a = f64::from_bits((centre.to_bits() as i64 + d) as u64);
            let b = f64::from_bits((centre.to_bits() as i64 + d + 1) as u64);
            let y = tan(PortableVector([a, b]));
            for (x, got) in [(a, y.extract(0)), (b, y.extract(1))] {
                let want = libm::tan(x);
                assert_eq!(got.is_sign_negative(), want.is_sign_negative(), "tan({:e})", x);
                assert!(ulps(got, want) <= 5, "tan({:e}) = {:e}, want {:e}", x, got, want);
            }
        }
    }

    #[test]
    fn test_tan_near_poles() {
        // (k - 1/2) pi, where q is odd and the cotangent branch applies
        for k in 1..=100 {
            let pole = (k as f64 - 0.5) * core::f64::consts::PI;
            check_around(pole, 8);
            check_around(-pole, 8);
        }
    }

    #[test]
    fn test_tan_near_quadrant_switch() {
        // odd multiples of pi/4, where round(2x/pi) changes parity
        for k in 0..100 {
            let edge = (2 * k + 1) as f64 * core::f64::consts::FRAC_PI_4;
            check_around(edge, 8);
            check_around(-edge, 8);
        }
    }

    #[test]
    fn test_tan_fallback_lanes() {
        let x = PortableVector([1e9f64, 0.25]);
        let y = tan_with::<RespectExceptions, _>(x);
        assert_eq!(y.extract(0), libm::tan(1e9));
        assert_eq!(y.extract(1), tan_with::<Fast, _>(F64x2::splat(0.25)).extract(0));

        assert!(tan(F64x2::splat(f64::INFINITY)).extract(0).is_nan());
    }
}
