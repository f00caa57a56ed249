//! Double-precision sine and cosine
//!
//! `|x| = n*pi + r` with `|r| <= pi/2`, using a three-part Cody-Waite split
//! of pi. `sin(r)` is an odd polynomial in `r`; the parity of `n` flips the
//! sign. Cosine reuses the same reduction on `|x| + pi/2` with `n` shifted by
//! one half.
//!
//! `|x| >= 2^23`, Inf and NaN are recomputed with the scalar routine.
//! Maximum observed error is about 3 ULP for both functions.

#![allow(clippy::excessive_precision)]

use super::{bits, SHIFT_F64};
use crate::config::{DefaultMode, FpMode};
use crate::fallback::special_case;
use crate::poly::horner;
use crate::traits::{SimdBits, SimdMask, SimdVector};

const INV_PI: f64 = 0.3183098861837907;
const HALF_PI: f64 = 1.5707963267948966;
const PI_1: f64 = 3.141592653589793;
const PI_2: f64 = 1.224646799147353e-16;
const PI_3: f64 = 2.165713347843828e-32;

/// `sin(r) ~= r + r^3 * P(r^2)` on `[-pi/2, pi/2]`
const POLY: [f64; 7] = [
    -0.1666666666666606,
    0.008333333333273485,
    -0.0001984126982169595,
    2.755731618671281e-06,
    -2.505185490163253e-08,
    1.604733546032205e-10,
    -7.364473665132213e-13,
];

/// asuint64(0x1p23)
const RANGE_VAL: u64 = 0x4160_0000_0000_0000;

/// asuint64(0x1p-255)
const TINY_BOUND: u64 = 0x3000_0000_0000_0000;

/// Below this |x|, cos(x) rounds to exactly 1 (2^-27)
const COS_ONE_BOUND: f64 = 7.450580596923828e-09;

const ABS_MASK: u64 = 0x7fff_ffff_ffff_ffff;

/// Flag lanes the polynomial cannot handle and, in `RespectExceptions`
/// mode, substitute 1 into them
#[inline(always)]
fn classify<M: FpMode, V: SimdVector<Scalar = f64>>(iax: V::Bits, r: V) -> (V::Mask, V) {
    if M::RESPECT_EXCEPTIONS {
        // tiny, huge, Inf or NaN
        let special = iax
            .sub(bits::<V>(TINY_BOUND))
            .ge(bits::<V>(RANGE_VAL - TINY_BOUND));
        (special, V::select(special, V::splat(1.0), r))
    } else {
        (iax.ge(bits::<V>(RANGE_VAL)), r)
    }
}

/// `r - n*pi`, then the odd polynomial
#[inline(always)]
fn sin_poly<V: SimdVector<Scalar = f64>>(r: V, n: V) -> V {
    let r = n.fma(V::splat(-PI_1), r);
    let r = n.fma(V::splat(-PI_2), r);
    let r = n.fma(V::splat(-PI_3), r);

    let r2 = r.mul(r);
    let y = horner(r2, &POLY);
    y.mul(r2).fma(r, r)
}

/// Vectorized sine in the default [`FpMode`]
#[inline]
pub fn sin<V: SimdVector<Scalar = f64>>(x: V) -> V {
    sin_with::<DefaultMode, V>(x)
}

/// Vectorized sine
///
/// # Example
///
/// ```rust
/// use vela_math::{F64x2, SimdVector};
/// use vela_math::math::sin;
///
/// let y = sin(F64x2::splat(-0.0));
/// assert!(y.extract(0) == 0.0 && y.extract(0).is_sign_negative());
/// ```
#[inline]
pub fn sin_with<M: FpMode, V: SimdVector<Scalar = f64>>(x: V) -> V {
    let ix = x.to_bits();
    let iax = ix.and(bits::<V>(ABS_MASK));
    let sign = ix.xor(iax);
    let (special, r) = classify::<M, V>(iax, x.abs());

    // n = round(|x|/pi)
    let n = r.fma(V::splat(INV_PI), V::splat(SHIFT_F64));
    let odd = n.to_bits().shl(63);
    let n = n.sub(V::splat(SHIFT_F64));

    let y = sin_poly(r, n);
    let y = V::from_bits(y.to_bits().xor(sign.xor(odd)));

    if special.any() {
        return special_case(x, y, special, libm::sin);
    }
    y
}

/// Vectorized cosine in the default [`FpMode`]
#[inline]
pub fn cos<V: SimdVector<Scalar = f64>>(x: V) -> V {
    cos_with::<DefaultMode, V>(x)
}

/// Vectorized cosine
///
/// Returns exactly 1 for `|x| < 2^-27`.
///
/// # Example
///
/// ```rust
/// use vela_math::{F64x2, SimdVector};
/// use vela_math::math::cos;
///
/// assert_eq!(cos(F64x2::splat(0.0)).extract(0), 1.0);
/// ```
#[inline]
pub fn cos_with<M: FpMode, V: SimdVector<Scalar = f64>>(x: V) -> V {
    let iax = x.to_bits().and(bits::<V>(ABS_MASK));
    let (special, r) = classify::<M, V>(iax, x.abs());

    // n = round((|x| + pi/2)/pi) - 1/2
    let n = r
        .add(V::splat(HALF_PI))
        .fma(V::splat(INV_PI), V::splat(SHIFT_F64));
    let odd = n.to_bits().shl(63);
    let n = n.sub(V::splat(SHIFT_F64)).sub(V::splat(0.5));

    let y = sin_poly(r, n);
    let y = V::from_bits(y.to_bits().xor(odd));
    let y = V::select(r.lt(V::splat(COS_ONE_BOUND)), V::splat(1.0), y);

    if special.any() {
        return special_case(x, y, special, libm::cos);
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::portable::{F64x2, PortableVector};
    use crate::config::{Fast, RespectExceptions};

    fn close(got: f64, want: f64, ulps: f64) -> bool {
        (got - want).abs() <= ulps * f64::EPSILON * want.abs().max(f64::MIN_POSITIVE)
    }

    #[test]
    fn test_sin_cos_zero() {
        let y = sin_with::<Fast, _>(PortableVector([0.0f64, -0.0]));
        assert_eq!(y.extract(0).to_bits(), 0);
        assert_eq!(y.extract(1).to_bits(), (-0.0f64).to_bits());

        let c = cos_with::<Fast, _>(PortableVector([0.0f64, -0.0]));
        assert_eq!(c.0, [1.0, 1.0]);
        let c = cos_with::<RespectExceptions, _>(PortableVector([0.0f64, 1e-300]));
        assert_eq!(c.0, [1.0, 1.0]);
    }

    #[test]
    fn test_sin_cos_moderate() {
        for &x in &[0.5, 1.0, 2.0, 3.0, -4.5, 10.0, 100.0, 12345.678] {
            let s = sin(F64x2::splat(x)).extract(0);
            let c = cos(F64x2::splat(x)).extract(0);
            assert!(close(s, libm::sin(x), 4.0), "sin({}) = {}", x, s);
            assert!(close(c, libm::cos(x), 4.0), "cos({}) = {}", x, c);
        }
    }

    #[test]
    fn test_large_inputs_use_scalar_result() {
        let x = PortableVector([1e10f64, f64::INFINITY]);
        let s = sin(x);
        assert_eq!(s.extract(0), libm::sin(1e10));
        assert!(s.extract(1).is_nan());
        assert_eq!(cos(x).extract(0), libm::cos(1e10));
    }
}
