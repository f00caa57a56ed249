//! Single-precision tangent
//!
//! `x = n*pi/2 + r` with `|r| <= pi/4` and a three-part split of pi/2.
//! For even `n` the result is `tan(r)`, for odd `n` it is `-1/tan(r)`,
//! computed as the reciprocal of `tan(-r)`.
//!
//! Maximum observed error is 3.45 ULP.

#![allow(clippy::excessive_precision)]

use super::{bits, SHIFT_F32};
use crate::config::{DefaultMode, FpMode};
use crate::fallback::special_case;
use crate::poly::{estrin, EstrinPowers};
use crate::traits::{SimdBits, SimdMask, SimdVector};

const NEG_PIO2_1: f32 = -1.5707964;
const NEG_PIO2_2: f32 = 4.371139e-08;
const NEG_PIO2_3: f32 = 1.7151245e-15;
const INV_PIO2: f32 = 0.63661975;

/// `tan(r) ~= r + r^3 * P(r^2)` on `[-pi/4, pi/4]`
const POLY: [f32; 6] = [
    0.33333325,
    0.13334346,
    0.053776965,
    0.023153147,
    0.005111027,
    0.008243376,
];

/// asuint(0x1p15)
const RANGE_VAL: u64 = 0x4700_0000;

/// asuint(0x1p-31)
const TINY_BOUND: u64 = 0x3000_0000;

const ABS_MASK: u64 = 0x7fff_ffff;

/// Vectorized tangent for f32 in the default [`FpMode`]
#[inline]
pub fn tanf<V: SimdVector<Scalar = f32>>(x: V) -> V {
    tanf_with::<DefaultMode, V>(x)
}

/// Vectorized tangent for f32
///
/// Lanes with `|x| >= 2^15`, Inf or NaN are recomputed with `libm::tanf`.
/// In `RespectExceptions` mode `|x| < 2^-31` is flagged too.
///
/// # Example
///
/// ```rust
/// use vela_math::{F32x4, SimdVector};
/// use vela_math::math::tanf;
///
/// let y = tanf(F32x4::splat(-0.0));
/// assert!(y.extract(0).is_sign_negative());
/// ```
#[inline]
pub fn tanf_with<M: FpMode, V: SimdVector<Scalar = f32>>(x: V) -> V {
    let iax = x.to_bits().and(bits::<V>(ABS_MASK));
    let (special, xm) = if M::RESPECT_EXCEPTIONS {
        let special = iax
            .sub(bits::<V>(TINY_BOUND))
            .ge(bits::<V>(RANGE_VAL - TINY_BOUND));
        (special, V::select(special, V::splat(1.0), x))
    } else {
        (iax.ge(bits::<V>(RANGE_VAL)), x)
    };

    // n = round(x / (pi/2))
    let q = xm.fma(V::splat(INV_PIO2), V::splat(SHIFT_F32));
    let n = q.sub(V::splat(SHIFT_F32));
    let odd = n.to_int().and(bits::<V>(1)).eq(bits::<V>(1));

    let r = n.fma(V::splat(NEG_PIO2_1), xm);
    let r = n.fma(V::splat(NEG_PIO2_2), r);
    let r = n.fma(V::splat(NEG_PIO2_3), r);

    // tan(-r) on odd quadrants, inverted below
    let z = V::select(odd, r.neg(), r);
    let z2 = r.mul(r);
    // z2^4 underflows once z2 drops below 2^-31
    let z2 = if M::RESPECT_EXCEPTIONS {
        let will_uflow = z2.to_bits().and(bits::<V>(ABS_MASK)).le(bits::<V>(TINY_BOUND));
        V::select(will_uflow, V::splat(0.0), z2)
    } else {
        z2
    };
    let p = estrin(&EstrinPowers::new(z2), &POLY);
    let y = z.mul(z2).fma(p, z);
    let y = V::select(odd, V::splat(1.0).div(y), y);

    // the reduction loses the sign of -0
    let y = V::select(xm.eq(V::splat(0.0)), xm, y);

    if special.any() {
        return special_case(x, y, special, libm::tanf);
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::portable::{F32x4, PortableVector};
    use crate::config::{Fast, RespectExceptions};

    fn ulps(got: f32, want: f32) -> u32 {
        (got.to_bits() as i32 - want.to_bits() as i32).unsigned_abs()
    }

    #[test]
    fn test_tanf_signed_zero() {
        let y = tanf_with::<Fast, _>(PortableVector([0.0f32, -0.0, 0.0, -0.0]));
        assert_eq!(y.extract(0).to_bits(), 0);
        assert_eq!(y.extract(1).to_bits(), 0x8000_0000);
        let y = tanf_with::<RespectExceptions, _>(PortableVector([0.0f32, -0.0, 1e-20, -1e-20]));
        assert_eq!(y.extract(1).to_bits(), 0x8000_0000);
        assert_eq!(y.extract(3), -1e-20);
    }

    #[test]
    fn test_tanf_accuracy() {
        for &x in &[0.1f32, 0.7, 1.0, 1.5, -2.0, 3.0, 20.0, 1000.5] {
            let got = tanf(F32x4::splat(x)).extract(0);
            assert!(ulps(got, libm::tanf(x)) <= 4, "tanf({})", x);
        }
    }

    #[test]
    fn test_tanf_near_multiple_of_pi_over_2() {
        // 1.5707964 is 4.4e-8 above pi/2, so r^8 is far below the f32 range
        let x = PortableVector([-110.0f32, 1.5707964, 0.25, 0.125]);
        let fast = tanf_with::<Fast, _>(x);
        let except = tanf_with::<RespectExceptions, _>(x);
        for lane in 0..4 {
            let want = libm::tanf(x.extract(lane));
            assert!(ulps(except.extract(lane), want) <= 4, "tanf({})", x.extract(lane));
            assert!(ulps(fast.extract(lane), want) <= 4, "tanf({})", x.extract(lane));
        }
    }

    #[test]
    fn test_tanf_fallback() {
        let y = tanf(PortableVector([1e6f32, f32::INFINITY, f32::NAN, 0.5]));
        assert_eq!(y.extract(0), libm::tanf(1e6));
        assert!(y.extract(1).is_nan());
        assert!(y.extract(2).is_nan());
        assert!(ulps(y.extract(3), libm::tanf(0.5)) <= 4);
    }
}
