//! Single-precision hyperbolic sine
//!
//! `sinh(x) = sign(x) * (t + t/(t + 1)) / 2` with `t = expm1f(|x|)`.
//!
//! Maximum observed error is 2.26 ULP.

use super::bits;
use super::expm1f::expm1f_core;
use crate::config::{DefaultMode, FpMode};
use crate::fallback::special_case;
use crate::traits::{SimdBits, SimdMask, SimdVector};

/// asuint(0x1.61814ep+6); beyond this `2^round(x/ln2)` leaves the exponent range
const BIG_BOUND: u64 = 0x42b0_c0a7;

/// asuint(0x1p-23)
const TINY_BOUND: u64 = 0x3400_0000;

const ABS_MASK: u64 = 0x7fff_ffff;
const HALF: u64 = 0x3f00_0000;

/// Vectorized hyperbolic sine for f32 in the default [`FpMode`]
#[inline]
pub fn sinhf<V: SimdVector<Scalar = f32>>(x: V) -> V {
    sinhf_with::<DefaultMode, V>(x)
}

/// Vectorized hyperbolic sine for f32
///
/// Lanes with `|x| > 88.37`, Inf or NaN are recomputed with `libm::sinhf`.
/// In `RespectExceptions` mode `|x| < 2^-23` is flagged too, and flagged
/// lanes are replaced by 0 before expm1f sees them.
///
/// # Example
///
/// ```rust
/// use vela_math::{F32x4, SimdVector};
/// use vela_math::math::sinhf;
///
/// assert_eq!(sinhf(F32x4::splat(0.0)).extract(0), 0.0);
/// ```
#[inline]
pub fn sinhf_with<M: FpMode, V: SimdVector<Scalar = f32>>(x: V) -> V {
    let ix = x.to_bits();
    let iax = ix.and(bits::<V>(ABS_MASK));
    let halfsign = V::from_bits(ix.xor(iax).or(bits::<V>(HALF)));

    let (special, ax) = if M::RESPECT_EXCEPTIONS {
        let special = iax
            .sub(bits::<V>(TINY_BOUND))
            .ge(bits::<V>(BIG_BOUND - TINY_BOUND));
        (special, V::select(special, V::splat(0.0), x.abs()))
    } else {
        (iax.ge(bits::<V>(BIG_BOUND)), x.abs())
    };

    let t = expm1f_core(ax);
    let y = t.add(t.div(t.add(V::splat(1.0)))).mul(halfsign);

    if special.any() {
        return special_case(x, y, special, libm::sinhf);
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::portable::{F32x4, PortableVector};
    use crate::config::{Fast, RespectExceptions};

    #[test]
    fn test_sinhf_accuracy() {
        for &x in &[1e-6f32, 0.25, 1.0, -3.0, 15.0, 88.0] {
            let got = sinhf(F32x4::splat(x)).extract(0);
            let want = libm::sinhf(x);
            let ulps = (got.to_bits() as i32 - want.to_bits() as i32).unsigned_abs();
            assert!(ulps <= 3, "sinhf({}) = {} vs {}", x, got, want);
        }
    }

    #[test]
    fn test_sinhf_special_lanes() {
        let x = PortableVector([-0.0f32, 90.0, f32::NEG_INFINITY, f32::NAN]);
        for y in [sinhf_with::<Fast, _>(x), sinhf_with::<RespectExceptions, _>(x)] {
            assert_eq!(y.extract(0).to_bits(), 0x8000_0000);
            assert_eq!(y.extract(1), f32::INFINITY);
            assert_eq!(y.extract(2), f32::NEG_INFINITY);
            assert!(y.extract(3).is_nan());
        }
    }

    #[test]
    fn test_sinhf_flagged_lanes_leave_neighbours_alone() {
        let x = PortableVector([-100.0f32, 1e-30, 2.5, -0.75]);
        let y = sinhf_with::<RespectExceptions, _>(x);
        assert_eq!(y.extract(0), f32::NEG_INFINITY);
        assert_eq!(y.extract(1), 1e-30);
        assert_eq!(y.extract(2), sinhf_with::<Fast, _>(F32x4::splat(2.5)).extract(0));
        assert_eq!(y.extract(3), sinhf_with::<Fast, _>(F32x4::splat(-0.75)).extract(0));
    }
}
