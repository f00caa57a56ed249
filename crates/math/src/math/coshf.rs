//! Single-precision hyperbolic cosine
//!
//! `cosh(x) = t/2 + 1/(2t)` with `t = expf(|x|)`.

use super::bits;
use super::expf::expf_with;
use crate::config::{DefaultMode, Fast, FpMode};
use crate::fallback::special_case;
use crate::traits::{SimdBits, SimdMask, SimdVector};

/// asuint(86.0); above this `1/(2t)` leaves the normal range
const SPECIAL_BOUND: u64 = 0x42ac_0000;

/// asuint(0x1p-63)
const TINY_BOUND: u64 = 0x2000_0000;

const ABS_MASK: u64 = 0x7fff_ffff;

/// Vectorized hyperbolic cosine for f32 in the default [`FpMode`]
#[inline]
pub fn coshf<V: SimdVector<Scalar = f32>>(x: V) -> V {
    coshf_with::<DefaultMode, V>(x)
}

/// Vectorized hyperbolic cosine for f32
///
/// Lanes with `|x| >= 86`, Inf or NaN are recomputed with `libm::coshf`.
/// In `RespectExceptions` mode `|x| < 2^-63` is flagged too.
///
/// # Example
///
/// ```rust
/// use vela_math::{F32x4, SimdVector};
/// use vela_math::math::coshf;
///
/// assert_eq!(coshf(F32x4::splat(-0.0)).extract(0), 1.0);
/// ```
#[inline]
pub fn coshf_with<M: FpMode, V: SimdVector<Scalar = f32>>(x: V) -> V {
    let iax = x.to_bits().and(bits::<V>(ABS_MASK));

    let (special, ax) = if M::RESPECT_EXCEPTIONS {
        let special = iax
            .sub(bits::<V>(TINY_BOUND))
            .ge(bits::<V>(SPECIAL_BOUND - TINY_BOUND));
        (special, V::select(special, V::splat(0.0), x.abs()))
    } else {
        (iax.ge(bits::<V>(SPECIAL_BOUND)), x.abs())
    };

    let t = expf_with::<Fast, V>(ax);
    let y = t.mul(V::splat(0.5)).add(V::splat(0.5).div(t));

    if special.any() {
        return special_case(x, y, special, libm::coshf);
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::portable::{F32x4, PortableVector};
    use crate::config::RespectExceptions;

    fn ulps(got: f32, want: f32) -> u32 {
        (got.to_bits() as i32 - want.to_bits() as i32).unsigned_abs()
    }

    #[test]
    fn test_coshf_accuracy() {
        for &x in &[1e-6f32, 0.25, 1.0, -3.0, 15.0, -60.5, 85.9] {
            let got = coshf(F32x4::splat(x)).extract(0);
            assert!(ulps(got, libm::coshf(x)) <= 4, "coshf({}) = {}", x, got);
        }
    }

    #[test]
    fn test_coshf_special_lanes() {
        let x = PortableVector([90.0f32, f32::NEG_INFINITY, f32::NAN, 1e-30]);
        for y in [coshf_with::<Fast, _>(x), coshf_with::<RespectExceptions, _>(x)] {
            assert_eq!(y.extract(0), f32::INFINITY);
            assert_eq!(y.extract(1), f32::INFINITY);
            assert!(y.extract(2).is_nan());
            assert_eq!(y.extract(3), 1.0);
        }
    }
}
