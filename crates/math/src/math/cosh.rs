//! Double-precision hyperbolic cosine
//!
//! With `t = exp(|x|)`, `cosh(x) = t/2 + 1/(2t)`. Rounding errors in `t`
//! cancel to first order in the sum for small `|x|`, so the result carries
//! about the error of `exp`.

use super::bits;
use super::exp::exp_with;
use crate::config::{DefaultMode, Fast, FpMode};
use crate::fallback::special_case;
use crate::traits::{SimdBits, SimdMask, SimdVector};

/// asuint64(704.0); above this `exp(|x|)` needs two-step scaling
const SPECIAL_BOUND: u64 = 0x4086_0000_0000_0000;

/// asuint64(0x1p-511); below this `exp` squares the argument into the
/// subnormal range
const TINY_BOUND: u64 = 0x2000_0000_0000_0000;

const ABS_MASK: u64 = 0x7fff_ffff_ffff_ffff;

/// Vectorized hyperbolic cosine in the default [`FpMode`]
#[inline]
pub fn cosh<V: SimdVector<Scalar = f64>>(x: V) -> V {
    cosh_with::<DefaultMode, V>(x)
}

/// Vectorized hyperbolic cosine
///
/// Lanes with `|x| >= 704`, Inf or NaN are recomputed with `libm::cosh`.
/// In `RespectExceptions` mode `|x| < 2^-511` is flagged too.
///
/// # Example
///
/// ```rust
/// use vela_math::{F64x2, SimdVector};
/// use vela_math::math::cosh;
///
/// assert_eq!(cosh(F64x2::splat(0.0)).extract(0), 1.0);
/// assert_eq!(cosh(F64x2::splat(-800.0)).extract(1), f64::INFINITY);
/// ```
#[inline]
pub fn cosh_with<M: FpMode, V: SimdVector<Scalar = f64>>(x: V) -> V {
    let iax = x.to_bits().and(bits::<V>(ABS_MASK));

    let (special, ax) = if M::RESPECT_EXCEPTIONS {
        let special = iax
            .sub(bits::<V>(TINY_BOUND))
            .ge(bits::<V>(SPECIAL_BOUND - TINY_BOUND));
        (special, V::select(special, V::splat(0.0), x.abs()))
    } else {
        (iax.ge(bits::<V>(SPECIAL_BOUND)), x.abs())
    };

    let t = exp_with::<Fast, V>(ax);
    let y = t.mul(V::splat(0.5)).add(V::splat(0.5).div(t));

    if special.any() {
        return special_case(x, y, special, libm::cosh);
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::portable::{F64x2, PortableVector};
    use crate::config::RespectExceptions;

    fn ulps(got: f64, want: f64) -> u64 {
        (got.to_bits() as i64 - want.to_bits() as i64).unsigned_abs()
    }

    #[test]
    fn test_cosh_is_even() {
        for &x in &[1e-300, 1e-5, 0.3, 1.0, 7.5, 300.0, 710.0] {
            let pos = cosh(F64x2::splat(x)).extract(0);
            let neg = cosh(F64x2::splat(-x)).extract(0);
            assert_eq!(pos.to_bits(), neg.to_bits(), "cosh({})", x);
        }
    }

    #[test]
    fn test_cosh_matches_libm() {
        for &x in &[1e-8, 0.3, 1.0, -2.75, 20.0, -300.0, 703.5] {
            let got = cosh(F64x2::splat(x)).extract(0);
            assert!(ulps(got, libm::cosh(x)) <= 4, "cosh({}) = {:e}", x, got);
        }
    }

    #[test]
    fn test_cosh_special_lanes() {
        let x = PortableVector([f64::NEG_INFINITY, f64::NAN]);
        for y in [cosh_with::<Fast, _>(x), cosh_with::<RespectExceptions, _>(x)] {
            assert_eq!(y.extract(0), f64::INFINITY);
            assert!(y.extract(1).is_nan());
        }

        // finite up to about 710.47
        let y = cosh(PortableVector([710.0f64, 711.0]));
        assert!(y.extract(0).is_finite());
        assert_eq!(y.extract(1), f64::INFINITY);
    }
}
