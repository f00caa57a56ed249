//! Double-precision inverse hyperbolic sine
//!
//! `asinh(x) = sign(x) * log(|x| + sqrt(x^2 + 1))`, rearranged per range so
//! nothing cancels:
//!
//! - `|x| < 2`: `log1p(|x| + x^2 / (1 + sqrt(x^2 + 1)))`
//! - `|x| >= 2`: `log(2|x| + 1 / (|x| + sqrt(x^2 + 1)))`
//!
//! Both branches are evaluated for every lane and the result selected, so
//! each stays inside the domain of its logarithm for any finite `|x|` below
//! the big bound.

use super::bits;
use super::log::log;
use super::log1p::log1p_with;
use crate::config::{DefaultMode, Fast, FpMode};
use crate::fallback::special_case;
use crate::traits::{SimdBits, SimdMask, SimdVector};

/// asuint64(0x1p511); above this `x^2` overflows
const BIG_BOUND: u64 = 0x5fe0_0000_0000_0000;

/// asuint64(0x1p-26); below this asinh(x) rounds to x
const TINY_BOUND: u64 = 0x3e50_0000_0000_0000;

const ABS_MASK: u64 = 0x7fff_ffff_ffff_ffff;

/// Vectorized inverse hyperbolic sine in the default [`FpMode`]
#[inline]
pub fn asinh<V: SimdVector<Scalar = f64>>(x: V) -> V {
    asinh_with::<DefaultMode, V>(x)
}

/// Vectorized inverse hyperbolic sine
///
/// Lanes with `|x| >= 2^511`, Inf or NaN are recomputed with `libm::asinh`.
/// In `RespectExceptions` mode `|x| < 2^-26` is flagged too.
///
/// # Example
///
/// ```rust
/// use vela_math::{F64x2, SimdVector};
/// use vela_math::math::asinh;
///
/// let y = asinh(F64x2::splat(-0.0));
/// assert!(y.extract(0).is_sign_negative());
/// ```
#[inline]
pub fn asinh_with<M: FpMode, V: SimdVector<Scalar = f64>>(x: V) -> V {
    let ix = x.to_bits();
    let iax = ix.and(bits::<V>(ABS_MASK));
    let sign = ix.xor(iax);

    let (special, ax) = if M::RESPECT_EXCEPTIONS {
        let special = iax
            .sub(bits::<V>(TINY_BOUND))
            .ge(bits::<V>(BIG_BOUND - TINY_BOUND));
        (special, V::select(special, V::splat(0.0), x.abs()))
    } else {
        (iax.ge(bits::<V>(BIG_BOUND)), x.abs())
    };

    let one = V::splat(1.0);
    let x2 = ax.mul(ax);
    let d = x2.add(one).sqrt();

    let small = log1p_with::<Fast, V>(ax.add(x2.div(d.add(one))));
    let large = log(ax.add(ax).add(one.div(ax.add(d))));
    let y = V::select(ax.lt(V::splat(2.0)), small, large);
    let y = V::from_bits(y.to_bits().or(sign));

    if special.any() {
        return special_case(x, y, special, libm::asinh);
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
    fn test_asinh_matches_libm() {
        for &x in &[1e-7, 0.1, 0.5, 1.0, 1.999, 2.0, 2.5, 10.0, 1e5, 1e150] {
            let got = asinh(F64x2::splat(x)).extract(0);
            assert!(ulps(got, libm::asinh(x)) <= 4, "asinh({}) = {:e}", x, got);
        }
    }

    #[test]
    fn test_asinh_is_odd() {
        for &x in &[1e-300, 3e-9, 0.75, 2.0, 40.0, 1e200, f64::INFINITY] {
            let pos = asinh(F64x2::splat(x)).extract(0);
            let neg = asinh(F64x2::splat(-x)).extract(0);
            assert_eq!(pos.to_bits() ^ neg.to_bits(), 1 << 63, "asinh({})", x);
        }
    }

    #[test]
    fn test_asinh_special_lanes() {
        let x = PortableVector([f64::NEG_INFINITY, f64::NAN]);
        for y in [asinh_with::<Fast, _>(x), asinh_with::<RespectExceptions, _>(x)] {
            assert_eq!(y.extract(0), f64::NEG_INFINITY);
            assert!(y.extract(1).is_nan());
        }

        let x = PortableVector([0.0f64, -1e-310]);
        for y in [asinh_with::<Fast, _>(x), asinh_with::<RespectExceptions, _>(x)] {
            assert_eq!(y.extract(0).to_bits(), 0);
            assert_eq!(y.extract(1), -1e-310);
        }
    }
}
