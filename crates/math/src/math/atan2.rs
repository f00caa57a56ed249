//! Double-precision two-argument arctangent
//!
//! The quotient is arranged so `|z| <= 1`: `z = |y|/|x|` when `|y| <= |x|`,
//! otherwise `z = -|x|/|y|` with an extra `pi/2` added back. Negative `x`
//! contributes `-pi`, and the sign of `x*y` is applied last.
//!
//! Lanes where either input is zero, infinite or NaN are recomputed with
//! `libm::atan2`. Maximum observed error is 2.8 ULP.

#![allow(clippy::excessive_precision)]

use super::bits;
use crate::fallback::special_case2;
use crate::poly::{estrin, EstrinPowers};
use crate::traits::{SimdBits, SimdMask, SimdVector};

/// `atan(z) ~= z + z^3 * P(z^2)` on `[-1, 1]`
const POLY: [f64; 20] = [
    -0.3333333333333333,
    0.19999999999997978,
    -0.14285714285426487,
    0.11111111095268139,
    -0.09090908632050587,
    0.07692299565728301,
    -0.06666570483526667,
    0.058815467007189835,
    -0.05258174185361054,
    0.04738509395285655,
    -0.04262546457829081,
    0.03754338979478386,
    -0.031360117358357975,
    0.023805759565652392,
    -0.015644364143137277,
    0.008450729819093141,
    -0.0035402229127581004,
    0.0010660233749617055,
    -0.0002036781114584108,
    1.8449573950506424e-05,
];

const PI_OVER_2: f64 = 1.5707963267948966;

const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
const INF: u64 = 0x7ff0_0000_0000_0000;

/// Zero, Inf or NaN: `2*i - 1` wraps zero to the top of the range
#[inline(always)]
fn zeroinfnan<V: SimdVector<Scalar = f64>>(i: V::Bits) -> V::Mask {
    i.add(i)
        .sub(bits::<V>(1))
        .ge(bits::<V>(2 * INF - 1))
}

/// Vectorized `atan2(y, x)`
///
/// # Example
///
/// ```rust
/// use vela_math::{F64x2, SimdVector};
/// use vela_math::math::atan2;
///
/// let q = atan2(F64x2::splat(1.0), F64x2::splat(-1.0));
/// assert!((q.extract(0) - 3.0 * core::f64::consts::FRAC_PI_4).abs() < 1e-15);
/// ```
#[inline]
pub fn atan2<V: SimdVector<Scalar = f64>>(y: V, x: V) -> V {
    let ix = x.to_bits();
    let iy = y.to_bits();
    let special = zeroinfnan::<V>(ix).or(zeroinfnan::<V>(iy));

    let sign_xy = ix.xor(iy).and(bits::<V>(SIGN_MASK));
    let ax = x.abs();
    let ay = y.abs();
    let x_neg = x.lt(V::splat(0.0));
    let y_bigger = ay.gt(ax);

    // |z| <= 1 in every case
    let n = V::select(y_bigger, ax.neg(), ay);
    let d = V::select(y_bigger, ay, ax);
    let z = n.div(d);

    let shift = V::select(x_neg, V::splat(-2.0), V::splat(0.0));
    let shift = V::select(y_bigger, shift.add(V::splat(1.0)), shift);
    let shift = shift.mul(V::splat(PI_OVER_2));

    let z2 = z.mul(z);
    let z4 = z2.mul(z2);
    let p = estrin(&EstrinPowers::from_x2(z2, z4), &POLY);
    let r = p.fma(z2.mul(z), z).add(shift);

    let ret = V::from_bits(r.to_bits().xor(sign_xy));

    if special.any() {
        return special_case2(y, x, ret, special, libm::atan2);
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::portable::{F64x2, PortableVector};

    #[test]
    fn test_atan2_quadrants() {
        for &(y, x) in &[(1.0, 2.0), (2.0, 1.0), (1.0, -2.0), (-2.0, -1.0), (-1.0, 3.0), (5.0, -0.5)] {
            let got = atan2(F64x2::splat(y), F64x2::splat(x)).extract(0);
            let want = libm::atan2(y, x);
            assert!((got - want).abs() <= 3.0 * f64::EPSILON * want.abs(), "atan2({}, {})", y, x);
        }
    }

    #[test]
    fn test_atan2_zero_and_infinite_lanes() {
        let y = PortableVector([0.0f64, -0.0]);
        let x = PortableVector([-1.0f64, -1.0]);
        let q = atan2(y, x);
        assert_eq!(q.extract(0), libm::atan2(0.0, -1.0));
        assert_eq!(q.extract(1), libm::atan2(-0.0, -1.0));

        let q = atan2(PortableVector([f64::INFINITY, f64::NAN]), F64x2::splat(f64::INFINITY));
        assert_eq!(q.extract(0), libm::atan2(f64::INFINITY, f64::INFINITY));
        assert!(q.extract(1).is_nan());
    }

    #[test]
    fn test_atan2_diagonal() {
        let q = atan2(F64x2::splat(3.0), F64x2::splat(3.0)).extract(0);
        assert!((q - core::f64::consts::FRAC_PI_4).abs() <= f64::EPSILON);
    }
}
