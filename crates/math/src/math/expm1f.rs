//! Single-precision e^x - 1
//!
//! Same reduction as the double-precision version: `x = i*ln2 + f`,
//! `expm1(x) = 2^i * (expm1(f) + 1) - 1` with `expm1(f) ~= f + f^2 P(f)`.
//!
//! Maximum observed error is 1.51 ULP.

#![allow(clippy::excessive_precision)]

use super::{bits, SHIFT_F32};
use crate::config::{DefaultMode, FpMode};
use crate::fallback::special_case;
use crate::poly::horner;
use crate::traits::{SimdBits, SimdMask, SimdVector};

const INV_LN2: f32 = 1.442695;
const MINUS_LN2_HI: f32 = -0.69314575;
const MINUS_LN2_LO: f32 = -1.4286068e-06;

/// `expm1(f) - f ~= f^2 * P(f)` on `[-ln2/2, ln2/2]`
const POLY: [f32; 5] = [0.49999997, 0.16666542, 0.041667562, 0.0083666425, 0.0013860111];

/// asuint(0x1.5ebc4p+6); above this expm1f overflows or is -1
const SPECIAL_BOUND: u64 = 0x42af_5e20;

/// asuint(0x1p-23)
const TINY_BOUND: u64 = 0x3400_0000;

const ABS_MASK: u64 = 0x7fff_ffff;
const NEG_ZERO: u64 = 0x8000_0000;
const ONE: u64 = 0x3f80_0000;

/// Reduction, polynomial and reconstruction without special handling
///
/// Valid while `round(x/ln2) <= 127`. Shared with sinhf.
#[inline(always)]
pub(crate) fn expm1f_core<V: SimdVector<Scalar = f32>>(x: V) -> V {
    let j = x
        .fma(V::splat(INV_LN2), V::splat(SHIFT_F32))
        .sub(V::splat(SHIFT_F32));
    let i = j.to_int();
    let f = j.fma(V::splat(MINUS_LN2_HI), x);
    let f = j.fma(V::splat(MINUS_LN2_LO), f);

    let p = horner(f, &POLY);
    let p = f.mul(f).fma(p, f);

    let t = V::from_bits(i.shl(23).add(bits::<V>(ONE)));
    p.fma(t, t.sub(V::splat(1.0)))
}

/// Vectorized e^x - 1 for f32 in the default [`FpMode`]
#[inline]
pub fn expm1f<V: SimdVector<Scalar = f32>>(x: V) -> V {
    expm1f_with::<DefaultMode, V>(x)
}

/// Vectorized e^x - 1 for f32
///
/// Lanes with `|x| >= 87.68`, NaN, Inf or -0 are recomputed with
/// `libm::expm1f`; `RespectExceptions` also flags `|x| < 2^-23`.
///
/// # Example
///
/// ```rust
/// use vela_math::{F32x4, SimdVector};
/// use vela_math::math::expm1f;
///
/// assert_eq!(expm1f(F32x4::splat(-100.0)).extract(0), -1.0);
/// ```
#[inline]
pub fn expm1f_with<M: FpMode, V: SimdVector<Scalar = f32>>(x: V) -> V {
    let ix = x.to_bits();
    let ax = ix.and(bits::<V>(ABS_MASK));

    let (special, xm) = if M::RESPECT_EXCEPTIONS {
        let special = ax
            .ge(bits::<V>(SPECIAL_BOUND))
            .or(ax.lt(bits::<V>(TINY_BOUND)));
        (special, V::select(special, V::splat(0.0), x))
    } else {
        let special = ax
            .ge(bits::<V>(SPECIAL_BOUND))
            .or(ix.eq(bits::<V>(NEG_ZERO)));
        (special, x)
    };

    let y = expm1f_core(xm);
    if special.any() {
        return special_case(x, y, special, libm::expm1f);
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
    fn test_expm1f_accuracy() {
        for &x in &[-20.0f32, -1.0, -0.01, 1e-5, 0.3, 1.0, 10.0, 80.0] {
            let got = expm1f(F32x4::splat(x)).extract(0);
            assert!(ulps(got, libm::expm1f(x)) <= 2, "expm1f({})", x);
        }
    }

    #[test]
    fn test_expm1f_special_lanes() {
        let x = PortableVector([-0.0f32, 0.0, 100.0, f32::NAN]);
        for y in [expm1f_with::<Fast, _>(x), expm1f_with::<RespectExceptions, _>(x)] {
            assert_eq!(y.extract(0).to_bits(), 0x8000_0000);
            assert_eq!(y.extract(1).to_bits(), 0);
            assert_eq!(y.extract(2), f32::INFINITY);
            assert!(y.extract(3).is_nan());
        }
    }
}
