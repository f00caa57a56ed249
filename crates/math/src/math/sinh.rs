//! Double-precision hyperbolic sine
//!
//! With `t = expm1(|x|)`,
//! `sinh(x) = sign(x) * (t + t/(t + 1)) / 2`, which keeps full accuracy for
//! small `|x|` where `e^x - e^-x` would cancel.
//!
//! Maximum observed error is 2.57 ULP.

use super::bits;
use super::expm1::expm1_core;
use crate::config::{DefaultMode, FpMode};
use crate::fallback::special_case;
use crate::traits::{SimdBits, SimdMask, SimdVector};

/// asuint64(0x1p9); above this expm1 is too close to overflow
const BIG_BOUND: u64 = 0x4080_0000_0000_0000;

/// asuint64(0x1p-26)
const TINY_BOUND: u64 = 0x3e50_0000_0000_0000;

const ABS_MASK: u64 = 0x7fff_ffff_ffff_ffff;
const HALF: u64 = 0x3fe0_0000_0000_0000;

/// Vectorized hyperbolic sine in the default [`FpMode`]
#[inline]
pub fn sinh<V: SimdVector<Scalar = f64>>(x: V) -> V {
    sinh_with::<DefaultMode, V>(x)
}

/// Vectorized hyperbolic sine
///
/// Lanes with `|x| >= 512`, Inf or NaN are recomputed with `libm::sinh`.
/// In `RespectExceptions` mode `|x| < 2^-26` is flagged too.
///
/// # Example
///
/// ```rust
/// use vela_math::{F64x2, SimdVector};
/// use vela_math::math::sinh;
///
/// assert_eq!(sinh(F64x2::splat(-1000.0)).extract(0), f64::NEG_INFINITY);
/// ```
#[inline]
pub fn sinh_with<M: FpMode, V: SimdVector<Scalar = f64>>(x: V) -> V {
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

    let t = expm1_core(ax);
    let y = t.add(t.div(t.add(V::splat(1.0)))).mul(halfsign);

    if special.any() {
        return special_case(x, y, special, libm::sinh);
    }
    y
}
