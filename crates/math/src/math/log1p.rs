//! Double-precision log(1 + x)
//!
//! `m = 1 + x = 2^k * (1 + f)` with `1 + f` in `[sqrt(2)/2, sqrt(2))`. The
//! rounding error of forming `m` is recovered as `c = x - (m - 1)` and added
//! back as `c/m`. Then
//! `log1p(x) = k*ln2 + log1p(f) + c/m` with `log1p(f) ~= f + f^2 P(f)`.
//!
//! Maximum observed error is 2.46 ULP.

#![allow(clippy::excessive_precision)]

use super::bits;
use crate::config::{DefaultMode, FpMode};
use crate::fallback::special_case;
use crate::poly::{estrin, EstrinPowers};
use crate::traits::{SimdBits, SimdMask, SimdVector};

const LN2_HI: f64 = 0.6931471805598903;
const LN2_LO: f64 = 5.497923018708371e-14;

/// `log1p(f) - f ~= f^2 * P(f)` on `[sqrt(2)/2 - 1, sqrt(2) - 1]`
const POLY: [f64; 19] = [
    -0.4999999999999997,
    0.33333333333328113,
    -0.2500000000001263,
    0.2000000000173798,
    -0.1666666666624139,
    0.1428571408744002,
    -0.1249999983115391,
    0.11111122008664678,
    -0.10000018142155685,
    0.0909058346604739,
    -0.0833255294803619,
    0.07697709214012723,
    -0.07160250097377094,
    0.06621608936546163,
    -0.060411861325383155,
    0.059735911529354736,
    -0.06786912861160647,
    0.0632483625086586,
    -0.02829914573469549,
];

/// `0x3ff0000000000000 - bits(sqrt(2)/2)`, rounded to the top 32 bits
const HF_RT2_TOP: u64 = 0x0009_5f62_0000_0000;

/// Top 32 bits of `sqrt(2)/2`
const ONE_MINUS_HF_RT2_TOP: u64 = 0x3fe6_a09e_0000_0000;

const UMASK_TOP: u64 = 0x000f_ffff_0000_0000;
const BOTTOM_MASK: u64 = 0x0000_0000_ffff_ffff;
const ABS_MASK: u64 = 0x7fff_ffff_ffff_ffff;
const INF: u64 = 0x7ff0_0000_0000_0000;
const MINUS_ONE: u64 = 0xbff0_0000_0000_0000;
const NEG_ZERO: u64 = 0x8000_0000_0000_0000;

#[inline(always)]
fn log1p_core<V: SimdVector<Scalar = f64>>(x: V) -> V {
    let m = x.add(V::splat(1.0));
    let mi = m.to_bits();
    let u = mi.add(bits::<V>(HF_RT2_TOP));

    let ki = u.shr(52).sub(bits::<V>(0x3ff));
    let k = V::from_int(ki);

    // 1 + f, recentred into [sqrt(2)/2, sqrt(2))
    let utop = u
        .and(bits::<V>(UMASK_TOP))
        .add(bits::<V>(ONE_MINUS_HF_RT2_TOP));
    let u_red = utop.or(mi.and(bits::<V>(BOTTOM_MASK)));
    let f = V::from_bits(u_red).sub(V::splat(1.0));

    // correction term c/m
    let cm = x.sub(m.sub(V::splat(1.0))).div(m);

    let f2 = f.mul(f);
    let p = estrin(&EstrinPowers::from_x2(f, f2), &POLY);

    let ylo = k.fma(V::splat(LN2_LO), cm);
    let yhi = k.fma(V::splat(LN2_HI), f);
    f2.fma(p, ylo.add(yhi))
}

/// Vectorized log(1 + x) in the default [`FpMode`]
#[inline]
pub fn log1p<V: SimdVector<Scalar = f64>>(x: V) -> V {
    log1p_with::<DefaultMode, V>(x)
}

/// Vectorized log(1 + x)
///
/// Lanes with `x <= -1`, -0, Inf or NaN are recomputed with `libm::log1p`.
/// In `RespectExceptions` mode those lanes run the fast path on 0.
///
/// # Example
///
/// ```rust
/// use vela_math::{F64x2, SimdVector};
/// use vela_math::math::log1p;
///
/// assert_eq!(log1p(F64x2::splat(-1.0)).extract(0), f64::NEG_INFINITY);
/// ```
#[inline]
pub fn log1p_with<M: FpMode, V: SimdVector<Scalar = f64>>(x: V) -> V {
    let ix = x.to_bits();
    let ia = ix.and(bits::<V>(ABS_MASK));
    let special = ia
        .ge(bits::<V>(INF))
        .or(ix.ge(bits::<V>(MINUS_ONE)))
        .or(ix.eq(bits::<V>(NEG_ZERO)));

    let xm = if M::RESPECT_EXCEPTIONS {
        V::select(special, V::splat(0.0), x)
    } else {
        x
    };
    let y = log1p_core(xm);

    if special.any() {
        return special_case(x, y, special, libm::log1p);
    }
    y
}
