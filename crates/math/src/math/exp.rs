//! Double-precision exponential
//!
//! `exp(x) = 2^(n/N) * exp(r)` with `n = round(x * N/ln2)` and
//! `r = x - n * ln2/N`, `|r| <= ln2/(2N)`. The scale `2^(n/N)` is assembled
//! from a table entry (low bits of `n`) plus the high bits of `n` shifted
//! into the exponent field. `N` is 128 or 256 depending on
//! [`EXP_TABLE_BITS`](crate::config::EXP_TABLE_BITS).
//!
//! # Error Bounds
//!
//! - 128-entry table: 1.88 + 0.5 ULP
//! - 256-entry table: 0.54 + 0.5 ULP
//!
//! # Example
//!
//! ```rust
//! use vela_math::{F64x2, SimdVector};
//! use vela_math::math::exp;
//!
//! let y = exp(F64x2::splat(0.0));
//! assert_eq!(y.extract(0), 1.0);
//! ```

#![allow(clippy::excessive_precision)]

use super::{bits, SHIFT_F64};
use crate::config::{DefaultMode, FpMode};
use crate::fallback::special_case;
#[cfg(feature = "exp-table-256")]
use crate::tables::EXP_DATA_256;
use crate::tables::EXP_DATA_128;
use crate::traits::{SimdBits, SimdMask, SimdVector};

/// Reduction constants and polynomial for one table size
pub(crate) struct ExpParams {
    /// log2 of the table size
    pub bits: u32,
    /// `N/ln2`
    pub inv_ln2: f64,
    /// `ln2/N`, high part
    pub ln2_hi: f64,
    /// `ln2/N`, low part
    pub ln2_lo: f64,
    /// `exp(r) - 1 ~= r + c1 r^2 + c2 r^3 + c3 r^4`
    pub poly: [f64; 3],
    /// Table of `2^(i/N)` bits
    pub table: &'static [u64],
}

// rel error 1.4337 * 2^-53 on [-ln2/256, ln2/256]
pub(crate) static EXP_128: ExpParams = ExpParams {
    bits: 7,
    inv_ln2: 184.6649652337873,
    ln2_hi: 0.0054152123481245725,
    ln2_lo: 1.8117553233174215e-19,
    poly: [0.4999999999999611, 0.16666671976210307, 0.04166668215674822],
    table: &EXP_DATA_128,
};

// rel error 1.4318 * 2^-58 on [-ln2/512, ln2/512]
#[cfg(feature = "exp-table-256")]
pub(crate) static EXP_256: ExpParams = ExpParams {
    bits: 8,
    inv_ln2: 369.3299304675746,
    ln2_hi: 0.0027076061740622863,
    ln2_lo: 9.058776616587108e-20,
    poly: [0.49999999999999756, 0.1666666799405231, 0.04166667054486623],
    table: &EXP_DATA_256,
};

#[cfg(not(feature = "exp-table-256"))]
pub(crate) static EXP_PARAMS: &ExpParams = &EXP_128;

#[cfg(feature = "exp-table-256")]
pub(crate) static EXP_PARAMS: &ExpParams = &EXP_256;

/// Above this |x| the scale may overflow or underflow
const THRES: f64 = 704.0;

/// top12(0x1p-511)
const TINY_BOUND: u64 = 0x200;

/// top12(0x1p9)
const BIG_BOUND: u64 = 0x408;

/// Intermediate results of the exp reduction
pub(crate) struct ExpParts<V> {
    /// `2^(n/N)`, only valid while the exponent stays in range
    pub scale: V,
    /// `exp(r) - 1`
    pub poly: V,
    /// `n` as a float
    pub n: V,
}

/// Reduction, polynomial and table scale for `exp(x + tail)`
///
/// `tail` must be much smaller than `ln2/N`; it is added to the reduced
/// argument.
#[inline(always)]
pub(crate) fn exp_parts<V>(x: V, tail: Option<V>, params: &ExpParams) -> ExpParts<V>
where
    V: SimdVector<Scalar = f64>,
{
    // n = round(x/(ln2/N))
    let z = x.fma(V::splat(params.inv_ln2), V::splat(SHIFT_F64));
    let u = z.to_bits();
    let n = z.sub(V::splat(SHIFT_F64));

    // r = x - n*ln2/N
    let r = n.fma(V::splat(-params.ln2_hi), x);
    let mut r = n.fma(V::splat(-params.ln2_lo), r);
    if let Some(tail) = tail {
        r = r.add(tail);
    }

    let e = u.shl(52 - params.bits);
    let i = u.and(bits::<V>((1u64 << params.bits) - 1));

    let [c1, c2, c3] = params.poly;
    let r2 = r.mul(r);
    let y = r.fma(V::splat(c2), V::splat(c1));
    let y = r2.fma(V::splat(c3), y);
    let poly = y.fma(r2, r);

    let scale = V::from_bits(V::Bits::gather(params.table, i).add(e));

    ExpParts { scale, poly, n }
}

/// Two-step scaling for lanes whose `2^n` leaves the exponent range
///
/// `scale * (1 + poly)` is computed as `s1 * (s2 + s2 * poly)` with
/// `s1 * s2 = scale`, so only the final multiply can overflow or underflow
/// and does so with the correctly signed infinity or zero. `bound` is the
/// `|n|` beyond which the result saturates to `s1 * s1`.
#[inline(never)]
pub(crate) fn scale_special<V>(scale: V, poly: V, n: V, bound: f64) -> V
where
    V: SimdVector<Scalar = f64>,
{
    let b = V::Bits::select(
        n.le(V::splat(0.0)),
        bits::<V>(0x6000_0000_0000_0000),
        bits::<V>(0),
    );
    let s1 = V::from_bits(bits::<V>(0x7000_0000_0000_0000).sub(b));
    let s2 = V::from_bits(scale.to_bits().sub(bits::<V>(0x3010_0000_0000_0000)).add(b));
    let saturate = n.abs().gt(V::splat(bound));
    let r1 = s1.mul(s1);
    let r0 = poly.fma(s2, s2).mul(s1);
    V::select(saturate, r1, r0)
}

/// Vectorized e^x in the default [`FpMode`]
#[inline]
pub fn exp<V: SimdVector<Scalar = f64>>(x: V) -> V {
    exp_with::<DefaultMode, V>(x)
}

/// Vectorized e^x
///
/// In `Fast` mode lanes with `|x| > 704` finish through two-step scaling;
/// NaN propagates through the fast path. In `RespectExceptions` mode lanes
/// with `|x|` outside `[2^-511, 2^9)` are replaced by 1 before the fast path
/// and recomputed with `libm::exp`.
#[inline]
pub fn exp_with<M: FpMode, V: SimdVector<Scalar = f64>>(x: V) -> V {
    if M::RESPECT_EXCEPTIONS {
        let top = x.abs().to_bits().shr(52);
        let special = top
            .sub(bits::<V>(TINY_BOUND))
            .ge(bits::<V>(BIG_BOUND - TINY_BOUND));
        let xm = V::select(special, V::splat(1.0), x);
        let parts = exp_parts(xm, None, EXP_PARAMS);
        let y = parts.poly.fma(parts.scale, parts.scale);
        if special.any() {
            return special_case(x, y, special, libm::exp);
        }
        y
    } else {
        let special = x.abs().gt(V::splat(THRES));
        let parts = exp_parts(x, None, EXP_PARAMS);
        if special.any() {
            let bound = 1280.0 * (1u64 << EXP_PARAMS.bits) as f64;
            return scale_special(parts.scale, parts.poly, parts.n, bound);
        }
        parts.poly.fma(parts.scale, parts.scale)
    }
}

/// `exp(x + tail)` for `|tail|` much smaller than `ln2/128`
///
/// Always uses the 128-entry table. Used by erfc to evaluate `exp(-x^2)`
/// with the rounding error of `x^2` folded back in.
#[inline(always)]
pub(crate) fn exp_tail<V: SimdVector<Scalar = f64>>(x: V, tail: V) -> V {
    let special = x.abs().gt(V::splat(THRES));
    let parts = exp_parts(x, Some(tail), &EXP_128);
    if special.any() {
        return scale_special(parts.scale, parts.poly, parts.n, 1280.0 * 128.0);
    }
    parts.poly.fma(parts.scale, parts.scale)
}
