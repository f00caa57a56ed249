//! Single-precision exponential
//!
//! `x = n*ln2 + r` with `|r| <= ln2/2`, `exp(x) = 2^n * (1 + P(r))`.
//!
//! Two ways of building the scale `2^n` are available:
//!
//! - **Exponent shift** (default): `n` is an integer and its bits are shifted
//!   straight into the exponent field. Lanes with `|n| > 126` finish through
//!   two-step scaling so overflow and underflow come out correctly.
//! - **Scale lookup** (`scale-lookup` feature): `n` is rounded to a multiple
//!   of 1/64. The low 6 bits of the rounded value index a table of
//!   `2^(i/64)` mantissas and the next 8 bits are already the biased
//!   exponent, so the scale is one gather and one OR. `|r| <= ln2/128`, which
//!   tightens the error. Lanes with `|x| > 87.34` use the scalar routine.
//!
//! # Error Bounds
//!
//! - Exponent shift: 1.95 ULP
//! - Scale lookup: 1.04 ULP

#![allow(clippy::excessive_precision)]

use super::{bits, SHIFT_F32};
use crate::config::{DefaultMode, FpMode, SCALE_LOOKUP};
use crate::fallback::special_case;
use crate::tables::SCALE_LOOKUP_TABLE;
use crate::traits::{SimdBits, SimdMask, SimdVector};

const INV_LN2: f32 = 1.442695;
const LN2_HI: f32 = 0.69314575;
const LN2_LO: f32 = 1.4286068e-06;

/// `exp(r) - 1 ~= C4 r + C3 r^2 + C2 r^3 + C1 r^4 + C0 r^5`
const C: [f32; 5] = [0.00824739, 0.041899767, 0.16668396, 0.49999127, 0.9999994];

/// 0x1.903f8p17: rounds `x/ln2` to a multiple of 1/64 and leaves the table
/// index in bits 0..6 and the biased exponent in bits 6..14 of the sum
const LOOKUP_SHIFT: f32 = 204927.0;

/// Largest |x| whose result stays a normal float on the lookup path
const LOOKUP_THRES: f32 = 87.34196;

/// `|x|` below 2^-63 or at least 64 is special with exceptions respected
const EXCEPT_TINY: u64 = 0x2000_0000;
const EXCEPT_RANGE: u64 = 0x2280_0000;

const ABS_MASK: u64 = 0x7fff_ffff;
const ONE: u64 = 0x3f80_0000;

#[inline(always)]
fn exp_poly<V: SimdVector<Scalar = f32>>(r: V) -> V {
    let r2 = r.mul(r);
    let p = r.fma(V::splat(C[0]), V::splat(C[1]));
    let q = r.fma(V::splat(C[2]), V::splat(C[3]));
    let q = p.fma(r2, q);
    let p = r.mul(V::splat(C[4]));
    q.fma(r2, p)
}

/// Reduction against `shift`: returns `(z, n, r)` with `z = x/ln2 + shift`
#[inline(always)]
fn reduce<V: SimdVector<Scalar = f32>>(x: V, shift: f32) -> (V, V, V) {
    let z = x.fma(V::splat(INV_LN2), V::splat(shift));
    let n = z.sub(V::splat(shift));
    let r = n.fma(V::splat(-LN2_HI), x);
    let r = n.fma(V::splat(-LN2_LO), r);
    (z, n, r)
}

/// Two-step scaling for lanes with `126 < |n|`
#[inline(never)]
fn scale_special<V: SimdVector<Scalar = f32>>(
    poly: V,
    n: V,
    e: V::Bits,
    special: V::Mask,
    scale: V,
) -> V {
    let b = V::Bits::select(n.le(V::splat(0.0)), bits::<V>(0x8200_0000), bits::<V>(0));
    let s1 = V::from_bits(bits::<V>(0x7f00_0000).add(b));
    let s2 = V::from_bits(e.sub(b));
    let saturate = n.abs().gt(V::splat(192.0));
    let r2 = s1.mul(s1);
    let r1 = poly.fma(s2, s2).mul(s1);
    let r0 = poly.fma(scale, scale);
    V::select(saturate, r2, V::select(special, r1, r0))
}

/// Exponent-shift path without special handling beyond two-step scaling
#[inline(always)]
fn expf_shift<V: SimdVector<Scalar = f32>>(x: V) -> V {
    let (z, n, r) = reduce(x, SHIFT_F32);
    let e = z.to_bits().shl(23);
    let scale = V::from_bits(e.add(bits::<V>(ONE)));
    let poly = exp_poly(r);

    let special = n.abs().gt(V::splat(126.0));
    if special.any() {
        return scale_special(poly, n, e, special, scale);
    }
    poly.fma(scale, scale)
}

/// Scale-lookup path; `x` must satisfy `|x| <= 87.34`
#[inline(always)]
fn expf_lookup<V: SimdVector<Scalar = f32>>(x: V) -> V {
    let (z, _, r) = reduce(x, LOOKUP_SHIFT);
    let u = z.to_bits();
    let exponent = u.shr(6).and(bits::<V>(0xff)).shl(23);
    let mantissa = V::Bits::gather(&SCALE_LOOKUP_TABLE, u.and(bits::<V>(63)));
    let scale = V::from_bits(exponent.or(mantissa));
    exp_poly(r).fma(scale, scale)
}

/// Vectorized e^x for f32 in the default [`FpMode`]
#[inline]
pub fn expf<V: SimdVector<Scalar = f32>>(x: V) -> V {
    expf_with::<DefaultMode, V>(x)
}

/// Vectorized e^x for f32
///
/// # Example
///
/// ```rust
/// use vela_math::{F32x4, SimdVector};
/// use vela_math::math::expf;
///
/// let y = expf(F32x4::splat(0.0));
/// assert_eq!(y.extract(0), 1.0);
/// ```
#[inline]
pub fn expf_with<M: FpMode, V: SimdVector<Scalar = f32>>(x: V) -> V {
    if SCALE_LOOKUP {
        // out of range or NaN
        let special = x.abs().le(V::splat(LOOKUP_THRES)).not();
        let (special, xm) = if M::RESPECT_EXCEPTIONS {
            // r^2 underflows below 2^-63
            let tiny = x.to_bits().and(bits::<V>(ABS_MASK)).lt(bits::<V>(EXCEPT_TINY));
            let special = special.or(tiny);
            (special, V::select(special, V::splat(1.0), x))
        } else {
            (special, x)
        };
        let y = expf_lookup(xm);
        if special.any() {
            return special_case(x, y, special, libm::expf);
        }
        return y;
    }

    if M::RESPECT_EXCEPTIONS {
        let iax = x.to_bits().and(bits::<V>(ABS_MASK));
        let special = iax
            .sub(bits::<V>(EXCEPT_TINY))
            .ge(bits::<V>(EXCEPT_RANGE));
        let y = expf_shift(V::select(special, V::splat(1.0), x));
        if special.any() {
            return special_case(x, y, special, libm::expf);
        }
        y
    } else {
        expf_shift(x)
    }
}
