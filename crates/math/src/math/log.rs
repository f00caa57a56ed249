//! Double-precision logarithms in base e, 2 and 10
//!
//! `x = 2^k * z` with `z` in `[OFF, 2*OFF)`. The top mantissa bits of `z`
//! select a table row holding `1/c` and `log(c)` for a `c` near `z`, so
//! `log(x) = k*ln2 + log(c) + log1p(z/c - 1)` where `r = z/c - 1` is tiny and
//! computed exactly with a fused multiply-add.
//!
//! Zero, negative, subnormal, infinite and NaN inputs are recomputed with the
//! scalar routine. Maximum observed error is about 2.6 ULP for all three
//! bases.

#![allow(clippy::excessive_precision)]

use super::bits;
use crate::fallback::special_case;
use crate::tables::log::{INVC, LOG10C, LOG2C, LOGC};
use crate::tables::{LOG_OFF, LOG_TABLE};
use crate::traits::{SimdBits, SimdMask, SimdVector};

const LN2: f64 = 0.6931471805599453;
const INV_LN2: f64 = 1.4426950408889634;
const INV_LN10: f64 = 0.4342944819032518;
const LOG10_2: f64 = 0.3010299956639812;

/// `log1p(r) - r ~= r^2 * P(r)`
const POLY_E: [f64; 5] = [
    -0.4999999999999995,
    0.33333333331917214,
    -0.25000000020958385,
    0.20000301723226804,
    -0.16665331308706838,
];

/// `log2(1 + r) - r/ln2 ~= r^2 * P(r)`
const POLY_2: [f64; 5] = [
    -0.721347520444481,
    0.4808983469425575,
    -0.3606737605246064,
    0.288543361123823,
    -0.24042990833842934,
];

/// `log10(1 + r) - r/ln10 ~= r^2 * P(r)`
const POLY_10: [f64; 5] = [
    -0.2171472409516257,
    0.1447648272949338,
    -0.10857362056683406,
    0.086860206747975,
    -0.07237661426460879,
];

/// Smallest normal, as bits
const MIN_NORM: u64 = 0x0010_0000_0000_0000;

/// Positive infinity, as bits
const INF: u64 = 0x7ff0_0000_0000_0000;

/// Reduced argument and table lookups shared by the three bases
struct LogReduced<V: SimdVector> {
    special: V::Mask,
    r: V,
    r2: V,
    k: V,
    /// Bits of the row start in the flattened table
    row: V::Bits,
}

#[inline(always)]
fn reduce<V: SimdVector<Scalar = f64>>(x: V) -> LogReduced<V> {
    let ix = x.to_bits();
    // subnormal, zero, negative, Inf or NaN
    let special = ix
        .sub(bits::<V>(MIN_NORM))
        .ge(bits::<V>(INF - MIN_NORM));

    let tmp = ix.sub(bits::<V>(LOG_OFF));
    let i = tmp.shr(45).and(bits::<V>(LOG_TABLE.len() as u64 - 1));
    let k = tmp.sar(52);
    let iz = ix.sub(tmp.and(bits::<V>(0xfff << 52)));
    let z = V::from_bits(iz);

    let row = i.shl(2);
    let invc = V::gather(LOG_TABLE.as_flattened(), row.add(bits::<V>(INVC as u64)));

    // r = z/c - 1, exact
    let r = z.fma(invc, V::splat(-1.0));
    LogReduced {
        special,
        r,
        r2: r.mul(r),
        k: V::from_int(k),
        row,
    }
}

#[inline(always)]
fn column<V: SimdVector<Scalar = f64>>(row: V::Bits, col: usize) -> V {
    V::gather(LOG_TABLE.as_flattened(), row.add(bits::<V>(col as u64)))
}

/// `hi + r^2 * P(r)` with the fixed association order shared by all bases
#[inline(always)]
fn finish<V: SimdVector<Scalar = f64>>(hi: V, r: V, r2: V, poly: &[f64; 5]) -> V {
    let y = r.fma(V::splat(poly[3]), V::splat(poly[2]));
    let p = r.fma(V::splat(poly[1]), V::splat(poly[0]));
    let y = r2.fma(V::splat(poly[4]), y);
    let y = y.fma(r2, p);
    y.fma(r2, hi)
}

/// Vectorized natural logarithm
///
/// # Example
///
/// ```rust
/// use vela_math::{F64x2, SimdVector};
/// use vela_math::math::log;
///
/// assert_eq!(log(F64x2::splat(1.0)).extract(0), 0.0);
/// ```
#[inline]
pub fn log<V: SimdVector<Scalar = f64>>(x: V) -> V {
    let red = reduce(x);
    let logc: V = column::<V>(red.row, LOGC);

    // hi = k*ln2 + log(c) + r
    let hi = red.k.fma(V::splat(LN2), logc.add(red.r));
    let y = finish(hi, red.r, red.r2, &POLY_E);

    if red.special.any() {
        return special_case(x, y, red.special, libm::log);
    }
    y
}

/// Vectorized base-2 logarithm
///
/// Exact for powers of two.
#[inline]
pub fn log2<V: SimdVector<Scalar = f64>>(x: V) -> V {
    let red = reduce(x);
    let log2c: V = column::<V>(red.row, LOG2C);

    // hi = k + log2(c) + r/ln2
    let w = red.r.fma(V::splat(INV_LN2), log2c);
    let hi = red.k.add(w);
    let y = finish(hi, red.r, red.r2, &POLY_2);

    if red.special.any() {
        return special_case(x, y, red.special, libm::log2);
    }
    y
}

/// Vectorized base-10 logarithm
#[inline]
pub fn log10<V: SimdVector<Scalar = f64>>(x: V) -> V {
    let red = reduce(x);
    let log10c: V = column::<V>(red.row, LOG10C);

    // hi = k*log10(2) + log10(c) + r/ln10
    let w = red.r.fma(V::splat(INV_LN10), log10c);
    let hi = red.k.fma(V::splat(LOG10_2), w);
    let y = finish(hi, red.r, red.r2, &POLY_10);

    if red.special.any() {
        return special_case(x, y, red.special, libm::log10);
    }
    y
}
