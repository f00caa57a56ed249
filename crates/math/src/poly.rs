//! Polynomial evaluation schemes
//!
//! Coefficients are ordered from the constant term upwards. Every step is a
//! fused multiply-add, and the association order of each scheme is fixed:
//! a kernel's error bound was measured with one particular scheme and changes
//! if the order changes.

use crate::traits::SimdVector;

/// Horner's scheme: `c0 + x*(c1 + x*(c2 + ...))`
///
/// # Panics
///
/// Panics if `coeffs` is empty.
#[inline(always)]
pub fn horner<V: SimdVector>(x: V, coeffs: &[V::Scalar]) -> V {
    assert!(!coeffs.is_empty(), "horner needs at least one coefficient");
    let degree = coeffs.len() - 1;
    let mut acc = V::splat(coeffs[degree]);
    for &c in coeffs[..degree].iter().rev() {
        acc = acc.fma(x, V::splat(c));
    }
    acc
}

/// `x` and `x^2` for [`estrin`]
///
/// Higher powers are squared up inside [`estrin`], only as far as the degree
/// needs. An unused `x^16` would still underflow for small `x`.
#[derive(Copy, Clone)]
pub struct EstrinPowers<V> {
    x: V,
    x2: V,
}

impl<V: SimdVector> EstrinPowers<V> {
    /// Square up from `x`
    #[inline(always)]
    pub fn new(x: V) -> Self {
        let x2 = x.mul(x);
        Self::from_x2(x, x2)
    }

    /// Start from `x` and an already computed `x^2`
    #[inline(always)]
    pub fn from_x2(x: V, x2: V) -> Self {
        Self { x, x2 }
    }

    /// `x^2`
    #[inline(always)]
    pub fn x2(&self) -> V {
        self.x2
    }

    /// `x^4`
    #[inline(always)]
    pub fn x4(&self) -> V {
        self.x2.mul(self.x2)
    }
}

/// Estrin's scheme
///
/// A polynomial of degree `n` is split at the largest power of two `p <= n`
/// into `low(x) + x^p * high(x)`, each half evaluated the same way. Up to
/// degree 31 is supported.
///
/// # Panics
///
/// Panics if `coeffs` is empty or has more than 32 entries.
#[inline]
pub fn estrin<V: SimdVector>(pows: &EstrinPowers<V>, coeffs: &[V::Scalar]) -> V {
    assert!(
        !coeffs.is_empty() && coeffs.len() <= 32,
        "estrin supports degrees 0 to 31"
    );
    let mut table = [pows.x, pows.x2, pows.x2, pows.x2, pows.x2];
    let top = match coeffs.len() - 1 {
        0 => 0,
        degree => (usize::BITS - 1 - degree.leading_zeros()) as usize,
    };
    for k in 2..=top {
        table[k] = table[k - 1].mul(table[k - 1]);
    }
    estrin_split(&table, coeffs)
}

#[inline]
fn estrin_split<V: SimdVector>(pows: &[V; 5], coeffs: &[V::Scalar]) -> V {
    let degree = coeffs.len() - 1;
    if degree == 0 {
        return V::splat(coeffs[0]);
    }
    let k = (usize::BITS - 1 - degree.leading_zeros()) as usize;
    let (low, high) = coeffs.split_at(1 << k);
    let low = estrin_split(pows, low);
    let high = estrin_split(pows, high);
    pows[k].fma(high, low)
}

/// Pairwise Horner: `(c0 + c1 x) + x^2 * ((c2 + c3 x) + x^2 * (...))`
///
/// # Panics
///
/// Panics if `coeffs` is empty.
#[inline]
pub fn pairwise_horner<V: SimdVector>(x: V, x2: V, coeffs: &[V::Scalar]) -> V {
    assert!(!coeffs.is_empty(), "pairwise_horner needs at least one coefficient");
    let pair = |c: &[V::Scalar]| -> V {
        if c.len() == 1 {
            V::splat(c[0])
        } else {
            x.fma(V::splat(c[1]), V::splat(c[0]))
        }
    };

    let chunks = coeffs.len().div_ceil(2);
    let mut acc = pair(&coeffs[2 * (chunks - 1)..]);
    for j in (0..chunks - 1).rev() {
        acc = x2.fma(acc, pair(&coeffs[2 * j..2 * j + 2]));
    }
    acc
}
