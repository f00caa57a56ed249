//! Slice drivers
//!
//! Apply a kernel across a whole slice, `V::LANES` elements at a time. The
//! remainder that does not fill a vector is loaded into a vector padded with
//! a benign value, so tail elements go through exactly the same kernel as
//! the rest and their results do not depend on the slice length.
//!
//! # Example
//!
//! ```rust
//! use vela_math::math::exp;
//! use vela_math::slice::map_f64;
//! use vela_math::F64x2;
//!
//! let input = [0.0, 1.0, 2.0];
//! let mut output = [0.0; 3];
//! map_f64::<F64x2, _>(&input, &mut output, exp);
//! assert_eq!(output[0], 1.0);
//! ```

use crate::traits::SimdVector;

/// Padding for tail lanes: inside the fast-path domain of every kernel
const PAD: f64 = 0.5;

#[inline(always)]
fn map_generic<V, F>(input: &[V::Scalar], output: &mut [V::Scalar], pad: V::Scalar, kernel: F)
where
    V: SimdVector,
    F: Fn(V) -> V,
{
    assert_eq!(
        input.len(),
        output.len(),
        "Input length {} doesn't match output length {}",
        input.len(),
        output.len()
    );

    let mut in_chunks = input.chunks_exact(V::LANES);
    let mut out_chunks = output.chunks_exact_mut(V::LANES);
    for (src, dst) in (&mut in_chunks).zip(&mut out_chunks) {
        kernel(V::from_slice(src)).to_slice(dst);
    }

    let tail = in_chunks.remainder();
    if !tail.is_empty() {
        let y = kernel(load_tail(tail, pad));
        store_tail(y, out_chunks.into_remainder());
    }
}

/// Fewer than `V::LANES` values, padded
#[inline(always)]
fn load_tail<V: SimdVector>(tail: &[V::Scalar], pad: V::Scalar) -> V {
    tail.iter()
        .enumerate()
        .fold(V::splat(pad), |x, (lane, &value)| x.replace(lane, value))
}

#[inline(always)]
fn store_tail<V: SimdVector>(y: V, dst: &mut [V::Scalar]) {
    for (lane, out) in dst.iter_mut().enumerate() {
        *out = y.extract(lane);
    }
}

/// Apply a unary f64 kernel to every element of `input`
///
/// # Panics
///
/// Panics if `input` and `output` have different lengths.
#[inline]
pub fn map_f64<V, F>(input: &[f64], output: &mut [f64], kernel: F)
where
    V: SimdVector<Scalar = f64>,
    F: Fn(V) -> V,
{
    map_generic::<V, F>(input, output, PAD, kernel);
}

/// Apply a unary f32 kernel to every element of `input`
///
/// # Panics
///
/// Panics if `input` and `output` have different lengths.
#[inline]
pub fn map_f32<V, F>(input: &[f32], output: &mut [f32], kernel: F)
where
    V: SimdVector<Scalar = f32>,
    F: Fn(V) -> V,
{
    map_generic::<V, F>(input, output, PAD as f32, kernel);
}

/// Apply a binary f64 kernel element-wise, `output[i] = kernel(a[i], b[i])`
///
/// # Panics
///
/// Panics if the three slices do not all have the same length.
///
/// # Example
///
/// ```rust
/// use vela_math::math::atan2;
/// use vela_math::slice::map2_f64;
/// use vela_math::F64x2;
///
/// let y = [1.0, -1.0, 0.5];
/// let x = [1.0, 1.0, -2.0];
/// let mut out = [0.0; 3];
/// map2_f64::<F64x2, _>(&y, &x, &mut out, atan2);
/// assert!((out[0] - core::f64::consts::FRAC_PI_4).abs() < 1e-15);
/// ```
#[inline]
pub fn map2_f64<V, F>(a: &[f64], b: &[f64], output: &mut [f64], kernel: F)
where
    V: SimdVector<Scalar = f64>,
    F: Fn(V, V) -> V,
{
    assert_eq!(
        a.len(),
        b.len(),
        "First input length {} doesn't match second input length {}",
        a.len(),
        b.len()
    );
    assert_eq!(
        a.len(),
        output.len(),
        "Input length {} doesn't match output length {}",
        a.len(),
        output.len()
    );

    let mut a_chunks = a.chunks_exact(V::LANES);
    let mut b_chunks = b.chunks_exact(V::LANES);
    let mut out_chunks = output.chunks_exact_mut(V::LANES);
    for ((ya, xb), dst) in (&mut a_chunks).zip(&mut b_chunks).zip(&mut out_chunks) {
        kernel(V::from_slice(ya), V::from_slice(xb)).to_slice(dst);
    }

    let (a_tail, b_tail) = (a_chunks.remainder(), b_chunks.remainder());
    if !a_tail.is_empty() {
        let y = kernel(load_tail(a_tail, PAD), load_tail(b_tail, PAD));
        store_tail(y, out_chunks.into_remainder());
    }
}
