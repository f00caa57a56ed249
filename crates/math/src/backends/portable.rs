//! Portable backend implementation
//!
//! Fixed-size arrays processed with fixed-trip-count loops. This backend works
//! on every target, serves as the reference for backend equivalence tests, and
//! provides the wide variants (`F64x8`, `F32x16`) used to exercise kernels at
//! vector widths beyond a single 128-bit register.
//!
//! All arithmetic is IEEE-754 with the same rounding as the hardware backends:
//! `fma` is always fused (libm's software fma, or `f64::mul_add` with `std`)
//! so results are bit-identical to NEON.

use crate::traits::{SimdBits, SimdMask, SimdVector};
use core::array;

/// Float lane vector backed by `[T; N]`
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct PortableVector<T, const N: usize>(pub [T; N]);

/// Unsigned integer lane vector backed by `[T; N]`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct PortableBits<T, const N: usize>(pub [T; N]);

/// Lane predicate backed by `[bool; N]`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct PortableMask<const N: usize>(pub [bool; N]);

/// Two f64 lanes (128-bit)
pub type F64x2 = PortableVector<f64, 2>;

/// Four f32 lanes (128-bit)
pub type F32x4 = PortableVector<f32, 4>;

/// Eight f64 lanes, standing in for a scalable 512-bit register
pub type F64x8 = PortableVector<f64, 8>;

/// Sixteen f32 lanes, standing in for a scalable 512-bit register
pub type F32x16 = PortableVector<f32, 16>;

#[inline(always)]
fn fused_f64(a: f64, b: f64, c: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        a.mul_add(b, c)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::fma(a, b, c)
    }
}

#[inline(always)]
fn fused_f32(a: f32, b: f32, c: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        a.mul_add(b, c)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::fmaf(a, b, c)
    }
}

#[inline(always)]
fn root_f64(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.sqrt()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::sqrt(x)
    }
}

#[inline(always)]
fn root_f32(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.sqrt()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::sqrtf(x)
    }
}

impl<const N: usize> SimdMask for PortableMask<N> {
    #[inline(always)]
    fn all(self) -> bool {
        self.0.iter().all(|&lane| lane)
    }

    #[inline(always)]
    fn any(self) -> bool {
        self.0.iter().any(|&lane| lane)
    }

    #[inline(always)]
    fn none(self) -> bool {
        !self.any()
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        PortableMask(array::from_fn(|i| self.0[i] & rhs.0[i]))
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        PortableMask(array::from_fn(|i| self.0[i] | rhs.0[i]))
    }

    #[inline(always)]
    fn not(self) -> Self {
        PortableMask(array::from_fn(|i| !self.0[i]))
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        PortableMask(array::from_fn(|i| self.0[i] ^ rhs.0[i]))
    }

    #[inline(always)]
    fn test(self, lane: usize) -> bool {
        self.0[lane]
    }
}

macro_rules! impl_portable {
    ($float:ty, $uint:ty, $sint:ty, $width:expr, $fused:path, $root:path) => {
        impl<const N: usize> SimdBits for PortableBits<$uint, N> {
            type Mask = PortableMask<N>;

            const LANES: usize = N;
            const WIDTH: u32 = $width;

            #[inline(always)]
            fn splat(value: u64) -> Self {
                PortableBits([value as $uint; N])
            }

            #[inline(always)]
            fn extract(self, lane: usize) -> u64 {
                self.0[lane] as u64
            }

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                PortableBits(array::from_fn(|i| self.0[i].wrapping_add(rhs.0[i])))
            }

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                PortableBits(array::from_fn(|i| self.0[i].wrapping_sub(rhs.0[i])))
            }

            #[inline(always)]
            fn and(self, rhs: Self) -> Self {
                PortableBits(array::from_fn(|i| self.0[i] & rhs.0[i]))
            }

            #[inline(always)]
            fn or(self, rhs: Self) -> Self {
                PortableBits(array::from_fn(|i| self.0[i] | rhs.0[i]))
            }

            #[inline(always)]
            fn xor(self, rhs: Self) -> Self {
                PortableBits(array::from_fn(|i| self.0[i] ^ rhs.0[i]))
            }

            #[inline(always)]
            fn shl(self, count: u32) -> Self {
                PortableBits(array::from_fn(|i| self.0[i] << count))
            }

            #[inline(always)]
            fn shr(self, count: u32) -> Self {
                PortableBits(array::from_fn(|i| self.0[i] >> count))
            }

            #[inline(always)]
            fn sar(self, count: u32) -> Self {
                PortableBits(array::from_fn(|i| ((self.0[i] as $sint) >> count) as $uint))
            }

            #[inline(always)]
            fn lt(self, rhs: Self) -> Self::Mask {
                PortableMask(array::from_fn(|i| self.0[i] < rhs.0[i]))
            }

            #[inline(always)]
            fn le(self, rhs: Self) -> Self::Mask {
                PortableMask(array::from_fn(|i| self.0[i] <= rhs.0[i]))
            }

            #[inline(always)]
            fn gt(self, rhs: Self) -> Self::Mask {
                PortableMask(array::from_fn(|i| self.0[i] > rhs.0[i]))
            }

            #[inline(always)]
            fn ge(self, rhs: Self) -> Self::Mask {
                PortableMask(array::from_fn(|i| self.0[i] >= rhs.0[i]))
            }

            #[inline(always)]
            fn eq(self, rhs: Self) -> Self::Mask {
                PortableMask(array::from_fn(|i| self.0[i] == rhs.0[i]))
            }

            #[inline(always)]
            fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
                PortableBits(array::from_fn(|i| {
                    if mask.0[i] {
                        true_val.0[i]
                    } else {
                        false_val.0[i]
                    }
                }))
            }

            #[inline(always)]
            fn gather(table: &[u64], index: Self) -> Self {
                PortableBits(array::from_fn(|i| table[index.0[i] as usize] as $uint))
            }
        }

        impl<const N: usize> SimdVector for PortableVector<$float, N> {
            type Scalar = $float;
            type Mask = PortableMask<N>;
            type Bits = PortableBits<$uint, N>;

            const LANES: usize = N;

            #[inline(always)]
            fn splat(value: Self::Scalar) -> Self {
                PortableVector([value; N])
            }

            #[inline(always)]
            fn from_slice(slice: &[Self::Scalar]) -> Self {
                assert!(slice.len() >= N, "Slice too short for portable load");
                PortableVector(array::from_fn(|i| slice[i]))
            }

            #[inline(always)]
            fn to_slice(self, slice: &mut [Self::Scalar]) {
                assert!(slice.len() >= N, "Slice too short for portable store");
                slice[..N].copy_from_slice(&self.0);
            }

            #[inline(always)]
            fn extract(self, lane: usize) -> Self::Scalar {
                self.0[lane]
            }

            #[inline(always)]
            fn replace(mut self, lane: usize, value: Self::Scalar) -> Self {
                self.0[lane] = value;
                self
            }

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                PortableVector(array::from_fn(|i| self.0[i] + rhs.0[i]))
            }

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                PortableVector(array::from_fn(|i| self.0[i] - rhs.0[i]))
            }

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                PortableVector(array::from_fn(|i| self.0[i] * rhs.0[i]))
            }

            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                PortableVector(array::from_fn(|i| self.0[i] / rhs.0[i]))
            }

            #[inline(always)]
            fn neg(self) -> Self {
                PortableVector(array::from_fn(|i| -self.0[i]))
            }

            #[inline(always)]
            fn abs(self) -> Self {
                PortableVector(array::from_fn(|i| <$float>::from_bits(self.0[i].to_bits() & (<$uint>::MAX >> 1))))
            }

            #[inline(always)]
            fn sqrt(self) -> Self {
                PortableVector(array::from_fn(|i| $root(self.0[i])))
            }

            #[inline(always)]
            fn fma(self, b: Self, c: Self) -> Self {
                PortableVector(array::from_fn(|i| $fused(self.0[i], b.0[i], c.0[i])))
            }

            #[inline(always)]
            fn min(self, rhs: Self) -> Self {
                PortableVector(array::from_fn(|i| {
                    let (a, b) = (self.0[i], rhs.0[i]);
                    if a.is_nan() || b.is_nan() {
                        a + b
                    } else if a == b {
                        // -0 wins
                        <$float>::from_bits(a.to_bits() | b.to_bits())
                    } else if a < b {
                        a
                    } else {
                        b
                    }
                }))
            }

            #[inline(always)]
            fn max(self, rhs: Self) -> Self {
                PortableVector(array::from_fn(|i| {
                    let (a, b) = (self.0[i], rhs.0[i]);
                    if a.is_nan() || b.is_nan() {
                        a + b
                    } else if a == b {
                        // +0 wins
                        <$float>::from_bits(a.to_bits() & b.to_bits())
                    } else if a > b {
                        a
                    } else {
                        b
                    }
                }))
            }

            #[inline(always)]
            fn lt(self, rhs: Self) -> Self::Mask {
                PortableMask(array::from_fn(|i| self.0[i] < rhs.0[i]))
            }

            #[inline(always)]
            fn le(self, rhs: Self) -> Self::Mask {
                PortableMask(array::from_fn(|i| self.0[i] <= rhs.0[i]))
            }

            #[inline(always)]
            fn gt(self, rhs: Self) -> Self::Mask {
                PortableMask(array::from_fn(|i| self.0[i] > rhs.0[i]))
            }

            #[inline(always)]
            fn ge(self, rhs: Self) -> Self::Mask {
                PortableMask(array::from_fn(|i| self.0[i] >= rhs.0[i]))
            }

            #[inline(always)]
            fn eq(self, rhs: Self) -> Self::Mask {
                PortableMask(array::from_fn(|i| self.0[i] == rhs.0[i]))
            }

            #[inline(always)]
            fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
                PortableVector(array::from_fn(|i| {
                    if mask.0[i] {
                        true_val.0[i]
                    } else {
                        false_val.0[i]
                    }
                }))
            }

            #[inline(always)]
            fn to_bits(self) -> Self::Bits {
                PortableBits(array::from_fn(|i| self.0[i].to_bits()))
            }

            #[inline(always)]
            fn from_bits(bits: Self::Bits) -> Self {
                PortableVector(array::from_fn(|i| <$float>::from_bits(bits.0[i])))
            }

            #[inline(always)]
            fn to_int(self) -> Self::Bits {
                PortableBits(array::from_fn(|i| self.0[i] as $sint as $uint))
            }

            #[inline(always)]
            fn from_int(bits: Self::Bits) -> Self {
                PortableVector(array::from_fn(|i| bits.0[i] as $sint as $float))
            }

            #[inline(always)]
            fn gather(table: &[Self::Scalar], index: Self::Bits) -> Self {
                PortableVector(array::from_fn(|i| table[index.0[i] as usize]))
            }
        }
    };
}

impl_portable!(f64, u64, i64, 64, fused_f64, root_f64);
impl_portable!(f32, u32, i32, 32, fused_f32, root_f32);
