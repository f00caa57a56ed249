//! Core lane-vector abstraction traits
//!
//! Every kernel in [`crate::math`] is written once against these traits and
//! monomorphized for each backend. A float vector carries three associated
//! types: its scalar element, a mask produced by comparisons, and an unsigned
//! integer vector of the same lane width used for bit-pattern manipulation.

/// Lane vector of IEEE-754 floats
///
/// Implemented by the portable array backend for any lane count and by the
/// NEON backend for 128-bit registers.
///
/// # Example
///
/// ```rust
/// use vela_math::{F64x2, SimdVector};
///
/// let a = F64x2::splat(2.0);
/// let b = F64x2::splat(3.0);
/// assert_eq!(a.fma(b, F64x2::splat(1.0)).extract(1), 7.0);
/// ```
pub trait SimdVector: Copy + Clone + Sized {
    /// The underlying scalar type (f32 or f64)
    type Scalar: Copy + PartialEq + core::fmt::Debug;

    /// Mask produced by comparisons on this vector and on its bit view
    type Mask: SimdMask;

    /// Unsigned integer vector with the same lane count and lane width
    type Bits: SimdBits<Mask = Self::Mask>;

    /// Number of lanes
    const LANES: usize;

    // Construction

    /// Broadcast a scalar value to all lanes
    fn splat(value: Self::Scalar) -> Self;

    /// Load from a slice
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than LANES elements
    fn from_slice(slice: &[Self::Scalar]) -> Self;

    /// Store to a slice
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than LANES elements
    fn to_slice(self, slice: &mut [Self::Scalar]);

    /// Read a single lane
    fn extract(self, lane: usize) -> Self::Scalar;

    /// Return a copy with one lane overwritten
    fn replace(self, lane: usize, value: Self::Scalar) -> Self;

    // Arithmetic

    /// Element-wise addition
    fn add(self, rhs: Self) -> Self;

    /// Element-wise subtraction
    fn sub(self, rhs: Self) -> Self;

    /// Element-wise multiplication
    fn mul(self, rhs: Self) -> Self;

    /// Element-wise division
    fn div(self, rhs: Self) -> Self;

    /// Element-wise negation (flips the sign bit, including on zero and NaN)
    fn neg(self) -> Self;

    /// Element-wise absolute value (clears the sign bit)
    fn abs(self) -> Self;

    /// Element-wise square root, correctly rounded
    fn sqrt(self) -> Self;

    /// Fused multiply-add: `self * b + c` with a single rounding
    ///
    /// Every backend must fuse. The kernels' error bounds depend on it, and
    /// backends agree bit-for-bit only because of it.
    fn fma(self, b: Self, c: Self) -> Self;

    /// Element-wise minimum
    ///
    /// A NaN in either operand gives NaN, and `-0` is below `+0`, matching
    /// NEON `vminq`.
    fn min(self, rhs: Self) -> Self;

    /// Element-wise maximum
    ///
    /// A NaN in either operand gives NaN, and `+0` is above `-0`, matching
    /// NEON `vmaxq`.
    fn max(self, rhs: Self) -> Self;

    // Comparisons (ordered; any NaN operand yields false)

    /// Lane-wise `self < rhs`
    fn lt(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `self <= rhs`
    fn le(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `self > rhs`
    fn gt(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `self >= rhs`
    fn ge(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `self == rhs`
    fn eq(self, rhs: Self) -> Self::Mask;

    /// For each lane: `mask[i] ? true_val[i] : false_val[i]`
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self;

    // Bit-pattern view

    /// Reinterpret the float lanes as unsigned integers
    fn to_bits(self) -> Self::Bits;

    /// Reinterpret unsigned integer lanes as floats
    fn from_bits(bits: Self::Bits) -> Self;

    /// Convert to signed integers, rounding toward zero and saturating
    ///
    /// NaN converts to 0. The two's-complement result is returned in the
    /// unsigned bit view.
    fn to_int(self) -> Self::Bits;

    /// Convert signed integers (two's complement in the bit view) to floats
    fn from_int(bits: Self::Bits) -> Self;

    /// Per-lane table lookup: lane `i` becomes `table[index[i]]`
    ///
    /// Callers keep every index inside the table.
    fn gather(table: &[Self::Scalar], index: Self::Bits) -> Self;
}

/// Unsigned integer lane vector for IEEE-754 bit manipulation
///
/// Lane width matches the float vector it belongs to (u64 lanes for f64,
/// u32 lanes for f32). Constants and extracted lanes cross the interface as
/// `u64` and are truncated to the lane width.
///
/// Arithmetic wraps; comparisons are unsigned.
pub trait SimdBits: Copy + Clone + Sized {
    /// Mask produced by comparisons
    type Mask: SimdMask;

    /// Number of lanes
    const LANES: usize;

    /// Lane width in bits (32 or 64)
    const WIDTH: u32;

    /// Broadcast a constant, truncated to the lane width
    fn splat(value: u64) -> Self;

    /// Read a single lane, zero-extended
    fn extract(self, lane: usize) -> u64;

    /// Wrapping addition
    fn add(self, rhs: Self) -> Self;

    /// Wrapping subtraction
    fn sub(self, rhs: Self) -> Self;

    /// Bitwise AND
    fn and(self, rhs: Self) -> Self;

    /// Bitwise OR
    fn or(self, rhs: Self) -> Self;

    /// Bitwise XOR
    fn xor(self, rhs: Self) -> Self;

    /// Logical left shift
    fn shl(self, count: u32) -> Self;

    /// Logical right shift
    fn shr(self, count: u32) -> Self;

    /// Arithmetic right shift (sign-extending)
    fn sar(self, count: u32) -> Self;

    /// Unsigned `self < rhs`
    fn lt(self, rhs: Self) -> Self::Mask;

    /// Unsigned `self <= rhs`
    fn le(self, rhs: Self) -> Self::Mask;

    /// Unsigned `self > rhs`
    fn gt(self, rhs: Self) -> Self::Mask;

    /// Unsigned `self >= rhs`
    fn ge(self, rhs: Self) -> Self::Mask;

    /// Lane-wise equality
    fn eq(self, rhs: Self) -> Self::Mask;

    /// For each lane: `mask[i] ? true_val[i] : false_val[i]`
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self;

    /// Per-lane table lookup, entries truncated to the lane width
    fn gather(table: &[u64], index: Self) -> Self;
}

/// Per-lane predicate
///
/// # Example
///
/// ```rust
/// use vela_math::{F32x4, SimdMask, SimdVector};
///
/// let a = F32x4::splat(1.0);
/// let mask = a.lt(F32x4::splat(2.0));
/// assert!(mask.all());
/// assert!(mask.test(3));
/// ```
pub trait SimdMask: Copy + Clone + Sized {
    /// Returns true if all lanes are set
    fn all(self) -> bool;

    /// Returns true if any lane is set
    fn any(self) -> bool;

    /// Returns true if no lanes are set
    fn none(self) -> bool;

    /// Lane-wise AND
    fn and(self, rhs: Self) -> Self;

    /// Lane-wise OR
    fn or(self, rhs: Self) -> Self;

    /// Lane-wise NOT
    fn not(self) -> Self;

    /// Lane-wise XOR
    fn xor(self, rhs: Self) -> Self;

    /// Whether a single lane is set
    fn test(self, lane: usize) -> bool;
}
