//! NEON backend implementation (ARM64)
//!
//! 128-bit registers: two f64 lanes (`NeonF64x2`) or four f32 lanes
//! (`NeonF32x4`), each with a matching unsigned bit view and mask.
//!
//! **Note**: NEON is mandatory on aarch64, so no runtime detection is needed.

// This backend only compiles on aarch64 targets
#![cfg(target_arch = "aarch64")]

use crate::traits::{SimdBits, SimdMask, SimdVector};
use core::arch::aarch64::*;
use core::mem::transmute;

/// Two f64 lanes in a NEON register
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct NeonF64x2(float64x2_t);

/// Two u64 lanes, the bit view of [`NeonF64x2`]
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct NeonU64x2(uint64x2_t);

/// Two-lane mask (all-ones or all-zeros per u64 lane)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct NeonMask64x2(uint64x2_t);

/// Four f32 lanes in a NEON register
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct NeonF32x4(float32x4_t);

/// Four u32 lanes, the bit view of [`NeonF32x4`]
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct NeonU32x4(uint32x4_t);

/// Four-lane mask (all-ones or all-zeros per u32 lane)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct NeonMask32x4(uint32x4_t);

impl SimdMask for NeonMask64x2 {
    #[inline(always)]
    fn all(self) -> bool {
        unsafe { vminvq_u32(vreinterpretq_u32_u64(self.0)) == u32::MAX }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { vmaxvq_u32(vreinterpretq_u32_u64(self.0)) != 0 }
    }

    #[inline(always)]
    fn none(self) -> bool {
        unsafe { vmaxvq_u32(vreinterpretq_u32_u64(self.0)) == 0 }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { NeonMask64x2(vandq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { NeonMask64x2(vorrq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn not(self) -> Self {
        unsafe { NeonMask64x2(vreinterpretq_u64_u32(vmvnq_u32(vreinterpretq_u32_u64(self.0)))) }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { NeonMask64x2(veorq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn test(self, lane: usize) -> bool {
        let lanes: [u64; 2] = unsafe { transmute(self.0) };
        lanes[lane] != 0
    }
}

impl SimdMask for NeonMask32x4 {
    #[inline(always)]
    fn all(self) -> bool {
        unsafe { vminvq_u32(self.0) == u32::MAX }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { vmaxvq_u32(self.0) != 0 }
    }

    #[inline(always)]
    fn none(self) -> bool {
        unsafe { vmaxvq_u32(self.0) == 0 }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { NeonMask32x4(vandq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { NeonMask32x4(vorrq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn not(self) -> Self {
        unsafe { NeonMask32x4(vmvnq_u32(self.0)) }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { NeonMask32x4(veorq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn test(self, lane: usize) -> bool {
        let lanes: [u32; 4] = unsafe { transmute(self.0) };
        lanes[lane] != 0
    }
}

impl SimdBits for NeonU64x2 {
    type Mask = NeonMask64x2;

    const LANES: usize = 2;
    const WIDTH: u32 = 64;

    #[inline(always)]
    fn splat(value: u64) -> Self {
        unsafe { NeonU64x2(vdupq_n_u64(value)) }
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> u64 {
        let lanes: [u64; 2] = unsafe { transmute(self.0) };
        lanes[lane]
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { NeonU64x2(vaddq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { NeonU64x2(vsubq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { NeonU64x2(vandq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { NeonU64x2(vorrq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { NeonU64x2(veorq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        unsafe { NeonU64x2(vshlq_u64(self.0, vdupq_n_s64(count as i64))) }
    }

    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        // vshlq with a negative count shifts right
        unsafe { NeonU64x2(vshlq_u64(self.0, vdupq_n_s64(-(count as i64)))) }
    }

    #[inline(always)]
    fn sar(self, count: u32) -> Self {
        unsafe {
            let signed = vshlq_s64(vreinterpretq_s64_u64(self.0), vdupq_n_s64(-(count as i64)));
            NeonU64x2(vreinterpretq_u64_s64(signed))
        }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask64x2(vcltq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn le(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask64x2(vcleq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask64x2(vcgtq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask64x2(vcgeq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask64x2(vceqq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        unsafe { NeonU64x2(vbslq_u64(mask.0, true_val.0, false_val.0)) }
    }

    #[inline(always)]
    fn gather(table: &[u64], index: Self) -> Self {
        let lanes: [u64; 2] = unsafe { transmute(index.0) };
        let picked = [table[lanes[0] as usize], table[lanes[1] as usize]];
        unsafe { NeonU64x2(vld1q_u64(picked.as_ptr())) }
    }
}

impl SimdBits for NeonU32x4 {
    type Mask = NeonMask32x4;

    const LANES: usize = 4;
    const WIDTH: u32 = 32;

    #[inline(always)]
    fn splat(value: u64) -> Self {
        unsafe { NeonU32x4(vdupq_n_u32(value as u32)) }
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> u64 {
        let lanes: [u32; 4] = unsafe { transmute(self.0) };
        lanes[lane] as u64
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { NeonU32x4(vaddq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { NeonU32x4(vsubq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { NeonU32x4(vandq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { NeonU32x4(vorrq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { NeonU32x4(veorq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        unsafe { NeonU32x4(vshlq_u32(self.0, vdupq_n_s32(count as i32))) }
    }

    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        unsafe { NeonU32x4(vshlq_u32(self.0, vdupq_n_s32(-(count as i32)))) }
    }

    #[inline(always)]
    fn sar(self, count: u32) -> Self {
        unsafe {
            let signed = vshlq_s32(vreinterpretq_s32_u32(self.0), vdupq_n_s32(-(count as i32)));
            NeonU32x4(vreinterpretq_u32_s32(signed))
        }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask32x4(vcltq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn le(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask32x4(vcleq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask32x4(vcgtq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask32x4(vcgeq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask32x4(vceqq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        unsafe { NeonU32x4(vbslq_u32(mask.0, true_val.0, false_val.0)) }
    }

    #[inline(always)]
    fn gather(table: &[u64], index: Self) -> Self {
        let lanes: [u32; 4] = unsafe { transmute(index.0) };
        let picked = lanes.map(|i| table[i as usize] as u32);
        unsafe { NeonU32x4(vld1q_u32(picked.as_ptr())) }
    }
}

impl SimdVector for NeonF64x2 {
    type Scalar = f64;
    type Mask = NeonMask64x2;
    type Bits = NeonU64x2;

    const LANES: usize = 2;

    #[inline(always)]
    fn splat(value: Self::Scalar) -> Self {
        unsafe { NeonF64x2(vdupq_n_f64(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for NEON load");
        unsafe { NeonF64x2(vld1q_f64(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [Self::Scalar]) {
        assert!(slice.len() >= Self::LANES, "Slice too short for NEON store");
        unsafe { vst1q_f64(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> Self::Scalar {
        let lanes: [f64; 2] = unsafe { transmute(self.0) };
        lanes[lane]
    }

    #[inline(always)]
    fn replace(self, lane: usize, value: Self::Scalar) -> Self {
        let mut lanes: [f64; 2] = unsafe { transmute(self.0) };
        lanes[lane] = value;
        unsafe { NeonF64x2(vld1q_f64(lanes.as_ptr())) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { NeonF64x2(vaddq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { NeonF64x2(vsubq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { NeonF64x2(vmulq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { NeonF64x2(vdivq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe { NeonF64x2(vnegq_f64(self.0)) }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe { NeonF64x2(vabsq_f64(self.0)) }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe { NeonF64x2(vsqrtq_f64(self.0)) }
    }

    #[inline(always)]
    fn fma(self, b: Self, c: Self) -> Self {
        // vfmaq_f64(c, a, b) = c + a * b
        unsafe { NeonF64x2(vfmaq_f64(c.0, self.0, b.0)) }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        unsafe { NeonF64x2(vminq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        unsafe { NeonF64x2(vmaxq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask64x2(vcltq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn le(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask64x2(vcleq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask64x2(vcgtq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask64x2(vcgeq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask64x2(vceqq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        unsafe { NeonF64x2(vbslq_f64(mask.0, true_val.0, false_val.0)) }
    }

    #[inline(always)]
    fn to_bits(self) -> Self::Bits {
        unsafe { NeonU64x2(vreinterpretq_u64_f64(self.0)) }
    }

    #[inline(always)]
    fn from_bits(bits: Self::Bits) -> Self {
        unsafe { NeonF64x2(vreinterpretq_f64_u64(bits.0)) }
    }

    #[inline(always)]
    fn to_int(self) -> Self::Bits {
        unsafe { NeonU64x2(vreinterpretq_u64_s64(vcvtq_s64_f64(self.0))) }
    }

    #[inline(always)]
    fn from_int(bits: Self::Bits) -> Self {
        unsafe { NeonF64x2(vcvtq_f64_s64(vreinterpretq_s64_u64(bits.0))) }
    }

    #[inline(always)]
    fn gather(table: &[Self::Scalar], index: Self::Bits) -> Self {
        let lanes: [u64; 2] = unsafe { transmute(index.0) };
        let picked = [table[lanes[0] as usize], table[lanes[1] as usize]];
        unsafe { NeonF64x2(vld1q_f64(picked.as_ptr())) }
    }
}

impl SimdVector for NeonF32x4 {
    type Scalar = f32;
    type Mask = NeonMask32x4;
    type Bits = NeonU32x4;

    const LANES: usize = 4;

    #[inline(always)]
    fn splat(value: Self::Scalar) -> Self {
        unsafe { NeonF32x4(vdupq_n_f32(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for NEON load");
        unsafe { NeonF32x4(vld1q_f32(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [Self::Scalar]) {
        assert!(slice.len() >= Self::LANES, "Slice too short for NEON store");
        unsafe { vst1q_f32(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> Self::Scalar {
        let lanes: [f32; 4] = unsafe { transmute(self.0) };
        lanes[lane]
    }

    #[inline(always)]
    fn replace(self, lane: usize, value: Self::Scalar) -> Self {
        let mut lanes: [f32; 4] = unsafe { transmute(self.0) };
        lanes[lane] = value;
        unsafe { NeonF32x4(vld1q_f32(lanes.as_ptr())) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { NeonF32x4(vaddq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { NeonF32x4(vsubq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { NeonF32x4(vmulq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { NeonF32x4(vdivq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe { NeonF32x4(vnegq_f32(self.0)) }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe { NeonF32x4(vabsq_f32(self.0)) }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe { NeonF32x4(vsqrtq_f32(self.0)) }
    }

    #[inline(always)]
    fn fma(self, b: Self, c: Self) -> Self {
        // vfmaq_f32(c, a, b) = c + a * b
        unsafe { NeonF32x4(vfmaq_f32(c.0, self.0, b.0)) }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        unsafe { NeonF32x4(vminq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        unsafe { NeonF32x4(vmaxq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask32x4(vcltq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn le(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask32x4(vcleq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask32x4(vcgtq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask32x4(vcgeq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask32x4(vceqq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        unsafe { NeonF32x4(vbslq_f32(mask.0, true_val.0, false_val.0)) }
    }

    #[inline(always)]
    fn to_bits(self) -> Self::Bits {
        unsafe { NeonU32x4(vreinterpretq_u32_f32(self.0)) }
    }

    #[inline(always)]
    fn from_bits(bits: Self::Bits) -> Self {
        unsafe { NeonF32x4(vreinterpretq_f32_u32(bits.0)) }
    }

    #[inline(always)]
    fn to_int(self) -> Self::Bits {
        unsafe { NeonU32x4(vreinterpretq_u32_s32(vcvtq_s32_f32(self.0))) }
    }

    #[inline(always)]
    fn from_int(bits: Self::Bits) -> Self {
        unsafe { NeonF32x4(vcvtq_f32_s32(vreinterpretq_s32_u32(bits.0))) }
    }

    #[inline(always)]
    fn gather(table: &[Self::Scalar], index: Self::Bits) -> Self {
        let lanes: [u32; 4] = unsafe { transmute(index.0) };
        let picked = lanes.map(|i| table[i as usize]);
        unsafe { NeonF32x4(vld1q_f32(picked.as_ptr())) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neon_arithmetic() {
        let a = NeonF64x2::splat(2.0);
        let b = NeonF64x2::splat(3.0);

        assert_eq!(a.add(b).extract(1), 5.0);
        assert_eq!(a.sub(b).extract(0), -1.0);
        assert_eq!(a.mul(b).extract(1), 6.0);
        assert_eq!(NeonF32x4::splat(16.0).sqrt().extract(3), 4.0);
    }

    #[test]
    fn test_neon_fma() {
        let a = NeonF32x4::splat(2.0);
        let b = NeonF32x4::splat(3.0);
        let c = NeonF32x4::splat(1.0);
        assert_eq!(a.fma(b, c).extract(2), 7.0);
    }

    #[test]
    fn test_neon_replace_and_masks() {
        let v = NeonF64x2::splat(1.0).replace(1, -4.0);
        assert_eq!(v.extract(0), 1.0);
        assert_eq!(v.extract(1), -4.0);

        let mask = v.lt(NeonF64x2::splat(0.0));
        assert!(mask.any());
        assert!(!mask.all());
        assert!(mask.test(1));
        assert!(!mask.test(0));
        assert!(mask.not().test(0));
    }

    #[test]
    fn test_neon_bits() {
        let bits = NeonF32x4::splat(-1.0).to_bits();
        assert_eq!(bits.extract(0), 0xbf80_0000);
        assert_eq!(bits.sar(23).extract(1), 0xffff_ff7f);
        assert_eq!(bits.shr(23).extract(2), 0x17f);
        assert!(bits.ge(NeonU32x4::splat(0x8000_0000)).all());
    }

    #[test]
    fn test_neon_int_conversion() {
        let v = NeonF64x2::splat(-5.0);
        let ints = v.to_int();
        assert_eq!(ints.extract(0), (-5i64) as u64);
        assert_eq!(NeonF64x2::from_int(ints).extract(1), -5.0);
    }
}
