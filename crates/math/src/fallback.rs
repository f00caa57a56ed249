//! Scalar special-case fallback
//!
//! Lanes a kernel cannot handle on its fast path are recomputed one at a time
//! with the scalar libm routine of matching precision, and the result is
//! spliced back into the vector. The result of a flagged lane is therefore
//! exactly what the scalar routine returns for that lane's input.
//!
//! These functions are never inlined so the cold path stays out of the
//! kernels' instruction stream.

use crate::traits::{SimdMask, SimdVector};

/// Replace every lane of `y` flagged in `mask` with `scalar(x[lane])`
#[inline(never)]
pub fn special_case<V, F>(x: V, y: V, mask: V::Mask, scalar: F) -> V
where
    V: SimdVector,
    F: Fn(V::Scalar) -> V::Scalar,
{
    let mut out = y;
    for lane in 0..V::LANES {
        if mask.test(lane) {
            out = out.replace(lane, scalar(x.extract(lane)));
        }
    }
    out
}

/// Two-input variant: replace flagged lanes with `scalar(x1[lane], x2[lane])`
#[inline(never)]
pub fn special_case2<V, F>(x1: V, x2: V, y: V, mask: V::Mask, scalar: F) -> V
where
    V: SimdVector,
    F: Fn(V::Scalar, V::Scalar) -> V::Scalar,
{
    let mut out = y;
    for lane in 0..V::LANES {
        if mask.test(lane) {
            out = out.replace(lane, scalar(x1.extract(lane), x2.extract(lane)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::portable::{F32x4, F64x2, PortableMask, PortableVector};

    #[test]
    fn test_only_flagged_lanes_change() {
        let x = PortableVector([1.0f32, 2.0, 3.0, 4.0]);
        let y = F32x4::splat(-1.0);
        let mask = PortableMask([false, true, false, true]);

        let out = special_case(x, y, mask, |v| v * 10.0);
        assert_eq!(out.0, [-1.0, 20.0, -1.0, 40.0]);
    }

    #[test]
    fn test_empty_mask_is_identity() {
        let x = F64x2::splat(5.0);
        let y = F64x2::splat(7.0);
        let out = special_case(x, y, PortableMask([false; 2]), |_| f64::NAN);
        assert_eq!(out.0, [7.0, 7.0]);
    }

    #[test]
    fn test_two_input_fallback() {
        let x1 = PortableVector([1.0f64, 2.0]);
        let x2 = PortableVector([3.0f64, 4.0]);
        let out = special_case2(x1, x2, F64x2::splat(0.0), PortableMask([true, false]), libm::atan2);
        assert_eq!(out.0[0], libm::atan2(1.0, 3.0));
        assert_eq!(out.0[1], 0.0);
    }
}
