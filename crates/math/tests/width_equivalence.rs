//! Results do not depend on the vector width or on the neighbouring lanes
//!
//! Every kernel is evaluated on the same inputs as one wide vector and as
//! several narrow ones. Lanes are independent, so both must agree bit for
//! bit, including lanes that went through the scalar fallback.

use proptest::prelude::*;
use vela_math::math;
use vela_math::{F32x16, F32x4, F64x2, F64x8, SimdVector};

#[cfg(test)]
mod test_utils;

#[cfg(test)]
use test_utils::*;

use proptest::test_runner::Config as ProptestConfig;

fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 2_000,
        ..ProptestConfig::default()
    }
}

fn mixed_batch_f32() -> impl Strategy<Value = [f32; 16]> {
    prop::array::uniform16(prop_oneof![
        4 => -50.0f32..50.0f32,
        1 => prop::sample::select(SPECIAL_F32.to_vec()),
        1 => any_bits_f32(),
    ])
}

fn wide_vs_narrow_f64(
    name: &str,
    wide: fn(F64x8) -> F64x8,
    narrow: fn(F64x2) -> F64x2,
    batch: &[f64; 8],
) -> Result<(), TestCaseError> {
    let w = wide(F64x8::from_slice(batch));
    for (chunk, pair) in batch.chunks(2).enumerate() {
        let n = narrow(F64x2::from_slice(pair));
        for lane in 0..2 {
            let i = chunk * 2 + lane;
            prop_assert!(
                same_f64(w.extract(i), n.extract(lane)),
                "{}({:e}): wide {:e}, narrow {:e}",
                name,
                batch[i],
                w.extract(i),
                n.extract(lane)
            );
        }
    }
    Ok(())
}

fn wide_vs_narrow_f32(
    name: &str,
    wide: fn(F32x16) -> F32x16,
    narrow: fn(F32x4) -> F32x4,
    batch: &[f32; 16],
) -> Result<(), TestCaseError> {
    let w = wide(F32x16::from_slice(batch));
    for (chunk, quad) in batch.chunks(4).enumerate() {
        let n = narrow(F32x4::from_slice(quad));
        for lane in 0..4 {
            let i = chunk * 4 + lane;
            prop_assert!(
                same_f32(w.extract(i), n.extract(lane)),
                "{}({:e}): wide {:e}, narrow {:e}",
                name,
                batch[i],
                w.extract(i),
                n.extract(lane)
            );
        }
    }
    Ok(())
}

#[test]
fn test_f64_kernels_width_independent() {
    let kernels: [(&str, fn(F64x8) -> F64x8, fn(F64x2) -> F64x2); 17] = [
        ("exp", math::exp::<F64x8>, math::exp::<F64x2>),
        ("exp2", math::exp2::<F64x8>, math::exp2::<F64x2>),
        ("expm1", math::expm1::<F64x8>, math::expm1::<F64x2>),
        ("log", math::log::<F64x8>, math::log::<F64x2>),
        ("log2", math::log2::<F64x8>, math::log2::<F64x2>),
        ("log10", math::log10::<F64x8>, math::log10::<F64x2>),
        ("log1p", math::log1p::<F64x8>, math::log1p::<F64x2>),
        ("sin", math::sin::<F64x8>, math::sin::<F64x2>),
        ("cos", math::cos::<F64x8>, math::cos::<F64x2>),
        ("tan", math::tan::<F64x8>, math::tan::<F64x2>),
        ("asin", math::asin::<F64x8>, math::asin::<F64x2>),
        ("acos", math::acos::<F64x8>, math::acos::<F64x2>),
        ("sinh", math::sinh::<F64x8>, math::sinh::<F64x2>),
        ("cosh", math::cosh::<F64x8>, math::cosh::<F64x2>),
        ("asinh", math::asinh::<F64x8>, math::asinh::<F64x2>),
        ("erfc", math::erfc::<F64x8>, math::erfc::<F64x2>),
        ("exp small", |x| math::exp(x.mul(F64x8::splat(1e-3))), |x| {
            math::exp(x.mul(F64x2::splat(1e-3)))
        }),
    ];
    proptest!(proptest_config(), |(batch in mixed_batch_f64())| {
        for (name, wide, narrow) in kernels {
            wide_vs_narrow_f64(name, wide, narrow, &batch)?;
        }
    });
}

#[test]
fn test_atan2_width_independent() {
    proptest!(proptest_config(), |(ys in mixed_batch_f64(), xs in mixed_batch_f64())| {
        let w = math::atan2(F64x8::from_slice(&ys), F64x8::from_slice(&xs));
        for chunk in 0..4 {
            let i = chunk * 2;
            let n = math::atan2(F64x2::from_slice(&ys[i..i + 2]), F64x2::from_slice(&xs[i..i + 2]));
            prop_assert!(same_f64(w.extract(i), n.extract(0)));
            prop_assert!(same_f64(w.extract(i + 1), n.extract(1)));
        }
    });
}

#[test]
fn test_f32_kernels_width_independent() {
    let kernels: [(&str, fn(F32x16) -> F32x16, fn(F32x4) -> F32x4); 8] = [
        ("expf", math::expf::<F32x16>, math::expf::<F32x4>),
        ("expm1f", math::expm1f::<F32x16>, math::expm1f::<F32x4>),
        ("logf", math::logf::<F32x16>, math::logf::<F32x4>),
        ("log2f", math::log2f::<F32x16>, math::log2f::<F32x4>),
        ("log10f", math::log10f::<F32x16>, math::log10f::<F32x4>),
        ("tanf", math::tanf::<F32x16>, math::tanf::<F32x4>),
        ("sinhf", math::sinhf::<F32x16>, math::sinhf::<F32x4>),
        ("coshf", math::coshf::<F32x16>, math::coshf::<F32x4>),
    ];
    proptest!(proptest_config(), |(batch in mixed_batch_f32())| {
        for (name, wide, narrow) in kernels {
            wide_vs_narrow_f32(name, wide, narrow, &batch)?;
        }
    });
}

/// One special lane must not disturb the others
#[test]
fn test_special_lane_leaves_neighbours_alone() {
    let clean = F64x8::from_slice(&[0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0]);
    let dirty = clean.replace(3, f64::NAN).replace(6, f64::INFINITY);
    let kernels: [fn(F64x8) -> F64x8; 4] = [math::exp, math::log, math::sin, math::erfc];
    for kernel in kernels {
        let a = kernel(clean);
        let b = kernel(dirty);
        for lane in [0, 1, 2, 4, 5, 7] {
            assert_eq!(a.extract(lane).to_bits(), b.extract(lane).to_bits(), "lane {}", lane);
        }
    }
}

#[cfg(all(feature = "neon", target_arch = "aarch64"))]
mod neon {
    use super::*;
    use vela_math::{NeonF32x4, NeonF64x2};

    #[test]
    fn test_neon_matches_portable() {
        proptest!(proptest_config(), |(batch in mixed_batch_f64())| {
            for pair in batch.chunks(2) {
                let p = F64x2::from_slice(pair);
                let n = NeonF64x2::from_slice(pair);
                let checks = [
                    (math::exp(p), math::exp(n)),
                    (math::log(p), math::log(n)),
                    (math::sin(p), math::sin(n)),
                    (math::tan(p), math::tan(n)),
                    (math::asin(p), math::asin(n)),
                    (math::erfc(p), math::erfc(n)),
                ];
                for (portable, native) in checks {
                    prop_assert!(same_f64(portable.extract(0), native.extract(0)));
                    prop_assert!(same_f64(portable.extract(1), native.extract(1)));
                }
            }
        });

        proptest!(proptest_config(), |(batch in mixed_batch_f32())| {
            for quad in batch.chunks(4) {
                let p = F32x4::from_slice(quad);
                let n = NeonF32x4::from_slice(quad);
                let checks = [
                    (math::expf(p), math::expf(n)),
                    (math::logf(p), math::logf(n)),
                    (math::tanf(p), math::tanf(n)),
                ];
                for (portable, native) in checks {
                    for lane in 0..4 {
                        prop_assert!(same_f32(portable.extract(lane), native.extract(lane)));
                    }
                }
            }
        });
    }
}
