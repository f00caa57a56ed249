//! iai-callgrind benchmarks for vela-math
//!
//! Measures instruction counts for one vector per kernel (deterministic,
//! cachegrind-based).
//! Run with: cargo bench --bench iai_benches

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use std::hint::black_box;
use vela_math::math::*;
use vela_math::{DefaultF32Vector, DefaultF64Vector, F64x8, RespectExceptions, SimdVector};

// Exponentials

#[library_benchmark]
fn bench_exp() -> DefaultF64Vector {
    let x = black_box(DefaultF64Vector::splat(2.5));
    black_box(exp(x))
}

#[library_benchmark]
fn bench_exp2() -> DefaultF64Vector {
    let x = black_box(DefaultF64Vector::splat(2.5));
    black_box(exp2(x))
}

#[library_benchmark]
fn bench_expm1() -> DefaultF64Vector {
    let x = black_box(DefaultF64Vector::splat(0.7));
    black_box(expm1(x))
}

#[library_benchmark]
fn bench_sinh() -> DefaultF64Vector {
    let x = black_box(DefaultF64Vector::splat(2.5));
    black_box(sinh(x))
}

#[library_benchmark]
fn bench_cosh() -> DefaultF64Vector {
    let x = black_box(DefaultF64Vector::splat(2.5));
    black_box(cosh(x))
}

#[library_benchmark]
fn bench_asinh() -> DefaultF64Vector {
    let x = black_box(DefaultF64Vector::splat(2.5));
    black_box(asinh(x))
}

#[library_benchmark]
fn bench_erfc() -> DefaultF64Vector {
    let x = black_box(DefaultF64Vector::splat(0.7));
    black_box(erfc(x))
}

library_benchmark_group!(
    name = exp_group;
    benchmarks = bench_exp, bench_exp2, bench_expm1, bench_sinh, bench_cosh, bench_asinh,
                 bench_erfc
);

// Logarithms

#[library_benchmark]
fn bench_log() -> DefaultF64Vector {
    let x = black_box(DefaultF64Vector::splat(2.5));
    black_box(log(x))
}

#[library_benchmark]
fn bench_log2() -> DefaultF64Vector {
    let x = black_box(DefaultF64Vector::splat(2.5));
    black_box(log2(x))
}

#[library_benchmark]
fn bench_log10() -> DefaultF64Vector {
    let x = black_box(DefaultF64Vector::splat(2.5));
    black_box(log10(x))
}

#[library_benchmark]
fn bench_log1p() -> DefaultF64Vector {
    let x = black_box(DefaultF64Vector::splat(0.7));
    black_box(log1p(x))
}

library_benchmark_group!(
    name = log_group;
    benchmarks = bench_log, bench_log2, bench_log10, bench_log1p
);

// Trigonometry

#[library_benchmark]
fn bench_sin() -> DefaultF64Vector {
    let x = black_box(DefaultF64Vector::splat(2.5));
    black_box(sin(x))
}

#[library_benchmark]
fn bench_cos() -> DefaultF64Vector {
    let x = black_box(DefaultF64Vector::splat(2.5));
    black_box(cos(x))
}

#[library_benchmark]
fn bench_tan() -> DefaultF64Vector {
    let x = black_box(DefaultF64Vector::splat(2.5));
    black_box(tan(x))
}

#[library_benchmark]
fn bench_asin() -> DefaultF64Vector {
    let x = black_box(DefaultF64Vector::splat(0.7));
    black_box(asin(x))
}

#[library_benchmark]
fn bench_acos() -> DefaultF64Vector {
    let x = black_box(DefaultF64Vector::splat(0.7));
    black_box(acos(x))
}

#[library_benchmark]
fn bench_atan2() -> DefaultF64Vector {
    let y = black_box(DefaultF64Vector::splat(0.7));
    let x = black_box(DefaultF64Vector::splat(-2.5));
    black_box(atan2(y, x))
}

library_benchmark_group!(
    name = trig_group;
    benchmarks = bench_sin, bench_cos, bench_tan, bench_asin, bench_acos, bench_atan2
);

// Single precision

#[library_benchmark]
fn bench_expf() -> DefaultF32Vector {
    let x = black_box(DefaultF32Vector::splat(2.5));
    black_box(expf(x))
}

#[library_benchmark]
fn bench_expm1f() -> DefaultF32Vector {
    let x = black_box(DefaultF32Vector::splat(0.7));
    black_box(expm1f(x))
}

#[library_benchmark]
fn bench_logf() -> DefaultF32Vector {
    let x = black_box(DefaultF32Vector::splat(2.5));
    black_box(logf(x))
}

#[library_benchmark]
fn bench_log2f() -> DefaultF32Vector {
    let x = black_box(DefaultF32Vector::splat(2.5));
    black_box(log2f(x))
}

#[library_benchmark]
fn bench_log10f() -> DefaultF32Vector {
    let x = black_box(DefaultF32Vector::splat(2.5));
    black_box(log10f(x))
}

#[library_benchmark]
fn bench_tanf() -> DefaultF32Vector {
    let x = black_box(DefaultF32Vector::splat(2.5));
    black_box(tanf(x))
}

#[library_benchmark]
fn bench_sinhf() -> DefaultF32Vector {
    let x = black_box(DefaultF32Vector::splat(2.5));
    black_box(sinhf(x))
}

#[library_benchmark]
fn bench_coshf() -> DefaultF32Vector {
    let x = black_box(DefaultF32Vector::splat(2.5));
    black_box(coshf(x))
}

library_benchmark_group!(
    name = f32_group;
    benchmarks = bench_expf, bench_expm1f, bench_logf, bench_log2f, bench_log10f,
                 bench_tanf, bench_sinhf, bench_coshf
);

// Fallback

#[library_benchmark]
fn bench_log_one_special_lane() -> F64x8 {
    let x = black_box(F64x8::splat(2.5).replace(3, f64::NAN));
    black_box(log(x))
}

#[library_benchmark]
fn bench_exp_except_mode() -> DefaultF64Vector {
    let x = black_box(DefaultF64Vector::splat(2.5));
    black_box(exp_with::<RespectExceptions, _>(x))
}

library_benchmark_group!(
    name = fallback_group;
    benchmarks = bench_log_one_special_lane, bench_exp_except_mode
);

main!(
    library_benchmark_groups = exp_group,
    log_group,
    trig_group,
    f32_group,
    fallback_group
);
