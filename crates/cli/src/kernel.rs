//! Kernel lookup by name, paired with the libm routine each one is checked
//! against.

use anyhow::{bail, Result};
use vela_math::math;
use vela_math::{DefaultF32Vector, DefaultF64Vector, SimdVector};

type V64 = DefaultF64Vector;
type V32 = DefaultF32Vector;

/// Every kernel name the CLI accepts
pub const NAMES: [&str; 25] = [
    "exp", "exp2", "expm1", "log", "log2", "log10", "log1p", "sin", "cos", "tan", "asin", "acos",
    "atan2", "sinh", "cosh", "asinh", "erfc", "expf", "expm1f", "logf", "log2f", "log10f", "tanf",
    "sinhf", "coshf",
];

/// A kernel and its scalar reference
#[derive(Clone, Copy)]
pub enum Kernel {
    /// Double precision, one argument
    Unary64 {
        vector: fn(V64) -> V64,
        scalar: fn(f64) -> f64,
    },
    /// Single precision, one argument
    Unary32 {
        vector: fn(V32) -> V32,
        scalar: fn(f32) -> f32,
    },
    /// Double precision, `(y, x)`
    Binary64 {
        vector: fn(V64, V64) -> V64,
        scalar: fn(f64, f64) -> f64,
    },
}

/// One evaluated point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: Option<f64>,
    pub result: f64,
    pub reference: f64,
    pub ulps: u64,
}

impl Kernel {
    /// Resolve a kernel name
    pub fn lookup(name: &str) -> Result<Self> {
        let kernel = match name {
            "exp" => unary64(math::exp, libm::exp),
            "exp2" => unary64(math::exp2, libm::exp2),
            "expm1" => unary64(math::expm1, libm::expm1),
            "log" => unary64(math::log, libm::log),
            "log2" => unary64(math::log2, libm::log2),
            "log10" => unary64(math::log10, libm::log10),
            "log1p" => unary64(math::log1p, libm::log1p),
            "sin" => unary64(math::sin, libm::sin),
            "cos" => unary64(math::cos, libm::cos),
            "tan" => unary64(math::tan, libm::tan),
            "asin" => unary64(math::asin, libm::asin),
            "acos" => unary64(math::acos, libm::acos),
            "sinh" => unary64(math::sinh, libm::sinh),
            "cosh" => unary64(math::cosh, libm::cosh),
            "asinh" => unary64(math::asinh, libm::asinh),
            "erfc" => unary64(math::erfc, libm::erfc),
            "atan2" => Kernel::Binary64 {
                vector: math::atan2,
                scalar: libm::atan2,
            },
            "expf" => unary32(math::expf, libm::expf),
            "expm1f" => unary32(math::expm1f, libm::expm1f),
            "logf" => unary32(math::logf, libm::logf),
            "log2f" => unary32(math::log2f, libm::log2f),
            "log10f" => unary32(math::log10f, libm::log10f),
            "tanf" => unary32(math::tanf, libm::tanf),
            "sinhf" => unary32(math::sinhf, libm::sinhf),
            "coshf" => unary32(math::coshf, libm::coshf),
            _ => bail!(
                "Unknown function '{}'. Available: {}",
                name,
                NAMES.join(", ")
            ),
        };
        Ok(kernel)
    }

    /// Whether the kernel takes `(y, x)`
    pub fn is_binary(&self) -> bool {
        matches!(self, Kernel::Binary64 { .. })
    }

    /// Evaluate one point; `y` is only read by binary kernels
    pub fn eval(&self, x: f64, y: f64) -> Sample {
        match *self {
            Kernel::Unary64 { vector, scalar } => {
                let result = vector(V64::splat(x)).extract(0);
                let reference = scalar(x);
                Sample {
                    x,
                    y: None,
                    result,
                    reference,
                    ulps: ulp_distance_f64(result, reference),
                }
            }
            Kernel::Unary32 { vector, scalar } => {
                let xf = x as f32;
                let result = vector(V32::splat(xf)).extract(0);
                let reference = scalar(xf);
                Sample {
                    x: xf as f64,
                    y: None,
                    result: result as f64,
                    reference: reference as f64,
                    ulps: ulp_distance_f32(result, reference),
                }
            }
            Kernel::Binary64 { vector, scalar } => {
                let result = vector(V64::splat(y), V64::splat(x)).extract(0);
                let reference = scalar(y, x);
                Sample {
                    x,
                    y: Some(y),
                    result,
                    reference,
                    ulps: ulp_distance_f64(result, reference),
                }
            }
        }
    }
}

fn unary64(vector: fn(V64) -> V64, scalar: fn(f64) -> f64) -> Kernel {
    Kernel::Unary64 { vector, scalar }
}

fn unary32(vector: fn(V32) -> V32, scalar: fn(f32) -> f32) -> Kernel {
    Kernel::Unary32 { vector, scalar }
}

/// Distance in representable values; NaN against NaN is 0, NaN against a
/// number is `u64::MAX`
pub fn ulp_distance_f64(a: f64, b: f64) -> u64 {
    fn ordered(x: f64) -> i128 {
        let i = x.to_bits() as i64;
        (if i < 0 { i64::MIN - i } else { i }) as i128
    }
    match (a.is_nan(), b.is_nan()) {
        (true, true) => 0,
        (false, false) => (ordered(a) - ordered(b)).unsigned_abs() as u64,
        _ => u64::MAX,
    }
}

/// Single-precision counterpart of [`ulp_distance_f64`]
pub fn ulp_distance_f32(a: f32, b: f32) -> u64 {
    fn ordered(x: f32) -> i64 {
        let i = x.to_bits() as i32;
        (if i < 0 { i32::MIN - i } else { i }) as i64
    }
    match (a.is_nan(), b.is_nan()) {
        (true, true) => 0,
        (false, false) => (ordered(a) - ordered(b)).unsigned_abs(),
        _ => u64::MAX,
    }
}
