//! Vectorized elementary-function kernels
//!
//! Every kernel follows the same pipeline:
//!
//! 1. **Classify** lanes from their raw bit patterns (NaN, Inf, zero,
//!    out-of-domain, magnitudes the fast path cannot handle)
//! 2. **Reduce** the argument to a small interval plus an integer or table
//!    index
//! 3. **Evaluate** a fixed minimax polynomial
//! 4. **Reconstruct** the result from exponent bits, table entries and
//!    quadrant information
//! 5. **Fall back** to the scalar libm routine for flagged lanes only
//!
//! Stages 1-4 are branch-free. Stage 5 runs only when some lane is flagged.
//!
//! Kernels that support both floating-point modes come in two forms: the
//! plain name uses [`DefaultMode`](crate::config::DefaultMode), and the
//! `_with` form takes the mode as a generic parameter.
//!
//! # Modules
//!
//! - `exp`, `exp2`, `expm1`, `sinh`, `cosh`: exponential family (f64)
//! - `log`, `log1p`, `asinh`: logarithm family (f64)
//! - `sincos`, `tan`, `asin`, `atan2`: trigonometric (f64)
//! - `erfc`: complementary error function (f64)
//! - `expf`, `logf`, `tanf`, `expm1f`, `sinhf`, `coshf`: single precision
//!
//! # Example
//!
//! ```rust
//! use vela_math::{F32x4, F64x2, SimdVector};
//! use vela_math::math::{atan2, logf, sin};
//!
//! let s = sin(F64x2::splat(0.0));
//! assert_eq!(s.extract(0), 0.0);
//!
//! let q = atan2(F64x2::splat(5.0), F64x2::splat(0.0));
//! assert_eq!(q.extract(1), core::f64::consts::FRAC_PI_2);
//!
//! let l = logf(F32x4::splat(1.0));
//! assert_eq!(l.extract(3), 0.0);
//! ```

use crate::traits::{SimdBits, SimdVector};

pub mod asin;
pub mod asinh;
pub mod atan2;
pub mod cosh;
pub mod coshf;
pub mod erfc;
pub mod exp;
pub mod exp2;
pub mod expf;
pub mod expm1;
pub mod expm1f;
pub mod log;
pub mod log1p;
pub mod logf;
pub mod sincos;
pub mod sinh;
pub mod sinhf;
pub mod tan;
pub mod tanf;

pub use self::asin::{acos, acos_with, asin, asin_with};
pub use self::asinh::{asinh, asinh_with};
pub use self::atan2::atan2;
pub use self::cosh::{cosh, cosh_with};
pub use self::coshf::{coshf, coshf_with};
pub use self::erfc::erfc;
pub use self::exp::{exp, exp_with};
pub use self::exp2::exp2;
pub use self::expf::{expf, expf_with};
pub use self::expm1::{expm1, expm1_with};
pub use self::expm1f::{expm1f, expm1f_with};
pub use self::log::{log, log10, log2};
pub use self::log1p::{log1p, log1p_with};
pub use self::logf::{log10f, log2f, logf};
pub use self::sincos::{cos, cos_with, sin, sin_with};
pub use self::sinh::{sinh, sinh_with};
pub use self::sinhf::{sinhf, sinhf_with};
pub use self::tan::{tan, tan_with};
pub use self::tanf::{tanf, tanf_with};

/// 1.5 * 2^52: adding it rounds an f64 to an integer (ties to even)
pub(crate) const SHIFT_F64: f64 = 6755399441055744.0;

/// 1.5 * 2^23: adding it rounds an f32 to an integer (ties to even)
pub(crate) const SHIFT_F32: f32 = 12582912.0;

/// Broadcast a bit-pattern constant into `V`'s bit view
#[inline(always)]
pub(crate) fn bits<V: SimdVector>(value: u64) -> V::Bits {
    V::Bits::splat(value)
}
