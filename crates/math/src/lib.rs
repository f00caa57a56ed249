#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! vela-math: vectorized elementary-function kernels
//!
//! Every kernel runs the same pipeline over a lane vector: classify special
//! lanes from their bit patterns, reduce the argument, evaluate a fixed
//! minimax polynomial, reconstruct, and recompute flagged lanes with the
//! scalar libm routine.
//!
//! # Features
//!
//! - **Trait-based lanes**: kernels are written once against `SimdVector`
//! - **Compile-time backend selection**: portable arrays or NEON via cargo features
//! - **Two floating-point modes**: `Fast` and `RespectExceptions` marker types
//! - **Immutable tables**: exp, log and erfc lookup data are `static` arrays
//! - **No allocations**: everything runs on the stack
//!
//! # Quick Start
//!
//! ```rust
//! use vela_math::math::{exp, log};
//! use vela_math::{F64x2, SimdVector};
//!
//! let x = F64x2::splat(1.0);
//! let y = log(exp(x));
//! assert!((y.extract(0) - 1.0).abs() < 1e-15);
//! ```

#[cfg(any(test, feature = "std"))]
extern crate std;

// Core trait definitions
pub mod traits;

// Backend implementations
pub mod backends;

// Compile-time configuration
pub mod config;

// Host capability report
pub mod host;

// Polynomial evaluation schemes
pub mod poly;

// Scalar special-case fallback
pub mod fallback;

// Lookup tables
pub mod tables;

// Kernels
pub mod math;

// Slice drivers
pub mod slice;

// Public re-exports for convenience
pub use traits::{SimdBits, SimdMask, SimdVector};

pub use backends::portable::{
    F32x16, F32x4, F64x2, F64x8, PortableBits, PortableMask, PortableVector,
};

// Only re-export NEON types when both feature is enabled AND we're targeting aarch64
#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub use backends::neon::{NeonF32x4, NeonF64x2, NeonMask32x4, NeonMask64x2, NeonU32x4, NeonU64x2};

pub use config::{BuildConfig, DefaultMode, Fast, FpMode, RespectExceptions};
pub use host::HostFeatures;

/// Default f64 vector type (portable backend, 2 lanes)
#[cfg(not(all(feature = "neon", target_arch = "aarch64")))]
pub type DefaultF64Vector = F64x2;

/// Default f32 vector type (portable backend, 4 lanes)
#[cfg(not(all(feature = "neon", target_arch = "aarch64")))]
pub type DefaultF32Vector = F32x4;

/// Default f64 vector type (NEON backend for ARM64)
#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub type DefaultF64Vector = NeonF64x2;

/// Default f32 vector type (NEON backend for ARM64)
#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub type DefaultF32Vector = NeonF32x4;
