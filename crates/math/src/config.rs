//! Compile-time configuration
//!
//! Three switches shape the kernels, all resolved at compile time:
//!
//! - **Floating-point mode**: `Fast` computes every lane speculatively and
//!   overwrites special lanes afterwards. `RespectExceptions` first replaces
//!   special lanes with harmless inputs so the only FP exceptions raised come
//!   from the scalar fallback. Both are marker types usable as a generic
//!   parameter; the `simd-except` feature picks which one the plain kernel
//!   names use.
//! - **Exp table size**: `exp-table-256` switches the f64 exp family from
//!   128 to 256 table entries.
//! - **Scale lookup**: `scale-lookup` makes `expf` build its scale from a
//!   64-entry `2^(i/64)` table the way a FEXPA-style instruction would.

use core::fmt;

use crate::{DefaultF32Vector, DefaultF64Vector, SimdVector};

/// Floating-point exception handling mode
///
/// Implemented only by [`Fast`] and [`RespectExceptions`].
pub trait FpMode: Copy + Default + fmt::Debug + 'static {
    /// Whether special lanes are neutralised before the fast path
    const RESPECT_EXCEPTIONS: bool;

    /// Mode name for reporting
    const NAME: &'static str;
}

/// Compute all lanes speculatively, overwrite special lanes afterwards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fast;

/// Neutralise special lanes before the fast path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RespectExceptions;

impl FpMode for Fast {
    const RESPECT_EXCEPTIONS: bool = false;
    const NAME: &'static str = "fast";
}

impl FpMode for RespectExceptions {
    const RESPECT_EXCEPTIONS: bool = true;
    const NAME: &'static str = "respect-exceptions";
}

/// Mode used by the plain kernel names (`exp`, `sin`, ...)
#[cfg(not(feature = "simd-except"))]
pub type DefaultMode = Fast;

/// Mode used by the plain kernel names (`exp`, `sin`, ...)
#[cfg(feature = "simd-except")]
pub type DefaultMode = RespectExceptions;

/// log2 of the f64 exp table size
#[cfg(not(feature = "exp-table-256"))]
pub const EXP_TABLE_BITS: u32 = 7;

/// log2 of the f64 exp table size
#[cfg(feature = "exp-table-256")]
pub const EXP_TABLE_BITS: u32 = 8;

/// Number of entries in the f64 exp table
pub const EXP_TABLE_SIZE: usize = 1 << EXP_TABLE_BITS;

/// Whether `expf` uses the table-driven scale lookup
pub const SCALE_LOOKUP: bool = cfg!(feature = "scale-lookup");

/// Backend name of the default vector types
#[cfg(all(feature = "neon", target_arch = "aarch64"))]
const BACKEND: &str = "neon";

/// Backend name of the default vector types
#[cfg(not(all(feature = "neon", target_arch = "aarch64")))]
const BACKEND: &str = "portable";

/// Resolved build configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
    /// Backend behind `DefaultF64Vector`/`DefaultF32Vector`
    pub backend: &'static str,

    /// Lanes in `DefaultF64Vector`
    pub f64_lanes: usize,

    /// Lanes in `DefaultF32Vector`
    pub f32_lanes: usize,

    /// Name of [`DefaultMode`]
    pub fp_mode: &'static str,

    /// [`EXP_TABLE_BITS`]
    pub exp_table_bits: u32,

    /// [`SCALE_LOOKUP`]
    pub scale_lookup: bool,
}

impl BuildConfig {
    /// Configuration this crate was compiled with
    pub const fn current() -> Self {
        Self {
            backend: BACKEND,
            f64_lanes: <DefaultF64Vector as SimdVector>::LANES,
            f32_lanes: <DefaultF32Vector as SimdVector>::LANES,
            fp_mode: <DefaultMode as FpMode>::NAME,
            exp_table_bits: EXP_TABLE_BITS,
            scale_lookup: SCALE_LOOKUP,
        }
    }
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "backend:        {}", self.backend)?;
        writeln!(f, "f64 lanes:      {}", self.f64_lanes)?;
        writeln!(f, "f32 lanes:      {}", self.f32_lanes)?;
        writeln!(f, "fp mode:        {}", self.fp_mode)?;
        writeln!(
            f,
            "exp table:      {} entries",
            1usize << self.exp_table_bits
        )?;
        write!(f, "scale lookup:   {}", self.scale_lookup)
    }
}
