//! Host capability report
//!
//! Kernels are selected at compile time, so nothing here changes which code
//! runs. The report tells a user whether the host could run a wider or fused
//! build than the one they have.

use core::fmt;

/// CPU capabilities relevant to the kernels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostFeatures {
    /// Target architecture name
    pub arch: &'static str,

    /// Hardware fused multiply-add (x86_64 FMA3; always present on aarch64)
    pub has_fma: bool,

    /// AVX2 support (x86_64)
    pub has_avx2: bool,

    /// Advanced SIMD (aarch64)
    pub has_neon: bool,
}

impl HostFeatures {
    /// Detect CPU features at runtime
    ///
    /// # Platform Behavior
    /// - **x86_64**: CPUID detection via the `cpufeatures` crate
    /// - **aarch64**: NEON and FMA are architectural, no detection needed
    /// - **other**: everything reported absent
    ///
    /// # Example
    /// ```rust
    /// use vela_math::HostFeatures;
    ///
    /// let host = HostFeatures::detect();
    /// assert!(!host.arch.is_empty());
    /// ```
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            cpufeatures::new!(cpuid_fma, "fma");
            cpufeatures::new!(cpuid_avx2, "avx2");

            Self {
                arch: "x86_64",
                has_fma: cpuid_fma::get(),
                has_avx2: cpuid_avx2::get(),
                has_neon: false,
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            Self {
                arch: "aarch64",
                has_fma: true,
                has_avx2: false,
                has_neon: true,
            }
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            Self {
                arch: "other",
                has_fma: false,
                has_avx2: false,
                has_neon: false,
            }
        }
    }
}

impl fmt::Display for HostFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arch={} fma={} avx2={} neon={}",
            self.arch, self.has_fma, self.has_avx2, self.has_neon
        )
    }
}
