//! Read-only lookup tables
//!
//! All tables are `static` data computed offline in extended precision and
//! rounded to the nearest representable value. Nothing here is ever written,
//! so kernels can read them from any number of threads.

pub mod erfc;
pub mod exp;
pub mod log;

pub use erfc::{ERFC_COEFFS, ERFC_NUM_INTERVALS, ERFC_POLY_LEN, ERFC_XINT};
pub use exp::{EXP_DATA, EXP_DATA_128, EXP_DATA_256, SCALE_LOOKUP_TABLE};
pub use log::{LOG_OFF, LOG_TABLE, LOG_TABLE_LEN};

#[cfg(test)]
mod tests {
    use super::log::{INVC, LOG10C, LOG2C, LOGC};
    use super::*;
    use crate::config::EXP_TABLE_SIZE;

    fn exp_entry(table: &[u64], bits: u32, i: usize) -> f64 {
        f64::from_bits(table[i] + ((i as u64) << (52 - bits)))
    }

    #[test]
    fn test_exp_tables_hold_powers_of_two() {
        for (table, bits) in [(&EXP_DATA_128[..], 7u32), (&EXP_DATA_256[..], 8u32)] {
            let n = table.len();
            assert_eq!(n, 1 << bits);
            assert_eq!(exp_entry(table, bits, 0), 1.0);
            for i in 1..n {
                let want = libm::exp2(i as f64 / n as f64);
                let got = exp_entry(table, bits, i);
                assert!((got - want).abs() <= 2.3e-16 * want, "entry {} of {}", i, n);
            }
        }
    }

    #[test]
    fn test_selected_exp_table_matches_config() {
        assert_eq!(EXP_DATA.len(), EXP_TABLE_SIZE);
    }

    #[test]
    fn test_scale_lookup_table() {
        assert_eq!(SCALE_LOOKUP_TABLE[0], 0);
        // 2^(32/64) = sqrt(2)
        assert_eq!(SCALE_LOOKUP_TABLE[32], (core::f32::consts::SQRT_2.to_bits() & 0x7f_ffff) as u64);
        for pair in SCALE_LOOKUP_TABLE.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_log_table_row_containing_one_is_exact() {
        let one = 1.0f64.to_bits();
        let i = ((one.wrapping_sub(LOG_OFF) >> 45) % LOG_TABLE_LEN as u64) as usize;
        assert_eq!(LOG_TABLE[i][INVC], 1.0);
        assert_eq!(LOG_TABLE[i][LOGC], 0.0);
        assert_eq!(LOG_TABLE[i][LOG2C], 0.0);
        assert_eq!(LOG_TABLE[i][LOG10C], 0.0);
    }

    #[test]
    fn test_log_table_columns_consistent() {
        for row in LOG_TABLE.iter() {
            assert!((row[LOGC] + libm::log(row[INVC])).abs() < 1e-15);
            assert!((row[LOG2C] - row[LOGC] / core::f64::consts::LN_2).abs() < 1e-15);
            assert!((row[LOG10C] - row[LOGC] / core::f64::consts::LN_10).abs() < 1e-15);
        }
    }

    #[test]
    fn test_erfc_intervals() {
        for (n, &x) in ERFC_XINT[..ERFC_NUM_INTERVALS].iter().enumerate() {
            let want = libm::exp2(n as f64 / 4.0) - 1.0;
            assert!((x - want).abs() < 1e-14);
        }
        assert!(ERFC_COEFFS[ERFC_NUM_INTERVALS].iter().all(|&c| c == 0.0));
        assert_eq!(ERFC_COEFFS[0][0], 1.0);
    }
}
