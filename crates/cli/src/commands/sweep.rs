//! Sweep a kernel over a linearly spaced grid.
//!
//! The grid is evaluated through the slice drivers, so a sweep exercises
//! the same full-vector and tail paths a caller processing a buffer would.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use vela_math::slice::{map2_f64, map_f32, map_f64};
use vela_math::{DefaultF32Vector, DefaultF64Vector};

use crate::kernel::{ulp_distance_f32, ulp_distance_f64, Kernel};

/// One grid point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub x: f64,
    pub result: f64,
    pub reference: f64,
    pub ulps: u64,
}

/// Sweep parameters
#[derive(Debug, Clone, Copy)]
pub struct SweepParams {
    pub start: f64,
    pub end: f64,
    pub steps: usize,
    /// Fixed first argument for atan2
    pub y: f64,
}

impl SweepParams {
    fn validate(&self) -> Result<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            bail!("Sweep bounds must be finite (start={}, end={})", self.start, self.end);
        }
        if self.start >= self.end {
            bail!("Sweep start ({}) must be below end ({})", self.start, self.end);
        }
        if self.steps < 2 {
            bail!("Sweep needs at least 2 steps, got {}", self.steps);
        }
        Ok(())
    }

    fn grid(&self) -> Vec<f64> {
        let step = (self.end - self.start) / (self.steps - 1) as f64;
        (0..self.steps)
            .map(|i| (self.start + step * i as f64).min(self.end))
            .collect()
    }
}

/// Evaluate `function` over the grid described by `params`.
pub fn sweep(function: &str, params: &SweepParams) -> Result<Vec<Row>> {
    params.validate()?;
    let kernel = Kernel::lookup(function)?;
    let xs = params.grid();

    let rows = match kernel {
        Kernel::Unary64 { vector, scalar } => {
            let mut out = vec![0.0; xs.len()];
            map_f64::<DefaultF64Vector, _>(&xs, &mut out, vector);
            xs.iter()
                .zip(&out)
                .map(|(&x, &result)| {
                    let reference = scalar(x);
                    Row {
                        x,
                        result,
                        reference,
                        ulps: ulp_distance_f64(result, reference),
                    }
                })
                .collect()
        }
        Kernel::Unary32 { vector, scalar } => {
            let xf: Vec<f32> = xs.iter().map(|&x| x as f32).collect();
            let mut out = vec![0.0f32; xf.len()];
            map_f32::<DefaultF32Vector, _>(&xf, &mut out, vector);
            xf.iter()
                .zip(&out)
                .map(|(&x, &result)| {
                    let reference = scalar(x);
                    Row {
                        x: x as f64,
                        result: result as f64,
                        reference: reference as f64,
                        ulps: ulp_distance_f32(result, reference),
                    }
                })
                .collect()
        }
        Kernel::Binary64 { vector, scalar } => {
            let ys = vec![params.y; xs.len()];
            let mut out = vec![0.0; xs.len()];
            map2_f64::<DefaultF64Vector, _>(&ys, &xs, &mut out, vector);
            xs.iter()
                .zip(&out)
                .map(|(&x, &result)| {
                    let reference = scalar(params.y, x);
                    Row {
                        x,
                        result,
                        reference,
                        ulps: ulp_distance_f64(result, reference),
                    }
                })
                .collect()
        }
    };

    Ok(rows)
}

/// Write `x,result,reference` rows with a header line.
pub fn write_csv<W: Write>(mut out: W, rows: &[Row]) -> std::io::Result<()> {
    writeln!(out, "x,result,reference")?;
    for row in rows {
        writeln!(out, "{:e},{:e},{:e}", row.x, row.result, row.reference)?;
    }
    out.flush()
}

/// Execute the sweep command.
pub fn execute(function: &str, params: &SweepParams, output: Option<&Path>) -> Result<()> {
    let rows = sweep(function, params)?;

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_csv(BufWriter::new(file), &rows)
                .with_context(|| format!("Failed to write CSV: {}", path.display()))?;

            let worst = rows
                .iter()
                .filter(|r| r.ulps != u64::MAX)
                .max_by_key(|r| r.ulps);
            println!(
                "Swept {} over [{}, {}] in {} steps",
                function, params.start, params.end, params.steps
            );
            if let Some(worst) = worst {
                println!("  Max ULP: {} at x={:e}", worst.ulps, worst.x);
            }
            let mismatched = rows.iter().filter(|r| r.ulps == u64::MAX).count();
            if mismatched > 0 {
                eprintln!("  {} points disagree on NaN", mismatched);
            }
            println!("Written to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            write_csv(stdout.lock(), &rows).context("Failed to write CSV to stdout")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(start: f64, end: f64, steps: usize) -> SweepParams {
        SweepParams {
            start,
            end,
            steps,
            y: 1.0,
        }
    }

    #[test]
    fn test_grid_includes_both_ends() {
        let grid = params(-1.0, 1.0, 5).grid();
        assert_eq!(grid, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_invalid_params() {
        assert!(sweep("exp", &params(1.0, 0.0, 10)).is_err());
        assert!(sweep("exp", &params(0.0, 1.0, 1)).is_err());
        assert!(sweep("exp", &params(0.0, f64::INFINITY, 10)).is_err());
        assert!(sweep("nope", &params(0.0, 1.0, 10)).is_err());
    }

    #[test]
    fn test_sweep_tail_lengths() {
        // odd step counts leave a partial vector at the end
        for steps in [2, 3, 7, 17] {
            let rows = sweep("sin", &params(0.0, 3.0, steps)).unwrap();
            assert_eq!(rows.len(), steps);
            assert!(rows.iter().all(|r| r.ulps <= 5));
        }
        let rows = sweep("tanf", &params(-1.0, 1.0, 9)).unwrap();
        assert!(rows.iter().all(|r| r.ulps <= 5));
    }

    #[test]
    fn test_atan2_fixed_y() {
        let rows = sweep("atan2", &params(-2.0, 2.0, 5)).unwrap();
        assert_eq!(rows[2].x, 0.0);
        assert_eq!(rows[2].result, core::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_write_csv() {
        let rows = [Row {
            x: 0.0,
            result: 1.0,
            reference: 1.0,
            ulps: 0,
        }];
        let mut buf = Vec::new();
        write_csv(&mut buf, &rows).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "x,result,reference\n0e0,1e0,1e0\n");
    }
}
