//! Evaluate a kernel at individual points.

use anyhow::{bail, Context, Result};

use crate::kernel::{Kernel, Sample};

/// Parse a float argument, accepting `inf`, `-inf` and `nan`.
pub fn parse_value(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid number: '{}'", text))
}

/// Parse a `y,x` pair for atan2.
fn parse_pair(text: &str) -> Result<(f64, f64)> {
    let Some((y, x)) = text.split_once(',') else {
        bail!("atan2 takes y,x pairs, got '{}'", text);
    };
    Ok((parse_value(y)?, parse_value(x)?))
}

/// Evaluate `function` at every value and return the samples.
pub fn evaluate(function: &str, values: &[String]) -> Result<Vec<Sample>> {
    let kernel = Kernel::lookup(function)?;
    if values.is_empty() {
        bail!("No values given for {}", function);
    }

    values
        .iter()
        .map(|text| {
            if kernel.is_binary() {
                let (y, x) = parse_pair(text)?;
                Ok(kernel.eval(x, y))
            } else {
                Ok(kernel.eval(parse_value(text)?, 0.0))
            }
        })
        .collect()
}

/// Execute the eval command.
pub fn execute(function: &str, values: &[String]) -> Result<()> {
    let samples = evaluate(function, values)?;

    for s in &samples {
        let input = match s.y {
            Some(y) => format!("y={:e} x={:e}", y, s.x),
            None => format!("x={:e}", s.x),
        };
        let ulps = if s.ulps == u64::MAX {
            "nan-mismatch".to_string()
        } else {
            s.ulps.to_string()
        };
        println!(
            "{}({}) = {:e}  libm {:e}  ulp {}",
            function, input, s.result, s.reference, ulps
        );
    }

    Ok(())
}
