//! # Vela CLI
//!
//! Command-line interface for the vela kernels. Evaluates kernels at single
//! points, sweeps them over an interval into CSV, and reports the build and
//! host configuration.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vela_math::{BuildConfig, HostFeatures};

mod commands;
mod kernel;

use commands::sweep::SweepParams;

/// CLI tool for evaluating vela kernels against libm
#[derive(Parser)]
#[command(name = "vela")]
#[command(about = "Evaluate vectorized elementary-function kernels")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a kernel at one or more points
    Eval {
        /// Kernel name (exp, log, sin, atan2, expf, ...)
        function: String,

        /// Input values; `y,x` pairs for atan2
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Evaluate a kernel over a linearly spaced grid
    Sweep {
        /// Kernel name
        function: String,

        /// First grid point
        #[arg(long, allow_hyphen_values = true)]
        start: f64,

        /// Last grid point
        #[arg(long, allow_hyphen_values = true)]
        end: f64,

        /// Number of grid points
        #[arg(long, default_value = "101")]
        steps: usize,

        /// Write CSV here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fixed y for atan2(y, x)
        #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
        y: f64,
    },

    /// Print the build configuration and host features
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval { function, values } => commands::eval::execute(&function, &values),

        Commands::Sweep {
            function,
            start,
            end,
            steps,
            output,
            y,
        } => {
            let params = SweepParams {
                start,
                end,
                steps,
                y,
            };
            commands::sweep::execute(&function, &params, output.as_deref())
        }

        Commands::Info => {
            print_info();
            Ok(())
        }
    }
}

fn print_info() {
    let host = HostFeatures::detect();

    println!("Build");
    println!("─────");
    println!("{}", BuildConfig::current());
    println!();
    println!("Host");
    println!("────");
    println!("{}", host);
    println!();
    println!("Kernels: {}", kernel::NAMES.join(", "));
}
