use std::path::PathBuf;

use anyhow::{Context, Result};
use bessel_ladder::design::table;
use clap::Parser;
use serde::Serialize;

/// Write the normalized Bessel coefficient table as CSV.
#[derive(Parser)]
#[command(about = "Dump the normalized Bessel ladder coefficients")]
struct Args {
    /// Destination CSV file.
    #[arg(default_value = "bessel_coefficients.csv")]
    output: PathBuf,
}

#[derive(Serialize)]
struct Row {
    order: usize,
    position: usize,
    /// `C` for capacitor-prototype (even) positions, `L` for inductor-prototype.
    role: &'static str,
    coefficient: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut count = 0;
    for (order, row) in table::rows() {
        for (position, coefficient) in row.iter().enumerate() {
            let role = if position % 2 == 0 { "C" } else { "L" };
            writer
                .serialize(Row {
                    order,
                    position,
                    role,
                    coefficient: *coefficient,
                })
                .with_context(|| format!("writing order {order} position {position}"))?;
            count += 1;
        }
    }
    writer.flush().context("flushing CSV output")?;

    log::info!("Wrote {count} coefficients to {}", args.output.display());
    Ok(())
}
