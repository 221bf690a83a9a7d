pub mod cli;

use clap::Parser;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::summary::compute_summary;

pub fn run() -> Result<(), AppError> {
    use crate::adapters::cli::{Args, init_logging, parse_conditions, print_output};

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let conditions = parse_conditions(&args)?;
    debug!(count = conditions.len(), "parsed conditions");

    let out: Vec<_> = conditions
        .iter()
        .map(|c| {
            let summary = compute_summary(c);
            if !summary.density.is_finite() {
                warn!(
                    salinity = c.salinity,
                    temperature = c.temperature,
                    pressure = c.pressure,
                    "density is not finite for these conditions"
                );
            }
            summary
        })
        .collect();
    info!("evaluated {} sample(s)", out.len());

    print_output(&out, &args)?;

    Ok(())
}
