use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::error::AppError;
use crate::models::{Conditions, DensitySummary};

#[derive(Parser, Debug)]
#[command(author, version, about = "Seawater density and secant bulk modulus (EOS-80)", long_about = None)]
pub struct Args {
    #[arg(long)]
    json: bool,
    #[arg(
        short,
        long,
        value_name = "PSU",
        allow_negative_numbers = true,
        help = "Practical salinity [default: 35]"
    )]
    salinity: Option<f64>,
    #[arg(
        short,
        long,
        value_name = "DEGC",
        allow_negative_numbers = true,
        help = "In-situ temperature, ITS-90 [default: 25]"
    )]
    temperature: Option<f64>,
    #[arg(
        short,
        long,
        value_name = "DBAR",
        allow_negative_numbers = true,
        help = "Sea pressure [default: 0]"
    )]
    pressure: Option<f64>,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON file with conditions; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON conditions object (overrides --input and the scalar flags)"
    )]
    conditions_json: Option<String>,
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Log verbosity on stderr"
    )]
    pub log_level: String,
}

fn parse_log_level(log_level: &str) -> Result<Level, AppError> {
    Level::from_str(log_level)
        .map_err(|e| AppError::InitLogging(format!("unknown log level '{log_level}': {e}")))
}

/// Route tracing output to stderr so that stdout stays machine readable.
pub fn init_logging(log_level: &str) -> Result<(), AppError> {
    let level = parse_log_level(log_level)?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::InitLogging(e.to_string()))
}

/// Accepted input documents: a single conditions object or `{ "conditions": [...] }`.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum InputDocument {
    Batch { conditions: Vec<Conditions> },
    Single(Conditions),
}

fn parse_input_doc(doc: &str) -> Result<Vec<Conditions>, AppError> {
    let parsed: InputDocument =
        serde_json::from_str(doc).map_err(|source| AppError::ParseInputDocument { source })?;
    let conditions = match parsed {
        InputDocument::Batch { conditions } => conditions,
        InputDocument::Single(c) => vec![c],
    };
    if conditions.is_empty() {
        return Err(AppError::EmptyInput);
    }
    Ok(conditions)
}

fn conditions_from_flags(args: &Args) -> Conditions {
    let defaults = Conditions::default();
    Conditions {
        salinity: args.salinity.unwrap_or(defaults.salinity),
        temperature: args.temperature.unwrap_or(defaults.temperature),
        pressure: args.pressure.unwrap_or(defaults.pressure),
    }
}

pub fn parse_conditions(args: &Args) -> Result<Vec<Conditions>, AppError> {
    match (&args.conditions_json, &args.input) {
        (Some(json), _) => {
            let c: Conditions = serde_json::from_str(json)
                .map_err(|source| AppError::ParseConditionsJson { source })?;
            Ok(vec![c])
        }
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_input_doc(&s)
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_input_doc(&s)
        }
        (None, None) => Ok(vec![conditions_from_flags(args)]),
    }
}

pub fn print_output(out: &[DensitySummary], args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = match out {
            [single] => serde_json::to_string_pretty(single),
            many => serde_json::to_string_pretty(many),
        }
        .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
    } else {
        for (i, row) in out.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!(
                "S: {:.4} PSU  t: {:.4} °C  p: {:.1} dbar",
                row.salinity, row.temperature, row.pressure
            );
            println!("Density: {:.5} kg/m^3", row.density);
            println!("Density (p=0): {:.5} kg/m^3", row.surface_density);
            println!("Pure water density: {:.5} kg/m^3", row.pure_water_density);
            println!("Secant bulk modulus: {:.4} bar", row.secant_bulk_modulus);
        }
    }

    Ok(())
}
