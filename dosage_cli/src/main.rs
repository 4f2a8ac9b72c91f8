use clap::{Parser, Subcommand};
use dosage_core::*;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "medfmt")]
#[command(about = "Medication dosage formatter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load configuration from this file instead of the default path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print all built-in medications (default)
    List {
        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },

    /// Print a single built-in medication by name
    Show {
        /// Drug name (case-insensitive)
        name: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Format a tablet regimen
    Tablet {
        /// Drug name
        drug: String,
        /// Tablets taken in the morning
        morning: u32,
        /// Tablets taken at midday
        midday: u32,
        /// Tablets taken in the evening
        evening: u32,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Format an infusion regimen
    Infusion {
        /// Drug name
        drug: String,
        /// Infusion speed in ml/min
        #[arg(value_parser = parse_speed)]
        speed: f64,
        /// Duration in hours
        duration: u32,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Initialize logging
    dosage_core::logging::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::debug!("medfmt failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // A bare invocation never reads the default config file
    let configured = match (&cli.command, &cli.config) {
        (_, Some(path)) => Config::load_from(path)?.output.format,
        (Some(_), None) => Config::load()?.output.format,
        (None, None) => OutputFormat::Text,
    };

    match cli.command {
        Some(Commands::List { json }) => cmd_list(output_format(json, configured)),
        Some(Commands::Show { name, json }) => {
            cmd_show(&name, output_format(json, configured))
        }
        Some(Commands::Tablet {
            drug,
            morning,
            midday,
            evening,
            json,
        }) => {
            let medication = Medication::new(drug, Dosage::tablet(morning, midday, evening));
            print_medications(&[medication], output_format(json, configured))
        }
        Some(Commands::Infusion {
            drug,
            speed,
            duration,
            json,
        }) => {
            let medication = Medication::new(drug, Dosage::infusion(speed, duration));
            print_medications(&[medication], output_format(json, configured))
        }
        None => {
            // Default to "list" command
            cmd_list(configured)
        }
    }
}

/// Infusion speed must be a finite, non-negative number
fn parse_speed(value: &str) -> std::result::Result<f64, String> {
    let speed: f64 = value
        .parse()
        .map_err(|e| format!("invalid speed {:?}: {}", value, e))?;
    if !speed.is_finite() || speed < 0.0 {
        return Err(format!("speed must be a finite, non-negative number, got {}", value));
    }
    Ok(speed)
}

/// `--json` on the command line wins over the configured format
fn output_format(json_flag: bool, configured: OutputFormat) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        configured
    }
}

fn cmd_list(format: OutputFormat) -> Result<()> {
    print_medications(builtin_medications(), format)
}

fn cmd_show(name: &str, format: OutputFormat) -> Result<()> {
    let medication =
        find_medication(name).ok_or_else(|| Error::UnknownMedication(name.to_string()))?;
    print_medications(std::slice::from_ref(medication), format)
}

fn print_medications(medications: &[Medication], format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for medication in medications {
        tracing::debug!(
            "Formatting {} ({:?})",
            medication.drug_name,
            medication.dosage.kind()
        );

        match format {
            OutputFormat::Text => writeln!(out, "{}", format_medication(medication))?,
            OutputFormat::Json => {
                let line = serde_json::json!({
                    "drug_name": medication.drug_name,
                    "kind": medication.dosage.kind(),
                    "dosage": medication.dosage,
                    "formatted": format_medication(medication),
                });
                serde_json::to_writer(&mut out, &line)?;
                writeln!(out)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
