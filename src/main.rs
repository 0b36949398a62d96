use std::fs;
use std::process::ExitCode;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use frcs_breakout::config::Config;
use frcs_breakout::convert_to_breakout;

#[derive(Parser)]
#[command(name = "frcs-breakout")]
#[command(about = "Convert parsed FRCS cave survey data to Breakout format")]
struct Cli {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a config file and every input it names can be loaded
    Validate { config: String },
    /// Convert the caves in a config file
    Convert {
        config: String,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Write JSON on a single line
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .init();

    match cli.command {
        Commands::Validate { config } => validate(&config),
        Commands::Convert {
            config,
            output,
            compact,
        } => convert(&config, output.as_deref(), compact),
    }
}

fn validate(path: &str) -> ExitCode {
    let config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let inputs = match config.load_inputs() {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Input error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Config is valid ({} caves)", inputs.len());
    for (name, cave) in &inputs {
        let trips = cave.survey.trips.iter().flatten().count();
        let plotted = match &cave.plot {
            Some(plot) => format!("{} plot shots", plot.shots.len()),
            None => "no plot".to_string(),
        };
        println!(
            "  {}: {} trips, {} shots, {}",
            name,
            trips,
            cave.survey.shot_count(),
            plotted
        );
        if cave.plot.is_some() && cave.utm_zone.is_none() {
            println!("    warning: plot given without utm_zone, fixed stations will be skipped");
        }
    }
    ExitCode::SUCCESS
}

fn convert(path: &str, output: Option<&str>, compact: bool) -> ExitCode {
    let inputs = match Config::from_file(path).and_then(|c| c.load_inputs()) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Error loading {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let document = convert_to_breakout(&inputs);
    let json = if compact {
        serde_json::to_string(&document)
    } else {
        serde_json::to_string_pretty(&document)
    };
    let json = match json {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match output {
        Some(file) => {
            if let Err(e) = fs::write(file, json) {
                eprintln!("Error writing {}: {}", file, e);
                return ExitCode::FAILURE;
            }
            log::info!("Wrote {}", file);
        }
        None => println!("{}", json),
    }
    ExitCode::SUCCESS
}
