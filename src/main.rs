use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seed_core::seed::{self, SeedGenerator};
use seed_core::utils::config::SeedSettings;
use seed_core::utils::logging;
use seed_core::{log_debug, log_error, log_info, CoreError, SeedBatchResponse, ValidationReport};
use zeroize::Zeroizing;

const LOG_MODULE: &str = "cli";

#[derive(Parser)]
#[command(name = "seed-core", version, about = "Generate and validate wallet seeds")]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate fresh random seeds
    Generate {
        /// Number of seeds to print
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=1000))]
        count: u32,
        /// Print JSON instead of one seed per line
        #[arg(long)]
        json: bool,
    },
    /// Validate a seed given as argument or on stdin
    Validate {
        seed: Option<String>,
        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },
    /// Print the balanced ternary expansion of a valid seed
    Trits { seed: Option<String> },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            log_error!(LOG_MODULE, "Command failed", reason = format!("{:#}", e));
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let settings = SeedSettings::from_env().context("invalid SEEDCORE_* environment")?;
    for warning in settings.validate() {
        eprintln!("{}", warning);
    }
    logging::init_from_settings(&settings);
    if cli.debug {
        logging::enable_debug();
    }

    match cli.command {
        Command::Generate { count, json } => generate(&settings, count, json),
        Command::Validate { seed, json } => validate(seed, json),
        Command::Trits { seed } => trits(seed),
    }
}

fn generate(settings: &SeedSettings, count: u32, json: bool) -> Result<ExitCode> {
    let mut generator = SeedGenerator::with_settings(settings);
    let mut batch = SeedBatchResponse { seeds: Vec::with_capacity(count as usize) };

    for _ in 0..count {
        let seed = generator.generate().context("seed generation failed")?;
        batch.seeds.push(seed.as_str().to_string());
    }
    log_info!(LOG_MODULE, "Seeds generated", seed_count = count);

    if json {
        println!("{}", serde_json::to_string(&batch)?);
    } else {
        for seed in &batch.seeds {
            println!("{}", seed);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn validate(arg: Option<String>, json: bool) -> Result<ExitCode> {
    let candidate = read_candidate(arg)?;
    let result = seed::validate(&candidate);
    log_debug!(LOG_MODULE, "Validated candidate", candidate_len = candidate.chars().count());

    let report = match result {
        Ok(_) => ValidationReport::valid(),
        Err(e) => ValidationReport::invalid(CoreError::from(e)),
    };

    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        match &report.error {
            None => println!("valid"),
            Some(err) => println!("invalid: {}", err.message),
        }
    }

    Ok(if report.valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn trits(arg: Option<String>) -> Result<ExitCode> {
    let candidate = read_candidate(arg)?;
    let seed = match seed::validate(&candidate) {
        Ok(seed) => seed,
        Err(e) => {
            println!("invalid: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let trits = seed.to_trits();
    let rendered = Zeroizing::new(
        trits.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" "),
    );
    println!("{}", rendered.as_str());
    Ok(ExitCode::SUCCESS)
}

/// Seed from the argument, or from stdin with one line ending stripped
fn read_candidate(arg: Option<String>) -> Result<Zeroizing<String>> {
    if let Some(seed) = arg {
        return Ok(Zeroizing::new(seed));
    }

    let mut buffer = Zeroizing::new(String::new());
    io::stdin().read_to_string(&mut buffer).context("failed to read seed from stdin")?;
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}
