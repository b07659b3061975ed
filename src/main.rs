mod logging;

use chrono::Utc;
use clap::{Parser, Subcommand};
use iban_demo::analysis::BatchSummary;
use iban_demo::batch::{check_file, write_csv, write_report};
use iban_demo::generator::{generate_records, GeneratorConfig};
use iban_demo::history::RecentValidations;
use iban_demo::reference::{bank_code_length, iban_length, registry_countries};
use iban_demo::session::{run_session, validate_all};
use iban_demo::{format_iban, supported_generation_countries};
use rand::Rng;
use std::path::PathBuf;
use std::time::Instant;

const MAX_GENERATE_COUNT: usize = 100_000;

#[derive(Parser)]
#[command(name = "iban-demo")]
#[command(about = "IBAN validator and synthetic IBAN generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Validate(ValidateArgs),
    Generate(GenerateArgs),
    Format(FormatArgs),
    Countries(CountriesArgs),
    Check(CheckArgs),
    Session,
}

#[derive(Parser)]
struct ValidateArgs {
    #[arg(required = true)]
    ibans: Vec<String>,
}

#[derive(Parser)]
struct GenerateArgs {
    #[arg(long)]
    country: Option<String>,
    #[arg(long, default_value_t = 1)]
    count: usize,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct FormatArgs {
    iban: String,
}

#[derive(Parser)]
struct CountriesArgs {
    #[arg(long, default_value_t = false)]
    all: bool,
}

#[derive(Parser)]
struct CheckArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    logging::init_logging("iban-demo")?;
    let cli = Cli::parse();
    match cli.command {
        Command::Validate(args) => run_validate(args),
        Command::Generate(args) => run_generate(args),
        Command::Format(args) => {
            println!("{}", format_iban(&args.iban));
            Ok(())
        }
        Command::Countries(args) => run_countries(args),
        Command::Check(args) => run_check(args),
        Command::Session => {
            let mut history = RecentValidations::new();
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            run_session(stdin.lock(), &mut stdout, &mut history, Utc::now)
                .map_err(|err| err.to_string())
        }
    }
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let mut stdout = std::io::stdout();
    let invalid = validate_all(&args.ibans, &mut stdout).map_err(|err| err.to_string())?;

    if invalid > 0 {
        return Err(format!(
            "{} of {} IBAN(s) invalid",
            invalid,
            args.ibans.len()
        ));
    }
    Ok(())
}

fn run_generate(args: GenerateArgs) -> Result<(), String> {
    let seed = args.seed.unwrap_or_else(random_seed);
    let config = GeneratorConfig {
        country: args.country,
        count: args.count,
        max_count: MAX_GENERATE_COUNT,
    };

    log::info!(
        "Generating {} IBAN(s) for {} (seed {})",
        config.count,
        config.country.as_deref().unwrap_or("random countries"),
        seed
    );
    let gen_start = Instant::now();
    let records = generate_records(&config, seed).map_err(|err| err.to_string())?;
    let gen_elapsed = gen_start.elapsed();

    match args.output {
        Some(path) => {
            write_csv(&records, &path).map_err(|err| err.to_string())?;
            emit_info_line(&format!(
                "Wrote {} IBAN(s) to {}",
                records.len(),
                path.display()
            ));
        }
        None => {
            for record in &records {
                println!("{}", record.formatted);
            }
        }
    }
    log::info!("Generation time: {} ms", gen_elapsed.as_millis());
    Ok(())
}

fn run_countries(args: CountriesArgs) -> Result<(), String> {
    if args.all {
        for entry in registry_countries() {
            println!(
                "{}  {:>2}  {:>2}  {}",
                entry.code,
                iban_length(&entry.code).unwrap_or(0),
                bank_code_length(&entry.code),
                entry.name
            );
        }
    } else {
        for entry in supported_generation_countries() {
            println!("{}  {}", entry.code, entry.name);
        }
    }
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    let start = Instant::now();
    let report = check_file(&args.input).map_err(|err| err.to_string())?;
    let summary = &report.summary;

    if let Some(output) = args.output.as_deref() {
        write_report(&report.rows, output).map_err(|err| err.to_string())?;
        emit_info_line(&format!("Report written to {}", output.display()));
    }
    log_summary(summary);
    emit_info_line(&format!("Check time: {} ms", start.elapsed().as_millis()));

    if summary.invalid > 0 {
        return Err(format!("check failed with {} invalid IBAN(s)", summary.invalid));
    }
    Ok(())
}

fn log_summary(summary: &BatchSummary) {
    emit_info_line(&format!(
        "Checked {} IBAN(s): valid={} invalid={}",
        summary.total, summary.valid, summary.invalid
    ));

    let max_items = 5usize;
    for (code, count) in summary.by_country.iter().take(max_items) {
        emit_info_line(&format!("Valid by country: {} = {}", code, count));
    }
    for (kind, count) in summary.by_error.iter().take(max_items) {
        emit_info_line(&format!("Invalid by reason: {} = {}", kind, count));
    }
    if summary.by_error.len() > max_items {
        emit_info_line(&format!(
            "Invalid by reason: {} additional reasons not shown",
            summary.by_error.len() - max_items
        ));
    }
}

fn random_seed() -> u64 {
    let mut rng = rand::rngs::OsRng;
    rng.gen()
}

fn emit_info_line(message: &str) {
    if log::log_enabled!(log::Level::Info) {
        log::info!("{}", message);
    } else {
        println!("{message}");
    }
}
