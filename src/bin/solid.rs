use colored::Colorize;
use solid_principles::report::principle_codes;
use solid_principles::{logging, Principle, Report, Result, SolidConfig, SolidError};
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_CONFIG: &str = "solid.toml";

struct Args {
    config: Option<PathBuf>,
    principles: Vec<Principle>,
}

fn usage() -> String {
    format!(
        "Usage: solid [--config PATH] [PRINCIPLE...]\n  principles: {}",
        principle_codes()
    )
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args {
        config: None,
        principles: Vec::new(),
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                let path = args.next().ok_or_else(|| {
                    SolidError::Config(solid_principles::ConfigError::invalid_value(
                        "--config",
                        "expects a path",
                    ))
                })?;
                parsed.config = Some(PathBuf::from(path));
            }
            other => parsed.principles.push(other.parse()?),
        }
    }

    Ok(parsed)
}

fn load_config(args: &Args) -> Result<SolidConfig> {
    let mut config = match &args.config {
        Some(path) => SolidConfig::from_file(path)?,
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG);
            if default.exists() {
                SolidConfig::from_file(&default)?
            } else {
                SolidConfig::default()
            }
        }
    };

    if !args.principles.is_empty() {
        config.principles = args.principles.clone();
    }
    Ok(config)
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", usage());
        return Ok(());
    }

    let args = parse_args(args.into_iter())?;
    let config = load_config(&args)?;
    logging::init(&config.log_level);
    tracing::debug!(?config, "loaded configuration");

    let stdout = std::io::stdout();
    Report::new(&config).run_all(&mut stdout.lock())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            if matches!(err, SolidError::UnknownPrinciple(_)) {
                eprintln!("{}", usage());
            }
            ExitCode::FAILURE
        }
    }
}
