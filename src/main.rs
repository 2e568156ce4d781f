/// Main entry point for the work calendar
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use workcal::{
    config::{load_config, validate_config, DEFAULT_CONFIG_PATH},
    error::{CalendarError, Result},
    render::{build_view, render, request_print, PrintOutcome, SystemPrinter},
    time::load_reference_data,
    AppConfig, CalendarDate, CalendarSession, OutputFormat, ReferenceData,
};

const USAGE: &str = "\
Usage: workcal [OPTIONS]

Options:
  --start YYYY-MM-DD     Project start date
  --end YYYY-MM-DD       Project end date
  --format FORMAT        html, text or json
  --out PATH             Output file (text goes to stdout unless given)
  --reference PATH       Reference data TOML (holidays, RDOs, closures)
  --print                Open the HTML calendar for printing
  -h, --help             Show this help

Environment:
  CONFIG_PATH            Config file (default: workcal.toml)
  WORKCAL_*              Override any config key, e.g. WORKCAL_START_DATE";

/// Command-line overrides, applied on top of the loaded config
#[derive(Debug, Default)]
struct CliArgs {
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
    format: Option<OutputFormat>,
    out: Option<PathBuf>,
    reference: Option<PathBuf>,
    print: bool,
    help: bool,
}

impl CliArgs {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Self> {
        let mut cli = CliArgs::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--start" => cli.start = Some(CalendarDate::parse(&value(&mut args, &arg)?)?),
                "--end" => cli.end = Some(CalendarDate::parse(&value(&mut args, &arg)?)?),
                "--format" => cli.format = Some(value(&mut args, &arg)?.parse()?),
                "--out" => cli.out = Some(PathBuf::from(value(&mut args, &arg)?)),
                "--reference" => cli.reference = Some(PathBuf::from(value(&mut args, &arg)?)),
                "--print" => cli.print = true,
                "-h" | "--help" => cli.help = true,
                other => {
                    return Err(CalendarError::ConfigError(format!("Unknown argument: {}", other)));
                }
            }
        }

        Ok(cli)
    }

    fn apply(&self, config: &mut AppConfig) {
        if let Some(start) = self.start {
            config.start_date = start;
        }
        if let Some(end) = self.end {
            config.end_date = end;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(out) = &self.out {
            config.output = out.clone();
        }
        if let Some(reference) = &self.reference {
            config.reference_data = Some(reference.clone());
        }
        if self.print {
            config.open_print = true;
        }
    }
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| CalendarError::ConfigError(format!("{} needs a value", flag)))
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("workcal={},warn", level.to_lowercase())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_reference(config: &AppConfig) -> Result<ReferenceData> {
    match &config.reference_data {
        Some(path) => load_reference_data(path),
        None => Ok(ReferenceData::victoria()),
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse(std::env::args().skip(1))?;
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config_path = std::env::var("CONFIG_PATH")
        .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let mut config = load_config(&config_path)?;
    cli.apply(&mut config);
    validate_config(&config)?;

    init_logging(&config.log_level);
    info!("Configuration loaded from {}", config_path);

    let reference = load_reference(&config)?;
    if let Some((first, last)) = reference.coverage() {
        let range = config.range();
        if range.start < first || range.end > last {
            warn!(
                "Range {} extends past reference data coverage ({} to {}) - days outside it are only classified as weekend or working",
                range, first, last
            );
        }
    }

    let session = CalendarSession::new(Arc::new(reference), config.range());
    let view = build_view(&config.title, session.snapshot(), session.reference());
    let document = render(&view, config.format)?;

    let stats = session.snapshot().stats;
    info!(
        "{}: {} working days, {} RDOs, {} public holidays, {} closure days, {} weekend days",
        session.range(),
        stats.working_days,
        stats.rdo_count,
        stats.holiday_count,
        stats.closure_count,
        stats.weekend_count
    );

    if config.format == OutputFormat::Text && cli.out.is_none() {
        print!("{}", document);
    } else {
        std::fs::write(&config.output, &document)?;
        info!("Wrote {:?} calendar to {}", config.format, config.output.display());
    }

    if config.open_print {
        if config.format != OutputFormat::Html {
            warn!("Printing needs the HTML format - skipping");
        } else {
            match request_print(&SystemPrinter, &config.output) {
                PrintOutcome::Sent => println!(
                    "Opened {} - use the Print / Save PDF button to print",
                    config.output.display()
                ),
                PrintOutcome::Unavailable { message } => println!("{}", message),
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {} ({})", e, e.error_code());
            if e.is_input_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs> {
        CliArgs::parse(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn test_parse_full() {
        let cli = parse(&["--start", "2026-02-01", "--end", "2026-02-28", "--format", "text", "--print"]).unwrap();
        assert_eq!(cli.start, Some(CalendarDate::parse("2026-02-01").unwrap()));
        assert_eq!(cli.format, Some(OutputFormat::Text));
        assert!(cli.print);
        assert!(!cli.help);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["--start"]).is_err());
        assert!(parse(&["--start", "01/02/2026"]).is_err());
        assert!(parse(&["--format", "pdf"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let cli = parse(&["--end", "2026-03-31", "--out", "site.html"]).unwrap();
        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.end_date, CalendarDate::parse("2026-03-31").unwrap());
        assert_eq!(config.output, PathBuf::from("site.html"));
        assert_eq!(config.start_date, CalendarDate::parse("2026-01-01").unwrap());
    }
}
