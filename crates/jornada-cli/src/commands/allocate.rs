use std::path::PathBuf;

use clap::Args;
use jornada_core::{allocate, allocate_strict, AllocationReport, ClockTime, Config, TimeWindow};

#[derive(Args)]
pub struct AllocateArgs {
    /// Clock-in time (HH:MM); falls back to the configured default, then 00:00
    #[arg(long = "clock-in", value_name = "HH:MM")]
    pub clock_in: Option<String>,

    /// Clock-out time (HH:MM); falls back to the configured default, then 00:00
    #[arg(long = "clock-out", value_name = "HH:MM")]
    pub clock_out: Option<String>,

    /// Read the concept roster from a TOML file instead of the configuration
    #[arg(long, value_name = "FILE")]
    pub concepts: Option<PathBuf>,

    /// Fail on duplicate concept ids instead of overwriting earlier results
    #[arg(long)]
    pub strict: bool,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: AllocateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.concepts {
        Some(path) => Config::load_from(path)?,
        None => Config::load_or_default(),
    };

    let clock_in = resolve_clock(args.clock_in.as_deref(), config.attendance.clock_in)?;
    let clock_out = resolve_clock(args.clock_out.as_deref(), config.attendance.clock_out)?;
    let attendance = TimeWindow::new(clock_in, clock_out);

    let credited = if args.strict {
        allocate_strict(config.roster.concepts(), attendance)?
    } else {
        allocate(config.roster.concepts(), attendance)
    };
    let report = AllocationReport::build(&config.roster, attendance, &credited);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("attendance {}", report.attendance);
        for line in &report.lines {
            println!(
                "{:>4}  {:<24} {}  {:>5.1}h  {}",
                line.id, line.name, line.window, line.hours, line.band
            );
        }
        println!("total {:.1}h", report.total_hours);
    }
    Ok(())
}

/// Explicit argument wins, then the configured default, then midnight.
fn resolve_clock(
    arg: Option<&str>,
    configured: Option<ClockTime>,
) -> Result<ClockTime, Box<dyn std::error::Error>> {
    match arg {
        Some(s) => Ok(ClockTime::parse_opt(Some(s))?),
        None => Ok(configured.unwrap_or(ClockTime::MIDNIGHT)),
    }
}
