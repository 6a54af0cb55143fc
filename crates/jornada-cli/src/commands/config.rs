use clap::Subcommand;
use jornada_core::{ClockTime, Config};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration as JSON
    Show,
    /// Print the configuration file path
    Path,
    /// Set the default attendance window
    SetAttendance {
        /// Default clock-in (HH:MM); empty clears it
        #[arg(long = "clock-in", value_name = "HH:MM")]
        clock_in: Option<String>,
        /// Default clock-out (HH:MM); empty clears it
        #[arg(long = "clock-out", value_name = "HH:MM")]
        clock_out: Option<String>,
    },
    /// Reset configuration to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::config_path()?.display());
        }
        ConfigAction::SetAttendance {
            clock_in,
            clock_out,
        } => {
            let mut config = Config::load_or_default();
            if let Some(value) = clock_in.as_deref() {
                config.attendance.clock_in = parse_default(value)?;
            }
            if let Some(value) = clock_out.as_deref() {
                config.attendance.clock_out = parse_default(value)?;
            }
            config.save()?;
            println!("attendance defaults updated");
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("configuration reset to defaults");
        }
    }
    Ok(())
}

/// An empty value clears the default rather than setting midnight.
fn parse_default(value: &str) -> Result<Option<ClockTime>, Box<dyn std::error::Error>> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(value.parse()?))
    }
}
