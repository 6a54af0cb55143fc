use clap::Subcommand;
use jornada_core::{ClockTime, ConceptId, Config, TimeWindow, ValidationError};

#[derive(Subcommand)]
pub enum ConceptAction {
    /// List configured concepts
    List {
        /// Emit the roster as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a concept (window defaults to 00:00-00:00)
    Add {
        /// Display name; defaults to "Concept {id}"
        name: Option<String>,
        /// Window start (HH:MM)
        #[arg(long, value_name = "HH:MM")]
        start: Option<String>,
        /// Window end (HH:MM)
        #[arg(long, value_name = "HH:MM")]
        end: Option<String>,
    },
    /// Remove every concept with the given id
    Remove {
        /// Concept id
        id: ConceptId,
    },
    /// Edit a concept's name or window
    Set {
        /// Concept id
        id: ConceptId,
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New window start (HH:MM)
        #[arg(long, value_name = "HH:MM")]
        start: Option<String>,
        /// New window end (HH:MM)
        #[arg(long, value_name = "HH:MM")]
        end: Option<String>,
    },
}

pub fn run(action: ConceptAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConceptAction::List { json } => {
            let config = Config::load_or_default();
            if json {
                println!("{}", serde_json::to_string_pretty(config.roster.concepts())?);
            } else {
                for concept in config.roster.iter() {
                    println!("{:>4}  {:<24} {}", concept.id, concept.name, concept.window);
                }
            }
        }
        ConceptAction::Add { name, start, end } => {
            let mut config = Config::load_or_default();
            let id = config.roster.add(name.as_deref());
            if start.is_some() || end.is_some() {
                let window = TimeWindow::new(
                    ClockTime::parse_opt(start.as_deref())?,
                    ClockTime::parse_opt(end.as_deref())?,
                );
                config.roster.set_window(id, window)?;
            }
            config.save()?;
            println!("concept {id} added");
        }
        ConceptAction::Remove { id } => {
            let mut config = Config::load_or_default();
            let removed = config.roster.remove(id);
            if removed == 0 {
                return Err(ValidationError::UnknownConcept(id).into());
            }
            config.save()?;
            println!("removed {removed} concept(s) with id {id}");
        }
        ConceptAction::Set {
            id,
            name,
            start,
            end,
        } => {
            let mut config = Config::load_or_default();
            if let Some(name) = &name {
                config.roster.rename(id, name)?;
            }
            if start.is_some() || end.is_some() {
                let current = config
                    .roster
                    .get(id)
                    .ok_or(ValidationError::UnknownConcept(id))?
                    .window;
                let window = TimeWindow::new(
                    match start.as_deref() {
                        Some(s) => s.parse()?,
                        None => current.start,
                    },
                    match end.as_deref() {
                        Some(s) => s.parse()?,
                        None => current.end,
                    },
                );
                config.roster.set_window(id, window)?;
            }
            config.save()?;
            println!("concept {id} updated");
        }
    }
    Ok(())
}
