//! # Jornada Core Library
//!
//! This library provides the core business logic for jornada, a daily
//! attendance recorder: a single clock-in/clock-out window is allocated
//! across a configurable roster of named concepts (ordinary hours,
//! overtime, night overtime), each concept defined by its own wall-clock
//! window that may cross midnight.
//!
//! It implements a CLI-first philosophy where all operations are available
//! via a standalone CLI binary; any GUI is a thin layer over this library.
//!
//! ## Key Components
//!
//! - [`allocate()`]: the interval allocator, a pure function crediting
//!   attendance time to concepts in half-hour increments
//! - [`ConceptRoster`]: the editable list of allocation concepts
//! - [`AllocationReport`]: a presentation-ready join of an allocation back
//!   to the roster
//! - [`Config`]: TOML-based roster and default-attendance configuration

pub mod allocate;
pub mod clock;
pub mod concept;
pub mod error;
pub mod report;
pub mod storage;
pub mod window;

pub use allocate::{allocate, allocate_strict};
pub use clock::ClockTime;
pub use concept::{Concept, ConceptId, ConceptRoster};
pub use error::{ConfigError, CoreError, TimeParseError, ValidationError};
pub use report::{AllocationReport, HoursBand, ReportLine};
pub use storage::Config;
pub use window::TimeWindow;
