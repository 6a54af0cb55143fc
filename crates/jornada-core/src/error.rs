//! Core error types for jornada-core.
//!
//! This module defines the error hierarchy using thiserror. Time strings
//! are validated at the boundary, so the allocator itself never fails;
//! everything that can go wrong lives in parsing, configuration I/O and
//! roster validation.

use std::path::PathBuf;
use thiserror::Error;

use crate::concept::ConceptId;

/// Core error type for jornada-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Time parsing errors
    #[error("Time parse error: {0}")]
    Time(#[from] TimeParseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from parsing "HH:MM" wall-clock strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// Input does not look like "HH:MM"
    #[error("Invalid time '{0}': expected \"HH:MM\"")]
    BadFormat(String),

    /// Hour component out of range
    #[error("Hour {0} out of range (0-23)")]
    HourOutOfRange(u32),

    /// Minute component out of range
    #[error("Minute {0} out of range (0-59)")]
    MinuteOutOfRange(u32),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Roster validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two concepts carry the same id in strict allocation
    #[error("Duplicate concept id: {0}")]
    DuplicateConceptId(ConceptId),

    /// No concept with the given id exists in the roster
    #[error("No concept with id {0}")]
    UnknownConcept(ConceptId),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
