//! Error types for the sketchbook bootstrapper.
//!
//! Defines the main error enum used throughout the crate.

use thiserror::Error;

/// Main error type for bootstrap operations.
///
/// The first three variants form the dispatch taxonomy; all of them are
/// terminal for the current run (there is no retry and no fallback sketch).
#[derive(Error, Debug)]
pub enum SketchbookError {
    /// The fragment could not be decoded, or the decoded command string
    /// contained no recognizable term.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// The command name is not present in the sketch registry.
    #[error("Unknown sketch: '{0}' is not in the registry")]
    UnknownSketch(String),

    /// The command name is not exported by the loaded module.
    #[error("Unknown entry point: module does not export '{0}'")]
    UnknownEntryPoint(String),

    /// The module failed to initialize before dispatch.
    #[error("Module error: {0}")]
    ModuleInit(String),

    /// Configuration errors (invalid config file, bad registry entries, etc.)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SketchbookError {
    /// Creates an invalid-command error with the given detail message.
    pub fn invalid_command(detail: impl Into<String>) -> Self {
        Self::InvalidCommand(detail.into())
    }

    /// Creates an unknown-sketch error for the given command name.
    pub fn unknown_sketch(name: impl Into<String>) -> Self {
        Self::UnknownSketch(name.into())
    }

    /// Creates an unknown-entry-point error for the given command name.
    pub fn unknown_entry_point(name: impl Into<String>) -> Self {
        Self::UnknownEntryPoint(name.into())
    }

    /// Creates a module initialization error with the given message.
    pub fn module_init(msg: impl Into<String>) -> Self {
        Self::ModuleInit(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidCommand(_) => "Invalid Command",
            Self::UnknownSketch(_) => "Unknown Sketch",
            Self::UnknownEntryPoint(_) => "Unknown Entry Point",
            Self::ModuleInit(_) => "Module Error",
            Self::Config(_) => "Configuration Error",
        }
    }
}

/// Result type alias using SketchbookError.
pub type Result<T> = std::result::Result<T, SketchbookError>;
