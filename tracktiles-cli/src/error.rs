//! CLI error handling with user-friendly messages.

use std::fmt;
use std::process;

use tracktiles::pyramid::GenerateError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Tileset generation failed
    Generate(GenerateError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::Generate(GenerateError::Io { .. }) = self {
            eprintln!();
            eprintln!("Output from a failed run is incomplete; remove the output");
            eprintln!("directory and re-run once the filesystem issue is fixed.");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Generate(e) => write!(f, "Failed to generate tileset: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Generate(e) => Some(e),
        }
    }
}

impl From<GenerateError> for CliError {
    fn from(err: GenerateError) -> Self {
        CliError::Generate(err)
    }
}
