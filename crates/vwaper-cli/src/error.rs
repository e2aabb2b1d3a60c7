use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing input file; usage: vwaper <FILE> or vwaper version")]
    Usage,

    #[error(transparent)]
    Core(#[from] vwaper_core::CoreError),

    #[error("strict mode failed: malformed_lines={malformed_lines}")]
    StrictModeViolation { malformed_lines: usize },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage => 2,
            Self::Core(_) => 3,
            Self::Serialization(_) => 4,
            Self::StrictModeViolation { .. } => 5,
            Self::Io(_) => 10,
        }
    }
}
