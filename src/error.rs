use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors raised when a host hands over a grid that is not a cube of
/// `{-1, 0, 1}` values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid must have a side length of at least 1")]
    Empty,

    #[error("grid is not a cube: expected side {expected}, found {found} at {location}")]
    Ragged {
        expected: usize,
        found: usize,
        location: String,
    },

    #[error("invalid cell value {value} at (height={height}, wide={wide}, depth={depth})")]
    InvalidCell {
        value: i8,
        height: usize,
        wide: usize,
        depth: usize,
    },
}

/// Precondition violations detected by the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("grid side {found} does not match configured num_grid {expected}")]
    SideMismatch { expected: usize, found: usize },

    #[error("column (wide={wide}, depth={depth}) is outside a grid of side {side}")]
    ColumnOutOfRange {
        wide: usize,
        depth: usize,
        side: usize,
    },
}

/// Errors from numeral-base conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RadixError {
    #[error("unsupported base {0}")]
    InvalidBase(u32),

    #[error("digit {digit} is not valid in base {base}")]
    InvalidDigit { digit: u32, base: u32 },

    #[error("numeral does not fit in a usize")]
    Overflow,
}

/// Errors from decoding a flat action index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("action {action} is outside the action space of size {size}")]
    OutOfRange { action: usize, size: usize },

    #[error("column (wide={wide}, depth={depth}) is outside a grid of side {side}")]
    ColumnOutOfRange {
        wide: usize,
        depth: usize,
        side: usize,
    },

    #[error("radix error: {0}")]
    Radix(#[from] RadixError),
}
