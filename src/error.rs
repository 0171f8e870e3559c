use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Invalid grid configuration, reported when the grid is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NonPositivePitch(i32),
    NonPositiveScreen { width: i32, height: i32 },
    NegativePadding(i32),
    PaddingTooLarge { padding: i32, width: i32, height: i32 },
    EmptyGrid,
    ZeroTickRate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositivePitch(pitch) => {
                write!(f, "cell pitch must be positive (got {pitch})")
            }
            ConfigError::NonPositiveScreen { width, height } => {
                write!(f, "screen dimensions must be positive (got {width}x{height})")
            }
            ConfigError::NegativePadding(padding) => {
                write!(f, "padding must not be negative (got {padding})")
            }
            ConfigError::PaddingTooLarge { padding, width, height } => write!(
                f,
                "padding ({padding}) exceeds half the screen size ({width}x{height})"
            ),
            ConfigError::EmptyGrid => write!(f, "configuration produces an empty grid"),
            ConfigError::ZeroTickRate => write!(f, "ticks_per_second must be positive"),
        }
    }
}

impl Error for ConfigError {}

/// Top-level error for the binary
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Settings { path: PathBuf, source: toml::de::Error },
    Io(io::Error),
    UnknownPattern(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "invalid configuration: {e}"),
            AppError::Settings { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            }
            AppError::Io(e) => write!(f, "{e}"),
            AppError::UnknownPattern(name) => write!(
                f,
                "unknown pattern '{name}' (run `lifegrid patterns` for the list)"
            ),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Settings { source, .. } => Some(source),
            AppError::Io(e) => Some(e),
            AppError::UnknownPattern(_) => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}
