use std::{error::Error, fmt, io, path::PathBuf};

/// The visualizer's result type.
pub type Result<T> = std::result::Result<T, VizErr>;

/// Failures surfaced to the caller.
///
/// Malformed weight rows are not part of this taxonomy, they are dropped
/// while parsing and only show up as a smaller step count.
#[derive(Debug)]
pub enum VizErr {
    /// A dataset size below zero was requested.
    InvalidSize { n: i64 },
    /// A configuration value is out of range.
    InvalidConfig(String),
    /// The configuration file could not be read or decoded.
    Config { path: PathBuf, source: io::Error },
    /// The text sink failed to deliver an export.
    Io(io::Error),
}

impl fmt::Display for VizErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VizErr::InvalidSize { n } => {
                write!(f, "invalid dataset size {n}: must be zero or greater")
            }
            VizErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            VizErr::Config { path, source } => {
                write!(f, "cannot load config '{}': {source}", path.display())
            }
            VizErr::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for VizErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            VizErr::Config { source, .. } => Some(source),
            VizErr::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for VizErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
