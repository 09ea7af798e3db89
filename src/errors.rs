use std::convert::From;
use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error enum for errors that can be encountered while escaping.
#[derive(Debug)]
pub enum EscapeError {
    /// The input file could not be opened, read or decoded as UTF-8 text.
    FileAccess { path: PathBuf, source: io::Error },
    /// An I/O error occurred on a stream.
    IoError(io::Error),
}

/// Error enum for errors that can be encountered while printing the table.
#[derive(Debug)]
pub enum TableError {
    /// A row needs room for at least one cell.
    InvalidWidth(usize),
    /// I/O Error
    IoError(io::Error),
}

/// Error enum for a failed command.
#[derive(Debug)]
pub enum CommandError {
    Escape(EscapeError),
    Table(TableError),
    /// Writing the output failed.
    IoError(io::Error),
}

impl From<io::Error> for EscapeError {
    fn from(error: io::Error) -> EscapeError {
        EscapeError::IoError(error)
    }
}

impl From<io::Error> for TableError {
    fn from(error: io::Error) -> TableError {
        TableError::IoError(error)
    }
}

impl From<io::Error> for CommandError {
    fn from(error: io::Error) -> CommandError {
        CommandError::IoError(error)
    }
}

impl From<EscapeError> for CommandError {
    fn from(error: EscapeError) -> CommandError {
        CommandError::Escape(error)
    }
}

impl From<TableError> for CommandError {
    fn from(error: TableError) -> CommandError {
        CommandError::Table(error)
    }
}

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EscapeError::FileAccess {
                ref path,
                ref source,
            } => write!(f, "Cannot read {}: {}", path.display(), source),
            EscapeError::IoError(ref err) => write!(f, "I/O error {}", err),
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TableError::InvalidWidth(width) => {
                write!(f, "Invalid table width {}, expected at least 1.", width)
            }
            TableError::IoError(ref err) => write!(f, "I/O error {}", err),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CommandError::Escape(ref err) => err.fmt(f),
            CommandError::Table(ref err) => err.fmt(f),
            CommandError::IoError(ref err) => write!(f, "I/O error {}", err),
        }
    }
}

impl error::Error for EscapeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            EscapeError::FileAccess { ref source, .. } => Some(source),
            EscapeError::IoError(ref err) => Some(err),
        }
    }
}

impl error::Error for TableError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            TableError::InvalidWidth(_) => None,
            TableError::IoError(ref err) => Some(err),
        }
    }
}

impl error::Error for CommandError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            CommandError::Escape(ref err) => Some(err),
            CommandError::Table(ref err) => Some(err),
            CommandError::IoError(ref err) => Some(err),
        }
    }
}
