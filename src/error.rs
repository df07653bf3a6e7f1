use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures outside of censoring itself, which never fails.
#[derive(Error, Debug)]
pub enum Error {
    /// The word list could not be opened or read.
    #[error("could not read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading input or writing output failed during a session.
    #[error("session I/O error: {0}")]
    Session(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use crate::Error;
    use std::error::Error as _;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn display() {
        let err = Error::Io {
            path: PathBuf::from("words.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "could not read word list words.txt: missing");
        assert!(err.source().is_some());
    }

    #[test]
    fn from_io() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, Error::Session(_)));
        assert_eq!(err.to_string(), "session I/O error: closed");
    }
}
