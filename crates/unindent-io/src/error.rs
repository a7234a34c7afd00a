use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8")]
    NotUtf8 { path: String },
}

impl Error {
    /// Map a read failure, surfacing invalid UTF-8 as its own variant.
    pub(crate) fn read(path: String, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::InvalidData {
            return Self::NotUtf8 { path };
        }
        Self::Read { path, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
