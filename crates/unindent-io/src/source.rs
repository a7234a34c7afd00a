use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use unindent_core::strip::unindent;

use crate::error::{Error, Result};

/// Where input text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    Path(PathBuf),
}

impl Source {
    /// `None` and `"-"` both mean stdin.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => Source::Stdin,
            Some(path) => Source::Path(PathBuf::from(path)),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::Path(p) => p.display().to_string(),
        }
    }

    /// Read the whole input into memory.
    pub fn read_to_string(&self) -> Result<String> {
        let res = match self {
            Source::Stdin => {
                let mut s = String::new();
                io::stdin().read_to_string(&mut s).map(|_| s)
            }
            Source::Path(p) => fs::read_to_string(p),
        };

        let text = res.map_err(|e| Error::read(self.label(), e))?;
        debug!(source = %self.label(), bytes = text.len(), "read input");
        Ok(text)
    }
}

/// Where output text goes. Text is written verbatim; no newline is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    Path(PathBuf),
}

impl Sink {
    /// `None` and `"-"` both mean stdout.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => Sink::Stdout,
            Some(path) => Sink::Path(PathBuf::from(path)),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Sink::Stdout => "<stdout>".to_string(),
            Sink::Path(p) => p.display().to_string(),
        }
    }

    pub fn write_str(&self, text: &str) -> Result<()> {
        let res = match self {
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes()).and_then(|()| out.flush())
            }
            Sink::Path(p) => fs::write(p, text),
        };

        res.map_err(|source| Error::Write { path: self.label(), source })?;
        debug!(sink = %self.label(), bytes = text.len(), "wrote output");
        Ok(())
    }
}

/// Read a file and return its unindented contents.
pub fn unindent_file(path: impl AsRef<Path>) -> Result<String> {
    let text = Source::Path(path.as_ref().to_path_buf()).read_to_string()?;
    Ok(unindent(&text))
}
