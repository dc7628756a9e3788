//! Line separator used to join mismatch records into a failure message
//!
//! The separator is injected rather than read from the host platform so
//! that rendered reports are byte-identical across machines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator placed between rendered mismatch records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineSeparator {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineSeparator {
    /// The separator native to the compilation target
    pub const fn platform() -> Self {
        if cfg!(windows) {
            LineSeparator::CrLf
        } else {
            LineSeparator::Lf
        }
    }

    /// Get the separator text
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineSeparator::Lf => "\n",
            LineSeparator::CrLf => "\r\n",
        }
    }
}

impl fmt::Display for LineSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a separator name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSeparator(pub String);

impl fmt::Display for UnknownSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown line separator '{}' (expected lf, crlf or platform)",
            self.0
        )
    }
}

impl std::error::Error for UnknownSeparator {}

impl FromStr for LineSeparator {
    type Err = UnknownSeparator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lf" => Ok(LineSeparator::Lf),
            "crlf" => Ok(LineSeparator::CrLf),
            "platform" => Ok(LineSeparator::platform()),
            _ => Err(UnknownSeparator(s.to_string())),
        }
    }
}
