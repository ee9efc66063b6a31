//! File open modes.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How a file is being opened.
///
/// The mode only decides whether a missing file (and its missing parent
/// directories) is created. It never moves the cursor: every open starts
/// at offset zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    #[default]
    Read,
    Write,
}

impl OpenMode {
    /// Whether opening in this mode materializes missing path segments.
    pub fn creates(self) -> bool {
        matches!(self, OpenMode::Write)
    }
}

/// Parses conventional mode strings such as `"r"`, `"rb"`, `"w"` or `"w+"`.
///
/// Any mode containing `w` is a write mode; everything else reads.
impl FromStr for OpenMode {
    type Err = Error;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        if mode.is_empty() || !mode.chars().all(|c| "rwabtx+".contains(c)) {
            return Err(Error::InvalidMode {
                mode: mode.to_string(),
            });
        }

        if mode.contains('w') {
            Ok(OpenMode::Write)
        } else {
            Ok(OpenMode::Read)
        }
    }
}

impl TryFrom<&str> for OpenMode {
    type Error = Error;

    fn try_from(mode: &str) -> Result<Self, Self::Error> {
        mode.parse()
    }
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenMode::Read => write!(f, "r"),
            OpenMode::Write => write!(f, "w"),
        }
    }
}
