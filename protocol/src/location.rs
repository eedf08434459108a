use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Location opened when the command is invoked without an argument.
pub const DEFAULT_LOCATION: &str = "en-us/54/readme.html";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location `{0}` must look like <language>/<version>/<file>[#<anchor>]")]
    Malformed(String),

    #[error("`{0}` is not a plain document file name")]
    InvalidFile(String),
}

/// A document inside one manual, optionally scrolled to an anchor.
///
/// Parsed from `"<language>/<version>/<file>[#<anchor>]"`, e.g.
/// `"en-us/53/manual.html#pdf-os.date"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocLocation {
    pub language: String,
    pub version: String,
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

impl DocLocation {
    pub fn parse(raw: &str) -> Result<Self, LocationError> {
        let (path, anchor) = split_anchor(raw);
        let mut segments = path.split('/');
        let (Some(language), Some(version), Some(file), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(LocationError::Malformed(raw.to_string()));
        };
        if language.is_empty() || version.is_empty() || file.is_empty() {
            return Err(LocationError::Malformed(raw.to_string()));
        }
        validate_file_name(file)?;
        Ok(Self {
            language: language.to_string(),
            version: version.to_string(),
            file: file.to_string(),
            anchor: anchor.map(str::to_string),
        })
    }

    /// Same manual, different document.
    pub fn sibling(&self, file: &str, anchor: Option<&str>) -> Result<Self, LocationError> {
        validate_file_name(file)?;
        Ok(Self {
            language: self.language.clone(),
            version: self.version.clone(),
            file: file.to_string(),
            anchor: anchor.map(str::to_string),
        })
    }

    /// `"<language>/<version>"`, the key used in configuration and logs.
    pub fn manual_key(&self) -> String {
        format!("{}/{}", self.language, self.version)
    }
}

impl FromStr for DocLocation {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DocLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.language, self.version, self.file)?;
        if let Some(anchor) = &self.anchor {
            write!(f, "#{anchor}")?;
        }
        Ok(())
    }
}

/// Splits `"manual.html#pdf-print"` into the document part and a non-empty
/// anchor. Only the first `#` separates.
pub fn split_anchor(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once('#') {
        Some((document, anchor)) if !anchor.is_empty() => (document, Some(anchor)),
        Some((document, _)) => (document, None),
        None => (raw, None),
    }
}

fn validate_file_name(file: &str) -> Result<(), LocationError> {
    if file.is_empty()
        || file == "."
        || file == ".."
        || file.contains('/')
        || file.contains('\\')
    {
        return Err(LocationError::InvalidFile(file.to_string()));
    }
    Ok(())
}
