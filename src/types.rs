//! Shared types used across orgdot.
//! Includes the input `Row`, the normalized `PersonKey`, and the renderer
//! output format `RenderFormat`.
use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static NON_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z]+").unwrap());
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{4}").unwrap());

/// Number of CSV columns a roster record must carry (column 0 is unused).
pub const ROSTER_COLUMNS: usize = 5;

/// One roster record: hire date, title, person and supervisor display names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Free text; the first 4-digit run is shown as the hire year
    pub hire_date: String,
    pub title: String,
    pub name: String,
    pub supervisor: String,
}

impl Row {
    pub fn new(
        hire_date: impl Into<String>,
        title: impl Into<String>,
        name: impl Into<String>,
        supervisor: impl Into<String>,
    ) -> Self {
        Self {
            hire_date: hire_date.into(),
            title: title.into(),
            name: name.into(),
            supervisor: supervisor.into(),
        }
    }

    /// Build a row from raw roster columns `[unused, hire, title, name, supervisor, ..]`.
    /// `row` is the 1-based record number used in error messages.
    pub fn from_fields<S: AsRef<str>>(row: usize, fields: &[S]) -> Result<Self> {
        if fields.len() < ROSTER_COLUMNS {
            return Err(Error::MalformedRow {
                row,
                expected: ROSTER_COLUMNS,
                found: fields.len(),
            });
        }
        Ok(Self::new(
            fields[1].as_ref(),
            fields[2].as_ref(),
            fields[3].as_ref(),
            fields[4].as_ref(),
        ))
    }

    /// First 4-digit run of the hire date, if any.
    pub fn hire_year(&self) -> Option<&str> {
        YEAR.find(&self.hire_date).map(|m| m.as_str())
    }
}

/// A name reduced to its ASCII letters; used as DOT node id and join key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonKey(String);

impl PersonKey {
    pub fn normalize(name: &str) -> Self {
        PersonKey(NON_LETTER.replace_all(name, "").into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for PersonKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Output format handed to the external renderer as `-T<format>`.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Pdf,
    Svg,
    Png,
}

impl RenderFormat {
    pub fn extension(self) -> &'static str {
        match self {
            RenderFormat::Pdf => "pdf",
            RenderFormat::Svg => "svg",
            RenderFormat::Png => "png",
        }
    }
}

impl std::fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
