use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three pages of the planner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Calculator,
    Summary,
    Settings,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown page '{0}'; expected one of: calculator, summary, settings")]
pub struct ParsePageError(String);

impl Page {
    /// Navigation order used by the page header.
    pub const ALL: [Page; 3] = [Page::Calculator, Page::Summary, Page::Settings];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calculator => "calculator",
            Self::Summary => "summary",
            Self::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Calculator => "Calculator",
            Self::Summary => "Summary",
            Self::Settings => "Settings",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "calculator" => Some(Self::Calculator),
            "summary" => Some(Self::Summary),
            "settings" => Some(Self::Settings),
            _ => None,
        }
    }

    /// Resolves an optional page name, falling back to the calculator when
    /// the name is absent or unrecognized.
    pub fn parse_or_default(s: Option<&str>) -> Self {
        s.and_then(Self::parse).unwrap_or_default()
    }
}

impl FromStr for Page {
    type Err = ParsePageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim()).ok_or_else(|| ParsePageError(s.to_string()))
    }
}

impl fmt::Display for Page {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
