//! Section identifiers for the navigable views of the site.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the fixed named views of the site. Exactly one is active at a time.
///
/// The set is closed; invalid values are unrepresentable in the typed API.
/// Parsing from strings (e.g. CLI input) is the only fallible path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Projects,
    Resume,
    Contact,
}

/// Error type for parsing a section identifier from a string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section '{0}' (expected one of: home, about, projects, resume, contact)")]
pub struct SectionParseError(pub String);

impl Section {
    /// All sections, in navigation order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Resume,
        Section::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Resume => "resume",
            Section::Contact => "contact",
        }
    }

    /// Human-readable label used by navigation surfaces.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Resume => "Resume",
            Section::Contact => "Contact",
        }
    }
}

impl Default for Section {
    /// State resets to `Home` on every process start.
    fn default() -> Self {
        Section::Home
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = SectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(Section::Home),
            "about" => Ok(Section::About),
            "projects" => Ok(Section::Projects),
            "resume" => Ok(Section::Resume),
            "contact" => Ok(Section::Contact),
            _ => Err(SectionParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn test_round_trip_all_sections() {
        for section in Section::ALL {
            assert_eq!(section.as_str().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Resume".parse::<Section>().unwrap(), Section::Resume);
        assert_eq!("HOME".parse::<Section>().unwrap(), Section::Home);
    }

    #[test]
    fn test_parse_unknown_section_fails() {
        let err = "blog".parse::<Section>().unwrap_err();
        assert!(err.to_string().contains("blog"));
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Section::Projects.to_string(), "projects");
    }
}
