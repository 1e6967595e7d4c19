use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub(crate) const WAIVERS_FILE_NAME: &str = "waivers.json";
pub(crate) const PROGRAMS_FILE_NAME: &str = "programs.json";
pub(crate) const DEPARTMENTS_FILE_NAME: &str = "departments.json";

/// Marketing-facing description of a waiver program, surfaced by the chat
/// layer when its name appears in a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaiverInfo {
    pub name: String,
    #[serde(default)]
    pub waiver_rate: WaiverRate,
    #[serde(default)]
    pub description: String,
}

/// Waiver rates appear in the catalog either as a single figure or a list of
/// tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WaiverRate {
    Single(String),
    Tiered(Vec<String>),
}

impl Default for WaiverRate {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

impl fmt::Display for WaiverRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaiverRate::Single(rate) => f.write_str(rate),
            WaiverRate::Tiered(rates) => f.write_str(&rates.join(", ")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramInfo {
    pub name: String,
    #[serde(default)]
    pub details: String,
}

/// Department entry consumed by the recommender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentInfo {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub min_gpa: f32,
    #[serde(default)]
    pub details: String,
}

/// Catalog data consumed by the chat and recommendation layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfoCatalog {
    pub waivers: Vec<WaiverInfo>,
    pub programs: Vec<ProgramInfo>,
    pub departments: Vec<DepartmentInfo>,
}

impl InfoCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reads the three catalog files under `dir`. A missing, empty, or
    /// malformed file degrades to an empty section so the portal keeps
    /// answering.
    pub fn load(dir: &Path) -> Self {
        Self {
            waivers: load_section(&dir.join(WAIVERS_FILE_NAME)),
            programs: load_section(&dir.join(PROGRAMS_FILE_NAME)),
            departments: load_section(&dir.join(DEPARTMENTS_FILE_NAME)),
        }
    }
}

fn load_section<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "catalog file absent, using empty section");
            return Vec::new();
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read catalog file");
            return Vec::new();
        }
    };

    if raw.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "invalid catalog JSON, using empty section");
            Vec::new()
        }
    }
}
