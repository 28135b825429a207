use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, error};

use crate::error::{ConfigError, Result};
use crate::matching::names::normalize;

const BUILTIN_CODES: &str = include_str!("../../data/club_codes.toml");

#[derive(Debug, Deserialize)]
struct CodesFile {
    #[serde(default)]
    codes: HashMap<String, String>,
}

/// Club name to short display code, keyed by normalized name.
#[derive(Debug, Clone, Default)]
pub struct ClubCodes {
    codes: HashMap<String, String>,
}

impl ClubCodes {
    /// The table shipped in `data/club_codes.toml`.
    pub fn builtin() -> &'static ClubCodes {
        static BUILTIN: OnceLock<ClubCodes> = OnceLock::new();
        BUILTIN.get_or_init(|| match ClubCodes::from_toml_str(BUILTIN_CODES) {
            Ok(codes) => codes,
            Err(e) => {
                error!("Built-in club code table is invalid: {}", e);
                ClubCodes::default()
            }
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CodesFile = toml::from_str(content)?;
        let mut codes = ClubCodes::default();
        for (name, code) in file.codes {
            codes.insert(&name, &code);
        }
        Ok(codes)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|_| ConfigError::NotFound(path.as_ref().display().to_string()))?;
        let codes = Self::from_toml_str(&content)?;
        debug!("Loaded {} club codes from {}", codes.len(), path.as_ref().display());
        Ok(codes)
    }

    pub fn insert(&mut self, name: &str, code: &str) {
        let key = normalize(name);
        if !key.is_empty() {
            self.codes.insert(key, code.trim().to_string());
        }
    }

    /// Merge `other` over this table; its entries win on conflict.
    pub fn extend(&mut self, other: ClubCodes) {
        self.codes.extend(other.codes);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.codes.get(&normalize(name)).map(String::as_str)
    }

    /// Table code, or the first three normalized characters uppercased.
    pub fn short_code(&self, name: &str) -> String {
        if let Some(code) = self.get(name) {
            return code.to_string();
        }
        normalize(name).chars().take(3).collect::<String>().to_uppercase()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_parses() {
        let codes = ClubCodes::builtin();
        assert!(codes.len() > 20);
        assert_eq!(codes.get("Paris Saint-Germain"), Some("PSG"));
        assert_eq!(codes.get("paris saint germain"), Some("PSG"));
        assert_eq!(codes.get("Atletico Madrid"), Some("ATM"));
    }

    #[test]
    fn test_short_code_fallback() {
        let codes = ClubCodes::builtin();
        assert_eq!(codes.short_code("Paris Saint-Germain"), "PSG");
        assert_eq!(codes.short_code("Stade de Reims"), "STA");
        assert_eq!(codes.short_code("Évian"), "EVI");
        assert_eq!(codes.short_code("FC"), "FC");
        assert_eq!(codes.short_code(""), "");
    }

    #[test]
    fn test_extend_overrides() {
        let mut codes = ClubCodes::builtin().clone();
        let extra = ClubCodes::from_toml_str("[codes]\n\"Stade de Reims\" = \"SDR\"\n\"Paris SG\" = \"PAR\"").unwrap();
        codes.extend(extra);

        assert_eq!(codes.short_code("Stade de Reims"), "SDR");
        assert_eq!(codes.short_code("Paris SG"), "PAR");
        assert_eq!(codes.short_code("Paris Saint-Germain"), "PSG");
    }

    #[test]
    fn test_invalid_table_is_config_error() {
        let err = ClubCodes::from_toml_str("[codes\n").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG");
    }
}
