use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::dot::LEGEND_NODE;
use crate::error::{Error, Result};
use crate::types::{PersonKey, RenderFormat};

/// Chart parameters suitable for config files and CLI presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartParams {
    /// Normalized person name that marks the header row
    pub header_sentinel: String,
    /// Names whose rows are always skipped (normalized before comparison)
    pub exclude: Vec<String>,
    /// People placed on the same rank as the synthetic root and the legend
    pub highlight: Vec<String>,
    /// Node id for the synthetic top of the hierarchy
    pub root_key: String,
    /// Bold heading of the legend node
    pub legend_title: String,
    /// Graphviz executable used for rendering
    pub dot_command: String,
    pub format: RenderFormat,
}

impl Default for ChartParams {
    fn default() -> Self {
        Self {
            header_sentinel: "EmployeeName".to_string(),
            exclude: Vec::new(),
            highlight: Vec::new(),
            root_key: "_top".to_string(),
            legend_title: "Organization Chart".to_string(),
            dot_command: "dot".to_string(),
            format: RenderFormat::Pdf,
        }
    }
}

impl ChartParams {
    /// Load parameters from a JSON file; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path)?;
        let params: ChartParams = serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        params.validate()?;
        Ok(params)
    }

    /// The root key must start with `_` so it can never equal a letters-only
    /// person key, and must not collide with the legend node.
    pub fn validate(&self) -> Result<()> {
        let valid = self.root_key.len() > 1
            && self.root_key.starts_with('_')
            && self.root_key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            && self.root_key != LEGEND_NODE;
        if !valid {
            return Err(Error::InvalidArgument {
                arg: "root_key",
                value: self.root_key.clone(),
            });
        }
        if self.dot_command.trim().is_empty() {
            return Err(Error::InvalidArgument {
                arg: "dot_command",
                value: self.dot_command.clone(),
            });
        }
        Ok(())
    }

    pub fn excluded_keys(&self) -> Vec<PersonKey> {
        self.exclude.iter().map(|n| PersonKey::normalize(n)).collect()
    }

    pub fn highlight_keys(&self) -> Vec<PersonKey> {
        self.highlight
            .iter()
            .map(|n| PersonKey::normalize(n))
            .filter(|k| !k.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_json_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "exclude": ["Alan D. Hooker"], "highlight": ["Gerald A Jackson"], "format": "svg" }}"#
        )
        .unwrap();

        let params = ChartParams::from_json_file(file.path()).unwrap();
        assert_eq!(params.header_sentinel, "EmployeeName");
        assert_eq!(params.root_key, "_top");
        assert_eq!(params.format, RenderFormat::Svg);
        assert_eq!(params.excluded_keys(), vec![PersonKey::normalize("AlanDHooker")]);
        assert_eq!(params.highlight_keys()[0].as_str(), "GeraldAJackson");
    }

    #[test]
    fn test_bad_json_reports_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            ChartParams::from_json_file(file.path()),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_root_key_must_be_identifier() {
        let mut params = ChartParams::default();
        assert!(params.validate().is_ok());
        params.root_key = "top of tree".to_string();
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidArgument { arg: "root_key", .. })
        ));
        params.root_key = String::new();
        assert!(params.validate().is_err());
        params.root_key = "_".to_string();
        assert!(params.validate().is_err());
        params.root_key = "_boss_of_all".to_string();
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_root_key_cannot_shadow_person_or_legend() {
        // A letters-only key could equal a real person's key
        let params = ChartParams {
            root_key: "GOD".to_string(),
            ..ChartParams::default()
        };
        assert!(params.validate().is_err());

        let params = ChartParams {
            root_key: LEGEND_NODE.to_string(),
            ..ChartParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidArgument { arg: "root_key", .. })
        ));
    }
}
