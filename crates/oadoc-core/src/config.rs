use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Project configuration loaded from `.oadoc.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OadocConfig {
    /// Document read when a command gets no `--input`.
    pub input: String,
    /// Prefix of endpoint links, e.g. `/docs/petstore/paths`.
    pub link_prefix: String,
    pub format: OutputFormat,
    pub show_empty_tags: bool,
}

impl Default for OadocConfig {
    fn default() -> Self {
        Self {
            input: "openapi.yaml".to_string(),
            link_prefix: "/docs".to_string(),
            format: OutputFormat::Text,
            show_empty_tags: false,
        }
    }
}

/// How command output is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".oadoc.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<OadocConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config = serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# oadoc configuration
input: openapi.yaml

# Prefix of endpoint links printed by `oadoc tags`.
link_prefix: /docs

format: text          # text | json | yaml
show_empty_tags: false
"#
}
