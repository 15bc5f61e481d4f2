use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

pub const INKSCAPE_NAMESPACE: &str = "http://www.inkscape.org/namespaces/inkscape";

/// Named areas that route like hallways without "hall" in their label.
const DEFAULT_HALL_ALIASES: [(&str, &str); 2] = [
    ("centerhallway", "hall_center_1"),
    ("mosaiccafe", "hall_mosaic_1"),
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub floor: i32,
    pub label_namespace: String,
    pub label_attribute: String,
    /// Lowercase label -> canonical hall id.
    pub hall_aliases: BTreeMap<String, String>,
    pub precision: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            floor: 1,
            label_namespace: INKSCAPE_NAMESPACE.to_string(),
            label_attribute: "label".to_string(),
            hall_aliases: DEFAULT_HALL_ALIASES
                .iter()
                .map(|(label, id)| (label.to_string(), id.to_string()))
                .collect(),
            precision: 8,
        }
    }
}

impl Config {
    /// Id for a hall alias; keys and label compare case-insensitively.
    pub fn hall_alias(&self, label: &str) -> Option<&str> {
        let lower = label.to_lowercase();
        self.hall_aliases
            .iter()
            .find(|(alias, _)| alias.to_lowercase() == lower)
            .map(|(_, id)| id.as_str())
    }
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = serde_json::from_str(&contents).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(path:? = path, floor = config.floor; "loaded config file");
    Ok(config)
}
