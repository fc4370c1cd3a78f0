use std::fs;

use serde::{Deserialize, Serialize};

use crate::fs::config_dir;

const FILE_NAME: &str = "core.toml";

/// Core configuration shared by the desktop client and the CLI, serialized to TOML.
///
/// Holds the base URL of the resume extraction service. The session profile is
/// deliberately not part of this; nothing the user enters survives the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    pub extractor_url: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            extractor_url: "http://127.0.0.1:8000".into(),
        }
    }
}

impl CoreConfig {
    pub fn load() -> Self {
        let path = config_dir().join(FILE_NAME);

        if path.exists() {
            let contents = fs::read_to_string(path).unwrap();
            toml::from_str(&contents).unwrap_or_default()
        } else {
            let cfg = Self::default();
            cfg.save();
            cfg
        }
    }

    pub fn save(&self) {
        let contents = toml::to_string_pretty(self).unwrap();

        // Make sure config_dir exists
        fs::create_dir_all(config_dir()).unwrap();

        fs::write(config_dir().join(FILE_NAME), contents).unwrap();
    }
}
