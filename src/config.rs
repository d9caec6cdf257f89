//! Configuration
//!
//! Loaded from an explicit path, else `./codetint.toml`, else
//! `~/.config/codetint/config.toml`. A missing file means defaults.
//!
//! ```toml
//! class_prefix = "token-"
//! max_input_bytes = 1048576
//!
//! [aliases]
//! vue-script = "script"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::detect;
use crate::highlight::{
    DEFAULT_CLASS_PREFIX, DEFAULT_MAX_INPUT_BYTES, Grammar, Highlighter, ParseGrammarError,
};

/// Project-local config file name
pub const CONFIG_FILE: &str = "codetint.toml";

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path of the config file
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// An alias points at a grammar that does not exist
    #[error("alias `{alias}`: {source}")]
    UnknownGrammar {
        /// Alias name
        alias: String,
        /// Parse failure for the target grammar
        source: ParseGrammarError,
    },
}

/// Highlighting configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Prefix of span classes
    #[serde(default = "default_class_prefix")]
    pub class_prefix: String,
    /// Inputs above this many bytes are escaped without tokenizing
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
    /// Extra identifiers, mapped to grammar names
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

fn default_class_prefix() -> String {
    DEFAULT_CLASS_PREFIX.to_string()
}

const fn default_max_input_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            class_prefix: default_class_prefix(),
            max_input_bytes: default_max_input_bytes(),
            aliases: BTreeMap::new(),
        }
    }
}

impl Config {
    /// User-level config path
    #[must_use]
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("codetint").join("config.toml"))
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Self::from_toml(&content)
    }

    /// Load the explicit config, else the first existing default location
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let candidates = std::iter::once(PathBuf::from(CONFIG_FILE)).chain(Self::global_path());
        for path in candidates {
            if path.is_file() {
                return Self::load_from(&path);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Save config to a file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Highlighter built from these settings
    #[must_use]
    pub fn highlighter(&self) -> Highlighter {
        Highlighter::new()
            .with_class_prefix(self.class_prefix.as_str())
            .with_max_input_bytes(self.max_input_bytes)
    }

    /// Grammar for an alias defined in this config
    #[must_use]
    pub fn alias(&self, identifier: &str) -> Option<Grammar> {
        let wanted = identifier.trim().to_ascii_lowercase();
        self.aliases
            .iter()
            .find(|(alias, _)| alias.to_ascii_lowercase() == wanted)
            .and_then(|(_, grammar)| grammar.parse().ok())
    }

    /// Resolve an explicit identifier: aliases first, then built-in names
    ///
    /// Unknown identifiers resolve to [`Grammar::Plain`].
    #[must_use]
    pub fn resolve(&self, identifier: &str) -> Grammar {
        self.alias(identifier)
            .unwrap_or_else(|| Grammar::from_identifier(identifier))
    }

    /// Detect a grammar from an optional hint and content, honoring aliases
    #[must_use]
    pub fn detect(&self, hint: Option<&str>, content: &str) -> Grammar {
        let aliased = hint.and_then(|h| {
            self.alias(h).or_else(|| {
                Path::new(h)
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .and_then(|ext| self.alias(ext))
            })
        });
        aliased.unwrap_or_else(|| detect::detect(hint, content))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (alias, grammar) in &self.aliases {
            grammar.parse::<Grammar>().map_err(|source| ConfigError::UnknownGrammar {
                alias: alias.clone(),
                source,
            })?;
        }
        Ok(())
    }
}
