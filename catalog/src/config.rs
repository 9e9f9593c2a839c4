//! [`Config`]-related definitions.

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use smart_default::SmartDefault;

#[cfg(doc)]
use crate::Service;

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Featured listings configuration.
    pub featured: Featured,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the `CONF__`-prefixed environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("CONF")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

/// Featured listings configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Featured {
    /// Maximum number of featured listings shown on the home page.
    #[default(3)]
    pub limit: usize,
}

#[cfg(test)]
mod spec {
    use std::fs;

    use super::Config;

    #[test]
    fn defaults_without_file() {
        let conf = Config::new("/nonexistent/catalog-config").unwrap();

        assert_eq!(conf.featured.limit, 3);
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join("catalog-config-spec.toml");
        fs::write(&path, "[featured]\nlimit = 6\n").unwrap();

        let conf = Config::new(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(conf.featured.limit, 6);
    }

    #[test]
    fn rejects_malformed_values() {
        let path = std::env::temp_dir().join("catalog-config-malformed.toml");
        fs::write(&path, "[featured]\nlimit = \"many\"\n").unwrap();

        let res = Config::new(path.to_str().unwrap());
        fs::remove_file(&path).unwrap();

        assert!(res.is_err());
    }
}
