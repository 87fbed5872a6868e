use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::config::catalog_file::{demo_catalog, CatalogFile};
use crate::domain::locale::Locale;
use crate::domain::model::Catalog;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_path, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "device-catalog")]
#[command(about = "Interactive catalog of televisions and radio receivers")]
pub struct CliConfig {
    /// TOML file with the devices to start from
    #[arg(long)]
    pub catalog: Option<String>,

    /// Start with an empty catalog instead of the demo devices
    #[arg(long)]
    pub empty: bool,

    /// Language of device descriptions (en, ru)
    #[arg(long, default_value = "en")]
    pub locale: Locale,

    /// Print the catalog and exit
    #[arg(long)]
    pub list: bool,

    /// With --list, print JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Catalog the session starts with: the seed file if given, otherwise
    /// the demo devices unless `--empty`.
    pub fn initial_catalog(&self) -> Result<Catalog> {
        match (&self.catalog, self.empty) {
            (Some(path), _) => {
                tracing::info!("Loading catalog from: {}", path);
                CatalogFile::from_file(path)?.into_catalog()
            }
            (None, true) => Ok(Catalog::new()),
            (None, false) => demo_catalog(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog {
            validate_path("catalog", path)?;
            if self.empty {
                return Err(CatalogError::ConfigError {
                    message: "--empty cannot be combined with --catalog".to_string(),
                });
            }
        }

        if self.json && !self.list {
            return Err(CatalogError::ConfigError {
                message: "--json is only valid together with --list".to_string(),
            });
        }

        Ok(())
    }
}
