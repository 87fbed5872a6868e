use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::device::{Device, DEFAULT_BRAND, DEFAULT_COLOR, DEFAULT_MODEL, PRICE_MIN};
use crate::domain::model::{AnyDevice, Catalog};
use crate::domain::radio::RadioReceiver;
use crate::domain::television::Television;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::Validate;

/// Seed catalog read from a TOML file with one `[[devices]]` table per entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub devices: Vec<DeviceEntry>,
}

/// Attributes shared by every entry; omitted ones take the kind's default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaseEntry {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DeviceEntry {
    Device {
        #[serde(flatten)]
        base: BaseEntry,
    },
    Television {
        #[serde(flatten)]
        base: BaseEntry,
        screen_size_inches: Option<u32>,
        resolution: Option<String>,
        is_smart: Option<bool>,
        panel_type: Option<String>,
    },
    Radio {
        #[serde(flatten)]
        base: BaseEntry,
        band: Option<String>,
        min_frequency_mhz: Option<f64>,
        max_frequency_mhz: Option<f64>,
        has_rds: Option<bool>,
    },
}

impl TryFrom<DeviceEntry> for AnyDevice {
    type Error = CatalogError;

    fn try_from(entry: DeviceEntry) -> Result<Self> {
        match entry {
            DeviceEntry::Device { base } => {
                let device = Device::new(
                    base.brand.as_deref().unwrap_or(DEFAULT_BRAND),
                    base.model.as_deref().unwrap_or(DEFAULT_MODEL),
                    base.color.as_deref().unwrap_or(DEFAULT_COLOR),
                    base.price.unwrap_or(PRICE_MIN),
                )?;
                Ok(device.into())
            }
            DeviceEntry::Television {
                base,
                screen_size_inches,
                resolution,
                is_smart,
                panel_type,
            } => {
                let mut builder = Television::builder();
                if let Some(brand) = base.brand {
                    builder = builder.brand(brand);
                }
                if let Some(model) = base.model {
                    builder = builder.model(model);
                }
                if let Some(color) = base.color {
                    builder = builder.color(color);
                }
                if let Some(price) = base.price {
                    builder = builder.price(price);
                }
                if let Some(inches) = screen_size_inches {
                    builder = builder.screen_size_inches(inches);
                }
                if let Some(resolution) = resolution {
                    builder = builder.resolution(resolution);
                }
                if let Some(is_smart) = is_smart {
                    builder = builder.smart(is_smart);
                }
                if let Some(panel_type) = panel_type {
                    builder = builder.panel_type(panel_type);
                }
                Ok(builder.build()?.into())
            }
            DeviceEntry::Radio {
                base,
                band,
                min_frequency_mhz,
                max_frequency_mhz,
                has_rds,
            } => {
                let defaults = RadioReceiver::default();
                let mut builder = RadioReceiver::builder().frequency_range(
                    min_frequency_mhz.unwrap_or(defaults.min_frequency_mhz()),
                    max_frequency_mhz.unwrap_or(defaults.max_frequency_mhz()),
                );
                if let Some(brand) = base.brand {
                    builder = builder.brand(brand);
                }
                if let Some(model) = base.model {
                    builder = builder.model(model);
                }
                if let Some(color) = base.color {
                    builder = builder.color(color);
                }
                if let Some(price) = base.price {
                    builder = builder.price(price);
                }
                if let Some(band) = band {
                    builder = builder.band(band);
                }
                if let Some(has_rds) = has_rds {
                    builder = builder.rds(has_rds);
                }
                Ok(builder.build()?.into())
            }
        }
    }
}

impl CatalogFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CatalogError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Builds every entry through the validating constructors, in file order.
    pub fn into_catalog(self) -> Result<Catalog> {
        let mut catalog = Catalog::new();
        for (index, entry) in self.devices.into_iter().enumerate() {
            let device = AnyDevice::try_from(entry).inspect_err(|e| {
                tracing::warn!("Catalog entry #{} rejected: {}", index + 1, e);
            })?;
            catalog.add(device);
        }
        Ok(catalog)
    }
}

impl Validate for CatalogFile {
    fn validate(&self) -> Result<()> {
        self.devices
            .iter()
            .cloned()
            .try_for_each(|entry| AnyDevice::try_from(entry).map(|_| ()))
    }
}

/// The televisions and radios a fresh session starts with.
pub fn demo_catalog() -> Result<Catalog> {
    let mut catalog = Catalog::new();

    let televisions = [
        ("Samsung", "Q80", "Black", 79999.0, 55, "QLED"),
        ("LG", "C2", "Gray", 119999.0, 65, "OLED"),
        ("Philips", "PUS8507", "Silver", 64999.0, 50, "LED"),
    ];
    for (brand, model, color, price, inches, panel) in televisions {
        catalog.add(
            Television::builder()
                .brand(brand)
                .model(model)
                .color(color)
                .price(price)
                .screen_size_inches(inches)
                .resolution("4K")
                .smart(true)
                .panel_type(panel)
                .build()?,
        );
    }

    let radios = [
        ("Sony", "ICF-P36", "Black", 1999.0, "AM/FM", 0.52, 108.0, false),
        ("Panasonic", "RF-2400D", "Black", 3499.0, "AM/FM", 0.52, 108.0, false),
        ("Sony", "XDR-S61D", "White", 8999.0, "DAB", 174.928, 239.2, true),
    ];
    for (brand, model, color, price, band, min_mhz, max_mhz, rds) in radios {
        catalog.add(
            RadioReceiver::builder()
                .brand(brand)
                .model(model)
                .color(color)
                .price(price)
                .band(band)
                .frequency_range(min_mhz, max_mhz)
                .rds(rds)
                .build()?,
        );
    }

    Ok(catalog)
}
