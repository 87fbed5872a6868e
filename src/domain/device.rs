use serde::Serialize;

use crate::domain::locale::Locale;
use crate::domain::model::DeviceKind;
use crate::domain::ports::Appliance;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty, validate_range};

pub const PRICE_MIN: f64 = 0.0;
pub const PRICE_MAX: f64 = 1_000_000.0;

pub const DEFAULT_BRAND: &str = "Generic";
pub const DEFAULT_MODEL: &str = "Model";
pub const DEFAULT_COLOR: &str = "Black";

/// Attributes every catalog entity carries: brand, model, color and price.
///
/// Fields are private; every write goes through a validating setter so an
/// observable `Device` always satisfies its invariants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    brand: String,
    model: String,
    color: String,
    price: f64,
}

impl Device {
    /// Validates brand, model, color, then price. Nothing is returned unless
    /// all four checks pass.
    pub fn new(brand: &str, model: &str, color: &str, price: f64) -> Result<Self> {
        Ok(Self {
            brand: validate_non_empty("brand", brand)?,
            model: validate_non_empty("model", model)?,
            color: validate_non_empty("color", color)?,
            price: validate_price(price)?,
        })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_brand(&mut self, value: &str) -> Result<()> {
        self.brand = validate_non_empty("brand", value)?;
        Ok(())
    }

    pub fn set_model(&mut self, value: &str) -> Result<()> {
        self.model = validate_non_empty("model", value)?;
        Ok(())
    }

    pub fn set_color(&mut self, value: &str) -> Result<()> {
        self.color = validate_non_empty("color", value)?;
        Ok(())
    }

    pub fn set_price(&mut self, value: f64) -> Result<()> {
        self.price = validate_price(value)?;
        Ok(())
    }

    /// "Brand Model", the pairing every description starts with.
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

fn validate_price(value: f64) -> Result<f64> {
    validate_range("price", value, PRICE_MIN, PRICE_MAX)
}

impl Device {
    /// Default base attributes under a kind-specific model name.
    pub(crate) fn with_default_model(model: &'static str) -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            model: model.to_string(),
            color: DEFAULT_COLOR.to_string(),
            price: PRICE_MIN,
        }
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::with_default_model(DEFAULT_MODEL)
    }
}

impl Appliance for Device {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Device
    }

    fn base(&self) -> &Device {
        self
    }

    fn base_mut(&mut self) -> &mut Device {
        self
    }

    fn describe_in(&self, locale: Locale) -> String {
        let labels = locale.labels();
        format!(
            "{}: {}, {}: {}, {}: {}",
            labels.device,
            self.title(),
            labels.color,
            self.color,
            labels.price,
            self.price
        )
    }
}
