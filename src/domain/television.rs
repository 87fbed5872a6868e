use serde::Serialize;

use crate::domain::device::{Device, DEFAULT_BRAND, DEFAULT_COLOR, PRICE_MIN};
use crate::domain::locale::Locale;
use crate::domain::model::DeviceKind;
use crate::domain::ports::Appliance;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty, validate_range};

pub const SCREEN_SIZE_MIN: u32 = 10;
pub const SCREEN_SIZE_MAX: u32 = 120;

pub const DEFAULT_TV_MODEL: &str = "TV";
pub const DEFAULT_SCREEN_SIZE: u32 = 32;
pub const DEFAULT_RESOLUTION: &str = "1080p";
pub const DEFAULT_PANEL_TYPE: &str = "LED";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Television {
    #[serde(flatten)]
    base: Device,
    screen_size_inches: u32,
    resolution: String,
    is_smart: bool,
    panel_type: String,
}

/// Collects constructor arguments; unset fields keep the television defaults.
#[derive(Debug, Clone)]
pub struct TelevisionBuilder {
    brand: String,
    model: String,
    color: String,
    price: f64,
    screen_size_inches: u32,
    resolution: String,
    is_smart: bool,
    panel_type: String,
}

impl Default for TelevisionBuilder {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            model: DEFAULT_TV_MODEL.to_string(),
            color: DEFAULT_COLOR.to_string(),
            price: PRICE_MIN,
            screen_size_inches: DEFAULT_SCREEN_SIZE,
            resolution: DEFAULT_RESOLUTION.to_string(),
            is_smart: true,
            panel_type: DEFAULT_PANEL_TYPE.to_string(),
        }
    }
}

impl TelevisionBuilder {
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn screen_size_inches(mut self, inches: u32) -> Self {
        self.screen_size_inches = inches;
        self
    }

    pub fn resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = resolution.into();
        self
    }

    pub fn smart(mut self, is_smart: bool) -> Self {
        self.is_smart = is_smart;
        self
    }

    pub fn panel_type(mut self, panel_type: impl Into<String>) -> Self {
        self.panel_type = panel_type.into();
        self
    }

    /// Base attributes are checked before the television ones; the first
    /// violation is returned.
    pub fn build(self) -> Result<Television> {
        let base = Device::new(&self.brand, &self.model, &self.color, self.price)?;
        Ok(Television {
            base,
            screen_size_inches: validate_screen_size(self.screen_size_inches)?,
            resolution: validate_non_empty("resolution", &self.resolution)?,
            is_smart: self.is_smart,
            panel_type: validate_non_empty("panel_type", &self.panel_type)?,
        })
    }
}

impl Television {
    pub fn builder() -> TelevisionBuilder {
        TelevisionBuilder::default()
    }

    pub fn screen_size_inches(&self) -> u32 {
        self.screen_size_inches
    }

    pub fn resolution(&self) -> &str {
        &self.resolution
    }

    pub fn is_smart(&self) -> bool {
        self.is_smart
    }

    pub fn panel_type(&self) -> &str {
        &self.panel_type
    }

    pub fn set_screen_size_inches(&mut self, value: u32) -> Result<()> {
        self.screen_size_inches = validate_screen_size(value)?;
        Ok(())
    }

    pub fn set_resolution(&mut self, value: &str) -> Result<()> {
        self.resolution = validate_non_empty("resolution", value)?;
        Ok(())
    }

    pub fn set_panel_type(&mut self, value: &str) -> Result<()> {
        self.panel_type = validate_non_empty("panel_type", value)?;
        Ok(())
    }

    pub fn set_is_smart(&mut self, value: bool) {
        self.is_smart = value;
    }

    pub fn update_screen_size(&mut self, value: u32) -> Result<()> {
        self.set_screen_size_inches(value)
    }

    pub fn update_resolution(&mut self, value: &str) -> Result<()> {
        self.set_resolution(value)
    }
}

fn validate_screen_size(value: u32) -> Result<u32> {
    validate_range("screen_size_inches", value, SCREEN_SIZE_MIN, SCREEN_SIZE_MAX)
}

impl Default for Television {
    fn default() -> Self {
        let defaults = TelevisionBuilder::default();
        Self {
            base: Device::with_default_model(DEFAULT_TV_MODEL),
            screen_size_inches: defaults.screen_size_inches,
            resolution: defaults.resolution,
            is_smart: defaults.is_smart,
            panel_type: defaults.panel_type,
        }
    }
}

impl Appliance for Television {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Television
    }

    fn base(&self) -> &Device {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Device {
        &mut self.base
    }

    fn describe_in(&self, locale: Locale) -> String {
        let labels = locale.labels();
        format!(
            "{}: {}, {}\" {}, {}: {}, {}: {}, {}: {}, {}: {}",
            labels.television,
            self.base.title(),
            self.screen_size_inches,
            self.resolution,
            labels.panel,
            self.panel_type,
            labels.smart,
            locale.yes_no(self.is_smart),
            labels.color,
            self.base.color(),
            labels.price,
            self.base.price()
        )
    }
}
