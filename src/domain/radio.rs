use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::device::{Device, DEFAULT_BRAND, DEFAULT_COLOR, PRICE_MIN};
use crate::domain::locale::Locale;
use crate::domain::model::DeviceKind;
use crate::domain::ports::Appliance;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_non_empty, validate_range};

pub const FREQUENCY_MIN_MHZ: f64 = 0.05;
pub const FREQUENCY_MAX_MHZ: f64 = 300.0;

pub const DEFAULT_RADIO_MODEL: &str = "Radio";
pub const DEFAULT_MIN_FREQUENCY_MHZ: f64 = 87.5;
pub const DEFAULT_MAX_FREQUENCY_MHZ: f64 = 108.0;

/// Broadcast band a receiver tunes. Parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Band {
    #[serde(rename = "AM")]
    Am,
    #[default]
    #[serde(rename = "FM")]
    Fm,
    #[serde(rename = "AM/FM")]
    AmFm,
    #[serde(rename = "DAB")]
    Dab,
}

impl Band {
    pub const ALL: [Band; 4] = [Band::Am, Band::Fm, Band::AmFm, Band::Dab];

    pub fn as_str(self) -> &'static str {
        match self {
            Band::Am => "AM",
            Band::Fm => "FM",
            Band::AmFm => "AM/FM",
            Band::Dab => "DAB",
        }
    }
}

impl FromStr for Band {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = validate_non_empty("band", s)?.to_uppercase();
        Band::ALL
            .into_iter()
            .find(|band| band.as_str() == normalized)
            .ok_or_else(|| {
                CatalogError::invalid(
                    "band",
                    format!("'{}' is not one of: AM, FM, AM/FM, DAB", normalized),
                )
            })
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadioReceiver {
    #[serde(flatten)]
    base: Device,
    band: Band,
    min_frequency_mhz: f64,
    max_frequency_mhz: f64,
    has_rds: bool,
}

/// Collects constructor arguments; unset fields keep the receiver defaults.
/// The band is kept as text until `build` so it goes through the same
/// normalisation as `set_band`.
#[derive(Debug, Clone)]
pub struct RadioReceiverBuilder {
    brand: String,
    model: String,
    color: String,
    price: f64,
    band: String,
    min_frequency_mhz: f64,
    max_frequency_mhz: f64,
    has_rds: bool,
}

impl Default for RadioReceiverBuilder {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            model: DEFAULT_RADIO_MODEL.to_string(),
            color: DEFAULT_COLOR.to_string(),
            price: PRICE_MIN,
            band: Band::default().as_str().to_string(),
            min_frequency_mhz: DEFAULT_MIN_FREQUENCY_MHZ,
            max_frequency_mhz: DEFAULT_MAX_FREQUENCY_MHZ,
            has_rds: true,
        }
    }
}

impl RadioReceiverBuilder {
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

    pub fn band(mut self, band: impl Into<String>) -> Self {
        self.band = band.into();
        self
    }

    pub fn frequency_range(mut self, min_mhz: f64, max_mhz: f64) -> Self {
        self.min_frequency_mhz = min_mhz;
        self.max_frequency_mhz = max_mhz;
        self
    }

    pub fn rds(mut self, has_rds: bool) -> Self {
        self.has_rds = has_rds;
        self
    }

    /// Check order: base attributes, band, each frequency, then `max > min`.
    pub fn build(self) -> Result<RadioReceiver> {
        let base = Device::new(&self.brand, &self.model, &self.color, self.price)?;
        let band = self.band.parse::<Band>()?;
        let min_frequency_mhz = validate_frequency("min_frequency_mhz", self.min_frequency_mhz)?;
        let max_frequency_mhz = validate_frequency("max_frequency_mhz", self.max_frequency_mhz)?;
        ensure_ordered(min_frequency_mhz, max_frequency_mhz)?;

        Ok(RadioReceiver {
            base,
            band,
            min_frequency_mhz,
            max_frequency_mhz,
            has_rds: self.has_rds,
        })
    }
}

impl RadioReceiver {
    pub fn builder() -> RadioReceiverBuilder {
        RadioReceiverBuilder::default()
    }

    pub fn band(&self) -> Band {
        self.band
    }

    pub fn min_frequency_mhz(&self) -> f64 {
        self.min_frequency_mhz
    }

    pub fn max_frequency_mhz(&self) -> f64 {
        self.max_frequency_mhz
    }

    pub fn has_rds(&self) -> bool {
        self.has_rds
    }

    pub fn set_band(&mut self, value: &str) -> Result<()> {
        self.band = value.parse()?;
        Ok(())
    }

    /// Range-checked only; ordering against the max is not re-checked here.
    pub fn set_min_frequency_mhz(&mut self, value: f64) -> Result<()> {
        self.min_frequency_mhz = validate_frequency("min_frequency_mhz", value)?;
        Ok(())
    }

    /// Range-checked only; ordering against the min is not re-checked here.
    pub fn set_max_frequency_mhz(&mut self, value: f64) -> Result<()> {
        self.max_frequency_mhz = validate_frequency("max_frequency_mhz", value)?;
        Ok(())
    }

    pub fn set_has_rds(&mut self, value: bool) {
        self.has_rds = value;
    }

    pub fn update_band(&mut self, value: &str) -> Result<()> {
        self.set_band(value)
    }

    /// Stores both bounds, then requires `max > min`.
    ///
    /// Each bound is written as soon as it passes its range check, so an
    /// ordering failure leaves the new (unordered) values in place, and a
    /// range failure on `max_mhz` leaves the new `min_mhz` in place.
    pub fn update_frequency_range(&mut self, min_mhz: f64, max_mhz: f64) -> Result<()> {
        self.set_min_frequency_mhz(min_mhz)?;
        self.set_max_frequency_mhz(max_mhz)?;
        ensure_ordered(self.min_frequency_mhz, self.max_frequency_mhz)
    }
}

fn validate_frequency(field_name: &'static str, value: f64) -> Result<f64> {
    validate_range(field_name, value, FREQUENCY_MIN_MHZ, FREQUENCY_MAX_MHZ)
}

fn ensure_ordered(min_mhz: f64, max_mhz: f64) -> Result<()> {
    if max_mhz <= min_mhz {
        return Err(CatalogError::invalid(
            "frequency_range",
            format!(
                "max frequency ({} MHz) must be greater than min frequency ({} MHz)",
                max_mhz, min_mhz
            ),
        ));
    }
    Ok(())
}

impl Default for RadioReceiver {
    fn default() -> Self {
        Self {
            base: Device::with_default_model(DEFAULT_RADIO_MODEL),
            band: Band::default(),
            min_frequency_mhz: DEFAULT_MIN_FREQUENCY_MHZ,
            max_frequency_mhz: DEFAULT_MAX_FREQUENCY_MHZ,
            has_rds: true,
        }
    }
}

impl Appliance for RadioReceiver {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Radio
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
            "{}: {}, {}: {}, {}-{} {}, {}: {}, {}: {}, {}: {}",
            labels.radio,
            self.base.title(),
            labels.band,
            self.band,
            self.min_frequency_mhz,
            self.max_frequency_mhz,
            labels.mhz,
            labels.rds,
            locale.yes_no(self.has_rds),
            labels.color,
            self.base.color(),
            labels.price,
            self.base.price()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;

    #[test]
    fn test_default_values() {
        for radio in [RadioReceiver::default(), RadioReceiver::builder().build().unwrap()] {
            assert_eq!(radio.brand(), "Generic");
            assert_eq!(radio.model(), "Radio");
            assert_eq!(radio.color(), "Black");
            assert_eq!(radio.price(), 0.0);
            assert_eq!(radio.band(), Band::Fm);
            assert_eq!(radio.min_frequency_mhz(), 87.5);
            assert_eq!(radio.max_frequency_mhz(), 108.0);
            assert!(radio.has_rds());
        }
    }

    #[test]
    fn test_band_parsing() {
        assert_eq!("am".parse::<Band>().unwrap(), Band::Am);
        assert_eq!(" am/fm ".parse::<Band>().unwrap(), Band::AmFm);
        assert_eq!("Dab".parse::<Band>().unwrap(), Band::Dab);
        assert_eq!("Invalid".parse::<Band>().unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!("".parse::<Band>().unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_build_check_order() {
        let err = RadioReceiver::builder()
            .band("XM")
            .frequency_range(500.0, 1.0)
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = RadioReceiver::builder()
            .frequency_range(0.01, 108.0)
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);

        let err = RadioReceiver::builder()
            .frequency_range(108.0, 108.0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidArgument {
                field: "frequency_range",
                ..
            }
        ));
    }

    #[test]
    fn test_individual_setters_skip_ordering_check() {
        let mut radio = RadioReceiver::default();
        radio.set_min_frequency_mhz(200.0).unwrap();
        assert_eq!(radio.min_frequency_mhz(), 200.0);
        assert_eq!(radio.max_frequency_mhz(), 108.0);

        assert_eq!(
            radio.set_max_frequency_mhz(350.0).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            radio.set_min_frequency_mhz(-1.0).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn test_failed_range_update_keeps_new_values() {
        let mut radio = RadioReceiver::default();
        let err = radio.update_frequency_range(100.0, 90.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(radio.min_frequency_mhz(), 100.0);
        assert_eq!(radio.max_frequency_mhz(), 90.0);
    }

    #[test]
    fn test_max_out_of_range_leaves_min_updated() {
        let mut radio = RadioReceiver::default();
        let err = radio.update_frequency_range(90.0, 301.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(radio.min_frequency_mhz(), 90.0);
        assert_eq!(radio.max_frequency_mhz(), 108.0);
    }

    #[test]
    fn test_describe_frequencies() {
        let radio = RadioReceiver::builder()
            .brand("Sony")
            .model("ICF-P36")
            .band("am/fm")
            .frequency_range(0.52, 108.0)
            .rds(false)
            .build()
            .unwrap();

        let text = radio.describe();
        assert!(text.contains("Sony ICF-P36"));
        assert!(text.contains("AM/FM"));
        assert!(text.contains("0.52-108 MHz"));
        assert!(text.contains("RDS: no"));
    }
}
