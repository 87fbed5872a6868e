use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::CatalogError;

/// Language used when rendering device descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Fixed label set for one locale.
pub(crate) struct Labels {
    pub device: &'static str,
    pub television: &'static str,
    pub radio: &'static str,
    pub color: &'static str,
    pub price: &'static str,
    pub panel: &'static str,
    pub smart: &'static str,
    pub band: &'static str,
    pub rds: &'static str,
    pub mhz: &'static str,
}

const EN: Labels = Labels {
    device: "Device",
    television: "Television",
    radio: "Radio receiver",
    color: "color",
    price: "price",
    panel: "panel",
    smart: "smart",
    band: "band",
    rds: "RDS",
    mhz: "MHz",
};

const RU: Labels = Labels {
    device: "Устройство",
    television: "Телевизор",
    radio: "Радиоприемник",
    color: "цвет",
    price: "цена",
    panel: "панель",
    smart: "smart",
    band: "диапазон",
    rds: "RDS",
    mhz: "МГц",
};

impl Locale {
    pub(crate) fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }

    pub fn yes_no(self, flag: bool) -> &'static str {
        match (self, flag) {
            (Locale::En, true) => "yes",
            (Locale::En, false) => "no",
            (Locale::Ru, true) => "да",
            (Locale::Ru, false) => "нет",
        }
    }
}

impl FromStr for Locale {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            other => Err(CatalogError::invalid(
                "locale",
                format!("unsupported locale '{}', expected one of: en, ru", other),
            )),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ru => write!(f, "ru"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" RU ".parse::<Locale>().unwrap(), Locale::Ru);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_yes_no_tokens() {
        assert_eq!(Locale::En.yes_no(true), "yes");
        assert_eq!(Locale::Ru.yes_no(false), "нет");
    }
}
