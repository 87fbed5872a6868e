use serde::Serialize;
use std::fmt;

use crate::domain::device::Device;
use crate::domain::locale::Locale;
use crate::domain::ports::Appliance;
use crate::domain::radio::RadioReceiver;
use crate::domain::television::Television;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Device,
    Television,
    Radio,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceKind::Device => write!(f, "device"),
            DeviceKind::Television => write!(f, "television"),
            DeviceKind::Radio => write!(f, "radio"),
        }
    }
}

/// One catalog entry: the closed set of entity kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnyDevice {
    Device(Device),
    Television(Television),
    Radio(RadioReceiver),
}

impl Appliance for AnyDevice {
    fn kind(&self) -> DeviceKind {
        match self {
            AnyDevice::Device(d) => d.kind(),
            AnyDevice::Television(tv) => tv.kind(),
            AnyDevice::Radio(radio) => radio.kind(),
        }
    }

    fn base(&self) -> &Device {
        match self {
            AnyDevice::Device(d) => d,
            AnyDevice::Television(tv) => tv.base(),
            AnyDevice::Radio(radio) => radio.base(),
        }
    }

    fn base_mut(&mut self) -> &mut Device {
        match self {
            AnyDevice::Device(d) => d,
            AnyDevice::Television(tv) => tv.base_mut(),
            AnyDevice::Radio(radio) => radio.base_mut(),
        }
    }

    fn describe_in(&self, locale: Locale) -> String {
        match self {
            AnyDevice::Device(d) => d.describe_in(locale),
            AnyDevice::Television(tv) => tv.describe_in(locale),
            AnyDevice::Radio(radio) => radio.describe_in(locale),
        }
    }
}

impl From<Device> for AnyDevice {
    fn from(device: Device) -> Self {
        AnyDevice::Device(device)
    }
}

impl From<Television> for AnyDevice {
    fn from(tv: Television) -> Self {
        AnyDevice::Television(tv)
    }
}

impl From<RadioReceiver> for AnyDevice {
    fn from(radio: RadioReceiver) -> Self {
        AnyDevice::Radio(radio)
    }
}

/// Ordered, caller-owned list of devices. Entries are addressed by
/// zero-based position.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    devices: Vec<AnyDevice>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a device and returns its position.
    pub fn add(&mut self, device: impl Into<AnyDevice>) -> usize {
        let device = device.into();
        tracing::debug!("Adding {} '{}' to catalog", device.kind(), device.base().title());
        self.devices.push(device);
        self.devices.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Option<AnyDevice> {
        if index < self.devices.len() {
            Some(self.devices.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&AnyDevice> {
        self.devices.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut AnyDevice> {
        self.devices.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnyDevice> {
        self.devices.iter()
    }

    pub fn clear(&mut self) {
        self.devices.clear();
    }

    /// One numbered line per device, starting at 1.
    pub fn listing(&self, locale: Locale) -> Vec<String> {
        self.devices
            .iter()
            .enumerate()
            .map(|(i, device)| format!("{}. {}", i + 1, device.describe_in(locale)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a AnyDevice;
    type IntoIter = std::slice::Iter<'a, AnyDevice>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_follows_variant() {
        let entries: Vec<AnyDevice> = vec![
            Device::default().into(),
            Television::default().into(),
            RadioReceiver::default().into(),
        ];

        let kinds: Vec<DeviceKind> = entries.iter().map(|d| d.kind()).collect();
        assert_eq!(
            kinds,
            vec![DeviceKind::Device, DeviceKind::Television, DeviceKind::Radio]
        );

        assert!(entries[0].describe().starts_with("Device: Generic Model"));
        assert!(entries[1].describe().starts_with("Television: Generic TV"));
        assert!(entries[2].describe().starts_with("Radio receiver: Generic Radio"));
    }

    #[test]
    fn test_shared_updates_through_variant() {
        let mut entry: AnyDevice = Television::default().into();
        entry.update_price(999.5).unwrap();
        entry.update_color("Silver").unwrap();
        assert!(entry.update_color("").is_err());

        assert_eq!(entry.price(), 999.5);
        assert_eq!(entry.color(), "Silver");
        match entry {
            AnyDevice::Television(tv) => assert_eq!(tv.color(), "Silver"),
            other => panic!("unexpected variant: {:?}", other.kind()),
        }
    }

    #[test]
    fn test_catalog_positions_and_listing() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.add(Device::default()), 0);
        assert_eq!(catalog.add(RadioReceiver::default()), 1);
        assert_eq!(catalog.len(), 2);

        let lines = catalog.listing(Locale::En);
        assert!(lines[0].starts_with("1. Device:"));
        assert!(lines[1].starts_with("2. Radio receiver:"));

        assert!(catalog.remove(5).is_none());
        let removed = catalog.remove(0).unwrap();
        assert_eq!(removed.kind(), DeviceKind::Device);
        assert_eq!(catalog.get(0).map(|d| d.kind()), Some(DeviceKind::Radio));

        catalog.clear();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_json_is_kind_tagged() {
        let mut catalog = Catalog::new();
        catalog.add(Television::default());
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json[0]["kind"], "television");
        assert_eq!(json[0]["model"], "TV");
        assert_eq!(json[0]["screen_size_inches"], 32);
    }
}
