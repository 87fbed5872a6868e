use crate::domain::device::Device;
use crate::domain::locale::Locale;
use crate::domain::model::DeviceKind;
use crate::utils::error::Result;

/// Capability set shared by every catalog entity.
///
/// Implementors only provide access to their base attributes and their own
/// description; the shared getters and the price/color updates come for free.
pub trait Appliance {
    fn kind(&self) -> DeviceKind;
    fn base(&self) -> &Device;
    fn base_mut(&mut self) -> &mut Device;

    /// Human-readable summary in the given locale. Never fails, never prints.
    fn describe_in(&self, locale: Locale) -> String;

    fn describe(&self) -> String {
        self.describe_in(Locale::default())
    }

    fn brand(&self) -> &str {
        self.base().brand()
    }

    fn model(&self) -> &str {
        self.base().model()
    }

    fn color(&self) -> &str {
        self.base().color()
    }

    fn price(&self) -> f64 {
        self.base().price()
    }

    fn update_price(&mut self, new_price: f64) -> Result<()> {
        self.base_mut().set_price(new_price)
    }

    fn update_color(&mut self, new_color: &str) -> Result<()> {
        self.base_mut().set_color(new_color)
    }
}
