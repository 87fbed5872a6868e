use std::io::{BufRead, Write};

use crate::app::prompt::Prompter;
use crate::domain::device::{Device, PRICE_MAX, PRICE_MIN};
use crate::domain::locale::Locale;
use crate::domain::model::{AnyDevice, Catalog};
use crate::domain::ports::Appliance;
use crate::domain::radio::{RadioReceiver, FREQUENCY_MAX_MHZ, FREQUENCY_MIN_MHZ};
use crate::domain::television::{Television, SCREEN_SIZE_MAX, SCREEN_SIZE_MIN};
use crate::utils::error::{CatalogError, Result};

const PRICE_PROMPT: &str = "Price: ";
const SIZE_PROMPT: &str = "Screen size (inches 10-120): ";
const MIN_FREQ_PROMPT: &str = "Min frequency (MHz 0.05-300): ";
const MAX_FREQ_PROMPT: &str = "Max frequency (MHz 0.05-300): ";
const BAND_PROMPT: &str = "Band (AM, FM, AM/FM, DAB): ";

/// Interactive front end over a caller-owned [`Catalog`].
pub struct Menu<R, W> {
    prompter: Prompter<R, W>,
    locale: Locale,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, locale: Locale) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            locale,
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Runs until the user picks "Exit" or the input ends at the main menu.
    /// Rejected values are reported and the loop continues; I/O errors and
    /// input closing mid-form are returned.
    pub fn run(&mut self, catalog: &mut Catalog) -> Result<()> {
        loop {
            self.print_main_menu()?;
            let choice = match self.prompter.read_line("Your choice: ") {
                Ok(choice) => choice,
                Err(CatalogError::InputClosed { .. }) => {
                    tracing::info!("Input closed, leaving menu");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };
            self.prompter.say("")?;

            match choice.trim() {
                "1" => {
                    let outcome = self.read_television().map(|tv| {
                        catalog.add(tv);
                    });
                    self.report(outcome, "Television added.")?;
                }
                "2" => {
                    let outcome = self.read_radio().map(|radio| {
                        catalog.add(radio);
                    });
                    self.report(outcome, "Radio receiver added.")?;
                }
                "3" => self.list(catalog)?,
                "4" => self.modify(catalog)?,
                "5" => {
                    catalog.clear();
                    self.prompter.say("Goodbye.")?;
                    return Ok(());
                }
                other => {
                    tracing::debug!("Unknown menu choice: {:?}", other);
                    self.prompter.say("Unknown menu item.")?;
                }
            }
        }
    }

    fn print_main_menu(&mut self) -> Result<()> {
        self.prompter.say("")?;
        self.prompter.say("=== Menu ===")?;
        self.prompter.say("1) Add television")?;
        self.prompter.say("2) Add radio receiver")?;
        self.prompter.say("3) List devices")?;
        self.prompter.say("4) Modify a device")?;
        self.prompter.say("5) Exit")
    }

    /// Prints the outcome of an add/modify. Validation failures are shown to
    /// the user; anything else propagates.
    fn report(&mut self, outcome: Result<()>, success: &str) -> Result<()> {
        match outcome {
            Ok(()) => {
                tracing::info!("{}", success);
                self.prompter.say(success)
            }
            Err(e) if e.is_validation() => {
                tracing::warn!("Rejected: {}", e);
                self.prompter.say(format!("Rejected: {}", e))
            }
            Err(e) => Err(e),
        }
    }

    fn print_devices(&mut self, catalog: &Catalog) -> Result<()> {
        for line in catalog.listing(self.locale) {
            self.prompter.say(line)?;
        }
        Ok(())
    }

    fn list(&mut self, catalog: &Catalog) -> Result<()> {
        if catalog.is_empty() {
            return self.prompter.say("The catalog is empty.");
        }
        self.prompter.say("=== Devices ===")?;
        self.print_devices(catalog)
    }

    fn read_television(&mut self) -> Result<Television> {
        let p = &mut self.prompter;
        let brand = p.read_non_empty("Brand: ")?;
        let model = p.read_non_empty("Model: ")?;
        let color = p.read_non_empty("Color: ")?;
        let price = p.read_in_range(PRICE_PROMPT, PRICE_MIN, PRICE_MAX)?;
        let size = p.read_in_range(SIZE_PROMPT, SCREEN_SIZE_MIN, SCREEN_SIZE_MAX)?;
        let resolution = p.read_non_empty("Resolution (e.g. 1080p, 4K): ")?;
        let is_smart = p.read_bool("Smart TV? (y/n): ")?;
        let panel = p.read_non_empty("Panel type (LED, OLED, QLED...): ")?;

        Television::builder()
            .brand(brand)
            .model(model)
            .color(color)
            .price(price)
            .screen_size_inches(size)
            .resolution(resolution)
            .smart(is_smart)
            .panel_type(panel)
            .build()
    }

    fn read_radio(&mut self) -> Result<RadioReceiver> {
        let p = &mut self.prompter;
        let brand = p.read_non_empty("Brand: ")?;
        let model = p.read_non_empty("Model: ")?;
        let color = p.read_non_empty("Color: ")?;
        let price = p.read_in_range(PRICE_PROMPT, PRICE_MIN, PRICE_MAX)?;
        let band = p.read_non_empty(BAND_PROMPT)?;
        let min_mhz = p.read_in_range(MIN_FREQ_PROMPT, FREQUENCY_MIN_MHZ, FREQUENCY_MAX_MHZ)?;
        let max_mhz = p.read_in_range(MAX_FREQ_PROMPT, FREQUENCY_MIN_MHZ, FREQUENCY_MAX_MHZ)?;
        let has_rds = p.read_bool("RDS? (y/n): ")?;

        RadioReceiver::builder()
            .brand(brand)
            .model(model)
            .color(color)
            .price(price)
            .band(band)
            .frequency_range(min_mhz, max_mhz)
            .rds(has_rds)
            .build()
    }

    fn modify(&mut self, catalog: &mut Catalog) -> Result<()> {
        if catalog.is_empty() {
            return self.prompter.say("The catalog is empty.");
        }

        self.prompter.say("=== Choose a device to modify ===")?;
        self.print_devices(catalog)?;
        let number = self
            .prompter
            .read_in_range("Device number: ", 1, catalog.len())?;

        let locale = self.locale;
        let Some(device) = catalog.get_mut(number - 1) else {
            return Ok(());
        };

        self.prompter
            .say(format!("\nSelected: {}", device.base().title()))?;
        self.prompter.say("Current attributes:")?;
        self.prompter.say(device.describe_in(locale))?;

        let outcome = match &mut *device {
            AnyDevice::Television(tv) => self.modify_television(tv),
            AnyDevice::Radio(radio) => self.modify_radio(radio),
            AnyDevice::Device(base) => self.modify_device(base),
        };
        self.report(outcome, "Device updated.")?;

        tracing::debug!("Device #{} is now: {}", number, device.describe_in(locale));
        self.prompter.say("\nUpdated attributes:")?;
        self.prompter.say(device.describe_in(locale))
    }

    fn modify_television(&mut self, tv: &mut Television) -> Result<()> {
        let p = &mut self.prompter;
        p.say("\n=== Modify television ===")?;
        p.say("1) Price")?;
        p.say("2) Color")?;
        p.say("3) Screen size")?;
        p.say("4) Resolution")?;
        p.say("5) Panel type")?;
        p.say("6) Smart TV")?;

        match p.read_in_range("Attribute to change: ", 1, 6)? {
            1 => tv.update_price(p.read_in_range("New price: ", PRICE_MIN, PRICE_MAX)?),
            2 => tv.update_color(&p.read_non_empty("New color: ")?),
            3 => tv.update_screen_size(p.read_in_range(
                "New screen size (inches 10-120): ",
                SCREEN_SIZE_MIN,
                SCREEN_SIZE_MAX,
            )?),
            4 => tv.update_resolution(&p.read_non_empty("New resolution: ")?),
            5 => tv.set_panel_type(&p.read_non_empty("New panel type: ")?),
            _ => {
                tv.set_is_smart(p.read_bool("Smart TV? (y/n): ")?);
                Ok(())
            }
        }
    }

    fn modify_radio(&mut self, radio: &mut RadioReceiver) -> Result<()> {
        let p = &mut self.prompter;
        p.say("\n=== Modify radio receiver ===")?;
        p.say("1) Price")?;
        p.say("2) Color")?;
        p.say("3) Band")?;
        p.say("4) Frequency range")?;
        p.say("5) RDS")?;

        match p.read_in_range("Attribute to change: ", 1, 5)? {
            1 => radio.update_price(p.read_in_range("New price: ", PRICE_MIN, PRICE_MAX)?),
            2 => radio.update_color(&p.read_non_empty("New color: ")?),
            3 => radio.update_band(&p.read_non_empty(BAND_PROMPT)?),
            4 => {
                let min_mhz =
                    p.read_in_range(MIN_FREQ_PROMPT, FREQUENCY_MIN_MHZ, FREQUENCY_MAX_MHZ)?;
                let max_mhz =
                    p.read_in_range(MAX_FREQ_PROMPT, FREQUENCY_MIN_MHZ, FREQUENCY_MAX_MHZ)?;
                radio.update_frequency_range(min_mhz, max_mhz)
            }
            _ => {
                radio.set_has_rds(p.read_bool("RDS? (y/n): ")?);
                Ok(())
            }
        }
    }

    fn modify_device(&mut self, device: &mut Device) -> Result<()> {
        let p = &mut self.prompter;
        p.say("\n=== Modify device ===")?;
        p.say("1) Price")?;
        p.say("2) Color")?;

        match p.read_in_range("Attribute to change: ", 1, 2)? {
            1 => device.update_price(p.read_in_range("New price: ", PRICE_MIN, PRICE_MAX)?),
            _ => device.update_color(&p.read_non_empty("New color: ")?),
        }
    }
}
