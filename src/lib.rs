pub mod app;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::menu::Menu;
pub use domain::device::Device;
pub use domain::locale::Locale;
pub use domain::model::{AnyDevice, Catalog, DeviceKind};
pub use domain::ports::Appliance;
pub use domain::radio::{Band, RadioReceiver};
pub use domain::television::Television;
pub use utils::error::{CatalogError, ErrorKind, Result};
