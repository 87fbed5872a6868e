use anyhow::Context;
use clap::Parser;
use device_catalog::utils::{logger, validation::Validate};
use device_catalog::{CliConfig, Menu};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting device-catalog");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    config.validate().context("Invalid command line")?;

    let mut catalog = config
        .initial_catalog()
        .context("Failed to load the initial catalog")?;
    tracing::info!("Catalog ready with {} devices", catalog.len());

    if config.list {
        if config.json {
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        } else if catalog.is_empty() {
            println!("The catalog is empty.");
        } else {
            for line in catalog.listing(config.locale) {
                println!("{}", line);
            }
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), config.locale);
    menu.run(&mut catalog).context("Menu session aborted")?;

    tracing::info!("Session finished");
    Ok(())
}
