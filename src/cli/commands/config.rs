//! Config command - show or edit configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager, OutputFormat};
use crate::error::{PrimeListError, PrimeListResult};
use crate::ui::{self, UiContext};
use clap::ValueEnum;

/// Keys accepted by `config set`
const VALID_KEYS: [&str; 4] = [
    "general.log_format",
    "generation.initial_capacity",
    "check.sieve_limit",
    "output.format",
];

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    config: &Config,
    manager: &ConfigManager,
) -> PrimeListResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => show_path(manager),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
        Some(ConfigAction::Set { key, value }) => set_value(manager, config, &key, &value).await?,
    }

    Ok(())
}

fn show_config(config: &Config) -> PrimeListResult<()> {
    let toml = toml::to_string_pretty(config)?;
    println!("{}", toml);
    Ok(())
}

fn show_path(manager: &ConfigManager) {
    println!("{}", manager.path().display());
}

async fn init_config(manager: &ConfigManager, force: bool) -> PrimeListResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if path.exists() && !force {
        ui::config_kept(&ctx, &path.display().to_string());
        return Ok(());
    }

    manager.save(&Config::default()).await?;

    ui::config_written(&ctx, "Configuration initialized", &path.display().to_string());

    Ok(())
}

async fn set_value(
    manager: &ConfigManager,
    config: &Config,
    key: &str,
    value: &str,
) -> PrimeListResult<()> {
    let ctx = UiContext::detect();
    let mut config = config.clone();

    if !apply_value(&mut config, key, value)? {
        ui::unknown_config_key(&ctx, key, &VALID_KEYS);
        return Err(PrimeListError::User(format!("Unknown config key: {}", key)));
    }

    manager.save(&config).await?;
    ui::config_written(
        &ctx,
        &format!("Set {} = {}", key, value),
        &manager.path().display().to_string(),
    );

    Ok(())
}

/// Apply a dot-separated key to the config, `false` if the key is unknown
fn apply_value(config: &mut Config, key: &str, value: &str) -> PrimeListResult<bool> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["general", "log_format"] => match value {
            "text" | "json" => config.general.log_format = value.to_string(),
            _ => {
                return Err(PrimeListError::User(format!(
                    "Invalid log format: {}. Use text/json",
                    value
                )))
            }
        },
        ["generation", "initial_capacity"] => {
            let capacity = parse_u64(value)?;
            if capacity < 1 {
                return Err(PrimeListError::invalid_argument(
                    "capacity",
                    "must be at least 1",
                ));
            }
            config.generation.initial_capacity = usize::try_from(capacity)
                .map_err(|_| PrimeListError::User(format!("Capacity too large: {}", value)))?;
        }
        ["check", "sieve_limit"] => config.check.sieve_limit = parse_u64(value)?,
        ["output", "format"] => {
            config.output.format = OutputFormat::from_str(value, true).map_err(|_| {
                PrimeListError::User(format!(
                    "Invalid output format: {}. Use plain/table/json",
                    value
                ))
            })?
        }
        _ => return Ok(false),
    }

    Ok(true)
}

fn parse_u64(value: &str) -> PrimeListResult<u64> {
    value
        .parse()
        .map_err(|_| PrimeListError::User(format!("Invalid number: {}", value)))
}
